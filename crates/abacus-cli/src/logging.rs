//! Tracing subscriber setup

use crate::config::Verbosity;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Builds the log filter: `RUST_LOG` wins, otherwise the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global subscriber writing to stderr
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init(verbosity: Verbosity, use_color: bool) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(verbosity.is_debug());

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_each_verbosity() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ] {
            let filter = env_filter(verbosity);
            assert!(!filter.to_string().is_empty());
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(Verbosity::Normal, false);
        init(Verbosity::Debug, false);
    }
}

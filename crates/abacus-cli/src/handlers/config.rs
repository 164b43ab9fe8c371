//! Config command handler

use crate::config::CliConfig;

/// Execute the config command
pub fn execute_config(config: &CliConfig) {
    print!("{}", render_config(config));
}

/// Renders the effective configuration, one setting per line
#[must_use]
pub fn render_config(config: &CliConfig) -> String {
    format!(
        "Current configuration:\n  \
         Verbosity: {:?}\n  \
         Color: {:?}\n  \
         History file: {}\n  \
         Decimal separator: {}\n  \
         Max fraction digits: {}\n",
        config.verbosity,
        config.color,
        config.history_file.display(),
        config.decimal_separator,
        config.max_fraction_digits,
    )
}

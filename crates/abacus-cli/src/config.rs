//! CLI configuration

use crate::error::{CliError, CliResult};
use abacus::core::Operation;
use abacus::format::NumberFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if debug mode
    #[must_use]
    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    /// Default log filter directive for this verbosity
    #[must_use]
    pub const fn log_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Where the history is persisted
    pub history_file: PathBuf,
    /// Decimal separator for display and input
    pub decimal_separator: char,
    /// Maximum fraction digits in displayed results
    pub max_fraction_digits: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            history_file: PathBuf::from(Self::DEFAULT_HISTORY_FILE),
            decimal_separator: NumberFormat::DEFAULT_SEPARATOR,
            max_fraction_digits: NumberFormat::DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl CliConfig {
    /// Default history file, relative to the working directory
    pub const DEFAULT_HISTORY_FILE: &'static str = "abacus-history.json";

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set history file
    #[must_use]
    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = path.into();
        self
    }

    /// Set decimal separator
    #[must_use]
    pub const fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Set maximum fraction digits
    #[must_use]
    pub const fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Rejects separators that would be read as a digit, sign or key, and
    /// fraction digit caps the formatter cannot honour
    pub fn validate(&self) -> CliResult<()> {
        let sep = self.decimal_separator;
        if sep.is_ascii_digit()
            || sep.is_whitespace()
            || matches!(sep, '=' | 'C' | 'c')
            || Operation::from_char(sep).is_some()
        {
            return Err(CliError::config(format!(
                "'{sep}' cannot be used as a decimal separator"
            )));
        }
        if self.max_fraction_digits > NumberFormat::MAX_FRACTION_DIGITS {
            return Err(CliError::config(format!(
                "at most {} fraction digits are supported, got {}",
                NumberFormat::MAX_FRACTION_DIGITS,
                self.max_fraction_digits
            )));
        }
        Ok(())
    }

    /// Number format derived from this configuration
    #[must_use]
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new()
            .with_separator(self.decimal_separator)
            .with_max_fraction_digits(self.max_fraction_digits)
    }
}

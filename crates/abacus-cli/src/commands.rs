//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Abacus: left-to-right calculator with a persisted history
#[derive(Parser, Debug)]
#[command(name = "abacus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// History file
    #[arg(
        long,
        env = "ABACUS_HISTORY_FILE",
        default_value = "abacus-history.json",
        global = true
    )]
    pub history_file: PathBuf,

    /// Decimal separator used for display and keypad input
    #[arg(long, env = "ABACUS_DECIMAL_SEPARATOR", default_value = ",", global = true)]
    pub decimal_separator: char,

    /// Maximum fraction digits shown in results (0-17)
    #[arg(
        long,
        default_value = "3",
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=17)
    )]
    pub max_fraction_digits: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a token expression left to right, e.g. `2 + 3 x 4`
    Eval(EvalArgs),

    /// Feed a keypad sequence through the calculator, e.g. `12+3=`
    Press(PressArgs),

    /// Show past calculations, newest first
    History(HistoryArgs),

    /// Show configuration
    Config,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Operands and operators (+, -, x, /), separated by spaces
    ///
    /// Negative operands are accepted in `.` notation (`-2.5`); use `--`
    /// before the tokens for other forms.
    #[arg(required = true, allow_negative_numbers = true, num_args = 1..)]
    pub tokens: Vec<String>,

    /// Do not record the result in history
    #[arg(long)]
    pub no_record: bool,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Keys: digits, `.`/`,`, operators, `=` and `C`
    #[arg(allow_hyphen_values = true)]
    pub keys: String,
}

/// Arguments for the history command
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Show at most this many rows
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print rows as JSON
    #[arg(long)]
    pub json: bool,

    /// Delete every recorded calculation
    #[arg(long, conflicts_with_all = ["limit", "json"])]
    pub clear: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

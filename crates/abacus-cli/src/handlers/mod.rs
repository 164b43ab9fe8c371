//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure helper functions returning what would be printed
//! - Tests against a temporary history file

pub mod config;
pub mod eval;
pub mod history;
pub mod press;

pub use config::{execute_config, render_config};
pub use eval::{compute, execute_eval, parse_expression};
pub use history::{execute_history, load_rows, render_rows};
pub use press::{execute_press, run_keys, PressOutcome};

use crate::config::CliConfig;
use crate::error::CliResult;
use abacus::recorder::HistoryRecorder;
use abacus::storage::JsonFileStore;
use tracing::debug;

/// Opens a recorder over the configured history file
pub(crate) fn open_recorder(config: &CliConfig) -> CliResult<HistoryRecorder<JsonFileStore>> {
    debug!(path = %config.history_file.display(), "opening history file");
    Ok(HistoryRecorder::open(JsonFileStore::new(&config.history_file))?)
}

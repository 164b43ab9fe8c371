//! Press command handler

use super::open_recorder;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;
use abacus::core::CalcError;
use abacus::entry::{parse_keys, EntryEvent, EntrySession};

/// Result of feeding a key sequence through an entry session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressOutcome {
    /// Display text after the last key
    pub display: String,
    /// Calculations recorded along the way
    pub recorded: usize,
    /// Arithmetic failures along the way
    pub failures: Vec<CalcError>,
}

/// Execute the press command
pub fn execute_press(config: &CliConfig, keys: &str, reporter: &Reporter) -> CliResult<()> {
    let outcome = run_keys(config, keys)?;
    println!("{}", outcome.display);

    for failure in &outcome.failures {
        reporter.warning(&failure.to_string());
    }
    if outcome.recorded > 0 {
        reporter.info(&format!(
            "Recorded {} calculation(s) in {}",
            outcome.recorded,
            config.history_file.display()
        ));
    }
    Ok(())
}

/// Runs `keys` through a session backed by the configured history file
pub fn run_keys(config: &CliConfig, keys: &str) -> CliResult<PressOutcome> {
    let actions = parse_keys(keys)?;
    let mut session = EntrySession::with_format(open_recorder(config)?, config.number_format());
    let events = session.press_all(actions)?;

    let mut recorded = 0;
    let mut failures = Vec::new();
    for event in events {
        match event {
            EntryEvent::Evaluated(_) => recorded += 1,
            EntryEvent::Failed(e) => failures.push(e),
            EntryEvent::Updated | EntryEvent::Ignored | EntryEvent::Cleared => {}
        }
    }

    Ok(PressOutcome {
        display: session.display().to_string(),
        recorded,
        failures,
    })
}

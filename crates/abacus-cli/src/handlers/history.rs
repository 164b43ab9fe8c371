//! History command handler

use super::open_recorder;
use crate::commands::HistoryArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;
use abacus::present::{present_rows, HistoryRow};

/// Execute the history command
pub fn execute_history(
    config: &CliConfig,
    args: &HistoryArgs,
    reporter: &Reporter,
) -> CliResult<()> {
    if args.clear {
        let mut recorder = open_recorder(config)?;
        let removed = recorder.history().len();
        recorder.clear()?;
        reporter.success(&format!("Cleared {removed} calculation(s)"));
        return Ok(());
    }

    let rows = load_rows(config, args.limit)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        reporter.info("No calculations recorded yet");
        return Ok(());
    }
    print!("{}", render_rows(&rows, reporter));
    Ok(())
}

/// Loads the history rows, newest first, keeping at most `limit`
pub fn load_rows(config: &CliConfig, limit: Option<usize>) -> CliResult<Vec<HistoryRow>> {
    let recorder = open_recorder(config)?;
    let mut rows = present_rows(recorder.history(), &config.number_format());
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    Ok(rows)
}

/// Renders rows as `<date>  <expression> = <result>` lines
#[must_use]
pub fn render_rows(rows: &[HistoryRow], reporter: &Reporter) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{}  {} = {}\n",
                reporter.date_label(&row.date),
                row.expression,
                row.result
            )
        })
        .collect()
}

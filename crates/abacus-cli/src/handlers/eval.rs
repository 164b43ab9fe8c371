//! Eval command handler

use super::open_recorder;
use crate::commands::EvalArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use abacus::core::evaluator::evaluate;
use abacus::core::token::Expression;
use abacus::format::NumberFormat;
use tracing::info;

/// Execute the eval command
pub fn execute_eval(config: &CliConfig, args: &EvalArgs, reporter: &Reporter) -> CliResult<()> {
    match compute(config, args) {
        Ok(result) => {
            println!("{result}");
            if !args.no_record {
                reporter.info(&format!(
                    "Recorded in {}",
                    config.history_file.display()
                ));
            }
            Ok(())
        }
        Err(e @ CliError::Calculation(_)) => {
            reporter.failure("Nothing recorded");
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Evaluates the arguments and returns the formatted result
///
/// Records the calculation in the history file unless `--no-record` is set.
pub fn compute(config: &CliConfig, args: &EvalArgs) -> CliResult<String> {
    let format = config.number_format();
    let expression = parse_expression(&args.tokens, &format)?;

    let result = if args.no_record {
        evaluate(&expression)?
    } else {
        let mut recorder = open_recorder(config)?;
        let calculation = recorder.evaluate(expression)?;
        info!(total = recorder.history().len(), "calculation recorded");
        calculation.result
    };
    Ok(format.format(result))
}

/// Parses command-line words into an expression
///
/// Each argument may hold several whitespace-separated words, so both
/// `eval 2 + 3` and `eval "2 + 3"` work.
pub fn parse_expression(args: &[String], format: &NumberFormat) -> CliResult<Expression> {
    args.iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(|word| {
            format
                .parse_token(word)
                .ok_or_else(|| CliError::invalid_argument(format!("'{word}' is not a number or operator")))
        })
        .collect()
}

//! Abacus CLI: left-to-right calculator with a persisted history
//!
//! Usage:
//!   abacus eval 2 + 3 x 4          # Prints 20
//!   abacus press "12+3="           # Drives the keypad, prints 15
//!   abacus history --limit 5       # Newest calculations first
//!   abacus config                  # Effective configuration

use abacus_cli::{
    handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Reporter,
    Verbosity,
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let use_color = config.color.should_color();
    logging::init(config.verbosity, use_color);
    let reporter = Reporter::new(use_color, config.verbosity.is_quiet());

    match cli.command {
        Commands::Eval(args) => handlers::execute_eval(&config, &args, &reporter),
        Commands::Press(args) => handlers::execute_press(&config, &args.keys, &reporter),
        Commands::History(args) => handlers::execute_history(&config, &args, &reporter),
        Commands::Config => {
            handlers::execute_config(&config);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.clone().into();

    let config = CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_history_file(&cli.history_file)
        .with_decimal_separator(cli.decimal_separator)
        .with_max_fraction_digits(usize::from(cli.max_fraction_digits));
    config.validate()?;
    Ok(config)
}

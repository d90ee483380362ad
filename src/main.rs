mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use concat_files::ConcatError;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit_code_for(&err)
        }
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;
    log::debug!("Parsed arguments: {:?}", cli);

    let params = cli
        .into_params()
        .context("Failed to load concat parameters")?;
    concat_files::run(&params, quiet)?;
    Ok(())
}

/// Configuration problems exit with 2, everything else with 1.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ConcatError>() {
        Some(e) if e.is_validation() => ExitCode::from(2),
        Some(ConcatError::Config { .. }) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

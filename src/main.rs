mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use zcalc::calculator::{copy_result, operators};
use zcalc::config::Config;
use zcalc::logging;

use cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.list_operators {
        for op in operators() {
            println!("{}", op);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.logging)?;

    let operator = cli.operator.context("No operator given")?;

    let result = cli.evaluate(operator);

    println!("{}", result.message());
    if result.is_success() {
        println!("{}", result.display_value());
    }

    if (cli.copy || config.copy_result)
        && let Err(e) = copy_result(&result)
    {
        warn!("Clipboard copy failed: {:#}", e);
        eprintln!("Failed to copy result: {:#}", e);
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

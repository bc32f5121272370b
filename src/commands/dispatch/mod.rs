//! Command dispatch logic for hackgrade

use std::time::Instant;

use crate::cli::Cli;
use hackgrade_core::config::GradingConfig;
use hackgrade_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = GradingConfig::load_or_default(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), config = ?cli.config, "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

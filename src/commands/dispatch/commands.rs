//! Command implementations for all walkway commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{locations, path, reachable};
use walkway_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let navigator = ctx.open_navigator()?;

        let result = match self {
            Commands::Locations => locations::execute(ctx.cli, &navigator),
            Commands::Path { from, to } => path::execute(ctx.cli, &navigator, from, to),
            Commands::Reachable { from, within } => {
                reachable::execute(ctx.cli, &navigator, from, *within)
            }
        };

        tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}

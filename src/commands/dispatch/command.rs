//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::Cli;
use walkway_core::config::Config;
use walkway_core::error::Result;
use walkway_core::navigator::Navigator;

/// Directory that relative `dataset` entries in the config file resolve against
fn config_base_dir(cli: &Cli) -> Option<PathBuf> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path().ok()?,
    };
    config_path.parent().map(Path::to_path_buf)
}

/// Load config, resolve the dataset, and build a navigator over it
pub fn open_navigator(cli: &Cli, start: Instant) -> Result<Navigator> {
    let config = Config::load(cli.config.as_deref())?;
    let base_dir = config_base_dir(cli);
    let dataset = config.dataset_path(cli.data.as_deref(), base_dir.as_deref())?;
    tracing::debug!(dataset = %dataset.display(), elapsed = ?start.elapsed(), "resolve_dataset");

    let mut navigator = match config.initial_capacity {
        Some(capacity) => Navigator::with_capacity(capacity)?,
        None => Navigator::new(),
    };
    navigator.load_dataset(&dataset)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_dataset");
    Ok(navigator)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn open_navigator(&self) -> Result<Navigator> {
        open_navigator(self.cli, self.start)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("walkway {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest walking routes between campus locations.");
        println!();
        println!("Run `walkway --help` for usage information.");
        Ok(())
    }
}

//! CLI commands for walkway

pub mod dispatch;
pub mod locations;
pub mod path;
pub mod reachable;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::cli::{Cli, OutputFormat};

    pub fn create_cli(format: OutputFormat, quiet: bool) -> Cli {
        Cli {
            data: None,
            config: None,
            format,
            quiet,
            verbose: false,
            log_level: None,
            log_json: false,
            command: None,
        }
    }
}

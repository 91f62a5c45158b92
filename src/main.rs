//! Walkway - shortest walking routes across a campus
//!
//! Loads a `.dot` map of walkways between buildings and answers routing
//! questions against it from the command line.

mod cli;
mod commands;

use std::ffi::OsString;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use walkway_core::error::{ExitCode as WalkwayExitCode, WalkwayError};
use walkway_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match parse_cli(std::env::args_os().collect()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), command = ?cli.command, "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(WalkwayExitCode::Success),
        Err(e) => report_failure(&cli, &e),
    }
}

fn exit_with(code: WalkwayExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Parse arguments. Under `--format json` a parse failure is reported as the
/// JSON error envelope instead of clap's text; help and version always go
/// through clap.
fn parse_cli(args: Vec<OsString>) -> Result<Cli, ExitCode> {
    let err = match Cli::try_parse_from(&args) {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || !requests_json(&args) {
        err.exit();
    }

    let error = parse_error(&err);
    eprintln!("{}", error.to_json());
    Err(exit_with(error.exit_code()))
}

/// True if `--format json` appears anywhere on the command line.
fn requests_json(args: &[OsString]) -> bool {
    let mut args = args.iter().skip(1).filter_map(|a| a.to_str());
    while let Some(arg) = args.next() {
        match arg {
            "--format" if args.next() == Some("json") => return true,
            "--format=json" => return true,
            _ => {}
        }
    }
    false
}

/// Map a clap failure to a walkway error, keeping only clap's first line
/// (the usage block is noise inside a JSON message).
fn parse_error(err: &clap::Error) -> WalkwayError {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();

    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand => WalkwayError::UsageError(message),
        _ => WalkwayError::Other(message),
    }
}

/// Follow-up advice for errors a user can fix by checking the map.
fn hint_for(error: &WalkwayError) -> Option<&'static str> {
    match error {
        WalkwayError::NodeNotFound { .. } => {
            Some("run `walkway locations` to list the names on the map")
        }
        WalkwayError::NoPathExists { .. } => {
            Some("the two locations are on disconnected parts of the map")
        }
        WalkwayError::DatasetNotFound { .. } => {
            Some("pass --data <FILE> or set `dataset` in config.toml")
        }
        _ => None,
    }
}

fn report_failure(cli: &Cli, error: &WalkwayError) -> ExitCode {
    let code = error.exit_code();
    tracing::debug!(error_type = error.error_type(), code = ?code, "command_failed");

    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
        if let Some(hint) = hint_for(error) {
            eprintln!("hint: {}", hint);
        }
    }

    exit_with(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_requests_json() {
        assert!(requests_json(&args(&["walkway", "--format", "json", "locations"])));
        assert!(requests_json(&args(&["walkway", "locations", "--format=json"])));
        assert!(!requests_json(&args(&["walkway", "--format", "records"])));
        assert!(!requests_json(&args(&["walkway", "path", "json", "--format"])));
        // argv[0] is never treated as a flag
        assert!(!requests_json(&args(&["--format=json"])));
    }

    #[test]
    fn test_parse_error_keeps_first_line() {
        let err = Cli::try_parse_from(["walkway", "locations", "--bogus-flag"]).unwrap_err();
        match parse_error(&err) {
            WalkwayError::UsageError(message) => {
                assert!(message.contains("--bogus-flag"));
                assert!(!message.starts_with("error:"));
                assert!(!message.contains('\n'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_budget_is_usage_error() {
        let err =
            Cli::try_parse_from(["walkway", "reachable", "Union South", "--within", "-5"])
                .unwrap_err();
        let error = parse_error(&err);
        assert_eq!(error.exit_code(), WalkwayExitCode::Usage);
        assert!(error.to_string().contains("non-negative"));
    }

    #[test]
    fn test_hints() {
        assert!(hint_for(&WalkwayError::node_not_found("Observatory"))
            .is_some_and(|h| h.contains("walkway locations")));
        assert!(hint_for(&WalkwayError::no_path("A", "B")).is_some());
        assert!(hint_for(&WalkwayError::InvalidCapacity).is_none());
    }
}

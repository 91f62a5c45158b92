//! `walkway reachable` command - locations within a walking-time budget
//!
//! Results are sorted by cost, then name. The start itself is always
//! included at cost zero.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use walkway_core::error::Result;
use walkway_core::graph::Cost;
use walkway_core::navigator::{Navigator, Reachable};
use walkway_core::records;

/// Execute the reachable command
pub fn execute(cli: &Cli, navigator: &Navigator, from: &str, within: f64) -> Result<()> {
    let reachable = navigator.reachable_within(from, within)?;
    for line in render(cli, from, within, &reachable)? {
        println!("{}", line);
    }
    Ok(())
}

fn render(cli: &Cli, from: &str, within: f64, reachable: &[Reachable]) -> Result<Vec<String>> {
    let lines = match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "from": from,
                "within": within,
                "count": reachable.len(),
                "locations": reachable,
            });
            vec![serde_json::to_string_pretty(&output)?]
        }
        OutputFormat::Human => {
            let mut lines = Vec::with_capacity(reachable.len() + 1);
            if !cli.quiet {
                lines.push(format!(
                    "{} location(s) within {} s of {}:",
                    reachable.len(),
                    Cost::new(within),
                    from
                ));
            }
            let width = reachable
                .iter()
                .map(|r| r.cost.to_string().len())
                .max()
                .unwrap_or(0);
            lines.extend(
                reachable
                    .iter()
                    .map(|r| format!("{:>width$} s  {}", r.cost.to_string(), r.location)),
            );
            lines
        }
        OutputFormat::Records => records::reachable_lines(from, within, reachable),
    };
    Ok(lines)
}

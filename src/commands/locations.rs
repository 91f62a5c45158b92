//! `walkway locations` command - list every location on the map
//!
//! Locations are printed in sorted order.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use walkway_core::error::Result;
use walkway_core::navigator::Navigator;
use walkway_core::records;

/// Execute the locations command
pub fn execute(cli: &Cli, navigator: &Navigator) -> Result<()> {
    let locations = navigator.locations();
    for line in render(cli, &locations)? {
        println!("{}", line);
    }
    Ok(())
}

fn render(cli: &Cli, locations: &[String]) -> Result<Vec<String>> {
    let lines = match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "count": locations.len(),
                "locations": locations,
            });
            vec![serde_json::to_string_pretty(&output)?]
        }
        OutputFormat::Human => {
            let mut lines: Vec<String> = locations.to_vec();
            if lines.is_empty() && !cli.quiet {
                lines.push("No locations found".to_string());
            }
            lines
        }
        OutputFormat::Records => {
            let mut lines = vec![records::format_header(
                "locations",
                &[("count", locations.len().to_string())],
            )];
            lines.extend(locations.iter().map(|l| records::format_location(l, None)));
            lines
        }
    };
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::create_cli;

    fn sample() -> Vec<String> {
        vec!["Bascom Hall".to_string(), "Union South".to_string()]
    }

    #[test]
    fn test_human_lists_one_per_line() {
        let cli = create_cli(OutputFormat::Human, false);
        assert_eq!(render(&cli, &sample()).unwrap(), sample());
    }

    #[test]
    fn test_human_empty_map() {
        let cli = create_cli(OutputFormat::Human, false);
        assert_eq!(render(&cli, &[]).unwrap(), vec!["No locations found"]);

        let quiet = create_cli(OutputFormat::Human, true);
        assert!(render(&quiet, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_json() {
        let cli = create_cli(OutputFormat::Json, false);
        let lines = render(&cli, &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["locations"][1], "Union South");
    }

    #[test]
    fn test_records() {
        let cli = create_cli(OutputFormat::Records, false);
        assert_eq!(
            render(&cli, &sample()).unwrap(),
            vec![
                "H walkway=1 records=1 mode=locations count=2",
                "N \"Bascom Hall\"",
                "N \"Union South\"",
            ]
        );
    }
}

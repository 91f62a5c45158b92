//! `walkway path` command - shortest walking route between two locations

use crate::cli::{Cli, OutputFormat};
use walkway_core::error::Result;
use walkway_core::graph::Cost;
use walkway_core::navigator::{Navigator, Route};
use walkway_core::records;

/// Execute the path command
pub fn execute(cli: &Cli, navigator: &Navigator, from: &str, to: &str) -> Result<()> {
    let route = navigator.route(from, to)?;
    for line in render(cli, &route)? {
        println!("{}", line);
    }
    Ok(())
}

fn render(cli: &Cli, route: &Route) -> Result<Vec<String>> {
    let lines = match cli.format {
        OutputFormat::Json => vec![serde_json::to_string_pretty(route)?],
        OutputFormat::Human => render_human(cli, route),
        OutputFormat::Records => records::route_lines(route),
    };
    Ok(lines)
}

fn render_human(cli: &Cli, route: &Route) -> Vec<String> {
    let mut lines = Vec::with_capacity(route.stops.len() + 1);
    if let Some(first) = route.stops.first() {
        lines.push(first.clone());
    }
    for (stop, seconds) in route.stops.iter().skip(1).zip(&route.legs) {
        lines.push(format!("  -> {} ({} s)", stop, Cost::new(*seconds)));
    }
    if !cli.quiet {
        lines.push(format!(
            "Total: {} s over {} leg(s)",
            route.total,
            route.legs.len()
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::create_cli;

    fn sample() -> Route {
        Route {
            from: "Union South".to_string(),
            to: "Atmospheric, Oceanic and Space Sciences".to_string(),
            stops: vec![
                "Union South".to_string(),
                "Computer Sciences and Statistics".to_string(),
                "Atmospheric, Oceanic and Space Sciences".to_string(),
            ],
            legs: vec![3.0, 3.0],
            total: Cost::new(6.0),
        }
    }

    #[test]
    fn test_human() {
        let cli = create_cli(OutputFormat::Human, false);
        assert_eq!(
            render(&cli, &sample()).unwrap(),
            vec![
                "Union South",
                "  -> Computer Sciences and Statistics (3 s)",
                "  -> Atmospheric, Oceanic and Space Sciences (3 s)",
                "Total: 6 s over 2 leg(s)",
            ]
        );
    }

    #[test]
    fn test_human_quiet_omits_total() {
        let cli = create_cli(OutputFormat::Human, true);
        assert_eq!(render(&cli, &sample()).unwrap().len(), 3);
    }

    #[test]
    fn test_json() {
        let cli = create_cli(OutputFormat::Json, false);
        let lines = render(&cli, &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["total"], 6.0);
        assert_eq!(value["stops"].as_array().unwrap().len(), 3);
        assert_eq!(value["legs"][0], 3.0);
    }

    #[test]
    fn test_records_header() {
        let cli = create_cli(OutputFormat::Records, false);
        let lines = render(&cli, &sample()).unwrap();
        assert_eq!(lines[0], "H walkway=1 records=1 mode=path stops=3 total=6");
    }
}

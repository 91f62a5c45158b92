//! Utilities for records output format
//!
//! Every records document starts with one `H` line, followed by `N` lines
//! (locations) and `E` lines (walkway legs). Names are always quoted.

use crate::graph::Cost;
use crate::navigator::{Reachable, Route};

/// Records format version emitted in the header
pub const RECORDS_VERSION: u32 = 1;

/// Escape a string for embedding in a quoted records field.
/// Backslashes are doubled first, then `"` becomes `\"`.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// Format the header line. `fields` are appended as `key=value` pairs.
pub fn format_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H walkway=1 records={} mode={}", RECORDS_VERSION, mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Format a location line, optionally with its cost from the query start.
pub fn format_location(name: &str, cost: Option<Cost>) -> String {
    match cost {
        Some(cost) => format!("N \"{}\" cost={}", escape_quotes(name), cost),
        None => format!("N \"{}\"", escape_quotes(name)),
    }
}

/// Format one leg of a route.
pub fn format_leg(from: &str, to: &str, seconds: f64) -> String {
    format!(
        "E \"{}\" -> \"{}\" seconds={}",
        escape_quotes(from),
        escape_quotes(to),
        Cost::new(seconds)
    )
}

/// Records lines for a route: header, one `N` line per stop, one `E` per leg.
pub fn route_lines(route: &Route) -> Vec<String> {
    let mut lines = vec![format_header(
        "path",
        &[
            ("stops", route.stops.len().to_string()),
            ("total", route.total.to_string()),
        ],
    )];
    lines.extend(route.stops.iter().map(|stop| format_location(stop, None)));
    lines.extend(
        route
            .stops
            .windows(2)
            .zip(&route.legs)
            .map(|(pair, seconds)| format_leg(&pair[0], &pair[1], *seconds)),
    );
    lines
}

/// Records lines for a reachability query.
pub fn reachable_lines(from: &str, budget: f64, reachable: &[Reachable]) -> Vec<String> {
    let mut lines = vec![format_header(
        "reachable",
        &[
            ("from", format!("\"{}\"", escape_quotes(from))),
            ("within", Cost::new(budget).to_string()),
            ("count", reachable.len().to_string()),
        ],
    )];
    lines.extend(
        reachable
            .iter()
            .map(|r| format_location(&r.location, Some(r.cost))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"The "Old" Gym"#), r#"The \"Old\" Gym"#);
        assert_eq!(escape_quotes("plain"), "plain");
        assert_eq!(escape_quotes(r#"Hall \ "B""#), r#"Hall \\ \"B\""#);
    }

    #[test]
    fn test_header() {
        assert_eq!(
            format_header("locations", &[("count", "3".to_string())]),
            "H walkway=1 records=1 mode=locations count=3"
        );
    }

    #[test]
    fn test_route_lines() {
        let route = Route {
            from: "Union South".to_string(),
            to: "Library".to_string(),
            stops: vec![
                "Union South".to_string(),
                "Computer Sciences".to_string(),
                "Library".to_string(),
            ],
            legs: vec![3.0, 2.5],
            total: Cost::new(5.5),
        };

        let lines = route_lines(&route);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "H walkway=1 records=1 mode=path stops=3 total=5.5");
        assert_eq!(lines[1], "N \"Union South\"");
        assert_eq!(lines[4], "E \"Union South\" -> \"Computer Sciences\" seconds=3");
        assert_eq!(lines[5], "E \"Computer Sciences\" -> \"Library\" seconds=2.5");
    }

    #[test]
    fn test_reachable_lines() {
        let reachable = vec![
            Reachable {
                location: "A".to_string(),
                cost: Cost::ZERO,
            },
            Reachable {
                location: "C".to_string(),
                cost: Cost::new(2.0),
            },
        ];
        let lines = reachable_lines("A", 2.0, &reachable);
        assert_eq!(
            lines,
            vec![
                "H walkway=1 records=1 mode=reachable from=\"A\" within=2 count=2",
                "N \"A\" cost=0",
                "N \"C\" cost=2",
            ]
        );
    }
}

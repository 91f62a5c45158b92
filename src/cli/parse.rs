/// Parse a `--within` budget: finite and non-negative seconds.
pub fn parse_budget(s: &str) -> Result<f64, String> {
    let seconds: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("budget must be finite and non-negative, got {}", s));
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("90"), Ok(90.0));
        assert_eq!(parse_budget(" 12.5 "), Ok(12.5));
        assert_eq!(parse_budget("0"), Ok(0.0));
    }

    #[test]
    fn test_parse_budget_rejects_bad_values() {
        for bad in ["-1", "NaN", "inf", "soon", ""] {
            assert!(parse_budget(bad).is_err(), "accepted {bad:?}");
        }
    }
}

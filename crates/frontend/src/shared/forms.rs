//! Small helpers for the typed form records behind the mutation modals.
//!
//! Each modal owns an explicit form struct with an `empty()` factory and a
//! `from_*` factory for editing an existing record; these helpers cover the
//! string-to-value edges shared by all of them.

/// Trimmed optional string: empty input means "not provided".
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a monetary or rate input. Rejects non-numeric and non-finite input
/// with a message suitable for an inline alert.
pub fn parse_amount(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("Not a valid amount: \"{}\"", trimmed)),
    }
}

pub fn parse_count(value: &str) -> Result<usize, String> {
    let trimmed = value.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| format!("Not a valid number: \"{}\"", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty(" a@b.c "), Some("a@b.c".to_string()));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50"), Ok(12.5));
        assert_eq!(parse_amount(" -3 "), Ok(-3.0));
        assert!(parse_amount("12,50").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("100"), Ok(100));
        assert!(parse_count("-1").is_err());
        assert!(parse_count("ten").is_err());
    }
}

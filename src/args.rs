/// Parses the longest base-10 prefix of `s`, `parseInt(s, 10)` style:
/// leading whitespace is skipped, an optional sign is honored, and parsing
/// stops at the first non-digit. `None` is the not-a-number sentinel.
pub fn parse_decimal(s: &str) -> Option<i64> {
    let s = s.trim_start();

    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;

    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::parse_decimal;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_decimal("42"), Some(42));
        assert_eq!(parse_decimal("0"), Some(0));
        assert_eq!(parse_decimal("1752"), Some(1752));
    }

    #[test]
    fn signs_and_whitespace() {
        assert_eq!(parse_decimal("-9"), Some(-9));
        assert_eq!(parse_decimal("+3"), Some(3));
        assert_eq!(parse_decimal("  17"), Some(17));
    }

    #[test]
    fn truncates_at_first_non_digit() {
        assert_eq!(parse_decimal("17abc"), Some(17));
        assert_eq!(parse_decimal("3.14"), Some(3));
        assert_eq!(parse_decimal("1e9"), Some(1));
    }

    #[test]
    fn no_numeric_prefix_is_the_sentinel() {
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("--5"), None);
    }
}

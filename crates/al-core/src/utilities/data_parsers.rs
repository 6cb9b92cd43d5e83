//! Data parsing helpers.
//!
//! These return `Option` and leave error reporting to the caller, which knows
//! what the text was supposed to be (a date key, a rule token, ...).

/// Parse a date key in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.  Only the shape is checked here;
/// calendar validity is the caller's job.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return None;
    }
    let year: u16 = parse_digits(y)?;
    let month: u8 = parse_digits(m)?;
    let day: u8 = parse_digits(d)?;
    Some((year, month, day))
}

/// Parse a one- or two-digit unsigned field such as the `5` or `05` in a
/// rule token.
pub fn parse_numeric_field(s: &str) -> Option<u8> {
    if s.is_empty() || s.len() > 2 {
        return None;
    }
    parse_digits(s)
}

/// Parse a run of ASCII digits.  Rejects signs and whitespace, which
/// `str::parse` would otherwise accept (`"+5"`).
fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-06-15"), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date(" 0001-01-01 "), Some((1, 1, 1)));
        assert_eq!(parse_iso_date("bad"), None);
        assert_eq!(parse_iso_date("2023-6-15"), None);
        assert_eq!(parse_iso_date("2023-06-15-01"), None);
        assert_eq!(parse_iso_date("+023-06-15"), None);
    }

    #[test]
    fn test_parse_numeric_field() {
        assert_eq!(parse_numeric_field("5"), Some(5));
        assert_eq!(parse_numeric_field("05"), Some(5));
        assert_eq!(parse_numeric_field("12"), Some(12));
        assert_eq!(parse_numeric_field(""), None);
        assert_eq!(parse_numeric_field("123"), None);
        assert_eq!(parse_numeric_field("+5"), None);
        assert_eq!(parse_numeric_field("W"), None);
    }
}

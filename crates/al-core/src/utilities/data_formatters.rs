//! Data formatting helpers.
//!
//! Date keys are fixed-width `yyyy-MM-dd` strings so that lexical and
//! chronological order coincide for every year in `1..=9999`.

/// Format a `yyyy-MM-dd` date key.
pub fn format_date_key(year: u16, month: u8, day: u8) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Format a zero-padded `MM-DD` month-day string.
pub fn format_month_day(month: u8, day: u8) -> String {
    format!("{month:02}-{day:02}")
}

/// English ordinal suffix for `n`: `"st"`, `"nd"`, `"rd"` or `"th"`.
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// `n` followed by its ordinal suffix, as in "2nd Sunday".
pub fn format_ordinal(n: u32) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key() {
        assert_eq!(format_date_key(2024, 5, 12), "2024-05-12");
        assert_eq!(format_date_key(987, 1, 1), "0987-01-01");
    }

    #[test]
    fn test_month_day() {
        assert_eq!(format_month_day(1, 1), "01-01");
        assert_eq!(format_month_day(12, 25), "12-25");
    }

    #[test]
    fn test_ordinal() {
        // week ordinals used by nth-weekday rules, plus the teen exceptions
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (5, "5th"),
            (12, "12th"),
            (113, "113th"),
            (101, "101st"),
        ];
        for (n, want) in cases {
            assert_eq!(format_ordinal(n), want);
        }
        assert_eq!(ordinal_suffix(23), "rd");
    }
}

//! Flexible visit-date parsing.
//!
//! Raw data renders dates in half a dozen calendar formats. Parsing tries an
//! explicit ordered list instead of open-ended inference so the behavior is
//! deterministic: day-first `%d/%m/%Y` is tried before any month-first slash
//! format, matching the upstream data contract.

use chrono::NaiveDate;

/// Accepted input formats, in trial order.
const INPUT_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%b-%Y",
    "%B %d, %Y",
    "%d-%m-%Y",
];

/// Canonical rendering for all normalized dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date string under any of the accepted formats.
///
/// Returns `None` for empty input and for strings no format matches.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parses a date string and re-renders it as `YYYY-MM-DD`.
pub fn to_iso_date(value: &str) -> Option<String> {
    parse_flexible_date(value).map(|date| date.format(ISO_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_supported_renderings_normalize_to_iso() {
        let cases = [
            "2021-03-15",
            "2021/03/15",
            "15/03/2021",
            "03-15-2021",
            "15-Mar-2021",
            "March 15, 2021",
            "15-03-2021",
        ];
        for raw in cases {
            assert_eq!(to_iso_date(raw).as_deref(), Some("2021-03-15"), "{raw}");
        }
    }

    #[test]
    fn day_first_slash_format_wins() {
        // 03/04 must read as the 3rd of April, not March 4th.
        assert_eq!(to_iso_date("03/04/2021").as_deref(), Some("2021-04-03"));
    }

    #[test]
    fn unparseable_strings_yield_none() {
        assert_eq!(to_iso_date("not a date"), None);
        assert_eq!(to_iso_date("2021-13-45"), None);
        assert_eq!(to_iso_date(""), None);
        assert_eq!(to_iso_date("   "), None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(to_iso_date("  15-Mar-2021 ").as_deref(), Some("2021-03-15"));
    }
}

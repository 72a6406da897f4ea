//! Permissive date parsing
//!
//! Last-resort parser used by the classifier once every explicit template
//! has failed. It accepts the loose shapes general-purpose date parsers
//! understand, including the year-less month/day tokens spreadsheet
//! autocorrect produces ("1-Mar", "Mar-01", "MARCH1", "Sept1").

use chrono::{NaiveDate, NaiveDateTime};

/// Year assumed for year-less tokens such as "1-Mar".
///
/// Only month and day matter downstream. 2000 is a leap year, so "29-Feb"
/// still parses.
pub const DEFAULT_YEAR: i32 = 2000;

/// Date-time shapes; only the date part is kept
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Full dates carrying a year. `%B` matches short and long month names,
/// case-insensitively.
const DATE_FORMATS: &[&str] = &[
    "%d-%B-%Y",
    "%d %B %Y",
    "%d/%B/%Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%B-%d-%Y",
    "%Y-%B-%d",
    "%d.%m.%Y",
    "%Y.%m.%d",
    "%m-%d-%Y",
    "%m/%d/%y",
];

/// Month/day tokens without a year. Purely numeric forms ("3/1") are left
/// out so ratios and fractions survive.
const YEARLESS_FORMATS: &[&str] = &[
    "%d-%B", "%B-%d", "%d %B", "%B %d", "%d/%B", "%B/%d", "%B%d", "%d%B",
];

/// Parse `text` with any supported shape, returning the calendar date.
pub fn parse_flexible(text: &str) -> Option<NaiveDate> {
    let text = normalize_month_aliases(text.trim());
    if text.is_empty() {
        return None;
    }

    parse_datetime(&text)
        .or_else(|| parse_full_date(&text))
        .or_else(|| parse_yearless(&text))
}

fn parse_datetime(text: &str) -> Option<NaiveDate> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
}

fn parse_full_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

fn parse_yearless(text: &str) -> Option<NaiveDate> {
    // chrono needs a year; join one with a separator no token contains, so a
    // numeric item can never swallow digits of the appended year
    let with_year = format!("{}|{}", text, DEFAULT_YEAR);
    YEARLESS_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(&with_year, &format!("{}|%Y", fmt)).ok()
    })
}

/// Rewrite the "Sept" abbreviation to "Sep" (leaving "September" alone)
fn normalize_month_aliases(text: &str) -> String {
    let upper = text.to_ascii_uppercase();
    match upper.find("SEPT") {
        Some(pos) if !upper[pos..].starts_with("SEPTEMBER") => {
            format!("{}SEP{}", &upper[..pos], &upper[pos + 4..])
        }
        _ => upper,
    }
}

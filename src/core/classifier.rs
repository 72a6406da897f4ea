//! Date classification
//!
//! Decides whether a cell value is secretly a date. Text goes through a
//! fixed precedence: numeric guards first, then the explicit templates in
//! order, then the permissive parser. Nothing in here returns an error; a
//! value that fails every strategy simply is not a date.

use super::date_parser::parse_flexible;
use crate::types::CellValue;
use chrono::{Datelike, NaiveDate};
use tracing::trace;

/// Year every June date collapses to
pub const JUNE_SENTINEL_YEAR: i32 = 2000;

/// A date recovered from a cell. Only month and day are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    /// Wrap a parsed date. June dates collapse to June 1st of the sentinel year.
    pub fn new(date: NaiveDate) -> Self {
        if date.month() == 6 {
            let sentinel = date
                .with_day(1)
                .and_then(|d| d.with_year(JUNE_SENTINEL_YEAR))
                .unwrap_or(date);
            return Self(sentinel);
        }
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// One way of reading a string as a date
#[derive(Debug, Clone, Copy)]
pub struct DateStrategy {
    pub name: &'static str,
    parse: fn(&str) -> Option<NaiveDate>,
}

impl DateStrategy {
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        (self.parse)(text)
    }
}

/// Strategies tried in order; the first one that succeeds wins.
pub const DATE_STRATEGIES: &[DateStrategy] = &[
    DateStrategy {
        name: "YYYY-MM-DD",
        parse: parse_iso_dash,
    },
    DateStrategy {
        name: "MM/DD/YYYY",
        parse: parse_us_slash,
    },
    DateStrategy {
        name: "DD-MM-YYYY",
        parse: parse_day_first_dash,
    },
    DateStrategy {
        name: "YYYY/MM/DD",
        parse: parse_iso_slash,
    },
    DateStrategy {
        name: "flexible",
        parse: parse_flexible,
    },
];

fn parse_iso_dash(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn parse_us_slash(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%m/%d/%Y").ok()
}

fn parse_day_first_dash(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%d-%m-%Y").ok()
}

fn parse_iso_slash(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y/%m/%d").ok()
}

/// Classify any cell value. Date-typed cells are accepted as-is, text is
/// parsed, everything else (numbers, booleans, blanks, errors) is not a date.
pub fn classify(value: &CellValue) -> Option<CanonicalDate> {
    match value {
        CellValue::DateTime(dt) => Some(CanonicalDate::new(dt.date())),
        CellValue::Text(text) => classify_text(text),
        CellValue::Number(_) | CellValue::Bool(_) | CellValue::Empty | CellValue::Error(_) => {
            None
        }
    }
}

/// Classify a string value.
pub fn classify_text(raw: &str) -> Option<CanonicalDate> {
    let text = raw.trim();
    if text.is_empty()
        || parses_as_float(text)
        || has_guarded_prefix(text)
        || is_numeric_token(text)
    {
        return None;
    }

    DATE_STRATEGIES.iter().find_map(|strategy| {
        let date = strategy.parse(text)?;
        trace!(value = text, strategy = strategy.name, %date, "classified as date");
        Some(CanonicalDate::new(date))
    })
}

/// Name of the first strategy that reads `text` as a date, ignoring guards
pub fn matching_strategy(text: &str) -> Option<&'static str> {
    let text = text.trim();
    DATE_STRATEGIES
        .iter()
        .find(|strategy| strategy.parse(text).is_some())
        .map(|strategy| strategy.name)
}

fn parses_as_float(text: &str) -> bool {
    text.parse::<f64>().is_ok()
}

/// Symbols such as ST6GAL1 must never be read as dates
fn has_guarded_prefix(text: &str) -> bool {
    text.get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("ST"))
}

/// True if only digits remain once '.' and '-' are stripped ("2024", "1.5", "2024-06-15")
fn is_numeric_token(text: &str) -> bool {
    let mut digits = text.chars().filter(|c| *c != '.' && *c != '-').peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

//! Type inference for raw cell strings.
//!
//! Cells and filter literals are both plain strings. Before comparing, each
//! side is inferred independently: integer first, then timestamp with offset,
//! then opaque string.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

/// Timestamp layouts tried after RFC 3339. All of them require an offset.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// A decimal integer of any width, kept as its normalized digits.
///
/// Leading zeros are stripped and zero is never negative, so two integers are
/// equal exactly when their fields are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integer<'a> {
    negative: bool,
    digits: &'a str,
}

impl<'a> Integer<'a> {
    /// Parses an optionally signed run of ASCII digits.
    pub fn parse(text: &'a str) -> Option<Self> {
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits = unsigned.trim_start_matches('0');
        if digits.is_empty() {
            return Some(Self {
                negative: false,
                digits: "0",
            });
        }
        Some(Self { negative, digits })
    }

    /// Whether the value is below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Magnitude digits without sign or leading zeros.
    pub fn digits(&self) -> &'a str {
        self.digits
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(other.digits))
    }
}

impl Ord for Integer<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for Integer<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A cell or literal value after type inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    /// A signed integer, unbounded in width.
    Int(Integer<'a>),

    /// An ISO-8601 date-time with offset.
    Time(DateTime<FixedOffset>),

    /// Anything else, compared as text.
    Str(&'a str),
}

impl<'a> CellValue<'a> {
    /// Infers the type of a raw string.
    ///
    /// # Example
    ///
    /// ```
    /// use rowfilter_rs::CellValue;
    ///
    /// assert!(matches!(CellValue::infer("42"), CellValue::Int(_)));
    /// assert!(matches!(CellValue::infer("2018-04-04T07:10:49+00:00"), CellValue::Time(_)));
    /// assert_eq!(CellValue::infer("jon"), CellValue::Str("jon"));
    /// ```
    pub fn infer(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        if let Some(int) = Integer::parse(trimmed) {
            return CellValue::Int(int);
        }
        if let Some(time) = parse_timestamp(trimmed) {
            return CellValue::Time(time);
        }
        CellValue::Str(raw)
    }

    /// Orders two values of the same inferred type.
    ///
    /// Returns `None` when the types differ.
    pub fn compare(&self, other: &CellValue<'_>) -> Option<Ordering> {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => Some(a.cmp(b)),
            (CellValue::Time(a), CellValue::Time(b)) => Some(a.cmp(b)),
            (CellValue::Str(a), CellValue::Str(b)) => Some((*a).cmp(*b)),
            _ => None,
        }
    }

    /// Short name of the inferred type.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Int(_) => "int",
            CellValue::Time(_) => "time",
            CellValue::Str(_) => "string",
        }
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Some(time);
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
}

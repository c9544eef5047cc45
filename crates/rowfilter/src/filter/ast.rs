//! Parsed form of a single-column-value filter.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{FilterError, FilterResult, FilterSyntaxError};
use super::parser::FilterParser;

/// Name of the only filter this crate understands.
pub const FILTER_NAME: &str = "SingleColumnValueFilter";

/// Value of `filter_if_missing` when the expression omits it.
pub const DEFAULT_FILTER_IF_MISSING: bool = false;

/// Value of `latest_version_only` when the expression omits it.
pub const DEFAULT_LATEST_VERSION_ONLY: bool = true;

/// Type tag written in front of the value when rendering a filter.
pub(crate) const VALUE_TYPE_TAG: &str = "binary";

/// Comparison operator of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    /// `=`
    #[serde(rename = "=")]
    Equal,

    /// `!=`
    #[serde(rename = "!=")]
    NotEqual,

    /// `<`
    #[serde(rename = "<")]
    Less,

    /// `<=`
    #[serde(rename = "<=")]
    LessOrEqual,

    /// `>`
    #[serde(rename = ">")]
    Greater,

    /// `>=`
    #[serde(rename = ">=")]
    GreaterOrEqual,
}

impl Comparator {
    /// All comparators, in wire-token order.
    pub const ALL: [Comparator; 6] = [
        Comparator::Equal,
        Comparator::NotEqual,
        Comparator::Less,
        Comparator::LessOrEqual,
        Comparator::Greater,
        Comparator::GreaterOrEqual,
    ];

    /// Returns the wire token for this comparator.
    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Equal => "=",
            Comparator::NotEqual => "!=",
            Comparator::Less => "<",
            Comparator::LessOrEqual => "<=",
            Comparator::Greater => ">",
            Comparator::GreaterOrEqual => ">=",
        }
    }

    /// Returns whether `cell <op> literal` holds, given how the cell orders
    /// against the literal.
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            Comparator::Equal => ordering == Ordering::Equal,
            Comparator::NotEqual => ordering != Ordering::Equal,
            Comparator::Less => ordering == Ordering::Less,
            Comparator::LessOrEqual => ordering != Ordering::Greater,
            Comparator::Greater => ordering == Ordering::Greater,
            Comparator::GreaterOrEqual => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Comparator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Comparator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| FilterError::invalid_comparator(s))
    }
}

/// A parsed `SingleColumnValueFilter` expression.
///
/// Built once per expression and evaluated against any number of rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Column family of the tested cell.
    pub column_family: String,

    /// Column qualifier of the tested cell.
    pub column_qualifier: String,

    /// How the cell is compared against `value`.
    pub comparator: Comparator,

    /// Right-hand literal, with any type tag already stripped.
    pub value: String,

    /// Whether rows lacking the column are filtered out.
    #[serde(default = "default_filter_if_missing")]
    pub filter_if_missing: bool,

    /// Whether only the latest cell version is considered.
    /// Version selection happens before evaluation, in the row source.
    #[serde(default = "default_latest_version_only")]
    pub latest_version_only: bool,
}

fn default_filter_if_missing() -> bool {
    DEFAULT_FILTER_IF_MISSING
}

fn default_latest_version_only() -> bool {
    DEFAULT_LATEST_VERSION_ONLY
}

impl FilterSpec {
    /// Creates a filter with default flags.
    pub fn new(
        column_family: impl Into<String>,
        column_qualifier: impl Into<String>,
        comparator: Comparator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column_family: column_family.into(),
            column_qualifier: column_qualifier.into(),
            comparator,
            value: value.into(),
            filter_if_missing: DEFAULT_FILTER_IF_MISSING,
            latest_version_only: DEFAULT_LATEST_VERSION_ONLY,
        }
    }

    /// Sets `filter_if_missing`.
    pub fn with_filter_if_missing(mut self, filter_if_missing: bool) -> Self {
        self.filter_if_missing = filter_if_missing;
        self
    }

    /// Sets `latest_version_only`.
    pub fn with_latest_version_only(mut self, latest_version_only: bool) -> Self {
        self.latest_version_only = latest_version_only;
        self
    }

    /// Returns the `"family:qualifier"` key the filter looks up in a row.
    pub fn column_key(&self) -> String {
        format!("{}:{}", self.column_family, self.column_qualifier)
    }
}

impl FromStr for FilterSpec {
    type Err = FilterSyntaxError;

    fn from_str(s: &str) -> FilterResult<Self> {
        FilterParser::parse(s)
    }
}

/// Renders the canonical filter text, which parses back to an equal spec.
impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {}, {}, {}, {})",
            FILTER_NAME,
            Quoted(&self.column_family),
            Quoted(&self.column_qualifier),
            self.comparator,
            Quoted(&format!("{}:{}", VALUE_TYPE_TAG, self.value)),
            self.filter_if_missing,
            self.latest_version_only,
        )
    }
}

/// Single-quoted literal with embedded quotes doubled.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0.replace('\'', "''"))
    }
}

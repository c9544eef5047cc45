//! Filter evaluation against rows.
//!
//! This module provides the [`FilterEvaluator`] for evaluating a parsed
//! [`FilterSpec`] against rows of `"family:qualifier"` cells.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use rowfilter_rs::filter::{FilterEvaluator, FilterParser};
//!
//! let spec = FilterParser::parse("SingleColumnValueFilter('a', 'insta', =, 'binary:jon')").unwrap();
//! let evaluator = FilterEvaluator::new(&spec);
//!
//! let row = HashMap::from([("a:insta".to_string(), "jon".to_string())]);
//! assert!(evaluator.matches(&row));
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::ast::FilterSpec;
use super::value::CellValue;

/// A row as handed over by the row source: `"family:qualifier"` to raw value.
pub type Row = HashMap<String, String>;

/// Read access to the cells of one row.
pub trait RowCells {
    /// Returns the raw value stored under `"family:qualifier"`, if any.
    fn cell(&self, column: &str) -> Option<&str>;
}

impl<K, V, S> RowCells for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn cell(&self, column: &str) -> Option<&str> {
        self.get(column).map(AsRef::as_ref)
    }
}

impl<K, V> RowCells for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn cell(&self, column: &str) -> Option<&str> {
        self.get(column).map(AsRef::as_ref)
    }
}

impl<T: RowCells + ?Sized> RowCells for &T {
    fn cell(&self, column: &str) -> Option<&str> {
        (**self).cell(column)
    }
}

/// Evaluates one filter against a row.
///
/// A row without the column passes unless `filter_if_missing` is set.
pub fn check_filter<R: RowCells + ?Sized>(row: &R, spec: &FilterSpec) -> bool {
    FilterEvaluator::new(spec).matches(row)
}

/// Evaluates a parsed filter against rows.
///
/// The evaluator borrows the [`FilterSpec`] and can be shared across threads;
/// evaluation never mutates the spec or the row.
#[derive(Debug, Clone)]
pub struct FilterEvaluator<'a> {
    spec: &'a FilterSpec,
    column: String,
    literal: CellValue<'a>,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new filter evaluator.
    pub fn new(spec: &'a FilterSpec) -> Self {
        Self {
            spec,
            column: spec.column_key(),
            literal: CellValue::infer(&spec.value),
        }
    }

    /// Returns the spec this evaluator checks.
    pub fn spec(&self) -> &FilterSpec {
        self.spec
    }

    /// Returns true if the row passes the filter.
    pub fn matches<R: RowCells + ?Sized>(&self, row: &R) -> bool {
        let Some(raw) = row.cell(&self.column) else {
            tracing::trace!(
                column = %self.column,
                filter_if_missing = self.spec.filter_if_missing,
                "column missing from row"
            );
            return !self.spec.filter_if_missing;
        };

        let cell = CellValue::infer(raw);
        let ordering = cell.compare(&self.literal).unwrap_or_else(|| {
            tracing::trace!(
                column = %self.column,
                cell_type = cell.type_name(),
                literal_type = self.literal.type_name(),
                "mixed types, comparing as strings"
            );
            raw.cmp(self.spec.value.as_str())
        });

        self.spec.comparator.matches(ordering)
    }

    /// Returns the rows that pass the filter, in input order.
    pub fn filter_rows<'r, R: RowCells>(&self, rows: &'r [R]) -> Vec<&'r R> {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }
}

//! Single-column-value filter parser and evaluator.
//!
//! This module parses the row-store filter syntax
//!
//! ```text
//! SingleColumnValueFilter('<family>', '<qualifier>', <op>, '[<type>:]<value>'[, <filter_if_missing>[, <latest_version_only>]])
//! ```
//!
//! into a [`FilterSpec`] and evaluates it against rows of
//! `"family:qualifier"` cells.
//!
//! # Comparison
//!
//! The cell and the literal are inferred independently, in this order:
//! - integer (`5`, `-12`) - compared numerically
//! - ISO-8601 date-time with offset - compared chronologically
//! - anything else - compared as strings
//!
//! When the two sides infer to different types, the raw strings are compared.
//!
//! # Missing columns
//!
//! A row without the filtered column passes, unless `filter_if_missing` is
//! `true`, in which case it is filtered out.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use rowfilter_rs::filter::{FilterEvaluator, FilterParser};
//!
//! // Parse a filter expression once
//! let spec = FilterParser::parse("SingleColumnValueFilter('a', 'count', >=, 'binary:4', true)").unwrap();
//!
//! // Evaluate it against many rows
//! let rows = vec![
//!     HashMap::from([("a:count", "5")]),
//!     HashMap::from([("a:count", "30")]),
//!     HashMap::from([("a:count", "3")]),
//!     HashMap::from([("b:other", "9")]),
//! ];
//! let evaluator = FilterEvaluator::new(&spec);
//! assert_eq!(evaluator.filter_rows(&rows).len(), 2);
//! ```

mod ast;
mod error;
mod evaluator;
mod lexer;
mod parser;
mod value;

pub use ast::{
    Comparator, FilterSpec, DEFAULT_FILTER_IF_MISSING, DEFAULT_LATEST_VERSION_ONLY, FILTER_NAME,
};
pub use error::{FilterError, FilterResult, FilterSyntaxError};
pub use evaluator::{check_filter, FilterEvaluator, Row, RowCells};
pub use parser::FilterParser;
pub use value::{CellValue, Integer};

#[cfg(test)]
mod evaluator_tests;

//! Single-column-value row filters for wide-column rows.
//!
//! This crate parses the textual `SingleColumnValueFilter(...)` expressions used
//! by wide-column stores and evaluates them against a row of sparse
//! `"family:qualifier"` cells, comparing values as integers, timestamps or
//! strings depending on what they look like.
//!
//! Row storage is the caller's business: rows come in as plain maps and a
//! boolean verdict comes back out.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use rowfilter_rs::filter::{check_filter, FilterParser};
//! use rowfilter_rs::normalize_key;
//!
//! let spec = FilterParser::parse("SingleColumnValueFilter('a', 'count', >=, 'binary:4')").unwrap();
//!
//! let mut row = HashMap::new();
//! row.insert("a:count".to_string(), "5".to_string());
//! assert!(check_filter(&row, &spec));
//!
//! assert_eq!(normalize_key("1111-2222-aaaa-BBBB"), "1111-2222-aaaa-bbbb");
//! ```

pub mod filter;
pub mod key;

pub use filter::{
    check_filter, CellValue, Comparator, FilterError, FilterEvaluator, FilterParser,
    FilterResult, FilterSpec, FilterSyntaxError, Integer, Row, RowCells,
};
pub use key::{normalize_key, RowKey};

//! Scan command implementation.
//!
//! Reads JSON-lines rows, evaluates the filter against each and prints the
//! keys of the rows that pass.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rowfilter_rs::{FilterEvaluator, FilterParser};

use super::rows::{parse_keyed_row, KeyedRow};
use super::{CommandContext, Result};

/// Options for the scan command.
pub struct ScanOptions<'a> {
    /// Filter expression.
    pub filter: &'a str,
    /// Input file; stdin when `None`.
    pub input: Option<&'a Path>,
    /// Overrides the configured key column.
    pub key_column: Option<&'a str>,
}

/// Executes the scan command.
pub fn execute(ctx: &CommandContext, opts: &ScanOptions<'_>) -> Result<()> {
    let spec = FilterParser::parse(opts.filter)?;
    let key_column = opts.key_column.unwrap_or(&ctx.key_column);

    let matched = match opts.input {
        Some(path) => scan_reader(BufReader::new(File::open(path)?), &spec, key_column)?,
        None => scan_reader(io::stdin().lock(), &spec, key_column)?,
    };

    if ctx.json_output {
        let output: Vec<_> = matched
            .iter()
            .map(|row| serde_json::json!({ "key": row.key, "row": row.cells }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for row in &matched {
            println!("{}", row.key);
        }
    }

    Ok(())
}

/// Evaluates the filter against every non-blank line of `reader`.
pub fn scan_reader<R: BufRead>(
    reader: R,
    spec: &rowfilter_rs::FilterSpec,
    key_column: &str,
) -> Result<Vec<KeyedRow>> {
    let evaluator = FilterEvaluator::new(spec);
    let mut matched = Vec::new();
    let mut scanned = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let row = parse_keyed_row(&line, key_column, index + 1)?;
        scanned += 1;
        if evaluator.matches(&row.cells) {
            matched.push(row);
        }
    }

    tracing::debug!(scanned, matched = matched.len(), "scan complete");
    Ok(matched)
}

//! Check command implementation.
//!
//! Evaluates a filter against one row given on the command line.

use owo_colors::OwoColorize;
use rowfilter_rs::{check_filter, FilterParser};

use super::rows::parse_row;
use super::{CommandContext, Result};

/// Executes the check command.
pub fn execute(ctx: &CommandContext, filter: &str, row: &str) -> Result<()> {
    let spec = FilterParser::parse(filter)?;
    let cells = parse_row(row)?;
    let passed = check_filter(&cells, &spec);

    if ctx.json_output {
        let output = serde_json::json!({
            "filter": spec,
            "column": spec.column_key(),
            "present": cells.contains_key(&spec.column_key()),
            "passed": passed,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ctx.use_colors {
        if passed {
            println!("{}", "true".green());
        } else {
            println!("{}", "false".red());
        }
    } else {
        println!("{passed}");
    }

    Ok(())
}

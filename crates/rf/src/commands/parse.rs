//! Parse command implementation.
//!
//! Parses a filter expression and shows what it resolved to.

use owo_colors::OwoColorize;
use rowfilter_rs::{FilterParser, FilterSpec};

use super::{CommandContext, Result};

/// Executes the parse command.
pub fn execute(ctx: &CommandContext, filter: &str) -> Result<()> {
    let spec = FilterParser::parse(filter)?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&spec)?);
    } else if !ctx.quiet {
        print!("{}", format_spec_table(&spec, ctx.use_colors));
    }

    Ok(())
}

/// Formats a spec as an aligned key/value table.
pub fn format_spec_table(spec: &FilterSpec, use_colors: bool) -> String {
    let fields = [
        ("column_family", spec.column_family.clone()),
        ("column_qualifier", spec.column_qualifier.clone()),
        ("comparator", spec.comparator.to_string()),
        ("value", spec.value.clone()),
        ("filter_if_missing", spec.filter_if_missing.to_string()),
        ("latest_version_only", spec.latest_version_only.to_string()),
    ];

    let mut output = String::new();
    for (name, value) in fields {
        let label = format!("{name:<20}");
        if use_colors {
            output.push_str(&format!("{} {}\n", label.dimmed(), value));
        } else {
            output.push_str(&format!("{} {}\n", label, value));
        }
    }
    output
}

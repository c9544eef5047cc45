//! Key command implementation.

use rowfilter_rs::normalize_key;

use super::{CommandContext, Result};

/// Executes the key command.
pub fn execute(ctx: &CommandContext, id: &str) -> Result<()> {
    let key = normalize_key(id);

    if ctx.json_output {
        let output = serde_json::json!({ "id": id, "key": key });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{key}");
    }

    Ok(())
}

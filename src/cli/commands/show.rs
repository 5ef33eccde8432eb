//! Print the release model as JSON.

use crate::config::LoadedConfig;
use crate::error::Result;
use crate::model::as_map;
use std::io::Write;

/// Writes the model as pretty JSON. Without `full`, empty values are pruned.
pub fn show<W: Write>(loaded: &LoadedConfig, full: bool, out: &mut W) -> Result<i32> {
    let value = as_map(&loaded.model, full)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(0)
}

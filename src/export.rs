use std::fs;
use std::path::Path;

use crate::error::AppResult;
use crate::types::Node;

/// Renders the forest as the manifest's JSON text: an array of node objects,
/// pretty-printed with two-space indentation. No metadata beyond the nodes.
pub fn to_json_pretty(forest: &[Node]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(forest)?)
}

/// Writes the manifest to `path`, unconditionally overwriting an existing
/// artifact. No atomic rename: a crash mid-write can leave a truncated file.
pub fn write_manifest(path: &Path, forest: &[Node]) -> AppResult<()> {
    let json = to_json_pretty(forest)?;
    fs::write(path, json)?;
    Ok(())
}

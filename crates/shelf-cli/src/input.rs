//! Argument resolution for `shelf call`.
//!
//! Supports three sources:
//! - Inline JSON string via `--args` / `-a`
//! - JSON file via `--args-file` / `-f`
//! - Stdin via `--args-file -`

use std::io::Read;
use std::path::Path;

use serde_json::Value;

/// Resolves the tool arguments from CLI flags.
///
/// `--args-file` takes precedence over `--args`. The result must be a
/// JSON object.
pub fn resolve_arguments(inline: &str, args_file: Option<&str>) -> anyhow::Result<Value> {
    let raw = match args_file {
        Some("-") => read_from_stdin()?,
        Some(path) => read_from_file(path)?,
        None => inline.to_string(),
    };
    parse_object(raw.trim())
}

fn read_from_file(path: &str) -> anyhow::Result<String> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("arguments file not found: {path}");
    }
    std::fs::read_to_string(file_path)
        .map_err(|e| anyhow::anyhow!("failed to read arguments file: {e}"))
}

fn read_from_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
    Ok(buffer)
}

fn parse_object(raw: &str) -> anyhow::Result<Value> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| anyhow::anyhow!("invalid JSON arguments: {e}"))?;
    if !value.is_object() {
        anyhow::bail!("arguments must be a JSON object");
    }
    Ok(value)
}

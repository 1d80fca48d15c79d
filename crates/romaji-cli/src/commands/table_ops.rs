use std::fs;

use romaji_engine::table::{default_toml, parse_table_toml};

use crate::CliError;

pub fn table_export() -> &'static str {
    default_toml()
}

/// Validate a table file and summarize it.
pub fn table_validate(file: &str) -> Result<String, CliError> {
    let content = fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_string(),
        source,
    })?;
    let map = parse_table_toml(&content)?;
    let patterns: usize = map.values().map(Vec::len).sum();
    Ok(format!(
        "OK: {} clusters, {} patterns",
        map.len(),
        patterns
    ))
}

pub mod replay_ops;
pub mod segment_ops;
pub mod table_ops;

use std::fs;

use romaji_engine::RomajiTable;

use crate::CliError;

/// Load a table from `path`, or the built-in one when no path is given.
pub fn load_table(path: Option<&str>) -> Result<RomajiTable, CliError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_string(),
                source,
            })?;
            Ok(RomajiTable::from_toml(&content)?)
        }
        None => Ok(RomajiTable::global().clone()),
    }
}

/// Pad `s` with spaces to `width` terminal columns.
pub(crate) fn pad(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let w = UnicodeWidthStr::width(s);
    if w < width {
        format!("{}{}", s, " ".repeat(width - w))
    } else {
        s.to_string()
    }
}

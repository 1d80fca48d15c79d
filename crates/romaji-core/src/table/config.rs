use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct TableConfig {
    mappings: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("no patterns for cluster: {0}")]
    EmptyPatterns(String),
    #[error("empty pattern for cluster: {0}")]
    EmptyPattern(String),
    #[error("non-ASCII pattern {pattern:?} for cluster: {cluster}")]
    NonAsciiPattern { cluster: String, pattern: String },
    #[error("cluster longer than two characters: {0}")]
    ClusterTooLong(String),
    #[error("cluster is generated from context and cannot be mapped: {0}")]
    DynamicCluster(String),
}

/// Parse TOML text into a sorted `BTreeMap<cluster, patterns>`.
///
/// Patterns are lowercased; their order is kept because the first one is the
/// display default.
pub fn parse_table_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, Vec<String>>, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TableConfigError::Empty);
    }

    let mut mappings = config.mappings;
    for (cluster, patterns) in mappings.iter_mut() {
        match cluster.chars().count() {
            1 | 2 => {}
            _ => return Err(TableConfigError::ClusterTooLong(cluster.clone())),
        }
        if cluster == super::SOKUON_STR || cluster == super::NASAL_STR {
            return Err(TableConfigError::DynamicCluster(cluster.clone()));
        }
        if patterns.is_empty() {
            return Err(TableConfigError::EmptyPatterns(cluster.clone()));
        }
        for pattern in patterns.iter_mut() {
            if pattern.is_empty() {
                return Err(TableConfigError::EmptyPattern(cluster.clone()));
            }
            if !pattern.is_ascii() {
                return Err(TableConfigError::NonAsciiPattern {
                    cluster: cluster.clone(),
                    pattern: pattern.clone(),
                });
            }
            pattern.make_ascii_lowercase();
        }
    }

    Ok(mappings)
}

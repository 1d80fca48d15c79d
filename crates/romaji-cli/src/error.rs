#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("error reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Table(#[from] romaji_engine::TableConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

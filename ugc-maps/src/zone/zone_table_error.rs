#[derive(thiserror::Error, Debug)]
pub enum ZoneTableError {
    #[error("failed reading zone dataset '{filepath}': {source}")]
    DatasetReadError {
        filepath: String,
        source: shapefile::Error,
    },
    #[error("failed writing zone table to '{filepath}': {source}")]
    OutputWriteError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed to serialize zone table as JSON: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid zone table configuration: {0}")]
    InvalidConfiguration(String),
}

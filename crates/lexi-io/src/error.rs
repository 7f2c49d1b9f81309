#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Unable to locate {0}")]
    FileNotFound(String),

    #[error("Unsupported file format '{0}'. Use '.csv' or '.json'")]
    UnsupportedFormat(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

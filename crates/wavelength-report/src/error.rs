use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown report section \"{0}\" (expected analysis, icps, targeting, or ad-copy)")]
    UnknownSection(String),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV flush error: {0}")]
    Flush(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

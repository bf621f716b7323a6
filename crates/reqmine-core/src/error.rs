use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReqmineError {
    #[error("input document not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("clause pattern failed: {0}")]
    Pattern(String),

    #[error("failed to build result table: {0}")]
    TableBuild(String),

    #[error("failed to write {}: {reason}", path.display())]
    OutputWrite { path: PathBuf, reason: String },

    #[error("failed to load keyword set from {}: {reason}", path.display())]
    KeywordSetLoad { path: PathBuf, reason: String },

    #[error("invalid keyword set: {0}")]
    KeywordSetInvalid(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

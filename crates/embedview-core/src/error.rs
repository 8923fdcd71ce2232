use thiserror::Error;

/// Failures that reject a whole dataset document.
///
/// Problems confined to a single record never surface here; they are logged
/// and the record (or the offending field) is dropped.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset root must be an array of records, found {0}")]
    NotAnArray(&'static str),
}

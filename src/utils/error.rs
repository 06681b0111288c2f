use thiserror::Error;

/// Errors raised by the pipeline collaborators around the extraction engine.
///
/// The engine itself never returns these: field-level misses are `None` and
/// internal faults are absorbed into the result record's `error` field.
#[derive(Debug, Error)]
pub enum LicenseError {
    #[error("OCR error: {0}")]
    Ocr(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

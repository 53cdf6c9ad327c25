use thiserror::Error;

/// Reasons a cache file cannot be used
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cache is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Cache version {found} does not match expected version {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Cache was built for digits {found}, expected {expected}")]
    DigitMismatch { found: String, expected: String },
    #[error("Malformed cache record {index}: {reason}")]
    Malformed { index: usize, reason: String },
}

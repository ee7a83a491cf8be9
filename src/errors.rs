use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a manifest or running the CLI.
#[derive(Error, Debug)]
pub enum MarketplaceError {
    /// The manifest file does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax or serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logger could not be initialised.
    #[error("logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

/// Convenience alias for `Result<T, MarketplaceError>`.
pub type Result<T> = std::result::Result<T, MarketplaceError>;

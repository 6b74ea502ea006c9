//! Error handling for the `oxygenc` CLI driver.

use thiserror::Error;

/// Errors the driver itself can report, distinct from the `LexError`/
/// `ParseError` a front-end crate reports (those are rendered through
/// `oxygenc_util::diagnostic` instead of wrapped here).
#[derive(Error, Debug)]
pub enum DrvError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, DrvError>;

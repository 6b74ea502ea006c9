//! Core error types for the oxygenc-util crate.

use thiserror::Error;

/// Error type for symbol interning operations.
#[derive(Debug, Error)]
pub enum SymbolError {
    /// Symbol index has no corresponding entry in the interner.
    #[error("symbol not found: index {index}")]
    NotFound { index: u32 },
}

/// Error type for source map operations.
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// Requested line is outside the file's line range.
    #[error("invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: u32, max_lines: u32 },
}

/// Result type alias for symbol operations.
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

/// Result type alias for source map operations.
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

//! Lexer error types.

use thiserror::Error;

/// Errors the lexer can report. All are recoverable at the type level - the
/// caller gets a `Result`, never a panic - but lexing itself stops at the
/// first one, matching the original tool's fail-fast driver.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("empty input")]
    EmptyInput,

    /// A 4-space indentation group didn't land on a multiple of 4.
    #[error("line {line}: locked indentation, {found} leftover space(s)")]
    LockedIndentation { line: u32, found: u32 },

    #[error("line {line}: unexpected number parsing")]
    UnexpectedNumberParsing { line: u32 },

    /// No character class ever actually produces this - every character
    /// classifies as one of the six `CharClass` variants, alphanumeric being
    /// the catch-all - but the error space names it as a stable contract
    /// for any future class `classify` might grow.
    #[error("line {line}: unknown character '{ch}'")]
    UnknownCharacter { line: u32, ch: char },

    /// `view_next_token` was asked to preview a non-positive number of
    /// tokens.
    #[error("invalid preview count: {n}")]
    InvalidPreviewCount { n: i64 },

    /// An unterminated string literal ran into EOF before its closing quote.
    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: u32 },
}

pub type LexResult<T> = std::result::Result<T, LexError>;

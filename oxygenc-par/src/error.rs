//! Parser error types.

use thiserror::Error;

/// Errors the parser can report. The `Display` impl reproduces the
/// original driver's exact diagnostic shape (`file=... line=... OxygenC
/// Error: ...`) since tooling downstream of this front end treats it as a
/// stable message contract, not just a human-readable string.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("file={file} line={line} OxygenC Error: expected {}", .expected.join(", "))]
    ExpectedKind {
        file: String,
        line: u32,
        expected: Vec<&'static str>,
    },

    #[error("file={file} line={line} OxygenC Error: expected {}", .expected.join(", "))]
    ExpectedValue {
        file: String,
        line: u32,
        expected: Vec<String>,
    },

    #[error("unexpected end of program")]
    UnexpectedEndOfProgram,

    /// An `operator.NAME` declaration had a parameter count other than 1
    /// (unary) or 2 (binary).
    #[error(
        "file={file} line={line} OxygenC Error: operators can either be unary or binary, found {count} parameter(s)"
    )]
    InvalidOperatorArity {
        file: String,
        line: u32,
        count: usize,
    },

    #[error("file={file} line={line} OxygenC Error: extern functions cannot have default arguments")]
    ExternDefaultArgument { file: String, line: u32 },

    #[error("file={file} line={line} OxygenC Error: unknown assignment operator: {op}")]
    UnknownAssignmentOperator {
        file: String,
        line: u32,
        op: String,
    },

    /// `parse_find_until` ran off the end of the program before finding
    /// either its target or its terminator.
    #[error("file={file} line={line} OxygenC Error: expected {target}")]
    SearchExhausted {
        file: String,
        line: u32,
        target: String,
    },

    /// A grammar production the language defines but this front end does
    /// not give downstream meaning to (slice expressions, bracket-form
    /// dict literals, array-of-type assignment). Parsing stops cleanly
    /// rather than guessing a shape for them.
    #[error("file={file} line={line} OxygenC Error: {feature} is not supported")]
    Unsupported {
        file: String,
        line: u32,
        feature: &'static str,
    },

    #[error(transparent)]
    Lex(#[from] oxygenc_lex::LexError),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

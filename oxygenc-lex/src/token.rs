//! Token representation.

use std::fmt;

/// The syntactic category of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Newline,
    Eof,
    String,
    Number,
    Op,
    Keyword,
    Ltype,
    Constant,
    Name,
    Escape,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Op => "OP",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Ltype => "LTYPE",
            TokenKind::Constant => "CONSTANT",
            TokenKind::Name => "NAME",
            TokenKind::Escape => "ESCAPE",
        };
        write!(f, "{s}")
    }
}

/// The base of a NUMBER token's literal value, set only when `kind` is
/// `TokenKind::Number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberKind {
    /// Integer literal; `base` is 10, 16, 8, or 2.
    Int { base: u32 },
    /// Floating-point literal (a `.` was present in the word).
    Double,
}

/// A single lexed token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub number_kind: Option<NumberKind>,
    pub line: u32,
    pub indent_level: u32,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32, indent_level: u32) -> Self {
        Self {
            kind,
            value: value.into(),
            number_kind: None,
            line,
            indent_level,
        }
    }

    pub fn with_number_kind(mut self, number_kind: NumberKind) -> Self {
        self.number_kind = Some(number_kind);
        self
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

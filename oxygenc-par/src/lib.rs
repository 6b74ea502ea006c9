//! oxygenc-par - Recursive-descent parser for OxygenC source.
//!
//! [`Parser`] consumes a pull-based [`oxygenc_lex::Lexer`] one token at a
//! time (plus bounded N-token preview via `view_next_token`) and produces a
//! [`ast::Program`]. There is no separate tokenize-then-parse pass - the
//! parser drives the lexer directly.

pub mod ast;
#[cfg(test)]
mod edge_cases;
pub mod error;
mod expr;
mod items;
mod stmt;
mod types;

pub use ast::Ast;
pub use error::{ParseError, ParseResult};

use oxygenc_lex::{Lexer, Token, TokenKind};
use oxygenc_util::Symbol;

/// Recursive-descent parser over one source file's token stream.
pub struct Parser<'a> {
    pub(crate) lexer: Lexer<'a>,
    pub(crate) file: String,
    pub(crate) current: Token,
    /// The indent level the parser currently expects sibling statements to
    /// sit at - incremented on entry to any block-introducing construct
    /// (`if`, `while`, `for`, `fun`, `struct`, ...) and decremented on exit.
    pub(crate) indent_level: u32,
    /// Names declared via `struct`/`object`/`enum`/`type`, consulted so a
    /// bare NAME can be recognized as a type reference instead of a
    /// variable wherever the grammar allows either.
    pub(crate) user_types: Vec<Symbol>,
    /// Set while parsing the single argument of `print(...)`/`input(...)`,
    /// so a parenthesized expression inside reads as grouping rather than
    /// a tuple literal.
    pub(crate) func_args: bool,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, file: impl Into<String>) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source)?;
        let current = lexer.get_next_token()?;
        Ok(Self {
            lexer,
            file: file.into(),
            current,
            indent_level: 0,
            user_types: Vec::new(),
            func_args: false,
        })
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.current.line
    }

    /// Advance to the next token, returning the one just consumed.
    pub(crate) fn next_token(&mut self) -> ParseResult<Token> {
        let next = self.lexer.get_next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    pub(crate) fn preview(&mut self, n: i64) -> ParseResult<Token> {
        Ok(self.lexer.view_next_token(n)?)
    }

    fn err_expected_kind(&self, expected: Vec<&'static str>) -> ParseError {
        ParseError::ExpectedKind {
            file: self.file.clone(),
            line: self.line(),
            expected,
        }
    }

    fn err_expected_value(&self, expected: &[&str]) -> ParseError {
        ParseError::ExpectedValue {
            file: self.file.clone(),
            line: self.line(),
            expected: expected.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Consume the current token if its kind is one of `kinds`, else error.
    pub(crate) fn consume_kind(&mut self, kinds: &[TokenKind]) -> ParseResult<Token> {
        if kinds.contains(&self.current.kind) {
            self.next_token()
        } else {
            let names: Vec<&'static str> = kinds.iter().map(|k| kind_name(*k)).collect();
            Err(self.err_expected_kind(names))
        }
    }

    /// Consume the current token if its value is one of `values`, else error.
    pub(crate) fn consume_value(&mut self, values: &[&str]) -> ParseResult<Token> {
        if values.contains(&self.current.value.as_str()) {
            self.next_token()
        } else {
            Err(self.err_expected_value(values))
        }
    }

    #[inline]
    pub(crate) fn at_value(&self, value: &str) -> bool {
        self.current.value == value
    }

    #[inline]
    pub(crate) fn at_kind(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn is_user_type(&self, name: &str) -> bool {
        self.user_types.iter().any(|t| t.as_str() == name)
    }

    pub(crate) fn declare_type(&mut self, name: &str) {
        self.user_types.push(Symbol::intern(name));
    }

    pub(crate) fn intern(&self, s: &str) -> Symbol {
        Symbol::intern(s)
    }

    /// Scan ahead (via bounded preview, never consuming) for `to_find`
    /// before `until`. Used to disambiguate a parenthesized expression from
    /// a tuple literal by searching for a comma before the closing paren.
    pub(crate) fn parse_find_until(&mut self, to_find: &str, until: &str) -> ParseResult<bool> {
        let mut n = 0i64;
        loop {
            n += 1;
            let tok = self.preview(n)?;
            if tok.value == to_find {
                return Ok(true);
            }
            if tok.kind == TokenKind::Eof {
                return Err(ParseError::SearchExhausted {
                    file: self.file.clone(),
                    line: self.line(),
                    target: to_find.to_string(),
                });
            }
            if tok.value == until {
                return Ok(false);
            }
        }
    }

    /// Skip any blank NEWLINEs, then report whether the current token sits
    /// at the indentation level the caller expects for the next sibling
    /// statement in the block it's building.
    pub(crate) fn parse_handle_indents(&mut self) -> ParseResult<bool> {
        while self.current.kind == TokenKind::Newline {
            self.consume_kind(&[TokenKind::Newline])?;
        }
        Ok(self.current.indent_level == self.indent_level)
    }

    /// `"..."` has no single lexeme of its own - it lexes as `OP("..")`
    /// immediately followed by `OP(".")`. Vararg parameters (`name:
    /// Type...`) are recognized by that exact two-token sequence.
    pub(crate) fn at_ellipsis(&mut self) -> ParseResult<bool> {
        Ok(self.current.value == ".." && self.preview(1)?.value == ".")
    }

    pub(crate) fn consume_ellipsis(&mut self) -> ParseResult<()> {
        self.consume_value(&[".."])?;
        self.consume_value(&["."])?;
        Ok(())
    }

    pub fn parse(&mut self) -> ParseResult<Ast> {
        let program = self.parse_program_text()?;
        if self.current.kind != TokenKind::Eof {
            return Err(ParseError::UnexpectedEndOfProgram);
        }
        Ok(program)
    }
}

fn kind_name(kind: TokenKind) -> &'static str {
    match kind {
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_trivial_program() {
        let mut parser = Parser::new("x: int = 1\n", "t.oxy").unwrap();
        let program = parser.parse().unwrap();
        assert_eq!(program.block.children.len(), 1);
    }

    #[test]
    fn reports_expected_value_with_file_and_line() {
        let mut parser = Parser::new("fun add(a, b\n", "t.oxy").unwrap();
        let err = parser.parse().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("file=t.oxy"));
        assert!(msg.contains("OxygenC Error"));
    }
}

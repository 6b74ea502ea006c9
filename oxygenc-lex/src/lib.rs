//! oxygenc-lex - Lexical analysis for OxygenC source text.
//!
//! [`Lexer`] turns a source string into a stream of [`Token`]s: NEWLINE,
//! EOF, STRING, NUMBER, OP, KEYWORD, LTYPE, CONSTANT, NAME, and ESCAPE.
//! There is no separate tokenizer-configuration step - the grammar tables
//! in [`tables`] are fixed, matching the single front end this crate
//! serves.
//!
//! Indentation is tracked as part of lexing rather than left to the parser:
//! each token carries the indentation level of the line it started on, so
//! the parser can recover block structure without a separate layout pass.

pub mod cursor;
mod edge_cases;
pub mod error;
pub mod lexer;
pub mod tables;
pub mod token;

pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{NumberKind, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_a_small_program() {
        let mut lex = Lexer::new("fun add(a, b)\n    return a + b\n").unwrap();
        let tokens = lex.analyse_tokens().unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds.first(), Some(&TokenKind::Keyword));
        assert!(kinds.contains(&TokenKind::Name));
        assert!(kinds.contains(&TokenKind::Op));
        assert_eq!(kinds.last(), Some(&TokenKind::Eof));
    }

    #[test]
    fn indentation_levels_are_tracked_per_token() {
        let mut lex = Lexer::new("if x\n    y\n").unwrap();
        let tokens = lex.analyse_tokens().unwrap();
        let y_token = tokens.iter().find(|t| t.value == "y").unwrap();
        assert_eq!(y_token.indent_level, 1);
    }

    #[test]
    fn tab_indentation_counts_as_one_level_per_tab() {
        let mut lex = Lexer::new("if x\n\t\ty\n").unwrap();
        let tokens = lex.analyse_tokens().unwrap();
        let y_token = tokens.iter().find(|t| t.value == "y").unwrap();
        assert_eq!(y_token.indent_level, 2);
    }
}

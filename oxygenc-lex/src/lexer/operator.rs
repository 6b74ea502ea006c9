//! Operator run lexing.

use super::core::Lexer;
use crate::error::LexResult;
use crate::tables::{self, CharClass};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Accumulate a run of OPERATIC-class characters into a single OP
    /// token. A run ends as soon as either the word accumulated so far, or
    /// the character about to be examined next, is itself one of the
    /// single-character operators (brackets, comma, colon, dot, `?`) -
    /// those never combine with what comes before or after them.
    pub(crate) fn lex_operator(&mut self, line: u32, indent_level: u32) -> LexResult<Token> {
        loop {
            self.word.push(self.current_char());
            self.cursor.advance();

            // "." is a single operator on its own (member access), but two
            // of them in a row form the range operator ".." - let a second
            // dot join before the single-operator break rule applies.
            if self.word == "." && self.current_char() == '.' {
                continue;
            }

            if tables::is_single_operator(&self.word) {
                break;
            }
            if self.eof() || self.get_typeof(self.current_char()) != CharClass::Operatic {
                break;
            }
            if tables::is_single_operator(&self.current_char().to_string()) {
                break;
            }
        }

        let value = std::mem::take(&mut self.word);
        Ok(Token::new(TokenKind::Op, value, line, indent_level))
    }
}

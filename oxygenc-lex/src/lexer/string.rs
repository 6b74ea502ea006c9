//! String literal lexing.

use super::core::Lexer;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lex a string literal delimited by matching `"` or `'` quotes.
    ///
    /// The only escape handled is a backslash immediately followed by the
    /// closing quote character - the backslash is swallowed and the quote
    /// is appended to the literal as-is. No other escape sequence is
    /// interpreted here.
    pub(crate) fn lex_string(&mut self, line: u32, indent_level: u32) -> LexResult<Token> {
        let quote = self.current_char();
        self.cursor.advance();
        let mut content = String::new();

        loop {
            if self.eof() {
                return Err(LexError::UnterminatedString { line });
            }
            let ch = self.current_char();
            if ch == quote {
                self.cursor.advance();
                break;
            }
            if ch == '\\' && self.peek_next(1) == quote {
                self.get_next_char();
                content.push(self.current_char());
                self.cursor.advance();
                continue;
            }
            content.push(ch);
            self.cursor.advance();
        }

        Ok(Token::new(TokenKind::String, content, line, indent_level))
    }
}

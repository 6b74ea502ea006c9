//! Alphanumeric-run lexing: keywords, types, constants, operator words, and
//! plain identifiers.

use super::core::Lexer;
use crate::error::LexResult;
use crate::tables::{self, CharClass};
use crate::token::{Token, TokenKind};

/// Replace every non-ASCII character with a `\uXXXX` escape so the rest of
/// the pipeline only ever sees ASCII identifiers.
fn encode_ascii_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            out.push_str(&format!("\\u{:04x}", ch as u32));
        }
    }
    out
}

impl<'a> Lexer<'a> {
    fn accumulate_alphanumeric_run(&mut self) {
        loop {
            if self.eof() {
                break;
            }
            let cls = self.get_typeof(self.current_char());
            if cls != CharClass::Alphanumeric && cls != CharClass::Numeric {
                break;
            }
            self.word.push(self.current_char());
            self.cursor.advance();
        }
    }

    /// Lex a run of alphanumeric characters, resolving it to an operator
    /// word, keyword, type, constant, or plain name - joining a second
    /// word across one space first if this word and the next participate
    /// in a multi-word combination (`else if`, `is not`, `not in`, ...).
    pub(crate) fn lex_alphanumeric(&mut self, line: u32, indent_level: u32) -> LexResult<Token> {
        self.accumulate_alphanumeric_run();

        let mut combined_kind: Option<TokenKind> = None;
        loop {
            let as_operator =
                tables::is_operator_word(&self.word) && tables::is_multi_word_operator(&self.word);
            let as_keyword =
                tables::is_keyword(&self.word) && tables::is_multi_word_keyword(&self.word);
            if !as_operator && !as_keyword {
                break;
            }

            let preview = self.view_next_token(1)?;
            let joins = if as_operator {
                tables::is_multi_word_operator(&preview.value)
            } else {
                tables::is_multi_word_keyword(&preview.value)
            };
            if !joins {
                break;
            }

            if self.current_char() == ' ' {
                self.cursor.advance();
            }
            self.word.push(' ');
            self.accumulate_alphanumeric_run();
            combined_kind = Some(if as_operator { TokenKind::Op } else { TokenKind::Keyword });
        }

        let kind = combined_kind.unwrap_or_else(|| {
            if tables::is_operator_word(&self.word) {
                TokenKind::Op
            } else if tables::is_keyword(&self.word) {
                TokenKind::Keyword
            } else if tables::is_type(&self.word) {
                TokenKind::Ltype
            } else if tables::is_constant(&self.word) {
                TokenKind::Constant
            } else {
                TokenKind::Name
            }
        });

        let mut value = std::mem::take(&mut self.word);
        if kind == TokenKind::Name {
            value = encode_ascii_escapes(&value);
        }
        Ok(Token::new(kind, value, line, indent_level))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn plain_name() {
        let mut lex = Lexer::new("foo").unwrap();
        let tok = lex.get_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Name);
        assert_eq!(tok.value, "foo");
    }

    #[test]
    fn keyword() {
        let mut lex = Lexer::new("return").unwrap();
        let tok = lex.get_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Keyword);
    }

    #[test]
    fn type_name() {
        let mut lex = Lexer::new("int32").unwrap();
        let tok = lex.get_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Ltype);
    }

    #[test]
    fn else_if_combines() {
        let mut lex = Lexer::new("else if").unwrap();
        let tok = lex.get_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Keyword);
        assert_eq!(tok.value, "else if");
    }

    #[test]
    fn is_not_combines_as_operator() {
        let mut lex = Lexer::new("is not").unwrap();
        let tok = lex.get_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Op);
        assert_eq!(tok.value, "is not");
    }

    #[test]
    fn not_in_combines_as_operator() {
        let mut lex = Lexer::new("not in").unwrap();
        let tok = lex.get_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Op);
        assert_eq!(tok.value, "not in");
    }

    #[test]
    fn else_without_if_stays_single_keyword() {
        let mut lex = Lexer::new("else\n").unwrap();
        let tok = lex.get_next_token().unwrap();
        assert_eq!(tok.value, "else");
    }

    #[test]
    fn non_ascii_name_is_escaped() {
        let mut lex = Lexer::new("café").unwrap();
        let tok = lex.get_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Name);
        assert_eq!(tok.value, "caf\\u00e9");
    }

    #[test]
    fn name_with_trailing_digits() {
        let mut lex = Lexer::new("x1").unwrap();
        let tok = lex.get_next_token().unwrap();
        assert_eq!(tok.value, "x1");
    }
}

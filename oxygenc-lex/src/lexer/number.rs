//! Numeric literal lexing.

use super::core::Lexer;
use crate::error::{LexError, LexResult};
use crate::token::{NumberKind, Token, TokenKind};

fn digit_valid_for_base(ch: char, base: u32) -> bool {
    match base {
        2 => matches!(ch, '0' | '1'),
        8 => matches!(ch, '0'..='7'),
        16 => ch.is_ascii_hexdigit(),
        _ => ch.is_ascii_digit(),
    }
}

impl<'a> Lexer<'a> {
    /// Lex a numeric literal: decimal by default, switching to base 2/8/16
    /// on a `0b`/`0o`/`0x` prefix, and promoting to `Double` if a `.` is
    /// seen. Two consecutive dots (a range operator) terminate the number
    /// without being consumed, so `1..10` lexes as `NUMBER(1) OP(..)
    /// NUMBER(10)`.
    pub(crate) fn lex_number(&mut self, line: u32, indent_level: u32) -> LexResult<Token> {
        let mut base: u32 = 10;

        loop {
            let ch = self.current_char();
            let cls = self.get_typeof(ch);
            let dot_continue = ch == '.' && self.peek_next(1) != '.';
            let hex_suffix = matches!(ch, 'a'..='f' | 'x' | 'o');

            if !(cls == crate::tables::CharClass::Numeric || dot_continue || hex_suffix) {
                break;
            }

            if cls == crate::tables::CharClass::Numeric
                && base != 10
                && !digit_valid_for_base(ch, base)
            {
                return Err(LexError::UnexpectedNumberParsing { line });
            }

            self.word.push(ch);

            if cls == crate::tables::CharClass::Alphanumeric {
                if matches!(ch, 'b' | 'x' | 'o')
                    && self.word.starts_with('0')
                    && self.word.len() == 2
                {
                    base = match ch {
                        'b' => 2,
                        'x' => 16,
                        'o' => 8,
                        _ => unreachable!(),
                    };
                    self.word.clear();
                } else if !(base == 16 && matches!(ch, 'a'..='f')) {
                    return Err(LexError::UnexpectedNumberParsing { line });
                }
            }

            self.cursor.advance();
        }

        let value = std::mem::take(&mut self.word);
        if value.contains('.') {
            Ok(Token::new(TokenKind::Number, value, line, indent_level)
                .with_number_kind(NumberKind::Double))
        } else {
            Ok(Token::new(TokenKind::Number, value, line, indent_level)
                .with_number_kind(NumberKind::Int { base }))
        }
    }
}

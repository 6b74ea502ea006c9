//! Core lexer state and dispatch.

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::tables::{self, CharClass};
use crate::token::{Token, TokenKind};

/// Lexer for OxygenC source text.
///
/// Tokenization proceeds by accumulating runs of same-class characters
/// (`word`) and deciding what kind of token the run became once the run
/// ends - there is no fixed per-character dispatch table the way a
/// single-character-token language would use.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    /// Characters accumulated for the token currently being built.
    pub(crate) word: String,
    /// Class of the first character in `word`, `None` before a run starts.
    pub(crate) word_type: Option<CharClass>,
    /// Indentation level of the *line the current token started on*.
    pub(crate) indent_level: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> LexResult<Self> {
        if source.is_empty() {
            return Err(LexError::EmptyInput);
        }
        Ok(Self {
            cursor: Cursor::new(source),
            word: String::new(),
            word_type: None,
            indent_level: 0,
        })
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    #[inline]
    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    #[inline]
    pub(crate) fn current_char(&self) -> char {
        self.cursor.current_char()
    }

    #[inline]
    pub(crate) fn peek_next(&self, offset: isize) -> char {
        if offset >= 0 {
            self.cursor.peek_char(offset as usize)
        } else {
            // Negative lookbehind: only offset -1 is ever used, by the
            // leading-whitespace indentation scan.
            let back = (-offset) as usize;
            if self.cursor.position() < back {
                '\0'
            } else {
                self.cursor
                    .source()
                    .get(..self.cursor.position())
                    .and_then(|s| s.chars().next_back())
                    .unwrap_or('\0')
            }
        }
    }

    #[inline]
    pub(crate) fn get_next_char(&mut self) -> char {
        self.cursor.advance();
        self.current_char()
    }

    #[inline]
    pub(crate) fn empty_word(&mut self) {
        self.word.clear();
        self.word_type = None;
    }

    #[inline]
    pub(crate) fn eof(&self) -> bool {
        self.cursor.is_at_end()
    }

    pub(crate) fn get_typeof(&self, ch: char) -> CharClass {
        tables::classify(ch)
    }

    fn reset_indent_level(&mut self) {
        self.indent_level = 0;
    }

    fn increment_indent_level(&mut self) {
        self.indent_level += 1;
    }

    /// Consume a `\n` and reset indentation tracking for the next line.
    fn eat_newline(&mut self) {
        self.cursor.advance();
        self.reset_indent_level();
    }

    /// Scan leading-of-line whitespace, converting hard tabs and groups of
    /// four spaces into indentation levels.
    ///
    /// A hard tab always counts as one level. A run of spaces counts as one
    /// level per completed group of four, but only when the character
    /// immediately preceding this call was `\n` - space groups elsewhere
    /// on the line are just whitespace. A leftover count that isn't a
    /// multiple of four is a lexing error.
    fn skip_indent(&mut self) -> LexResult<()> {
        let should_indent = self.peek_next(-1) == '\n';
        let mut space_run = 0u32;
        while matches!(self.current_char(), ' ' | '\t') {
            match self.current_char() {
                '\t' => {
                    self.increment_indent_level();
                    self.cursor.advance();
                }
                ' ' => {
                    self.cursor.advance();
                    if should_indent {
                        space_run += 1;
                        if space_run == 4 {
                            self.increment_indent_level();
                            space_run = 0;
                        }
                    }
                }
                _ => unreachable!(),
            }
        }
        if should_indent && space_run != 0 {
            return Err(LexError::LockedIndentation {
                line: self.line(),
                found: space_run,
            });
        }
        Ok(())
    }

    /// Produce the next token, per the ten-step dispatch: whitespace/indent,
    /// comments, EOF, string literals, escape continuation, operator runs,
    /// numeric runs, alphanumeric runs.
    pub fn get_next_token(&mut self) -> LexResult<Token> {
        loop {
            if matches!(self.current_char(), ' ' | '\t') {
                self.skip_indent()?;
                continue;
            }

            if self.current_char() == '\n' {
                let line = self.line();
                let indent_level = self.indent_level;
                self.eat_newline();
                return Ok(Token::new(TokenKind::Newline, "\n", line, indent_level));
            }

            if self.eof() {
                return Ok(Token::new(TokenKind::Eof, "", self.line(), self.indent_level));
            }

            if self.current_char() == '#' {
                if self.skip_comment() {
                    return Ok(Token::new(TokenKind::Eof, "", self.line(), self.indent_level));
                }
                continue;
            }

            let line = self.line();
            let indent_level = self.indent_level;

            if self.current_char() == '"' || self.current_char() == '\'' {
                return self.lex_string(line, indent_level);
            }

            if self.current_char() == '\\' {
                return Ok(self.lex_escape());
            }

            self.empty_word();
            let class = self.get_typeof(self.current_char());
            return match class {
                CharClass::Operatic => self.lex_operator(line, indent_level),
                CharClass::Numeric => self.lex_number(line, indent_level),
                CharClass::Alphanumeric => self.lex_alphanumeric(line, indent_level),
                CharClass::Whitespace | CharClass::Comment | CharClass::Escape => {
                    unreachable!("handled above")
                }
            };
        }
    }

    /// Preview `n` upcoming tokens without consuming them, restoring all
    /// lexer state afterward. Used to resolve multi-word keyword/operator
    /// combinations.
    pub fn view_next_token(&mut self, n: i64) -> LexResult<Token> {
        if n <= 0 {
            return Err(LexError::InvalidPreviewCount { n });
        }
        let cursor_snapshot = self.cursor.snapshot();
        let word = self.word.clone();
        let word_type = self.word_type;
        let indent_level = self.indent_level;

        let mut token = self.get_next_token()?;
        for _ in 1..n {
            token = self.get_next_token()?;
        }

        self.cursor.restore(cursor_snapshot);
        self.word = word;
        self.word_type = word_type;
        self.indent_level = indent_level;

        Ok(token)
    }

    fn lex_escape(&mut self) -> Token {
        self.empty_word();
        self.cursor.advance();
        let line = self.line();
        if self.current_char() == '\n' {
            self.cursor.advance();
        }
        Token::new(TokenKind::Escape, "\\", line, self.indent_level)
    }

    /// Tokenize the entire source into a `Vec<Token>`, ending with one EOF
    /// token.
    pub fn analyse_tokens(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.get_next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.get_next_token() {
            Ok(token) if token.is_eof() => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_errors() {
        assert!(matches!(Lexer::new(""), Err(LexError::EmptyInput)));
    }

    #[test]
    fn newline_resets_indent_level() {
        let mut lex = Lexer::new("x\n    y\n").unwrap();
        let toks = lex.analyse_tokens().unwrap();
        assert_eq!(toks.iter().filter(|t| t.kind == TokenKind::Newline).count(), 2);
    }

    #[test]
    fn view_next_token_restores_state() {
        let mut lex = Lexer::new("a b").unwrap();
        let first = lex.get_next_token().unwrap();
        assert_eq!(first.value, "a");
        let previewed = lex.view_next_token(1).unwrap();
        assert_eq!(previewed.value, "b");
        // State restored: the next real call should still see "b" fresh.
        let second = lex.get_next_token().unwrap();
        assert_eq!(second.value, "b");
    }
}

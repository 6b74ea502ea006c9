//! Comment skipping.

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Consume a `#`-comment through its terminating newline, collapsing
    /// consecutive comment-only lines without emitting a token for any of
    /// them. Returns `true` if EOF was reached instead of a newline.
    pub(crate) fn skip_comment(&mut self) -> bool {
        while self.current_char() != '\n' && !self.eof() {
            self.cursor.advance();
        }
        if self.eof() {
            return true;
        }
        // Consume the newline without emitting a NEWLINE token.
        self.cursor.advance();
        self.indent_level = 0;
        if self.current_char() == '#' {
            return self.skip_comment();
        }
        false
    }
}

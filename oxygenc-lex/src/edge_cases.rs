//! Boundary-condition tests for the lexer, covering the scenarios spec.md
//! calls out explicitly rather than duplicating the per-module unit tests.

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    fn values(source: &str) -> Vec<String> {
        Lexer::new(source)
            .unwrap()
            .analyse_tokens()
            .unwrap()
            .into_iter()
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn locked_indentation_on_non_multiple_of_four() {
        let err = Lexer::new("x\n   y\n").unwrap().analyse_tokens().unwrap_err();
        assert!(matches!(err, crate::LexError::LockedIndentation { found: 3, .. }));
    }

    #[test]
    fn mixed_tabs_and_four_space_groups() {
        let mut lex = Lexer::new("if x\n\t    y\n").unwrap();
        let tokens = lex.analyse_tokens().unwrap();
        let y = tokens.iter().find(|t| t.value == "y").unwrap();
        // One tab (+1) then one complete four-space group (+1).
        assert_eq!(y.indent_level, 2);
    }

    #[test]
    fn comment_only_line_between_statements_emits_no_token() {
        let vals = values("x\n# nothing here\ny\n");
        assert!(!vals.iter().any(|v| v.contains("nothing")));
        assert!(vals.contains(&"x".to_string()));
        assert!(vals.contains(&"y".to_string()));
    }

    #[test]
    fn escape_continuation_line_join() {
        let tokens = Lexer::new("a = 1 + \\\n    2\n").unwrap().analyse_tokens().unwrap();
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Escape));
    }

    #[test]
    fn string_with_embedded_newline_is_unterminated() {
        // No closing quote anywhere in the source, so the string runs to EOF.
        let err = Lexer::new("\"abc\ndef").unwrap().analyse_tokens().unwrap_err();
        assert!(matches!(err, crate::LexError::UnterminatedString { .. }));
    }

    #[test]
    fn string_may_contain_a_literal_embedded_newline() {
        // A real newline inside the quotes is just content, not an error.
        let tokens = Lexer::new("\"abc\ndef\"\n").unwrap().analyse_tokens().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].value, "abc\ndef");
    }

    #[test]
    fn keyword_word_boundary_not_prefix_matched() {
        // "returning" must lex as one NAME, not KEYWORD("return") + NAME("ing").
        let tokens = Lexer::new("returning\n").unwrap().analyse_tokens().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Name);
        assert_eq!(tokens[0].value, "returning");
    }

    #[test]
    fn operator_word_boundary_not_prefix_matched() {
        let tokens = Lexer::new("island\n").unwrap().analyse_tokens().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Name);
        assert_eq!(tokens[0].value, "island");
    }
}

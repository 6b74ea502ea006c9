//! Grammar tables - the fixed string sets that drive classification.
//!
//! Every table here is a flat, static word list looked up by membership,
//! never a trie or prefix automaton: `OPERATORS` holds single ASCII
//! operator characters (for character-class tests) and the full multi-char
//! and alphanumeric operator words (for word-level classification) in the
//! same set, mirroring the original lexer's single `OPERATORS` container.

/// Keywords, checked after `OPERATORS` so that alphanumeric operator words
/// (`and`, `or`, `not`, `is`) never collide with a keyword of the same
/// spelling.
///
/// `print` and `input` are deliberately absent here: they lex as plain
/// NAMEs, and `function_call` special-cases them by value once the parser
/// reaches a NAME in call position - tagging them KEYWORD would route
/// `print(x)` into the statement dispatcher's keyword arm instead of
/// `parse_name_stmt`.
pub const KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "in", "fun", "return", "break", "continue",
    "fallthrough", "pass", "const", "defer", "switch", "case", "default",
    "operator", "extern", "type", "import", "self",
    "true", "false",
];

/// Keyword pairs that combine across a single space, e.g. `else` + `if` ->
/// `"else if"`. Combination fires only when *both* words are members.
pub const MULTI_WORD_KEYWORDS: &[&str] = &["else", "if"];

/// LTYPE lexeme set - primitive and compound type names.
pub const TYPES: &[&str] = &[
    "any",
    "int", "int8", "int16", "int32", "int64", "int128",
    "uint", "uint8", "uint16", "uint32", "uint64", "uint128",
    "float", "double", "complex", "bool", "str",
    "list", "tuple", "dict", "func", "struct", "enum", "object", "void",
];

/// Named literals, tagged CONSTANT. In practice `true`/`false` are always
/// classified as KEYWORD first since `KEYWORDS` is checked earlier in the
/// dispatch priority - only `null` is reachable through this table.
pub const CONSTANTS: &[&str] = &["true", "false", "null"];

/// Single-character operators that terminate an OPERATIC run as soon as
/// they're seen, rather than being absorbed into a longer run.
pub const SINGLE_OPERATORS: &[&str] = &["(", ")", "[", "]", "{", "}", ",", ":", ".", "?"];

/// Alphanumeric operator words that combine across a single space, e.g.
/// `is` + `not` -> `"is not"`, `not` + `in` -> `"not in"`. Combination only
/// requires the *first* word to be OPERATORS-classified; the second word's
/// value is checked against this set regardless of how it itself lexes.
pub const MULTI_WORD_OPERATORS: &[&str] = &["is", "not", "in"];

pub const ARITHMETIC_ASSIGNMENT_OP: &[&str] = &[
    "+=", "-=", "*=", "/=", "%=", "//=", "**=", "&=", "|=", "^=", "<<=", ">>=",
];

pub const INCREMENTAL_ASSIGNMENT_OP: &[&str] = &["++", "--"];

pub const COMPARISON_OP: &[&str] = &["==", "!=", "<", "<=", ">", ">="];

pub const LOGICAL_OP: &[&str] = &["and", "or", "not", "is", "is not", "not in"];

pub const BINARY_OP: &[&str] = &["&", "|", "^", "~", "<<", ">>"];

/// Single ASCII characters belonging to the OPERATIC character class. A run
/// of these characters (subject to the `SINGLE_OPERATORS` break rule) forms
/// an OP token.
const OPERATOR_CHARS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~', '(', ')', '[', ']', '{', '}',
    ',', ':', '.', '?',
];

/// The complete operator word set: every symbolic operator token this
/// lexer can produce, plus the alphanumeric operator words. Used for the
/// word-level `word in OPERATORS` classification test (step 8b in the
/// tokenization algorithm).
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "//", "=", "->", "..",
    "==", "!=", "<", "<=", ">", ">=",
    "+=", "-=", "*=", "/=", "%=", "//=", "**=", "&=", "|=", "^=", "<<=", ">>=",
    "++", "--",
    "&", "|", "^", "~", "<<", ">>",
    "&&", "||",
    "and", "or", "not", "is", "as",
    "(", ")", "[", "]", "{", "}", ",", ":", ".", "?",
];

/// A lexer character class tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Comment,
    Escape,
    Operatic,
    Numeric,
    Alphanumeric,
}

/// Classify a single character, in the same priority order as the
/// original: whitespace, then comment, then escape, then operator,
/// then digit, else alphanumeric.
pub fn classify(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch == '#' {
        CharClass::Comment
    } else if ch == '\\' {
        CharClass::Escape
    } else if OPERATOR_CHARS.contains(&ch) {
        CharClass::Operatic
    } else if ch.is_ascii_digit() {
        CharClass::Numeric
    } else {
        CharClass::Alphanumeric
    }
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

pub fn is_multi_word_keyword(word: &str) -> bool {
    MULTI_WORD_KEYWORDS.contains(&word)
}

pub fn is_type(word: &str) -> bool {
    TYPES.contains(&word)
}

pub fn is_constant(word: &str) -> bool {
    CONSTANTS.contains(&word)
}

pub fn is_operator_word(word: &str) -> bool {
    OPERATORS.contains(&word)
}

pub fn is_multi_word_operator(word: &str) -> bool {
    MULTI_WORD_OPERATORS.contains(&word)
}

/// True if `word` itself, or the very next character, is a single-char
/// operator that should terminate an in-progress OPERATIC run.
pub fn is_single_operator(word: &str) -> bool {
    SINGLE_OPERATORS.contains(&word)
}

//! Expression parsing: a two-level precedence climb (`parse_any_expr` ->
//! `parse_any_term` -> `parse_factoring`) plus call/literal productions.
//!
//! Additive `+`/`-` sit at the expr level; everything else (`*`, `/`,
//! `//`, `%`, `**`, `as` (cast), `..` (range), comparison, logical, and
//! bitwise operators) sits at the term level and is left-associative via
//! iteration. Comparison/logical/bitwise and range operators recurse back
//! into the full expr grammar on their right-hand side rather than just
//! another term - that asymmetry is intentional, not a bug: it lets a
//! chain like `a == b and c` parse the way users expect without a full
//! precedence table.

use indexmap::IndexMap;
use oxygenc_lex::tables::{BINARY_OP, COMPARISON_OP, LOGICAL_OP};
use oxygenc_lex::{NumberKind, Token, TokenKind};
use oxygenc_util::Symbol;

use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_any_expr(&mut self) -> ParseResult<Node> {
        let mut node = self.parse_any_term()?;
        while self.at_value("+") || self.at_value("-") {
            let line = self.line();
            let op_tok = self.next_token()?;
            let right = self.parse_any_term()?;
            node = Node::BinOp(BinOp {
                left: Box::new(node),
                op: self.intern(&op_tok.value),
                right: Box::new(right),
                line,
            });
        }
        Ok(node)
    }

    fn parse_any_term(&mut self) -> ParseResult<Node> {
        let mut node = self.parse_factoring()?;
        loop {
            let line = self.line();
            let value = self.current.value.clone();
            if matches!(value.as_str(), "*" | "/" | "//" | "%" | "**" | "as") {
                let op_tok = self.next_token()?;
                let right = self.parse_factoring()?;
                node = Node::BinOp(BinOp {
                    left: Box::new(node),
                    op: self.intern(&op_tok.value),
                    right: Box::new(right),
                    line,
                });
            } else if value == ".." {
                self.next_token()?;
                let right = self.parse_any_expr()?;
                node = Node::Range(Range {
                    start: Box::new(node),
                    end: Box::new(right),
                    line,
                });
            } else if COMPARISON_OP.contains(&value.as_str())
                || LOGICAL_OP.contains(&value.as_str())
                || BINARY_OP.contains(&value.as_str())
            {
                let op_tok = self.next_token()?;
                let right = self.parse_any_expr()?;
                node = Node::BinOp(BinOp {
                    left: Box::new(node),
                    op: self.intern(&op_tok.value),
                    right: Box::new(right),
                    line,
                });
            } else {
                break;
            }
        }
        Ok(node)
    }

    /// The atom/prefix level: literals, names, grouping, unary operators,
    /// and every construct that can start an expression.
    pub(crate) fn parse_factoring(&mut self) -> ParseResult<Node> {
        let line = self.line();

        if self.preview(1)?.value == "." {
            if self.preview(3)?.value == "(" {
                return self.parse_prop_method();
            }
            let tok = self.next_token()?;
            return Ok(Node::DotAccess(self.parse_dot_operator(&tok)?));
        }

        if matches!(self.current.value.as_str(), "+" | "-" | "~") {
            let op_tok = self.next_token()?;
            let expr = self.parse_factoring()?;
            return Ok(Node::UnaryOp(UnaryOp {
                op: self.intern(&op_tok.value),
                expr: Box::new(expr),
                line,
            }));
        }
        if self.at_value("not") {
            let op_tok = self.next_token()?;
            let expr = self.parse_any_expr()?;
            return Ok(Node::UnaryOp(UnaryOp {
                op: self.intern(&op_tok.value),
                expr: Box::new(expr),
                line,
            }));
        }
        if self.at_kind(TokenKind::Number) {
            let tok = self.next_token()?;
            let kind = tok.number_kind.unwrap_or(NumberKind::Int { base: 10 });
            return Ok(Node::Num(Num {
                value: tok.value,
                kind,
                line,
            }));
        }
        if self.at_kind(TokenKind::String) {
            let tok = self.next_token()?;
            return Ok(Node::Str(Str {
                value: tok.value,
                line,
            }));
        }
        if self.at_value("fun") {
            return self.function_declaration();
        }
        if self.at_kind(TokenKind::Ltype) {
            return self.type_spec();
        }
        if self.at_value("(") {
            return self.parse_paren_expr();
        }
        if self.preview(1)?.value == "(" {
            let tok = self.next_token()?;
            return self.function_call(&tok);
        }
        if self.preview(1)?.value == "[" {
            let tok = self.next_token()?;
            return self.parse_square_bracket_expr(Some(&tok));
        }
        if self.at_value("[") {
            return self.parse_square_bracket_expr(None);
        }
        if self.at_value("{") {
            return self.parse_cbrace_expr();
        }
        if self.at_kind(TokenKind::Name) {
            let tok = self.next_token()?;
            if self.is_user_type(&tok.value) {
                return Ok(self.typ(&tok));
            }
            return Ok(self.variable(&tok));
        }
        if self.at_kind(TokenKind::Constant) {
            let tok = self.next_token()?;
            return Ok(self.parse_const_expr(&tok));
        }

        Err(ParseError::ExpectedKind {
            file: self.file.clone(),
            line,
            expected: vec!["an expression"],
        })
    }

    /// `(`...`)` is a grouped expression unless a top-level comma is found
    /// before the matching close paren, in which case it's a tuple - except
    /// while parsing `print(...)`/`input(...)`'s single argument, where it's
    /// always a grouping.
    fn parse_paren_expr(&mut self) -> ParseResult<Node> {
        let found_comma = self.parse_find_until(",", ")")?;
        let treat_as_group = self.func_args || !found_comma;
        self.func_args = false;

        if treat_as_group {
            self.consume_value(&["("])?;
            if self.at_value(")") {
                let line = self.line();
                self.next_token()?;
                return Ok(Node::Collection(Collection {
                    kind: CollectionKind::List,
                    items: Vec::new(),
                    read_only: false,
                    line,
                }));
            }
            let expr = self.parse_any_expr()?;
            self.consume_value(&[")"])?;
            Ok(expr)
        } else {
            self.parse_tuple_literal()
        }
    }

    /// Dispatches a bracket/brace-initial call argument straight to the
    /// matching literal production, bypassing the named-argument check.
    fn bracket_literal(&mut self) -> ParseResult<Node> {
        if self.at_value("{") {
            self.parse_cbrace_expr()
        } else if self.at_value("(") {
            self.parse_tuple_literal()
        } else {
            self.parse_square_bracket_expr(None)
        }
    }

    /// `[item, item, ...]` (receiver `None`) or `name[index]` (receiver
    /// `Some`). Slice expressions (`name[a, b]`) and the bracket-form
    /// array-of-type/dict-literal productions are recognized just far
    /// enough to report a clean error - this front end gives them no
    /// downstream shape.
    pub(crate) fn parse_square_bracket_expr(&mut self, receiver: Option<&Token>) -> ParseResult<Node> {
        let line = self.line();
        self.consume_value(&["["])?;

        match receiver {
            None => {
                if self.at_kind(TokenKind::Ltype) {
                    return Err(ParseError::Unsupported {
                        file: self.file.clone(),
                        line,
                        feature: "array-of-type assignment and bracket-form dict literals",
                    });
                }
                let mut items = Vec::new();
                while !self.at_value("]") {
                    items.push(self.parse_any_expr()?);
                    if !self.at_value("]") {
                        self.consume_value(&[","])?;
                    }
                }
                self.consume_value(&["]"])?;
                Ok(Node::Collection(Collection {
                    kind: CollectionKind::List,
                    items,
                    read_only: false,
                    line,
                }))
            }
            Some(tok) => {
                let key = self.parse_any_expr()?;
                if self.at_value(",") {
                    return Err(ParseError::Unsupported {
                        file: self.file.clone(),
                        line,
                        feature: "slice expressions",
                    });
                }
                self.consume_value(&["]"])?;
                let access = CollectionAccess {
                    collection: self.intern(&tok.value),
                    key: Box::new(key),
                    line,
                };
                if self.is_at_assignment_op() {
                    let op_tok = self.next_token()?;
                    self.finish_assign(Node::CollectionAccess(access), op_tok)
                } else {
                    Ok(Node::CollectionAccess(access))
                }
            }
        }
    }

    fn is_at_assignment_op(&self) -> bool {
        use oxygenc_lex::tables::{ARITHMETIC_ASSIGNMENT_OP, INCREMENTAL_ASSIGNMENT_OP};
        let v = self.current.value.as_str();
        v == "=" || ARITHMETIC_ASSIGNMENT_OP.contains(&v) || INCREMENTAL_ASSIGNMENT_OP.contains(&v)
    }

    fn parse_tuple_literal(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.consume_value(&["("])?;
        let mut items = Vec::new();
        while !self.at_value(")") {
            items.push(self.parse_any_expr()?);
            if !self.at_value(")") {
                self.consume_value(&[","])?;
            }
        }
        self.consume_value(&[")"])?;
        Ok(Node::Collection(Collection {
            kind: CollectionKind::Tuple,
            items,
            read_only: false,
            line,
        }))
    }

    fn parse_cbrace_expr(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.consume_value(&["{"])?;
        let mut pairs = IndexMap::new();
        while !self.at_value("}") {
            let key_tok = self.next_token()?;
            self.consume_value(&["="])?;
            let value = self.parse_any_expr()?;
            pairs.insert(self.intern(&key_tok.value), value);
            if !self.at_value("}") {
                self.consume_value(&[","])?;
            }
        }
        self.consume_value(&["}"])?;
        Ok(Node::HashMap(HashMapLit { pairs, line }))
    }

    /// `print(...)`/`input(...)` take exactly one argument and are their
    /// own AST nodes rather than ordinary calls; every other name is a
    /// plain function call with positional and named arguments.
    pub(crate) fn function_call(&mut self, token: &Token) -> ParseResult<Node> {
        let line = self.line();
        if token.value == "print" {
            self.func_args = true;
            let value = self.parse_any_expr()?;
            return Ok(Node::PrintStmt(PrintStmt {
                value: Box::new(value),
                line,
            }));
        }
        if token.value == "input" {
            self.func_args = true;
            let value = self.parse_any_expr()?;
            return Ok(Node::InputStmt(InputStmt {
                value: Box::new(value),
                line,
            }));
        }

        self.consume_value(&["("])?;
        let (args, named_args) = self.parse_call_arguments()?;
        self.consume_value(&[")"])?;
        Ok(Node::FuncCall(FuncCall {
            name: self.intern(&token.value),
            args,
            named_args,
            line,
        }))
    }

    pub(crate) fn parse_method_call(&mut self, left: &DotAccess, _open_paren: &Token) -> ParseResult<Node> {
        let line = self.line();
        let (args, named_args) = self.parse_call_arguments()?;
        self.consume_value(&[")"])?;
        Ok(Node::MethodCall(MethodCall {
            receiver: left.object,
            method: left.field,
            args,
            named_args,
            line,
        }))
    }

    /// Shared argument loop for `function_call`/`parse_method_call`: the
    /// opening `(` has already been consumed by the caller, blank NEWLINEs
    /// inside the parens are transparent, and a bracket/brace-initial
    /// argument bypasses the named-argument check entirely.
    fn parse_call_arguments(&mut self) -> ParseResult<(Vec<Node>, IndexMap<Symbol, Node>)> {
        let mut args = Vec::new();
        let mut named_args = IndexMap::new();
        while !self.at_value(")") {
            if self.at_kind(TokenKind::Newline) {
                self.consume_kind(&[TokenKind::Newline])?;
                continue;
            }
            if matches!(self.current.value.as_str(), "[" | "{" | "(") {
                args.push(self.bracket_literal()?);
            } else if self.at_kind(TokenKind::Name) && self.preview(1)?.value == "=" {
                let name_tok = self.next_token()?;
                self.consume_value(&["="])?;
                named_args.insert(self.intern(&name_tok.value), self.parse_any_expr()?);
            } else {
                args.push(self.parse_any_expr()?);
            }
            if !self.at_value(")") {
                self.consume_value(&[","])?;
            }
        }
        Ok((args, named_args))
    }

    fn variable(&self, tok: &Token) -> Node {
        Node::Var(Var {
            name: self.intern(&tok.value),
            read_only: false,
            line: tok.line,
        })
    }

    fn typ(&self, tok: &Token) -> Node {
        Node::TypeRef(TypeRef {
            name: self.intern(&tok.value),
            func_params: Default::default(),
            func_ret_type: None,
            line: tok.line,
        })
    }

    fn parse_const_expr(&self, tok: &Token) -> Node {
        Node::Constant(Constant {
            value: self.intern(&tok.value),
            line: tok.line,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{CollectionKind, Node};
    use crate::Parser;

    #[test]
    fn addition_binds_weaker_than_multiplication() {
        let mut p = Parser::new("1 + 2 * 3\n", "t.oxy").unwrap();
        let node = p.parse_any_expr().unwrap();
        match node {
            Node::BinOp(b) => assert_eq!(b.op.as_str(), "+"),
            _ => panic!("expected top-level +"),
        }
    }

    #[test]
    fn range_parses_both_sides_as_numbers() {
        let mut p = Parser::new("1..10\n", "t.oxy").unwrap();
        let node = p.parse_any_expr().unwrap();
        match node {
            Node::Range(r) => {
                assert!(matches!(*r.start, Node::Num(_)));
                assert!(matches!(*r.end, Node::Num(_)));
            }
            _ => panic!("expected Range"),
        }
    }

    #[test]
    fn dot_access_vs_range_does_not_swallow_second_dot() {
        let mut p = Parser::new("a.b\n", "t.oxy").unwrap();
        let node = p.parse_any_expr().unwrap();
        match node {
            Node::DotAccess(d) => assert_eq!(d.field.as_str(), "b"),
            _ => panic!("expected DotAccess"),
        }
    }

    #[test]
    fn bare_parens_with_comma_is_a_tuple() {
        let mut p = Parser::new("(1, 2)\n", "t.oxy").unwrap();
        let node = p.parse_any_expr().unwrap();
        match node {
            Node::Collection(c) => {
                assert_eq!(c.kind, CollectionKind::Tuple);
                assert_eq!(c.items.len(), 2);
            }
            _ => panic!("expected tuple Collection"),
        }
    }

    #[test]
    fn parenthesized_single_expr_is_a_grouping_not_a_tuple() {
        let mut p = Parser::new("(1 + 2)\n", "t.oxy").unwrap();
        let node = p.parse_any_expr().unwrap();
        assert!(matches!(node, Node::BinOp(_)));
    }

    #[test]
    fn print_argument_is_always_a_grouping() {
        let mut p = Parser::new("print((1, 2))\n", "t.oxy").unwrap();
        let tok = p.next_token().unwrap();
        let node = p.function_call(&tok).unwrap();
        match node {
            Node::PrintStmt(s) => {
                assert!(matches!(*s.value, Node::Collection(_)));
            }
            _ => panic!("expected PrintStmt"),
        }
    }

    #[test]
    fn function_call_with_named_argument() {
        let mut p = Parser::new("make(x = 1)\n", "t.oxy").unwrap();
        let tok = p.next_token().unwrap();
        let node = p.function_call(&tok).unwrap();
        match node {
            Node::FuncCall(c) => assert_eq!(c.named_args.len(), 1),
            _ => panic!("expected FuncCall"),
        }
    }

    #[test]
    fn indexing_with_trailing_assignment() {
        let mut p = Parser::new("items[0] = 5\n", "t.oxy").unwrap();
        let node = p.parse_name_stmt().unwrap();
        assert!(matches!(node, Node::Assign(_)));
    }

    #[test]
    fn slice_expression_is_a_clean_error() {
        let mut p = Parser::new("items[0, 2]\n", "t.oxy").unwrap();
        let err = p.parse_name_stmt().unwrap_err();
        assert!(err.to_string().contains("slice"));
    }
}

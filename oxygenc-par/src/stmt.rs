//! Statement parsing: blocks, control flow, assignment, and top-level
//! dispatch.

use oxygenc_lex::tables::{ARITHMETIC_ASSIGNMENT_OP, INCREMENTAL_ASSIGNMENT_OP};
use oxygenc_lex::TokenKind;

use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_program_text(&mut self) -> ParseResult<Ast> {
        let mut children = Vec::new();
        while !self.at_kind(TokenKind::Eof) {
            let before = children.len();
            self.parse_compound_into(&mut children)?;
            if children.len() == before {
                break;
            }
        }
        Ok(Program {
            block: Compound { children },
        })
    }

    fn parse_compound_into(&mut self, children: &mut Vec<Node>) -> ParseResult<()> {
        let compound = self.parse_compound_stmt()?;
        children.extend(compound.children);
        Ok(())
    }

    /// Parse a block of statements sharing the current indentation level.
    pub(crate) fn parse_compound_stmt(&mut self) -> ParseResult<Compound> {
        Ok(Compound {
            children: self.parse_stmt_list()?,
        })
    }

    pub(crate) fn parse_loop_block(&mut self) -> ParseResult<LoopBlock> {
        Ok(LoopBlock {
            children: self.parse_stmt_list()?,
        })
    }

    /// One or more sibling statements at the current indent level. A
    /// `return` always terminates its block immediately - nothing after it
    /// in the same block is reachable, so nothing after it is parsed.
    fn parse_stmt_list(&mut self) -> ParseResult<Vec<Node>> {
        let mut stmts = Vec::new();
        let Some(first) = self.parse_stmt()? else {
            return Ok(stmts);
        };
        let is_return = matches!(first, Node::Return(_));
        stmts.push(first);
        if self.at_kind(TokenKind::Newline) {
            self.consume_kind(&[TokenKind::Newline])?;
        }
        if is_return {
            return Ok(stmts);
        }
        loop {
            if !self.parse_handle_indents()? {
                break;
            }
            if self.at_kind(TokenKind::Eof) {
                break;
            }
            let Some(node) = self.parse_stmt()? else {
                break;
            };
            let is_return = matches!(node, Node::Return(_));
            stmts.push(node);
            if self.at_kind(TokenKind::Newline) {
                self.consume_kind(&[TokenKind::Newline])?;
            }
            if is_return {
                break;
            }
        }
        Ok(stmts)
    }

    /// The statement-level dispatch table. Order matters where keywords
    /// overlap in lexical shape (e.g. a bare NAME could start a var decl,
    /// a dotted method call, or a plain name statement).
    pub(crate) fn parse_stmt(&mut self) -> ParseResult<Option<Node>> {
        if self.at_kind(TokenKind::Eof) {
            return Ok(None);
        }
        if self.at_kind(TokenKind::Newline) {
            self.consume_kind(&[TokenKind::Newline])?;
            return self.parse_stmt();
        }

        match self.current.kind {
            TokenKind::Keyword => match self.current.value.as_str() {
                "if" => Ok(Some(self.parse_if_expr()?)),
                "while" => Ok(Some(self.parse_while_expr()?)),
                "for" => Ok(Some(self.parse_for_stmt()?)),
                "fallthrough" => {
                    let line = self.line();
                    self.next_token()?;
                    Ok(Some(Node::FallthroughStmt { line }))
                }
                "break" => {
                    let line = self.line();
                    self.next_token()?;
                    Ok(Some(Node::BreakStmt { line }))
                }
                "continue" => {
                    let line = self.line();
                    self.next_token()?;
                    Ok(Some(Node::ContinueStmt { line }))
                }
                "pass" => {
                    let line = self.line();
                    self.next_token()?;
                    Ok(Some(Node::Pass { line }))
                }
                "const" => Ok(Some(self.parse_assign_stmt()?)),
                "defer" => {
                    let line = self.line();
                    self.next_token()?;
                    let stmt = self.parse_stmt()?.ok_or(ParseError::UnexpectedEndOfProgram)?;
                    Ok(Some(Node::DeferStmt(DeferStmt {
                        statement: Box::new(stmt),
                        line,
                    })))
                }
                "switch" => Ok(Some(self.parse_switch_stmt()?)),
                "return" => Ok(Some(self.parse_return_statement()?)),
                "fun" => Ok(Some(self.function_declaration()?)),
                "type" => Ok(Some(self.parse_type_decl()?)),
                _ => {
                    self.next_token()?;
                    self.parse_stmt()
                }
            },
            TokenKind::Name => {
                if self.preview(1)?.value == "." {
                    Ok(Some(self.parse_prop_method()?))
                } else if self.preview(1)?.value == ":" {
                    Ok(Some(self.parse_var_decl()?))
                } else {
                    Ok(Some(self.parse_name_stmt()?))
                }
            }
            TokenKind::Ltype => match self.current.value.as_str() {
                "struct" => Ok(Some(self.parse_struct_decl()?)),
                "object" => Ok(Some(self.parse_class_decl()?)),
                "enum" => Ok(Some(self.parse_enum_decl()?)),
                _ => {
                    self.next_token()?;
                    self.parse_stmt()
                }
            },
            _ => {
                self.next_token()?;
                self.parse_stmt()
            }
        }
    }

    pub(crate) fn parse_var_decl(&mut self) -> ParseResult<Node> {
        let name_tok = self.next_token()?;
        let line = self.line();
        self.consume_value(&[":"])?;
        let ty = self.type_spec()?;
        let decl = Node::VarDecl(VarDecl {
            name: self.intern(&name_tok.value),
            ty: Box::new(ty),
            read_only: false,
            line,
        });
        if self.at_value("=") {
            self.parse_var_assignment(decl)
        } else {
            Ok(decl)
        }
    }

    fn parse_var_assignment(&mut self, declaration: Node) -> ParseResult<Node> {
        let line = self.line();
        let op_tok = self.next_token()?;
        let right = self.parse_any_expr()?;
        Ok(Node::Assign(Assign {
            left: Box::new(declaration),
            op: self.intern(&op_tok.value),
            right: Box::new(right),
            line,
        }))
    }

    pub(crate) fn parse_return_statement(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.consume_value(&["return"])?;
        let value = self.parse_any_expr()?;
        Ok(Node::Return(Return {
            value: Box::new(value),
            line,
        }))
    }

    pub(crate) fn parse_if_expr(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.indent_level += 1;
        let if_tok = self.next_token()?;
        let mut branches = vec![IfBranch {
            cond: Some(self.parse_any_expr()?),
            block: self.parse_compound_stmt()?,
        }];

        if self.current.indent_level < if_tok.indent_level {
            self.indent_level -= 1;
            return Ok(Node::IfExpr(IfExpr { branches, line }));
        }

        while self.at_value("else if") {
            self.next_token()?;
            branches.push(IfBranch {
                cond: Some(self.parse_any_expr()?),
                block: self.parse_compound_stmt()?,
            });
        }
        if self.at_value("else") {
            self.next_token()?;
            branches.push(IfBranch {
                cond: None,
                block: self.parse_compound_stmt()?,
            });
        }
        self.indent_level -= 1;
        Ok(Node::IfExpr(IfExpr { branches, line }))
    }

    pub(crate) fn parse_while_expr(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.indent_level += 1;
        self.consume_value(&["while"])?;
        let cond = self.parse_any_expr()?;
        let block = self.parse_loop_block()?;
        self.indent_level -= 1;
        Ok(Node::WhileExpr(WhileExpr {
            cond: Box::new(cond),
            block,
            line,
        }))
    }

    pub(crate) fn parse_for_stmt(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.indent_level += 1;
        self.consume_value(&["for"])?;
        let mut elements = vec![self.parse_any_expr()?];
        while self.at_value(",") {
            self.consume_value(&[","])?;
            elements.push(self.parse_any_expr()?);
        }
        self.consume_value(&["in"])?;
        let iterator = self.parse_any_expr()?;
        if self.at_kind(TokenKind::Newline) {
            self.consume_kind(&[TokenKind::Newline])?;
        }
        let block = self.parse_loop_block()?;
        self.indent_level -= 1;
        Ok(Node::ForExpr(ForExpr {
            elements,
            iterator: Box::new(iterator),
            block,
            line,
        }))
    }

    pub(crate) fn parse_switch_stmt(&mut self) -> ParseResult<Node> {
        let line = self.line();
        self.indent_level += 1;
        self.consume_value(&["switch"])?;
        let value = self.parse_any_expr()?;
        if self.at_kind(TokenKind::Newline) {
            self.consume_kind(&[TokenKind::Newline])?;
        }
        let mut cases = Vec::new();
        while self.parse_handle_indents()? {
            if !(self.at_value("case") || self.at_value("default")) {
                break;
            }
            cases.push(self.case_statement()?);
        }
        self.indent_level -= 1;
        Ok(Node::SwitchStmt(SwitchStmt {
            value: Box::new(value),
            cases,
            line,
        }))
    }

    fn case_statement(&mut self) -> ParseResult<CaseStmt> {
        let line = self.line();
        self.indent_level += 1;
        let value = if self.at_value("case") {
            self.consume_value(&["case"])?;
            CaseValue::Expr(self.parse_any_expr()?)
        } else if self.at_value("default") {
            self.consume_value(&["default"])?;
            CaseValue::Default
        } else {
            return Err(self.err_unexpected());
        };
        let block = self.parse_compound_stmt()?;
        self.indent_level -= 1;
        Ok(CaseStmt { value, block, line })
    }

    fn err_unexpected(&self) -> ParseError {
        ParseError::ExpectedValue {
            file: self.file.clone(),
            line: self.current.line,
            expected: vec!["case".to_string(), "default".to_string()],
        }
    }

    pub(crate) fn parse_assign_stmt(&mut self) -> ParseResult<Node> {
        let read_only = self.at_value("const");
        if read_only {
            self.consume_value(&["const"])?;
        }
        let name_tok = self.next_token()?;
        let line = self.line();
        let left = Node::Var(Var {
            name: self.intern(&name_tok.value),
            read_only,
            line,
        });
        let op_tok = self.next_token()?;
        let op_value = op_tok.value.as_str();

        if op_value == "=" {
            let right = self.parse_any_expr()?;
            Ok(Node::Assign(Assign {
                left: Box::new(left),
                op: self.intern(&op_tok.value),
                right: Box::new(right),
                line,
            }))
        } else if ARITHMETIC_ASSIGNMENT_OP.contains(&op_value) {
            let right = self.parse_any_expr()?;
            Ok(Node::OpAssign(OpAssign {
                left: Box::new(left),
                op: self.intern(&op_tok.value),
                right: Box::new(right),
                line,
            }))
        } else if INCREMENTAL_ASSIGNMENT_OP.contains(&op_value) {
            Ok(Node::IncrementAssign(IncrementAssign {
                left: Box::new(left),
                op: self.intern(&op_tok.value),
                line,
            }))
        } else if op_value == ":" {
            let ty = self.type_spec()?;
            let decl = Node::VarDecl(VarDecl {
                name: self.intern(&name_tok.value),
                ty: Box::new(ty),
                read_only,
                line,
            });
            if self.at_value("=") {
                self.parse_var_assignment(decl)
            } else {
                Ok(decl)
            }
        } else {
            Err(ParseError::UnknownAssignmentOperator {
                file: self.file.clone(),
                line,
                op: op_tok.value,
            })
        }
    }

    /// A bare NAME at statement position: a call, an index assignment, or a
    /// plain assignment.
    pub(crate) fn parse_name_stmt(&mut self) -> ParseResult<Node> {
        let token = self.next_token()?;
        if self.at_value("(") {
            self.function_call(&token)
        } else if self.at_value("[") {
            self.parse_square_bracket_expr(Some(&token))
        } else {
            self.parse_assign_from(token)
        }
    }

    fn parse_assign_from(&mut self, token: oxygenc_lex::Token) -> ParseResult<Node> {
        let line = self.line();
        let left = Node::Var(Var {
            name: self.intern(&token.value),
            read_only: false,
            line,
        });
        let op_tok = self.next_token()?;
        self.finish_assign(left, op_tok)
    }

    fn finish_assign(&mut self, left: Node, op_tok: oxygenc_lex::Token) -> ParseResult<Node> {
        let line = self.line();
        let op_value = op_tok.value.as_str();
        if op_value == "=" {
            let right = self.parse_any_expr()?;
            Ok(Node::Assign(Assign {
                left: Box::new(left),
                op: self.intern(&op_tok.value),
                right: Box::new(right),
                line,
            }))
        } else if ARITHMETIC_ASSIGNMENT_OP.contains(&op_value) {
            let right = self.parse_any_expr()?;
            Ok(Node::OpAssign(OpAssign {
                left: Box::new(left),
                op: self.intern(&op_tok.value),
                right: Box::new(right),
                line,
            }))
        } else if INCREMENTAL_ASSIGNMENT_OP.contains(&op_value) {
            Ok(Node::IncrementAssign(IncrementAssign {
                left: Box::new(left),
                op: self.intern(&op_tok.value),
                line,
            }))
        } else {
            Err(ParseError::UnknownAssignmentOperator {
                file: self.file.clone(),
                line,
                op: op_tok.value,
            })
        }
    }

    /// `obj.field` followed by either an assignment op (a field write) or
    /// `(` (a method call).
    pub(crate) fn parse_prop_method(&mut self) -> ParseResult<Node> {
        let token = self.next_token()?;
        let left = self.parse_dot_operator(&token)?;
        let next = self.next_token()?;
        if next.value == "(" {
            self.parse_method_call(&left, &next)
        } else {
            self.parse_field_assign(left, next)
        }
    }

    pub(crate) fn parse_dot_operator(&mut self, token: &oxygenc_lex::Token) -> ParseResult<DotAccess> {
        let line = self.line();
        self.consume_value(&["."])?;
        let field_tok = self.next_token()?;
        Ok(DotAccess {
            object: self.intern(&token.value),
            field: self.intern(&field_tok.value),
            line,
        })
    }

    fn parse_field_assign(&mut self, left: DotAccess, op_tok: oxygenc_lex::Token) -> ParseResult<Node> {
        self.finish_assign(Node::DotAccess(left), op_tok)
    }
}

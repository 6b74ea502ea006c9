//! Declaration parsing: `struct`, `object` (class), `enum`, `type`, and
//! `fun` (including operator overloads and methods).

use indexmap::IndexMap;
use oxygenc_lex::TokenKind;
use oxygenc_util::Symbol;

use crate::ast::*;
use crate::error::ParseError;
use crate::error::ParseResult;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_enum_decl(&mut self) -> ParseResult<Node> {
        self.consume_value(&["enum"])?;
        let name_tok = self.next_token()?;
        self.declare_type(&name_tok.value);
        self.consume_kind(&[TokenKind::Newline])?;
        self.indent_level += 1;
        let mut fields = Vec::new();
        while self.current.indent_level > name_tok.indent_level {
            let field = self.next_token()?;
            fields.push(self.intern(&field.value));
            self.consume_kind(&[TokenKind::Newline])?;
        }
        self.indent_level -= 1;
        Ok(Node::EnumDecl(EnumDecl {
            name: self.intern(&name_tok.value),
            fields,
            line: self.line(),
        }))
    }

    pub(crate) fn parse_struct_decl(&mut self) -> ParseResult<Node> {
        self.consume_value(&["struct"])?;
        let name_tok = self.next_token()?;
        self.declare_type(&name_tok.value);
        self.consume_kind(&[TokenKind::Newline])?;
        self.indent_level += 1;
        let mut fields = IndexMap::new();
        let mut defaults = IndexMap::new();
        while self.current.indent_level > name_tok.indent_level {
            let field_tok = self.next_token()?;
            let field = self.intern(&field_tok.value);
            self.consume_value(&[":"])?;
            let field_type = self.type_spec()?;
            fields.insert(field, Box::new(field_type));
            if self.at_value("=") {
                self.consume_value(&["="])?;
                defaults.insert(field, Box::new(self.parse_any_expr()?));
            }
            self.consume_kind(&[TokenKind::Newline])?;
        }
        self.indent_level -= 1;
        Ok(Node::StructDecl(StructDecl {
            name: self.intern(&name_tok.value),
            fields,
            defaults,
            line: self.line(),
        }))
    }

    pub(crate) fn parse_class_decl(&mut self) -> ParseResult<Node> {
        let mut base = None;
        let mut methods = Vec::new();
        let mut fields = IndexMap::new();
        self.next_token()?;
        let class_name = self.current.clone();
        self.declare_type(&class_name.value);
        self.consume_kind(&[TokenKind::Name])?;
        if self.at_value(":") {
            self.consume_value(&[":"])?;
            base = Some(Box::new(self.type_spec()?));
        }
        self.consume_kind(&[TokenKind::Newline])?;
        self.indent_level += 1;
        while self.parse_handle_indents()? {
            if self.at_kind(TokenKind::Newline) {
                self.consume_kind(&[TokenKind::Newline])?;
                continue;
            }
            if self.at_kind(TokenKind::Name) && self.preview(1)?.value == ":" {
                let field_tok = self.next_token()?;
                let field = self.intern(&field_tok.value);
                self.consume_value(&[":"])?;
                let field_type = self.type_spec()?;
                fields.insert(field, Box::new(field_type));
                self.consume_kind(&[TokenKind::Newline])?;
                continue;
            }
            if self.at_value("fun") {
                let method = self.method_declaration(&class_name.value)?;
                methods.push(method);
                continue;
            }
            self.next_token()?;
        }
        self.indent_level -= 1;
        Ok(Node::ClassDecl(ClassDecl {
            name: self.intern(&class_name.value),
            base,
            methods,
            fields,
            line: self.line(),
        }))
    }

    pub(crate) fn parse_type_decl(&mut self) -> ParseResult<Node> {
        self.consume_value(&["type"])?;
        let name_tok = self.next_token()?;
        self.declare_type(&name_tok.value);
        self.consume_value(&["="])?;
        let aliased = self.type_spec()?;
        Ok(Node::TypeDecl(TypeDecl {
            name: self.intern(&name_tok.value),
            aliased: Box::new(aliased),
            line: self.line(),
        }))
    }

    /// Shared by `function_declaration` and `method_declaration`: parse the
    /// `(params)` list, returning the ordered params, their defaults, and
    /// the vararg slot if the list ends with `name: Type...`.
    fn parse_param_list(
        &mut self,
        extern_func: bool,
    ) -> ParseResult<(
        IndexMap<Symbol, Box<Node>>,
        IndexMap<Symbol, Box<Node>>,
        Option<Vararg>,
    )> {
        self.consume_value(&["("])?;
        let mut params = IndexMap::new();
        let mut param_defaults = IndexMap::new();
        let mut vararg = None;
        while !self.at_value(")") {
            let param_tok = self.next_token()?;
            let param_name = self.intern(&param_tok.value);
            let param_type = if self.at_value(":") {
                self.consume_value(&[":"])?;
                self.type_spec()?
            } else {
                Node::Var(Var {
                    name: param_name,
                    read_only: false,
                    line: self.line(),
                })
            };
            params.insert(param_name, Box::new(param_type));

            if !self.at_value(")") {
                if self.at_value("=") {
                    if extern_func {
                        return Err(ParseError::ExternDefaultArgument {
                            file: self.file.clone(),
                            line: self.line(),
                        });
                    }
                    self.consume_value(&["="])?;
                    param_defaults.insert(param_name, Box::new(self.parse_any_expr()?));
                }
                if self.at_ellipsis()? {
                    if let Some((name, ty)) = params.pop() {
                        vararg = Some(Vararg { name, ty });
                    }
                    self.consume_ellipsis()?;
                    break;
                }
                if !self.at_value(")") {
                    self.consume_value(&[","])?;
                }
            }
        }
        self.consume_value(&[")"])?;
        Ok((params, param_defaults, vararg))
    }

    fn parse_return_type(&mut self) -> ParseResult<Node> {
        if !self.at_value("->") {
            return Ok(Node::Void);
        }
        self.consume_value(&["->"])?;
        if self.at_value("void") {
            self.next_token()?;
            Ok(Node::Void)
        } else {
            self.type_spec()
        }
    }

    pub(crate) fn function_declaration(&mut self) -> ParseResult<Node> {
        let mut op_func = false;
        let mut extern_func = false;
        self.consume_value(&["fun"])?;

        let name_tok = if self.at_value("(") {
            None
        } else if self.at_value("operator") {
            self.consume_value(&["operator"])?;
            op_func = true;
            Some(self.next_token()?)
        } else if self.at_value("extern") {
            self.consume_value(&["extern"])?;
            extern_func = true;
            Some(self.next_token()?)
        } else {
            Some(self.next_token()?)
        };

        let (params, param_defaults, varargs) = self.parse_param_list(extern_func)?;
        let return_type = self.parse_return_type()?;

        if extern_func {
            let name = self.intern(&name_tok.expect("extern function must be named").value);
            return Ok(Node::ExternFuncDecl(ExternFuncDecl {
                name,
                return_type: Box::new(return_type),
                params,
                varargs,
                line: self.line(),
            }));
        }

        self.consume_kind(&[TokenKind::Newline])?;
        self.indent_level += 1;
        let body = self.parse_compound_stmt()?;
        self.indent_level -= 1;

        if let Some(name_tok) = name_tok {
            let line = self.line();
            let mut name = name_tok.value.clone();
            if op_func {
                if !(params.len() == 1 || params.len() == 2) {
                    return Err(ParseError::InvalidOperatorArity {
                        file: self.file.clone(),
                        line,
                        count: params.len(),
                    });
                }
                name = format!("operator.{name}");
                for ty in params.values() {
                    name.push('.');
                    name.push_str(&type_name_for_mangling(ty));
                }
            }
            Ok(Node::FuncDecl(FuncDecl {
                name: self.intern(&name),
                return_type: Box::new(return_type),
                params,
                param_defaults,
                varargs,
                body,
                line,
            }))
        } else {
            Ok(Node::AnonymousFunc(AnonymousFunc {
                return_type: Box::new(return_type),
                params,
                param_defaults,
                varargs,
                body,
                line: self.line(),
            }))
        }
    }

    pub(crate) fn method_declaration(&mut self, class_name: &str) -> ParseResult<FuncDecl> {
        self.consume_value(&["fun"])?;
        let name_tok = self.next_token()?;
        self.consume_value(&["("])?;

        let mut params = IndexMap::new();
        params.insert(
            self.intern("self"),
            Box::new(Node::TypeRef(TypeRef {
                name: self.intern(class_name),
                func_params: Default::default(),
                func_ret_type: None,
                line: self.line(),
            })),
        );

        let mut param_defaults = IndexMap::new();
        let mut vararg = None;
        while !self.at_value(")") {
            let param_tok = self.next_token()?;
            let param_name = self.intern(&param_tok.value);
            let param_type = if self.at_value(":") {
                self.consume_value(&[":"])?;
                self.type_spec()?
            } else {
                Node::Var(Var {
                    name: param_name,
                    read_only: false,
                    line: self.line(),
                })
            };
            params.insert(param_name, Box::new(param_type));

            if !self.at_value(")") {
                if self.at_value("=") {
                    self.consume_value(&["="])?;
                    param_defaults.insert(param_name, Box::new(self.parse_any_expr()?));
                }
                if self.at_ellipsis()? {
                    if let Some((name, ty)) = params.pop() {
                        vararg = Some(Vararg { name, ty });
                    }
                    self.consume_ellipsis()?;
                    break;
                }
                if !self.at_value(")") {
                    self.consume_value(&[","])?;
                }
            }
        }
        self.consume_value(&[")"])?;
        let return_type = self.parse_return_type()?;

        self.consume_kind(&[TokenKind::Newline])?;
        self.indent_level += 1;
        let body = self.parse_compound_stmt()?;
        self.indent_level -= 1;

        Ok(FuncDecl {
            name: self.intern(&format!("{class_name}.{}", name_tok.value)),
            return_type: Box::new(return_type),
            params,
            param_defaults,
            varargs: vararg,
            body,
            line: self.line(),
        })
    }
}

/// The semantic pass's runtime type map is out of scope here, so operator
/// mangling always uses the parameter's literal declared type name rather
/// than translating it through that map first.
fn type_name_for_mangling(ty: &Node) -> String {
    match ty {
        Node::TypeRef(t) => t.name.as_str().to_string(),
        Node::Var(v) => v.name.as_str().to_string(),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Node;
    use crate::Parser;

    #[test]
    fn parses_struct_with_default() {
        let mut p = Parser::new("struct Point\n    x: int\n    y: int = 0\n", "t.oxy").unwrap();
        let node = p.parse_struct_decl().unwrap();
        match node {
            Node::StructDecl(s) => {
                assert_eq!(s.fields.len(), 2);
                assert_eq!(s.defaults.len(), 1);
            }
            _ => panic!("expected StructDecl"),
        }
    }

    #[test]
    fn parses_enum_fields() {
        let mut p = Parser::new("enum Color\n    Red\n    Green\n    Blue\n", "t.oxy").unwrap();
        let node = p.parse_enum_decl().unwrap();
        match node {
            Node::EnumDecl(e) => assert_eq!(e.fields.len(), 3),
            _ => panic!("expected EnumDecl"),
        }
    }

    #[test]
    fn function_declaration_captures_vararg() {
        let mut p = Parser::new(
            "fun sum(first: int, rest: int...)\n    return first\n",
            "t.oxy",
        )
        .unwrap();
        let node = p.function_declaration().unwrap();
        match node {
            Node::FuncDecl(f) => {
                assert_eq!(f.params.len(), 1);
                assert!(f.varargs.is_some());
            }
            _ => panic!("expected FuncDecl"),
        }
    }

    #[test]
    fn operator_overload_name_is_mangled() {
        let mut p = Parser::new(
            "fun operator add(a: int, b: int)\n    return a\n",
            "t.oxy",
        )
        .unwrap();
        let node = p.function_declaration().unwrap();
        match node {
            Node::FuncDecl(f) => assert_eq!(f.name.as_str(), "operator.add.int.int"),
            _ => panic!("expected FuncDecl"),
        }
    }

    #[test]
    fn extern_function_rejects_default_argument() {
        let mut p = Parser::new("fun extern puts(s: str = \"x\")\n", "t.oxy").unwrap();
        assert!(p.function_declaration().is_err());
    }
}

//! Type reference parsing (`type_spec`).

use oxygenc_lex::TokenKind;

use crate::ast::{Node, TypeRef};
use crate::error::ParseResult;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parse a single type reference. A user-declared type name (checked
    /// against `user_types` first) bypasses the LTYPE requirement entirely
    /// - `struct Point` makes `Point` usable as a type without it ever
    /// becoming a lexer-level type keyword.
    pub(crate) fn type_spec(&mut self) -> ParseResult<Node> {
        let token = self.current.clone();
        let line = self.line();

        if self.is_user_type(&token.value) {
            self.consume_kind(&[TokenKind::Name])?;
            return Ok(Node::TypeRef(TypeRef {
                name: self.intern(&token.value),
                func_params: Default::default(),
                func_ret_type: None,
                line,
            }));
        }

        self.consume_kind(&[TokenKind::Ltype])?;
        let name = self.intern(&token.value);
        let mut func_params = indexmap::IndexMap::new();
        let mut func_ret_type = None;

        if self.at_value("<") && (token.value == "list" || token.value == "tuple") {
            self.next_token()?;
            let mut idx = 0usize;
            while !self.at_value(">") {
                let param = self.type_spec()?;
                func_params.insert(idx.to_string(), param);
                idx += 1;
                if !self.at_value(">") {
                    self.consume_value(&[","])?;
                }
            }
            self.consume_value(&[">"])?;
        } else if self.at_value("<") && token.value == "func" {
            self.next_token()?;
            let mut idx = 0usize;
            while !self.at_value(">") {
                let param = self.type_spec()?;
                func_params.insert(idx.to_string(), param);
                idx += 1;
                if !self.at_value(">") {
                    self.consume_value(&[","])?;
                }
            }
            self.consume_value(&[">"])?;
            if self.at_value("->") {
                self.next_token()?;
                func_ret_type = Some(Box::new(self.type_spec()?));
            } else {
                func_ret_type = Some(Box::new(Node::TypeRef(TypeRef {
                    name: self.intern("void"),
                    func_params: Default::default(),
                    func_ret_type: None,
                    line,
                })));
            }
        }

        Ok(Node::TypeRef(TypeRef {
            name,
            func_params,
            func_ret_type,
            line,
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Node;
    use crate::Parser;

    #[test]
    fn plain_primitive_type() {
        let mut p = Parser::new("int\n", "t.oxy").unwrap();
        let ty = p.type_spec().unwrap();
        match ty {
            Node::TypeRef(t) => assert_eq!(t.name.as_str(), "int"),
            _ => panic!("expected TypeRef"),
        }
    }

    #[test]
    fn list_of_int_captures_one_generic_param() {
        let mut p = Parser::new("list<int>\n", "t.oxy").unwrap();
        let ty = p.type_spec().unwrap();
        match ty {
            Node::TypeRef(t) => assert_eq!(t.func_params.len(), 1),
            _ => panic!("expected TypeRef"),
        }
    }

    #[test]
    fn func_type_defaults_return_to_void() {
        let mut p = Parser::new("func<int>\n", "t.oxy").unwrap();
        let ty = p.type_spec().unwrap();
        match ty {
            Node::TypeRef(t) => {
                let ret = t.func_ret_type.unwrap();
                match *ret {
                    Node::TypeRef(r) => assert_eq!(r.name.as_str(), "void"),
                    _ => panic!("expected TypeRef"),
                }
            }
            _ => panic!("expected TypeRef"),
        }
    }

    #[test]
    fn user_declared_type_bypasses_ltype() {
        let mut p = Parser::new("Point\n", "t.oxy").unwrap();
        p.declare_type("Point");
        let ty = p.type_spec().unwrap();
        match ty {
            Node::TypeRef(t) => assert_eq!(t.name.as_str(), "Point"),
            _ => panic!("expected TypeRef"),
        }
    }
}

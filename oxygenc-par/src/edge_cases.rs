//! Boundary and worked-scenario tests for the full parse pipeline.

use crate::ast::{CaseValue, Node};
use crate::Parser;

fn parse(src: &str) -> crate::Ast {
    Parser::new(src, "t.oxy").unwrap().parse().unwrap()
}

#[test]
fn scenario_var_decl_with_initializer() {
    let ast = parse("x: int = 5\n");
    assert_eq!(ast.block.children.len(), 1);
    match &ast.block.children[0] {
        Node::Assign(a) => {
            assert!(matches!(*a.left, Node::VarDecl(_)));
            assert!(matches!(*a.right, Node::Num(_)));
        }
        other => panic!("expected Assign, got {other:?}"),
    }
}

#[test]
fn scenario_function_with_default_argument() {
    let ast = parse("fun add(a: int, b: int = 1) -> int\n    return a + b\n");
    match &ast.block.children[0] {
        Node::FuncDecl(f) => {
            assert_eq!(f.name.as_str(), "add");
            assert_eq!(f.params.len(), 2);
            assert_eq!(f.param_defaults.len(), 1);
            assert_eq!(f.body.children.len(), 1);
            assert!(matches!(f.body.children[0], Node::Return(_)));
        }
        other => panic!("expected FuncDecl, got {other:?}"),
    }
}

#[test]
fn scenario_if_else_if_else() {
    let ast = parse("if x > 0\n    print(x)\nelse if x < 0\n    print(0)\nelse\n    print(0)\n");
    match &ast.block.children[0] {
        Node::IfExpr(e) => {
            assert_eq!(e.branches.len(), 3);
            assert!(e.branches[0].cond.is_some());
            assert!(e.branches[1].cond.is_some());
            assert!(e.branches[2].cond.is_none());
        }
        other => panic!("expected IfExpr, got {other:?}"),
    }
}

#[test]
fn scenario_for_loop_multiple_bound_vars() {
    let ast = parse("for i, v in items\n    print(v)\n");
    match &ast.block.children[0] {
        Node::ForExpr(f) => {
            assert_eq!(f.elements.len(), 2);
            assert!(matches!(*f.iterator, Node::Var(_)));
            assert_eq!(f.block.children.len(), 1);
        }
        other => panic!("expected ForExpr, got {other:?}"),
    }
}

#[test]
fn scenario_class_with_method() {
    let ast = parse(
        "object Point\n    x: int\n    y: int\n    fun norm() -> int\n        return self.x\n",
    );
    match &ast.block.children[0] {
        Node::ClassDecl(c) => {
            assert_eq!(c.name.as_str(), "Point");
            assert_eq!(c.fields.len(), 2);
            assert_eq!(c.methods.len(), 1);
            assert_eq!(c.methods[0].name.as_str(), "Point.norm");
            assert_eq!(c.methods[0].params.get_index(0).unwrap().0.as_str(), "self");
        }
        other => panic!("expected ClassDecl, got {other:?}"),
    }
}

#[test]
fn scenario_switch_with_default() {
    let ast = parse("switch c\n    case 1\n        print(1)\n    default\n        print(0)\n");
    match &ast.block.children[0] {
        Node::SwitchStmt(s) => {
            assert_eq!(s.cases.len(), 2);
            assert!(matches!(s.cases[0].value, CaseValue::Expr(_)));
            assert!(matches!(s.cases[1].value, CaseValue::Default));
        }
        other => panic!("expected SwitchStmt, got {other:?}"),
    }
}

#[test]
fn empty_input_is_an_error() {
    let err = Parser::new("", "t.oxy").unwrap_err();
    assert!(matches!(
        err,
        crate::ParseError::Lex(oxygenc_lex::LexError::EmptyInput)
    ));
}

#[test]
fn missing_trailing_newline_still_parses() {
    let ast = parse("x: int = 1");
    assert_eq!(ast.block.children.len(), 1);
}

#[test]
fn indentation_error_names_the_leftover_space_count() {
    let err = Parser::new("if x\n     y: int = 1\n", "t.oxy")
        .unwrap()
        .parse()
        .unwrap_err();
    match err {
        crate::ParseError::Lex(oxygenc_lex::LexError::LockedIndentation { found, .. }) => {
            assert_eq!(found, 1);
        }
        other => panic!("expected LockedIndentation, got {other:?}"),
    }
}

#[test]
fn hex_literal_with_bad_digit_is_a_clean_error() {
    let err = Parser::new("x: int = 0xg\n", "t.oxy")
        .unwrap()
        .parse()
        .unwrap_err();
    assert!(matches!(err, crate::ParseError::Lex(_)));
}

#[test]
fn range_and_dot_access_are_distinguished() {
    let ast = parse("x: int = a..b\n");
    match &ast.block.children[0] {
        Node::Assign(a) => assert!(matches!(*a.right, Node::Range(_))),
        other => panic!("expected Assign, got {other:?}"),
    }

    let ast = parse("x: int = a.b\n");
    match &ast.block.children[0] {
        Node::Assign(a) => assert!(matches!(*a.right, Node::DotAccess(_))),
        other => panic!("expected Assign, got {other:?}"),
    }
}

#[test]
fn grouping_vs_tuple_disambiguation() {
    let ast = parse("x: int = (1 + 2)\n");
    match &ast.block.children[0] {
        Node::Assign(a) => assert!(matches!(*a.right, Node::BinOp(_))),
        other => panic!("expected Assign, got {other:?}"),
    }

    let ast = parse("print((1, 2))\n");
    match &ast.block.children[0] {
        Node::PrintStmt(p) => match &*p.value {
            Node::Collection(c) => assert_eq!(c.items.len(), 2),
            other => panic!("expected Collection, got {other:?}"),
        },
        other => panic!("expected PrintStmt, got {other:?}"),
    }
}

#[test]
fn operator_overload_mangling_is_deterministic() {
    let src = "fun operator add(a: int, b: int)\n    return a\n";
    let first = parse(src);
    let second = parse(src);
    let name = |ast: &crate::Ast| match &ast.block.children[0] {
        Node::FuncDecl(f) => f.name.as_str().to_string(),
        other => panic!("expected FuncDecl, got {other:?}"),
    };
    assert_eq!(name(&first), name(&second));
}

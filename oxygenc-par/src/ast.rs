//! AST node definitions.
//!
//! OxygenC's surface grammar collapses into a single node hierarchy rather
//! than the usual item/stmt/expr split - a `switch` case value, a function
//! body statement and a binary operator's operand are all just [`Node`]s,
//! matching how the original front end never distinguished them at the type
//! level either. Parameter lists, struct fields, named call arguments and
//! hashmap literal entries all use `IndexMap` so iteration order matches
//! declaration order, which downstream codegen (out of scope here) relies on.

use indexmap::IndexMap;
use oxygenc_lex::NumberKind;
use oxygenc_util::Symbol;

/// A parsed source file.
pub type Ast = Program;

/// A node owned by a parent node.
pub type Expr = Box<Node>;

#[derive(Debug, Clone)]
pub struct Program {
    pub block: Compound,
}

/// An ordered sequence of statements sharing one indentation level.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone)]
pub enum Node {
    Compound(Compound),
    VarDecl(VarDecl),
    Var(Var),
    FuncDecl(FuncDecl),
    ExternFuncDecl(ExternFuncDecl),
    AnonymousFunc(AnonymousFunc),
    FuncCall(FuncCall),
    MethodCall(MethodCall),
    Return(Return),
    EnumDecl(EnumDecl),
    StructDecl(StructDecl),
    ClassDecl(ClassDecl),
    Assign(Assign),
    OpAssign(OpAssign),
    IncrementAssign(IncrementAssign),
    IfExpr(IfExpr),
    WhileExpr(WhileExpr),
    ForExpr(ForExpr),
    LoopBlock(LoopBlock),
    SwitchStmt(SwitchStmt),
    CaseStmt(CaseStmt),
    BreakStmt { line: u32 },
    ContinueStmt { line: u32 },
    FallthroughStmt { line: u32 },
    Pass { line: u32 },
    DeferStmt(DeferStmt),
    BinOp(BinOp),
    UnaryOp(UnaryOp),
    Range(Range),
    CollectionAccess(CollectionAccess),
    DotAccess(DotAccess),
    TypeRef(TypeRef),
    TypeDecl(TypeDecl),
    Void,
    Constant(Constant),
    Num(Num),
    Str(Str),
    Collection(Collection),
    HashMap(HashMapLit),
    PrintStmt(PrintStmt),
    InputStmt(InputStmt),
}

/// `name: Type [= init]`
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub name: Symbol,
    pub ty: Expr,
    pub read_only: bool,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct Var {
    pub name: Symbol,
    pub read_only: bool,
    pub line: u32,
}

/// One parameter's default or vararg slot. Vararg capture lifts the last
/// inserted `(name, type)` pair out of an ordered parameter map, which is
/// why parameter lists are `IndexMap` rather than a plain `HashMap`.
#[derive(Debug, Clone)]
pub struct Vararg {
    pub name: Symbol,
    pub ty: Expr,
}

#[derive(Debug, Clone)]
pub struct FuncDecl {
    pub name: Symbol,
    pub return_type: Expr,
    pub params: IndexMap<Symbol, Expr>,
    pub param_defaults: IndexMap<Symbol, Expr>,
    pub varargs: Option<Vararg>,
    pub body: Compound,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct ExternFuncDecl {
    pub name: Symbol,
    pub return_type: Expr,
    pub params: IndexMap<Symbol, Expr>,
    pub varargs: Option<Vararg>,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct AnonymousFunc {
    pub return_type: Expr,
    pub params: IndexMap<Symbol, Expr>,
    pub param_defaults: IndexMap<Symbol, Expr>,
    pub varargs: Option<Vararg>,
    pub body: Compound,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct FuncCall {
    pub name: Symbol,
    pub args: Vec<Node>,
    pub named_args: IndexMap<Symbol, Node>,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct MethodCall {
    pub receiver: Symbol,
    pub method: Symbol,
    pub args: Vec<Node>,
    pub named_args: IndexMap<Symbol, Node>,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct Return {
    pub value: Expr,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct EnumDecl {
    pub name: Symbol,
    pub fields: Vec<Symbol>,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct StructDecl {
    pub name: Symbol,
    pub fields: IndexMap<Symbol, Expr>,
    pub defaults: IndexMap<Symbol, Expr>,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: Symbol,
    pub base: Option<Expr>,
    pub methods: Vec<FuncDecl>,
    pub fields: IndexMap<Symbol, Expr>,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct Assign {
    pub left: Expr,
    pub op: Symbol,
    pub right: Expr,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct OpAssign {
    pub left: Expr,
    pub op: Symbol,
    pub right: Expr,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct IncrementAssign {
    pub left: Expr,
    pub op: Symbol,
    pub line: u32,
}

/// One `if`/`else if` branch. The trailing plain `else`, if any, is the
/// last entry with `cond: None` - there is no separate AST node for it.
#[derive(Debug, Clone)]
pub struct IfBranch {
    pub cond: Option<Node>,
    pub block: Compound,
}

#[derive(Debug, Clone)]
pub struct IfExpr {
    pub branches: Vec<IfBranch>,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct WhileExpr {
    pub cond: Expr,
    pub block: LoopBlock,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct ForExpr {
    pub elements: Vec<Node>,
    pub iterator: Expr,
    pub block: LoopBlock,
    pub line: u32,
}

#[derive(Debug, Clone, Default)]
pub struct LoopBlock {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone)]
pub struct SwitchStmt {
    pub value: Expr,
    pub cases: Vec<CaseStmt>,
    pub line: u32,
}

/// `default` has no guarding value; everything else carries one.
#[derive(Debug, Clone)]
pub enum CaseValue {
    Expr(Node),
    Default,
}

#[derive(Debug, Clone)]
pub struct CaseStmt {
    pub value: CaseValue,
    pub block: Compound,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct DeferStmt {
    pub statement: Expr,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct BinOp {
    pub left: Expr,
    pub op: Symbol,
    pub right: Expr,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct UnaryOp {
    pub op: Symbol,
    pub expr: Expr,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct Range {
    pub start: Expr,
    pub end: Expr,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct CollectionAccess {
    pub collection: Symbol,
    pub key: Expr,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct DotAccess {
    pub object: Symbol,
    pub field: Symbol,
    pub line: u32,
}

/// A type reference. `func_params`/`func_ret_type` are only populated for
/// `list<T>`/`tuple<T>` (params only) and `func<A,B> -> R` (both).
#[derive(Debug, Clone)]
pub struct TypeRef {
    pub name: Symbol,
    pub func_params: IndexMap<String, Node>,
    pub func_ret_type: Option<Expr>,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: Symbol,
    pub aliased: Expr,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct Constant {
    pub value: Symbol,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct Num {
    pub value: String,
    pub kind: NumberKind,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct Str {
    pub value: String,
    pub line: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    List,
    Tuple,
}

#[derive(Debug, Clone)]
pub struct Collection {
    pub kind: CollectionKind,
    pub items: Vec<Node>,
    pub read_only: bool,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct HashMapLit {
    pub pairs: IndexMap<Symbol, Node>,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct PrintStmt {
    pub value: Expr,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct InputStmt {
    pub value: Expr,
    pub line: u32,
}

use crate::{Position, Span};

use super::{expressions::Expr, statements::CompoundStmt, types::TypeNode};

/// A parsed program: the ordered list of top-level declarations.
///
/// The program exclusively owns its declarations. The only structural
/// mutations the semantic core performs on it are clearing a global
/// variable's initializer and splicing the equivalent assignment
/// statements into `main`'s body.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub decls: Vec<Decl>,
}

/// Top-level declaration kinds.
#[derive(Debug, Clone)]
pub enum Decl {
    Struct(StructDecl),
    Variable(VariableDecl),
    Function(FunctionDecl),
}

#[derive(Debug, Clone)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<VariableDecl>,
    pub span: Span,
}

/// A variable declaration, used both at the top level and (wrapped in
/// `Stmt::VarDecl`) inside function bodies. The three positions cover the
/// declared type, the name, and the initializer regions; the hoisting
/// pass carries them over onto the assignment it builds.
#[derive(Debug, Clone)]
pub struct VariableDecl {
    pub name: String,
    pub type_node: TypeNode,
    pub init: Option<Expr>,
    pub pos_type: Position,
    pub pos_name: Position,
    pub pos_init: Position,
}

#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: String,
    pub return_type: TypeNode,
    pub parameters: Vec<VariableDecl>,
    pub body: CompoundStmt,
    pub span: Span,
}

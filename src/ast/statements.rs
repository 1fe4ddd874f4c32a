use crate::Span;

use super::{ast::VariableDecl, expressions::Expr};

/// Statement kinds.
///
/// Expressions are valid statements (`Stmt::Expr`); the hoisting pass
/// relies on this to relocate global initializers into `main`'s body as
/// plain assignment expressions.
#[derive(Debug, Clone)]
pub enum Stmt {
    Break(Span),
    Continue(Span),
    Return(ReturnStmt),
    Compound(CompoundStmt),
    If(IfStmt),
    For(ForLoop),
    While(WhileLoop),
    VarDecl(VariableDecl),
    Expr(Expr),
}

#[derive(Debug, Clone)]
pub struct CompoundStmt {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ForLoop {
    pub init: Option<Expr>,
    pub cond: Option<Expr>,
    pub step: Option<Expr>,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileLoop {
    pub cond: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

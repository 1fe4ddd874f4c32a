use crate::{semantic::scope::ScopeRef, Position};

use super::types::TypeNode;

/// Expression kinds.
#[derive(Debug, Clone)]
pub enum Expr {
    ArrayAccess(ArrayAccess),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Empty(EmptyExpr),
    FunctionCall(FunctionCall),
    New(NewExpr),
    Member(MemberAccess),
    SelfDecrement(SelfDecrement),
    SelfIncrement(SelfIncrement),
    Identifier(Identifier),
    BoolConst(BoolConst),
    IntConst(IntConst),
    StringConst(StringConst),
    NullLiteral(NullLiteral),
}

impl Expr {
    pub fn position(&self) -> &Position {
        match self {
            Expr::ArrayAccess(node) => &node.pos,
            Expr::Unary(node) => &node.pos,
            Expr::Binary(node) => &node.pos_lhs,
            Expr::Empty(node) => &node.pos,
            Expr::FunctionCall(node) => &node.pos,
            Expr::New(node) => &node.pos,
            Expr::Member(node) => &node.pos,
            Expr::SelfDecrement(node) => &node.pos,
            Expr::SelfIncrement(node) => &node.pos,
            Expr::Identifier(node) => &node.pos,
            Expr::BoolConst(node) => &node.pos,
            Expr::IntConst(node) => &node.pos,
            Expr::StringConst(node) => &node.pos,
            Expr::NullLiteral(node) => &node.pos,
        }
    }
}

/// Binary operator kinds. `Assign` is the operator the hoisting pass
/// synthesizes for relocated global initializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Assign,
    LogicalOr,
    LogicalAnd,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    ShiftLeft,
    ShiftRight,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Inc,
    Dec,
    Pos,
    Neg,
    LogicalNot,
    BitNot,
}

#[derive(Debug, Clone)]
pub struct ArrayAccess {
    pub array: Box<Expr>,
    pub index: Box<Expr>,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
    pub pos: Position,
}

/// A binary operation. The three positions cover the operator region and
/// the two operand regions; hoisted assignments map the original
/// declaration's type/name/initializer positions onto them so downstream
/// diagnostics still point at the source declaration.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub pos_op: Position,
    pub pos_lhs: Position,
    pub pos_rhs: Position,
}

#[derive(Debug, Clone)]
pub struct EmptyExpr {
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct FunctionCall {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct NewExpr {
    pub type_node: TypeNode,
    pub dims: Vec<Expr>,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct MemberAccess {
    pub object: Box<Expr>,
    pub member: String,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct SelfDecrement {
    pub operand: Box<Expr>,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct SelfIncrement {
    pub operand: Box<Expr>,
    pub pos: Position,
}

/// An identifier reference. `scope` is filled in by resolution passes;
/// hoisted global references are bound to the root scope directly.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub name: String,
    pub scope: Option<ScopeRef>,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct BoolConst {
    pub value: bool,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct IntConst {
    pub value: i64,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct StringConst {
    pub value: String,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct NullLiteral {
    pub pos: Position,
}

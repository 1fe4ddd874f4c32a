//! Syntactic type nodes.
//!
//! These are what the parser produces for type annotations. They are
//! purely structural; the semantic pass maps them onto canonical
//! `semantic::types::Type` instances via
//! `GlobalEnv::resolve_variable_type`.

use crate::Position;

/// The closed set of type-node kinds.
#[derive(Debug, Clone)]
pub enum TypeNode {
    Primitive(PrimitiveTypeNode),
    Array(ArrayTypeNode),
    Struct(StructTypeNode),
    Function(FunctionTypeNode),
}

impl TypeNode {
    pub fn position(&self) -> &Position {
        match self {
            TypeNode::Primitive(node) => &node.pos,
            TypeNode::Array(node) => &node.pos,
            TypeNode::Struct(node) => &node.pos,
            TypeNode::Function(node) => &node.pos,
        }
    }
}

/// Primitive type names writable in source. `null` has a semantic type
/// but no syntactic spelling, so it does not appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Int,
    Bool,
    String,
    Void,
}

#[derive(Debug, Clone)]
pub struct PrimitiveTypeNode {
    pub kind: PrimitiveKind,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct ArrayTypeNode {
    pub element: Box<TypeNode>,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct StructTypeNode {
    pub name: String,
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct FunctionTypeNode {
    pub return_type: Box<TypeNode>,
    pub params: Vec<TypeNode>,
    pub pos: Position,
}

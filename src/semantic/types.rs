//! Canonical semantic types.
//!
//! Types are shared as `Rc<Type>`. Each primitive kind has exactly one
//! canonical instance per compilation, owned by the `GlobalEnv`, so
//! repeated lookups of `int` are identity-equal (`Rc::ptr_eq`). Array
//! and function types are structural: two independently built arrays of
//! `int` are equal in shape but need not share an allocation.

use std::{fmt::Display, rc::Rc};

/// The closed set of semantic type kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Int,
    Bool,
    String,
    Void,
    Null,
    Array(ArrayType),
    Struct(StructType),
    Function(FunctionType),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub element: Rc<Type>,
}

/// A struct type with its ordered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub name: String,
    pub fields: Vec<(String, Rc<Type>)>,
}

/// A function signature. The parameter list is taken in full at
/// construction; a `FunctionType` is never observable half-built.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub name: String,
    pub return_type: Rc<Type>,
    pub params: Vec<Rc<Type>>,
}

impl Type {
    pub fn array(element: Rc<Type>) -> Rc<Type> {
        Rc::new(Type::Array(ArrayType { element }))
    }

    pub fn structure(name: impl Into<String>, fields: Vec<(String, Rc<Type>)>) -> Rc<Type> {
        Rc::new(Type::Struct(StructType {
            name: name.into(),
            fields,
        }))
    }

    pub fn function(
        name: impl Into<String>,
        return_type: Rc<Type>,
        params: Vec<Rc<Type>>,
    ) -> Rc<Type> {
        Rc::new(Type::Function(FunctionType {
            name: name.into(),
            return_type,
            params,
        }))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Type::Int | Type::Bool | Type::String | Type::Void | Type::Null
        )
    }

    /// Multi-line structural dump, used by `GlobalEnv::structure_string`
    /// and handy when debugging resolution.
    pub fn structure_string(&self, indent: &str) -> String {
        match self {
            Type::Int | Type::Bool | Type::String | Type::Void | Type::Null => {
                format!("{}{}\n", indent, self)
            }
            Type::Array(array) => {
                let mut out = format!("{}array of\n", indent);
                out.push_str(&array.element.structure_string(&format!("{}  ", indent)));
                out
            }
            Type::Struct(structure) => {
                let mut out = format!("{}struct {}\n", indent, structure.name);
                for (name, ty) in &structure.fields {
                    out.push_str(&format!("{}  {}: {}\n", indent, name, ty));
                }
                out
            }
            Type::Function(function) => {
                let mut out = format!(
                    "{}function {} -> {}\n",
                    indent, function.name, function.return_type
                );
                for param in &function.params {
                    out.push_str(&format!("{}  param: {}\n", indent, param));
                }
                out
            }
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "bool"),
            Type::String => write!(f, "string"),
            Type::Void => write!(f, "void"),
            Type::Null => write!(f, "null"),
            Type::Array(array) => write!(f, "{}[]", array.element),
            Type::Struct(structure) => write!(f, "struct {}", structure.name),
            Type::Function(function) => write!(f, "function {}", function.name),
        }
    }
}

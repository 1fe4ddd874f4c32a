//! The global environment: type registry, root scope, and builtins.
//!
//! One `GlobalEnv` is constructed per compilation. Construction registers
//! the primitive type names and the fixed builtin surface; after that the
//! builtins are immutable and the registry only ever grows as user struct
//! declarations are processed.

use std::{collections::HashMap, rc::Rc};

use lazy_static::lazy_static;

use crate::{
    ast::types::{PrimitiveKind, TypeNode},
    errors::errors::{Error, ErrorImpl},
    semantic::{
        scope::{Scope, ScopeRef},
        types::Type,
    },
    Position,
};

/// Signature descriptor for a builtin. The tables below are static data;
/// every `GlobalEnv` materializes its own `Type` instances from them so
/// no canonical type leaks across compilations.
struct BuiltinSignature {
    name: &'static str,
    returns: PrimitiveKind,
    params: &'static [PrimitiveKind],
}

lazy_static! {
    static ref BUILTIN_FUNCTIONS: Vec<BuiltinSignature> = vec![
        BuiltinSignature {
            name: "print",
            returns: PrimitiveKind::Void,
            params: &[PrimitiveKind::String],
        },
        BuiltinSignature {
            name: "println",
            returns: PrimitiveKind::Void,
            params: &[PrimitiveKind::String],
        },
        BuiltinSignature {
            name: "getString",
            returns: PrimitiveKind::String,
            params: &[],
        },
        BuiltinSignature {
            name: "getInt",
            returns: PrimitiveKind::Int,
            params: &[],
        },
        BuiltinSignature {
            name: "toString",
            returns: PrimitiveKind::String,
            params: &[PrimitiveKind::Int],
        },
    ];
    static ref STRING_BUILTIN_METHODS: Vec<BuiltinSignature> = vec![
        BuiltinSignature {
            name: "length",
            returns: PrimitiveKind::Int,
            params: &[],
        },
        BuiltinSignature {
            name: "substring",
            returns: PrimitiveKind::String,
            params: &[PrimitiveKind::Int, PrimitiveKind::Int],
        },
        BuiltinSignature {
            name: "parseInt",
            returns: PrimitiveKind::Int,
            params: &[],
        },
        BuiltinSignature {
            name: "ord",
            returns: PrimitiveKind::Int,
            params: &[PrimitiveKind::Int],
        },
    ];
}

#[derive(Debug)]
pub struct GlobalEnv {
    int_type: Rc<Type>,
    bool_type: Rc<Type>,
    string_type: Rc<Type>,
    void_type: Rc<Type>,
    null_type: Rc<Type>,
    type_map: HashMap<String, Rc<Type>>,
    string_methods: HashMap<String, Rc<Type>>,
    pub globals: ScopeRef,
}

impl GlobalEnv {
    pub fn new() -> Self {
        let mut env = GlobalEnv {
            int_type: Rc::new(Type::Int),
            bool_type: Rc::new(Type::Bool),
            string_type: Rc::new(Type::String),
            void_type: Rc::new(Type::Void),
            null_type: Rc::new(Type::Null),
            type_map: HashMap::new(),
            string_methods: HashMap::new(),
            globals: Scope::root(),
        };

        env.type_map.insert("int".to_string(), Rc::clone(&env.int_type));
        env.type_map.insert("bool".to_string(), Rc::clone(&env.bool_type));
        env.type_map.insert("void".to_string(), Rc::clone(&env.void_type));
        env.type_map.insert("null".to_string(), Rc::clone(&env.null_type));
        env.type_map
            .insert("string".to_string(), Rc::clone(&env.string_type));

        for signature in BUILTIN_FUNCTIONS.iter() {
            let ty = env.materialize_builtin(signature.name.to_string(), signature);
            env.globals
                .borrow_mut()
                .define(signature.name, ty, Position::null())
                .expect("builtin function names are unique");
        }

        for signature in STRING_BUILTIN_METHODS.iter() {
            // Receiver methods get the `string.` prefix in their function
            // name so diagnostics and IR labels stay unambiguous.
            let ty = env.materialize_builtin(format!("string.{}", signature.name), signature);
            env.string_methods.insert(signature.name.to_string(), ty);
        }

        env
    }

    fn materialize_builtin(&self, name: String, signature: &BuiltinSignature) -> Rc<Type> {
        let params = signature
            .params
            .iter()
            .map(|kind| self.primitive(*kind))
            .collect();
        Type::function(name, self.primitive(signature.returns), params)
    }

    /// The canonical instance for a syntactic primitive name.
    pub fn primitive(&self, kind: PrimitiveKind) -> Rc<Type> {
        match kind {
            PrimitiveKind::Int => Rc::clone(&self.int_type),
            PrimitiveKind::Bool => Rc::clone(&self.bool_type),
            PrimitiveKind::String => Rc::clone(&self.string_type),
            PrimitiveKind::Void => Rc::clone(&self.void_type),
        }
    }

    pub fn int_type(&self) -> Rc<Type> {
        Rc::clone(&self.int_type)
    }

    pub fn bool_type(&self) -> Rc<Type> {
        Rc::clone(&self.bool_type)
    }

    pub fn string_type(&self) -> Rc<Type> {
        Rc::clone(&self.string_type)
    }

    pub fn void_type(&self) -> Rc<Type> {
        Rc::clone(&self.void_type)
    }

    pub fn null_type(&self) -> Rc<Type> {
        Rc::clone(&self.null_type)
    }

    /// Registers a declared type name (struct declarations). Duplicates
    /// are rejected rather than overwritten.
    pub fn define_type(
        &mut self,
        name: impl Into<String>,
        ty: Rc<Type>,
        position: Position,
    ) -> Result<(), Error> {
        let name = name.into();
        if self.type_map.contains_key(&name) {
            Err(Error::new(
                ErrorImpl::DuplicateType { type_: name },
                position,
            ))
        } else {
            self.type_map.insert(name, ty);
            Ok(())
        }
    }

    pub fn resolve_type(&self, name: &str) -> Option<Rc<Type>> {
        self.type_map.get(name).map(Rc::clone)
    }

    /// Looks up a builtin method on a string-typed receiver.
    pub fn string_method(&self, name: &str) -> Option<Rc<Type>> {
        self.string_methods.get(name).map(Rc::clone)
    }

    /// Structurally maps a syntactic type node onto a canonical semantic
    /// type. `None` is the normal not-found result: an array over an
    /// unresolvable element is unresolvable as a whole, an unregistered
    /// struct name is unresolvable, and function type nodes are never
    /// resolved here (function types only come from declarations). The
    /// caller turns `None` into an `UndefinedType` diagnostic.
    pub fn resolve_variable_type(&self, node: &TypeNode) -> Option<Rc<Type>> {
        match node {
            TypeNode::Primitive(primitive) => Some(self.primitive(primitive.kind)),
            TypeNode::Array(array) => {
                let element = self.resolve_variable_type(&array.element)?;
                Some(Type::array(element))
            }
            TypeNode::Struct(structure) => self.resolve_type(&structure.name),
            TypeNode::Function(_) => None,
        }
    }

    /// Dump of all registered types followed by the root scope, for
    /// debugging resolution problems.
    pub fn structure_string(&self) -> String {
        let mut names: Vec<&String> = self.type_map.keys().collect();
        names.sort();

        let mut out = String::from("------GLOBAL TYPES:\n");
        for name in names {
            out.push_str(&format!("{}:\n", name));
            out.push_str(&self.type_map[name].structure_string("  "));
        }
        out.push_str("\n------GLOBAL SYMBOL TABLE:\n");
        out.push_str(&self.globals.borrow().structure_string(""));
        out
    }
}

impl Default for GlobalEnv {
    fn default() -> Self {
        GlobalEnv::new()
    }
}

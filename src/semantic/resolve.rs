//! Declaration resolution.
//!
//! A flat pass over the program's top-level declarations, in source
//! order. Struct declarations are registered in the type registry with
//! their resolved field types; function declarations get a full
//! `FunctionType` defined in the root scope; global variable
//! declarations get their declared type resolved and their name defined
//! in the root scope. The pass never descends into function bodies —
//! local statements and expressions are a later checker's concern.
//!
//! Every failure becomes a positioned diagnostic and resolution keeps
//! going, so one invocation reports all independent problems at once.

use crate::{
    ast::{
        ast::{FunctionDecl, Program, StructDecl, VariableDecl},
        types::{PrimitiveKind, TypeNode},
        visit::Visitor,
    },
    errors::errors::{Error, ErrorImpl},
    semantic::{global::GlobalEnv, types::Type},
};

struct DeclarationResolver<'a> {
    env: &'a mut GlobalEnv,
    diagnostics: Vec<Error>,
}

impl DeclarationResolver<'_> {
    fn undefined_type(&mut self, node: &TypeNode) {
        self.diagnostics.push(Error::new(
            ErrorImpl::UndefinedType {
                type_: type_node_name(node),
            },
            node.position().clone(),
        ));
    }
}

/// Human-readable spelling of a type node for diagnostics.
fn type_node_name(node: &TypeNode) -> String {
    match node {
        TypeNode::Primitive(primitive) => match primitive.kind {
            PrimitiveKind::Int => "int".to_string(),
            PrimitiveKind::Bool => "bool".to_string(),
            PrimitiveKind::String => "string".to_string(),
            PrimitiveKind::Void => "void".to_string(),
        },
        TypeNode::Array(array) => format!("{}[]", type_node_name(&array.element)),
        TypeNode::Struct(structure) => structure.name.clone(),
        TypeNode::Function(_) => "<function>".to_string(),
    }
}

impl Visitor for DeclarationResolver<'_> {
    fn visit_struct_decl(&mut self, node: &mut StructDecl) {
        let mut fields = Vec::with_capacity(node.fields.len());
        for field in &node.fields {
            match self.env.resolve_variable_type(&field.type_node) {
                Some(ty) => fields.push((field.name.clone(), ty)),
                None => self.undefined_type(&field.type_node),
            }
        }

        let ty = Type::structure(node.name.clone(), fields);
        if let Err(error) = self
            .env
            .define_type(node.name.clone(), ty, node.span.start.clone())
        {
            self.diagnostics.push(error);
        }
    }

    fn visit_variable_decl(&mut self, node: &mut VariableDecl) {
        let ty = match self.env.resolve_variable_type(&node.type_node) {
            Some(ty) => ty,
            None => {
                self.undefined_type(&node.type_node);
                return;
            }
        };

        if let Err(error) =
            self.env
                .globals
                .borrow_mut()
                .define(node.name.clone(), ty, node.pos_name.clone())
        {
            self.diagnostics.push(error);
        }
    }

    fn visit_function_decl(&mut self, node: &mut FunctionDecl) {
        let return_type = match self.env.resolve_variable_type(&node.return_type) {
            Some(ty) => ty,
            None => {
                self.undefined_type(&node.return_type);
                return;
            }
        };

        let mut params = Vec::with_capacity(node.parameters.len());
        for parameter in &node.parameters {
            match self.env.resolve_variable_type(&parameter.type_node) {
                Some(ty) => params.push(ty),
                None => {
                    self.undefined_type(&parameter.type_node);
                    return;
                }
            }
        }

        let ty = Type::function(node.name.clone(), return_type, params);
        if let Err(error) =
            self.env
                .globals
                .borrow_mut()
                .define(node.name.clone(), ty, node.span.start.clone())
        {
            self.diagnostics.push(error);
        }
    }
}

/// Resolves all top-level declarations against `env`. The returned list
/// is empty on success; otherwise it holds every diagnostic found, in
/// source order.
pub fn resolve_declarations(env: &mut GlobalEnv, program: &mut Program) -> Vec<Error> {
    let mut resolver = DeclarationResolver {
        env,
        diagnostics: Vec::new(),
    };
    resolver.visit_program(program);
    resolver.diagnostics
}

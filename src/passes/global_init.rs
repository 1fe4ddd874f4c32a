//! Global initializer hoisting.
//!
//! Top-level variable declarations may carry initializers that must run
//! once, at program start, in declaration order. Lowering only executes
//! statements inside function bodies, so this pass rewrites each global
//! `T x = e;` into storage-only `T x;` plus an `x = e` assignment, and
//! splices the assignments, in order, at the front of `main`'s body.
//!
//! The pass is flat: it never descends into struct bodies, function
//! bodies, or initializer expressions, so local declarations are left
//! alone. Running it a second time accumulates nothing (every global's
//! initializer is already cleared), making it an idempotent no-op.

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Decl, FunctionDecl, Program, StructDecl, VariableDecl},
        expressions::{BinaryExpr, BinaryOp, Expr, Identifier},
        statements::Stmt,
        visit::Visitor,
    },
    errors::errors::{Error, ErrorImpl},
    semantic::global::GlobalEnv,
    Position,
};

struct GlobalInitHoister<'a> {
    env: &'a GlobalEnv,
    init_list: Vec<Stmt>,
}

impl Visitor for GlobalInitHoister<'_> {
    // Struct bodies hold no initializers to hoist.
    fn visit_struct_decl(&mut self, _node: &mut StructDecl) {}

    // Function bodies must not be descended into: a local declaration's
    // initializer stays where it is.
    fn visit_function_decl(&mut self, _node: &mut FunctionDecl) {}

    fn visit_variable_decl(&mut self, node: &mut VariableDecl) {
        if let Some(init) = node.init.take() {
            let identifier = Identifier {
                name: node.name.clone(),
                scope: Some(Rc::clone(&self.env.globals)),
                pos: node.pos_name.clone(),
            };
            let assignment = BinaryExpr {
                op: BinaryOp::Assign,
                lhs: Box::new(Expr::Identifier(identifier)),
                rhs: Box::new(init),
                pos_op: node.pos_type.clone(),
                pos_lhs: node.pos_name.clone(),
                pos_rhs: node.pos_init.clone(),
            };
            self.init_list.push(Stmt::Expr(Expr::Binary(assignment)));
        }
    }
}

/// Moves every global initializer into the front of `main`'s statement
/// list, in declaration order. Fails with `MissingEntryPoint` when the
/// program has no function named `main`.
pub fn hoist_global_initializers(env: &GlobalEnv, program: &mut Program) -> Result<(), Error> {
    let mut hoister = GlobalInitHoister {
        env,
        init_list: Vec::new(),
    };
    hoister.visit_program(program);
    let init_list = hoister.init_list;

    let main = program.decls.iter_mut().find_map(|decl| match decl {
        Decl::Function(function) if function.name == "main" => Some(function),
        _ => None,
    });

    match main {
        Some(function) => {
            function.body.stmts.splice(0..0, init_list);
            Ok(())
        }
        None => Err(Error::new(ErrorImpl::MissingEntryPoint, Position::null())),
    }
}

//! Unit tests for the global initializer hoisting pass.

use std::rc::Rc;

use crate::ast::ast::{Decl, FunctionDecl, Program, VariableDecl};
use crate::ast::expressions::{BinaryExpr, BinaryOp, Expr, Identifier, IntConst};
use crate::ast::statements::{CompoundStmt, ReturnStmt, Stmt};
use crate::ast::types::{PrimitiveKind, PrimitiveTypeNode, TypeNode};
use crate::passes::global_init::hoist_global_initializers;
use crate::semantic::global::GlobalEnv;
use crate::{Position, Span};

fn int_node() -> TypeNode {
    TypeNode::Primitive(PrimitiveTypeNode {
        kind: PrimitiveKind::Int,
        pos: Position::null(),
    })
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(Identifier {
        name: name.to_string(),
        scope: None,
        pos: Position::null(),
    })
}

fn int_const(value: i64) -> Expr {
    Expr::IntConst(IntConst {
        value,
        pos: Position::null(),
    })
}

fn global_var(name: &str, init: Option<Expr>) -> Decl {
    Decl::Variable(VariableDecl {
        name: name.to_string(),
        type_node: int_node(),
        init,
        pos_type: Position::null(),
        pos_name: Position::null(),
        pos_init: Position::null(),
    })
}

fn main_function(stmts: Vec<Stmt>) -> Decl {
    Decl::Function(FunctionDecl {
        name: "main".to_string(),
        return_type: int_node(),
        parameters: vec![],
        body: CompoundStmt {
            stmts,
            span: Span::null(),
        },
        span: Span::null(),
    })
}

fn main_body(program: &Program) -> &Vec<Stmt> {
    program
        .decls
        .iter()
        .find_map(|decl| match decl {
            Decl::Function(function) if function.name == "main" => Some(&function.body.stmts),
            _ => None,
        })
        .unwrap()
}

fn assignment_target(stmt: &Stmt) -> &str {
    match stmt {
        Stmt::Expr(Expr::Binary(BinaryExpr { op, lhs, .. })) => {
            assert_eq!(*op, BinaryOp::Assign);
            match &**lhs {
                Expr::Identifier(identifier) => &identifier.name,
                other => panic!("expected identifier target, got {:?}", other),
            }
        }
        other => panic!("expected assignment statement, got {:?}", other),
    }
}

#[test]
fn test_hoisted_assignments_preserve_declaration_order() {
    let env = GlobalEnv::new();
    let mut program = Program {
        decls: vec![
            global_var("x", Some(int_const(5))),
            global_var("z", None),
            global_var(
                "y",
                Some(Expr::Binary(BinaryExpr {
                    op: BinaryOp::Add,
                    lhs: Box::new(ident("x")),
                    rhs: Box::new(int_const(1)),
                    pos_op: Position::null(),
                    pos_lhs: Position::null(),
                    pos_rhs: Position::null(),
                })),
            ),
            main_function(vec![Stmt::Return(ReturnStmt {
                value: Some(ident("y")),
                span: Span::null(),
            })]),
        ],
    };

    hoist_global_initializers(&env, &mut program).unwrap();

    let body = main_body(&program);
    assert_eq!(body.len(), 3); // x := 5, y := x + 1, return y
    assert_eq!(assignment_target(&body[0]), "x");
    assert_eq!(assignment_target(&body[1]), "y");
    assert!(matches!(body[2], Stmt::Return(_)));

    // Every global declaration is storage-only now.
    for decl in &program.decls {
        if let Decl::Variable(variable) = decl {
            assert!(variable.init.is_none());
        }
    }
}

#[test]
fn test_hoisted_identifier_bound_to_root_scope() {
    let env = GlobalEnv::new();
    let mut program = Program {
        decls: vec![
            global_var("x", Some(int_const(5))),
            main_function(vec![]),
        ],
    };

    hoist_global_initializers(&env, &mut program).unwrap();

    let body = main_body(&program);
    match &body[0] {
        Stmt::Expr(Expr::Binary(BinaryExpr { lhs, .. })) => match &**lhs {
            Expr::Identifier(identifier) => {
                let scope = identifier.scope.as_ref().unwrap();
                assert!(Rc::ptr_eq(scope, &env.globals));
            }
            other => panic!("expected identifier, got {:?}", other),
        },
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_hoisting_is_idempotent() {
    let env = GlobalEnv::new();
    let mut program = Program {
        decls: vec![
            global_var("x", Some(int_const(5))),
            main_function(vec![]),
        ],
    };

    hoist_global_initializers(&env, &mut program).unwrap();
    assert_eq!(main_body(&program).len(), 1);

    hoist_global_initializers(&env, &mut program).unwrap();
    assert_eq!(main_body(&program).len(), 1);
}

#[test]
fn test_declarations_without_initializers_produce_nothing() {
    let env = GlobalEnv::new();
    let mut program = Program {
        decls: vec![global_var("x", None), main_function(vec![])],
    };

    hoist_global_initializers(&env, &mut program).unwrap();
    assert!(main_body(&program).is_empty());
}

#[test]
fn test_missing_main_is_an_error() {
    let env = GlobalEnv::new();
    let mut program = Program {
        decls: vec![global_var("x", Some(int_const(5)))],
    };

    let error = hoist_global_initializers(&env, &mut program).unwrap_err();
    assert_eq!(error.get_error_name(), "MissingEntryPoint");
}

#[test]
fn test_local_initializers_are_left_alone() {
    let env = GlobalEnv::new();
    let local = Stmt::VarDecl(VariableDecl {
        name: "local".to_string(),
        type_node: int_node(),
        init: Some(int_const(7)),
        pos_type: Position::null(),
        pos_name: Position::null(),
        pos_init: Position::null(),
    });
    let mut program = Program {
        decls: vec![main_function(vec![local])],
    };

    hoist_global_initializers(&env, &mut program).unwrap();

    let body = main_body(&program);
    assert_eq!(body.len(), 1);
    match &body[0] {
        Stmt::VarDecl(variable) => assert!(variable.init.is_some()),
        other => panic!("expected untouched local declaration, got {:?}", other),
    }
}

//! Integration tests for the semantic pipeline.
//!
//! These tests drive the whole core the way a compiler driver would:
//! global environment construction, declaration resolution, initializer
//! hoisting, and per-function lowering over hand-built ASTs (parsing is
//! an external collaborator).

use std::rc::Rc;

use pretty_assertions::assert_eq;

use mcc::analyze_program;
use mcc::ast::ast::{Decl, FunctionDecl, Program, VariableDecl};
use mcc::ast::expressions::{BinaryExpr, BinaryOp, Expr, Identifier, IntConst};
use mcc::ast::statements::{CompoundStmt, ReturnStmt, Stmt};
use mcc::ast::types::{PrimitiveKind, PrimitiveTypeNode, StructTypeNode, TypeNode};
use mcc::ir::basic_block::{Branch, Instruction};
use mcc::semantic::global::GlobalEnv;
use mcc::semantic::types::Type;
use mcc::{Position, Span};

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

fn function(name: &str, stmts: Vec<Stmt>) -> Decl {
    Decl::Function(FunctionDecl {
        name: name.to_string(),
        return_type: int_node(),
        parameters: vec![],
        body: CompoundStmt {
            stmts,
            span: Span::null(),
        },
        span: Span::null(),
    })
}

#[test]
fn test_globals_hoisted_into_main_and_lowered() {
    // int x = 5;
    // int y = x + 1;
    // int main() { return y; }
    let mut program = Program {
        decls: vec![
            global_var("x", Some(int_const(5))),
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
            function(
                "main",
                vec![Stmt::Return(ReturnStmt {
                    value: Some(ident("y")),
                    span: Span::null(),
                })],
            ),
        ],
    };

    let analysis = analyze_program(&mut program).unwrap();

    // The rewritten AST: main's body is `x := 5; y := x + 1; return y;`
    // and the top-level declarations are storage-only.
    let main_stmts = program
        .decls
        .iter()
        .find_map(|decl| match decl {
            Decl::Function(f) if f.name == "main" => Some(&f.body.stmts),
            _ => None,
        })
        .unwrap();
    assert_eq!(main_stmts.len(), 3);
    for decl in &program.decls {
        if let Decl::Variable(variable) = decl {
            assert!(variable.init.is_none());
        }
    }

    // The lowered CFG reflects the same order.
    assert_eq!(analysis.cfgs.len(), 1);
    let cfg = &analysis.cfgs[0];
    assert_eq!(cfg.name, "main");
    assert!(cfg.is_complete());

    let entry = cfg.block(cfg.entry);
    let targets: Vec<&str> = entry
        .instructions()
        .iter()
        .filter_map(|instruction| match instruction {
            Instruction::Assign {
                target: Expr::Identifier(identifier),
                ..
            } => Some(identifier.name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(targets, vec!["x", "y"]);
    assert!(matches!(entry.terminator(), Some(Branch::Ret(Some(_)))));

    // x and y resolved to the canonical int in the root scope.
    let x = analysis.env.globals.borrow().resolve("x").unwrap();
    assert!(Rc::ptr_eq(&x, &analysis.env.int_type()));
}

#[test]
fn test_empty_program_still_has_builtins() {
    let env = GlobalEnv::new();

    assert!(env.resolve_type("string").is_some());
    assert!(env.globals.borrow().resolve("print").is_some());

    let length = env.string_method("length").unwrap();
    match &*length {
        Type::Function(f) => assert!(Rc::ptr_eq(&f.return_type, &env.int_type())),
        other => panic!("expected function, got {:?}", other),
    }
}

#[test]
fn test_program_without_main_fails_hoisting() {
    let mut program = Program {
        decls: vec![
            global_var("x", Some(int_const(5))),
            function("helper", vec![]),
        ],
    };

    let errors = analyze_program(&mut program).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "MissingEntryPoint");
}

#[test]
fn test_undefined_types_reported_in_batch() {
    let undefined = |name: &str| TypeNode::Struct(StructTypeNode {
        name: name.to_string(),
        pos: Position::null(),
    });
    let mut program = Program {
        decls: vec![
            Decl::Variable(VariableDecl {
                name: "a".to_string(),
                type_node: undefined("Vector"),
                init: None,
                pos_type: Position::null(),
                pos_name: Position::null(),
                pos_init: Position::null(),
            }),
            Decl::Variable(VariableDecl {
                name: "b".to_string(),
                type_node: undefined("Matrix"),
                init: None,
                pos_type: Position::null(),
                pos_name: Position::null(),
                pos_init: Position::null(),
            }),
            function("main", vec![]),
        ],
    };

    let errors = analyze_program(&mut program).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|error| error.get_error_name() == "UndefinedType"));
}

#[test]
fn test_analysis_runs_hoisting_before_lowering() {
    // A single global with an initializer and an empty main: if hoisting
    // ran after lowering, the assignment would be missing from the CFG.
    let mut program = Program {
        decls: vec![
            global_var("x", Some(int_const(42))),
            function("main", vec![]),
        ],
    };

    let analysis = analyze_program(&mut program).unwrap();
    let cfg = &analysis.cfgs[0];
    let entry = cfg.block(cfg.entry);

    assert!(matches!(
        entry.instructions()[0],
        Instruction::Assign { .. }
    ));
}

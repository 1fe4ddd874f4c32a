//! Lowering of function bodies into CFG skeletons.
//!
//! Straight-line statements append instructions to the current block;
//! `if`/`while`/`for` split blocks and connect them with terminators;
//! `return`, `break`, and `continue` seal the current block and move
//! lowering into a fresh unreachable block so trailing dead statements
//! still have somewhere to land. A body that falls off its end is sealed
//! with a void return. Every block of the returned CFG is sealed.
//!
//! Lowering must run after initializer hoisting so that `main`'s spliced
//! assignments are part of its body.

use crate::{
    ast::{
        ast::{Decl, FunctionDecl, Program},
        expressions::{BinaryOp, Expr, Identifier},
        statements::{CompoundStmt, ForLoop, IfStmt, Stmt, WhileLoop},
    },
    ir::basic_block::{BlockId, Branch, FunctionCfg, Instruction},
    semantic::global::GlobalEnv,
};

struct LoopContext {
    break_target: BlockId,
    continue_target: BlockId,
}

struct Lowering<'a> {
    env: &'a GlobalEnv,
    cfg: FunctionCfg,
    current: BlockId,
    loops: Vec<LoopContext>,
}

impl Lowering<'_> {
    /// Seals the current block with `branch` and continues in `next`.
    fn terminate(&mut self, branch: Branch, next: BlockId) {
        self.cfg.block_mut(self.current).seal(branch);
        self.current = next;
    }

    fn append(&mut self, instruction: Instruction) {
        self.cfg.block_mut(self.current).append(instruction);
    }

    fn lower_compound(&mut self, node: &CompoundStmt) {
        for stmt in &node.stmts {
            self.lower_stmt(stmt);
        }
    }

    fn lower_stmt(&mut self, node: &Stmt) {
        match node {
            Stmt::Break(_) => {
                let target = self
                    .loops
                    .last()
                    .expect("break statement outside of a loop")
                    .break_target;
                let dead = self.cfg.new_block("unreachable");
                self.terminate(Branch::Jump(target), dead);
            }
            Stmt::Continue(_) => {
                let target = self
                    .loops
                    .last()
                    .expect("continue statement outside of a loop")
                    .continue_target;
                let dead = self.cfg.new_block("unreachable");
                self.terminate(Branch::Jump(target), dead);
            }
            Stmt::Return(stmt) => {
                let dead = self.cfg.new_block("unreachable");
                self.terminate(Branch::Ret(stmt.value.clone()), dead);
            }
            Stmt::Compound(stmt) => self.lower_compound(stmt),
            Stmt::If(stmt) => self.lower_if(stmt),
            Stmt::For(stmt) => self.lower_for(stmt),
            Stmt::While(stmt) => self.lower_while(stmt),
            Stmt::VarDecl(decl) => {
                let ty = self
                    .env
                    .resolve_variable_type(&decl.type_node)
                    .unwrap_or_else(|| {
                        // An unresolved local type is an upstream checker
                        // bug by the time lowering runs.
                        panic!("undefined type in local declaration `{}`", decl.name)
                    });
                self.append(Instruction::Local {
                    name: decl.name.clone(),
                    ty,
                });
                if let Some(init) = &decl.init {
                    self.append(Instruction::Assign {
                        target: Expr::Identifier(Identifier {
                            name: decl.name.clone(),
                            scope: None,
                            pos: decl.pos_name.clone(),
                        }),
                        value: init.clone(),
                    });
                }
            }
            Stmt::Expr(expr) => self.lower_expr_stmt(expr),
        }
    }

    fn lower_expr_stmt(&mut self, expr: &Expr) {
        match expr {
            Expr::Binary(binary) if binary.op == BinaryOp::Assign => {
                self.append(Instruction::Assign {
                    target: (*binary.lhs).clone(),
                    value: (*binary.rhs).clone(),
                });
            }
            _ => self.append(Instruction::Eval(expr.clone())),
        }
    }

    fn lower_if(&mut self, node: &IfStmt) {
        let then_block = self.cfg.new_block("if.then");
        let else_block = node.else_body.as_ref().map(|_| self.cfg.new_block("if.else"));
        let merge_block = self.cfg.new_block("if.merge");

        self.terminate(
            Branch::CondJump {
                cond: node.cond.clone(),
                then_block,
                else_block: else_block.unwrap_or(merge_block),
            },
            then_block,
        );

        self.lower_stmt(&node.then_body);
        self.terminate(Branch::Jump(merge_block), else_block.unwrap_or(merge_block));

        if let Some(else_body) = &node.else_body {
            self.lower_stmt(else_body);
            self.terminate(Branch::Jump(merge_block), merge_block);
        }
    }

    fn lower_while(&mut self, node: &WhileLoop) {
        let cond_block = self.cfg.new_block("while.cond");
        let body_block = self.cfg.new_block("while.body");
        let after_block = self.cfg.new_block("while.after");

        self.terminate(Branch::Jump(cond_block), cond_block);
        self.terminate(
            Branch::CondJump {
                cond: node.cond.clone(),
                then_block: body_block,
                else_block: after_block,
            },
            body_block,
        );

        self.loops.push(LoopContext {
            break_target: after_block,
            continue_target: cond_block,
        });
        self.lower_stmt(&node.body);
        self.loops.pop();

        self.terminate(Branch::Jump(cond_block), after_block);
    }

    fn lower_for(&mut self, node: &ForLoop) {
        if let Some(init) = &node.init {
            self.lower_expr_stmt(init);
        }

        let cond_block = self.cfg.new_block("for.cond");
        let body_block = self.cfg.new_block("for.body");
        let step_block = self.cfg.new_block("for.step");
        let after_block = self.cfg.new_block("for.after");

        self.terminate(Branch::Jump(cond_block), cond_block);
        match &node.cond {
            Some(cond) => self.terminate(
                Branch::CondJump {
                    cond: cond.clone(),
                    then_block: body_block,
                    else_block: after_block,
                },
                body_block,
            ),
            None => self.terminate(Branch::Jump(body_block), body_block),
        }

        self.loops.push(LoopContext {
            break_target: after_block,
            continue_target: step_block,
        });
        self.lower_stmt(&node.body);
        self.loops.pop();

        self.terminate(Branch::Jump(step_block), step_block);
        if let Some(step) = &node.step {
            self.lower_expr_stmt(step);
        }
        self.terminate(Branch::Jump(cond_block), after_block);
    }
}

/// Lowers one function body into a complete (all-sealed) CFG.
pub fn lower_function(env: &GlobalEnv, decl: &FunctionDecl) -> FunctionCfg {
    let cfg = FunctionCfg::new(decl.name.clone());
    let entry = cfg.entry;
    let mut lowering = Lowering {
        env,
        cfg,
        current: entry,
        loops: Vec::new(),
    };

    lowering.lower_compound(&decl.body);

    // Fall-off-the-end: give the body an implicit void return.
    if !lowering.cfg.block(lowering.current).is_sealed() {
        lowering.cfg.block_mut(lowering.current).seal(Branch::Ret(None));
    }

    debug_assert!(lowering.cfg.is_complete());
    lowering.cfg
}

/// Lowers every function of the program, in declaration order. Callers
/// must run initializer hoisting first.
pub fn lower_program(env: &GlobalEnv, program: &Program) -> Vec<FunctionCfg> {
    program
        .decls
        .iter()
        .filter_map(|decl| match decl {
            Decl::Function(function) => Some(lower_function(env, function)),
            _ => None,
        })
        .collect()
}

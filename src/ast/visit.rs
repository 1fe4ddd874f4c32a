//! Traversal framework over the closed node-kind set.
//!
//! `Visitor` has one method per concrete node kind. Every method's
//! default implementation delegates to the matching `walk_*` function,
//! which visits the node's children, so an un-overridden kind recurses
//! structurally. A narrow pass overrides only the handlers it cares
//! about; overriding a handler also takes over responsibility for
//! descending (or not descending) into that node's children.
//!
//! Traversal is mutable: passes such as initializer hoisting rewrite the
//! AST in place.

use crate::Span;

use super::{
    ast::{Decl, FunctionDecl, Program, StructDecl, VariableDecl},
    expressions::{
        ArrayAccess, BinaryExpr, BinaryOp, BoolConst, EmptyExpr, Expr, FunctionCall, Identifier,
        IntConst, MemberAccess, NewExpr, NullLiteral, SelfDecrement, SelfIncrement, StringConst,
        UnaryExpr, UnaryOp,
    },
    statements::{CompoundStmt, ForLoop, IfStmt, ReturnStmt, Stmt, WhileLoop},
    types::{ArrayTypeNode, FunctionTypeNode, PrimitiveTypeNode, StructTypeNode, TypeNode},
};

pub trait Visitor: Sized {
    // Declarations
    fn visit_program(&mut self, node: &mut Program) {
        walk_program(self, node);
    }
    fn visit_decl(&mut self, node: &mut Decl) {
        walk_decl(self, node);
    }
    fn visit_struct_decl(&mut self, node: &mut StructDecl) {
        walk_struct_decl(self, node);
    }
    fn visit_variable_decl(&mut self, node: &mut VariableDecl) {
        walk_variable_decl(self, node);
    }
    fn visit_function_decl(&mut self, node: &mut FunctionDecl) {
        walk_function_decl(self, node);
    }

    // Statements
    fn visit_stmt(&mut self, node: &mut Stmt) {
        walk_stmt(self, node);
    }
    fn visit_break_stmt(&mut self, _node: &mut Span) {}
    fn visit_continue_stmt(&mut self, _node: &mut Span) {}
    fn visit_return_stmt(&mut self, node: &mut ReturnStmt) {
        walk_return_stmt(self, node);
    }
    fn visit_compound_stmt(&mut self, node: &mut CompoundStmt) {
        walk_compound_stmt(self, node);
    }
    fn visit_if_stmt(&mut self, node: &mut IfStmt) {
        walk_if_stmt(self, node);
    }
    fn visit_for_loop(&mut self, node: &mut ForLoop) {
        walk_for_loop(self, node);
    }
    fn visit_while_loop(&mut self, node: &mut WhileLoop) {
        walk_while_loop(self, node);
    }
    fn visit_variable_decl_stmt(&mut self, node: &mut VariableDecl) {
        self.visit_variable_decl(node);
    }

    // Expressions
    fn visit_expr(&mut self, node: &mut Expr) {
        walk_expr(self, node);
    }
    fn visit_array_access(&mut self, node: &mut ArrayAccess) {
        walk_array_access(self, node);
    }
    fn visit_unary_expr(&mut self, node: &mut UnaryExpr) {
        walk_unary_expr(self, node);
    }
    fn visit_binary_expr(&mut self, node: &mut BinaryExpr) {
        walk_binary_expr(self, node);
    }
    fn visit_empty_expr(&mut self, _node: &mut EmptyExpr) {}
    fn visit_function_call(&mut self, node: &mut FunctionCall) {
        walk_function_call(self, node);
    }
    fn visit_new_expr(&mut self, node: &mut NewExpr) {
        walk_new_expr(self, node);
    }
    fn visit_member_access(&mut self, node: &mut MemberAccess) {
        walk_member_access(self, node);
    }
    fn visit_self_decrement(&mut self, node: &mut SelfDecrement) {
        self.visit_expr(&mut node.operand);
    }
    fn visit_self_increment(&mut self, node: &mut SelfIncrement) {
        self.visit_expr(&mut node.operand);
    }
    fn visit_identifier(&mut self, _node: &mut Identifier) {}
    fn visit_bool_const(&mut self, _node: &mut BoolConst) {}
    fn visit_int_const(&mut self, _node: &mut IntConst) {}
    fn visit_string_const(&mut self, _node: &mut StringConst) {}
    fn visit_null_literal(&mut self, _node: &mut NullLiteral) {}

    // Operator-kind markers
    fn visit_binary_op(&mut self, _node: &mut BinaryOp) {}
    fn visit_unary_op(&mut self, _node: &mut UnaryOp) {}

    // Type nodes
    fn visit_type_node(&mut self, node: &mut TypeNode) {
        walk_type_node(self, node);
    }
    fn visit_primitive_type_node(&mut self, _node: &mut PrimitiveTypeNode) {}
    fn visit_array_type_node(&mut self, node: &mut ArrayTypeNode) {
        self.visit_type_node(&mut node.element);
    }
    fn visit_struct_type_node(&mut self, _node: &mut StructTypeNode) {}
    fn visit_function_type_node(&mut self, node: &mut FunctionTypeNode) {
        walk_function_type_node(self, node);
    }
}

pub fn walk_program<V: Visitor>(v: &mut V, node: &mut Program) {
    for decl in &mut node.decls {
        v.visit_decl(decl);
    }
}

pub fn walk_decl<V: Visitor>(v: &mut V, node: &mut Decl) {
    match node {
        Decl::Struct(decl) => v.visit_struct_decl(decl),
        Decl::Variable(decl) => v.visit_variable_decl(decl),
        Decl::Function(decl) => v.visit_function_decl(decl),
    }
}

pub fn walk_struct_decl<V: Visitor>(v: &mut V, node: &mut StructDecl) {
    for field in &mut node.fields {
        v.visit_variable_decl(field);
    }
}

pub fn walk_variable_decl<V: Visitor>(v: &mut V, node: &mut VariableDecl) {
    v.visit_type_node(&mut node.type_node);
    if let Some(init) = &mut node.init {
        v.visit_expr(init);
    }
}

pub fn walk_function_decl<V: Visitor>(v: &mut V, node: &mut FunctionDecl) {
    v.visit_type_node(&mut node.return_type);
    for parameter in &mut node.parameters {
        v.visit_variable_decl(parameter);
    }
    v.visit_compound_stmt(&mut node.body);
}

pub fn walk_stmt<V: Visitor>(v: &mut V, node: &mut Stmt) {
    match node {
        Stmt::Break(span) => v.visit_break_stmt(span),
        Stmt::Continue(span) => v.visit_continue_stmt(span),
        Stmt::Return(stmt) => v.visit_return_stmt(stmt),
        Stmt::Compound(stmt) => v.visit_compound_stmt(stmt),
        Stmt::If(stmt) => v.visit_if_stmt(stmt),
        Stmt::For(stmt) => v.visit_for_loop(stmt),
        Stmt::While(stmt) => v.visit_while_loop(stmt),
        Stmt::VarDecl(decl) => v.visit_variable_decl_stmt(decl),
        Stmt::Expr(expr) => v.visit_expr(expr),
    }
}

pub fn walk_return_stmt<V: Visitor>(v: &mut V, node: &mut ReturnStmt) {
    if let Some(value) = &mut node.value {
        v.visit_expr(value);
    }
}

pub fn walk_compound_stmt<V: Visitor>(v: &mut V, node: &mut CompoundStmt) {
    for stmt in &mut node.stmts {
        v.visit_stmt(stmt);
    }
}

pub fn walk_if_stmt<V: Visitor>(v: &mut V, node: &mut IfStmt) {
    v.visit_expr(&mut node.cond);
    v.visit_stmt(&mut node.then_body);
    if let Some(else_body) = &mut node.else_body {
        v.visit_stmt(else_body);
    }
}

pub fn walk_for_loop<V: Visitor>(v: &mut V, node: &mut ForLoop) {
    if let Some(init) = &mut node.init {
        v.visit_expr(init);
    }
    if let Some(cond) = &mut node.cond {
        v.visit_expr(cond);
    }
    if let Some(step) = &mut node.step {
        v.visit_expr(step);
    }
    v.visit_stmt(&mut node.body);
}

pub fn walk_while_loop<V: Visitor>(v: &mut V, node: &mut WhileLoop) {
    v.visit_expr(&mut node.cond);
    v.visit_stmt(&mut node.body);
}

pub fn walk_expr<V: Visitor>(v: &mut V, node: &mut Expr) {
    match node {
        Expr::ArrayAccess(expr) => v.visit_array_access(expr),
        Expr::Unary(expr) => v.visit_unary_expr(expr),
        Expr::Binary(expr) => v.visit_binary_expr(expr),
        Expr::Empty(expr) => v.visit_empty_expr(expr),
        Expr::FunctionCall(expr) => v.visit_function_call(expr),
        Expr::New(expr) => v.visit_new_expr(expr),
        Expr::Member(expr) => v.visit_member_access(expr),
        Expr::SelfDecrement(expr) => v.visit_self_decrement(expr),
        Expr::SelfIncrement(expr) => v.visit_self_increment(expr),
        Expr::Identifier(expr) => v.visit_identifier(expr),
        Expr::BoolConst(expr) => v.visit_bool_const(expr),
        Expr::IntConst(expr) => v.visit_int_const(expr),
        Expr::StringConst(expr) => v.visit_string_const(expr),
        Expr::NullLiteral(expr) => v.visit_null_literal(expr),
    }
}

pub fn walk_array_access<V: Visitor>(v: &mut V, node: &mut ArrayAccess) {
    v.visit_expr(&mut node.array);
    v.visit_expr(&mut node.index);
}

pub fn walk_unary_expr<V: Visitor>(v: &mut V, node: &mut UnaryExpr) {
    v.visit_unary_op(&mut node.op);
    v.visit_expr(&mut node.operand);
}

pub fn walk_binary_expr<V: Visitor>(v: &mut V, node: &mut BinaryExpr) {
    v.visit_binary_op(&mut node.op);
    v.visit_expr(&mut node.lhs);
    v.visit_expr(&mut node.rhs);
}

pub fn walk_function_call<V: Visitor>(v: &mut V, node: &mut FunctionCall) {
    v.visit_expr(&mut node.callee);
    for arg in &mut node.args {
        v.visit_expr(arg);
    }
}

pub fn walk_new_expr<V: Visitor>(v: &mut V, node: &mut NewExpr) {
    v.visit_type_node(&mut node.type_node);
    for dim in &mut node.dims {
        v.visit_expr(dim);
    }
}

pub fn walk_member_access<V: Visitor>(v: &mut V, node: &mut MemberAccess) {
    v.visit_expr(&mut node.object);
}

pub fn walk_type_node<V: Visitor>(v: &mut V, node: &mut TypeNode) {
    match node {
        TypeNode::Primitive(node) => v.visit_primitive_type_node(node),
        TypeNode::Array(node) => v.visit_array_type_node(node),
        TypeNode::Struct(node) => v.visit_struct_type_node(node),
        TypeNode::Function(node) => v.visit_function_type_node(node),
    }
}

pub fn walk_function_type_node<V: Visitor>(v: &mut V, node: &mut FunctionTypeNode) {
    v.visit_type_node(&mut node.return_type);
    for param in &mut node.params {
        v.visit_type_node(param);
    }
}

//! AST-rewriting passes.
//!
//! Passes here are narrow visitors built on `ast::visit`. They run after
//! declaration resolution and before lowering, and are the only code
//! that mutates the program structurally.

pub mod global_init;

#[cfg(test)]
mod tests;

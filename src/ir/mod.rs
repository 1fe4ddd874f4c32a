//! Intermediate representation module.
//!
//! This module defines the basic-block control-flow graph that lowered
//! function bodies take, and the lowering pass that builds it from the
//! rewritten AST:
//!
//! - basic_block: sealed/open blocks, instructions, terminators, and the
//!   per-function CFG container
//! - lower: statement-granularity lowering of function bodies
//!
//! A block is mutated only through `append` and `seal`; once sealed it is
//! immutable and ends in exactly one terminator, so a malformed CFG is
//! unrepresentable rather than detected later.

pub mod basic_block;
pub mod lower;

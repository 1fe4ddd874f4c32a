//! Semantic analysis module.
//!
//! This module owns the parts of the compiler that give declarations
//! their resolved meaning:
//!
//! - Canonical semantic types (primitives, arrays, structs, functions)
//! - The scope chain used for name resolution and shadowing
//! - The global environment with its type registry and builtin surface
//! - The declaration resolver that maps syntactic type nodes onto
//!   canonical types and populates the root scope
//!
//! One `GlobalEnv` is built per compilation; nothing semantic is shared
//! between compilations running in the same process.

pub mod global;
pub mod resolve;
pub mod scope;
pub mod types;

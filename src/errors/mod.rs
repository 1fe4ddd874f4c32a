//! Error types and error handling for the semantic core.
//!
//! This module defines the error types used throughout the analysis
//! and lowering pipeline. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the semantic passes
//! - Helpful error messages and suggestions
//!
//! Diagnosable errors (undefined types, duplicate declarations, a missing
//! entry point) are values carrying a position and may be batched by the
//! passes that produce them. Internal invariant violations, such as a
//! mutation of a sealed basic block, are not errors in this sense and
//! abort compilation immediately.

pub mod errors;

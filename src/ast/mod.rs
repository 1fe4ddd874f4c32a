/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program and declaration definitions
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - types: Definitions for syntactic type nodes
/// - visit: Traversal framework over the closed node-kind set
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
pub mod visit;

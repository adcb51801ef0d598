//! Abstract Syntax Tree definitions
//!
//! This module defines the AST nodes the checker consumes. The AST is
//! built by an external parser (usually delivered as JSON) and is never
//! mutated by semantic analysis.

pub mod ops;
pub mod expressions;
pub mod statements;
pub mod declarations;

// Re-export commonly used types at module level
pub use ops::BinaryOp;
pub use expressions::{Expression, Lhs};
pub use statements::Statement;
pub use declarations::{FunctionDefinition, Program, StructureDeclaration, VariableDeclaration};

//! Expression semantic analysis
//!
//! This module handles type inference for expressions and for the
//! assignable subset of them.

mod analyzer;
mod binary;
mod lhs;

// Re-export the analyzers
pub use analyzer::ExpressionAnalyzer;
pub use binary::BinaryOperationAnalyzer;
pub use lhs::LhsAnalyzer;

//! minic type checker - Frontend
//!
//! This crate provides the checking half of the minic frontend:
//! - AST: value model handed over by an external parser
//! - Types: the closed set of minic types
//! - Semantic analysis: declaration tables, scopes, expression and
//!   statement checking, whole-program checking

pub mod ast;
pub mod types;
pub mod semantic;

pub use ast::{
    BinaryOp, Expression, FunctionDefinition, Lhs, Program, Statement,
    StructureDeclaration, VariableDeclaration,
};
pub use types::Type;
pub use semantic::{typecheck_program, type_of_closed_expression, TypeChecker, TypeError};

use minic_common::CompilerError;
use serde::de::DeserializeOwned;

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Load a program from its JSON form
    pub fn parse_program_json(source: &str) -> Result<Program, CompilerError> {
        from_json(source)
            .map_err(|e| CompilerError::input_error(format!("invalid program: {e}")))
    }

    /// Load a single expression from its JSON form
    pub fn parse_expression_json(source: &str) -> Result<Expression, CompilerError> {
        from_json(source)
            .map_err(|e| CompilerError::input_error(format!("invalid expression: {e}")))
    }

    /// Check a program, lifting type errors into `CompilerError`
    pub fn check_program(program: &Program) -> Result<TypeChecker, CompilerError> {
        let checker = TypeChecker::new(program)?;
        checker.check_program(program)?;
        Ok(checker)
    }

    /// Load and check a program given as JSON
    pub fn check_program_json(source: &str) -> Result<TypeChecker, CompilerError> {
        let program = Self::parse_program_json(source)?;
        Self::check_program(&program)
    }

    /// Load a closed expression given as JSON and infer its type
    pub fn type_of_expression_json(source: &str) -> Result<Type, CompilerError> {
        let expr = Self::parse_expression_json(source)?;
        Ok(type_of_closed_expression(&expr)?)
    }
}

/// Statement sequences nest two JSON levels per statement, so long bodies
/// exceed serde_json's default depth limit; grow the stack instead
fn from_json<T: DeserializeOwned>(source: &str) -> Result<T, serde_json::Error> {
    let mut json = serde_json::Deserializer::from_str(source);
    json.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}

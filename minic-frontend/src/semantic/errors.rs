//! Semantic analysis error definitions
//!
//! Every way a program can be rejected is its own variant, so callers
//! can match on the kind of failure instead of parsing messages.

use crate::types::Type;
use minic_common::{CompilerError, FieldName, FunctionName, StructureName, Variable};
use thiserror::Error;

/// Type checking errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeError {
    #[error("variable not defined: {name}")]
    UnboundVariable { name: Variable },

    #[error("expected: {expected} got: {found}")]
    TypeMismatch { expected: Type, found: Type },

    #[error("`{name}` has wrong arity: expected {expected} arguments, received {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("function not defined: {name}")]
    UnknownFunction { name: FunctionName },

    #[error("no such structure with name: {name}")]
    UnknownStructure { name: StructureName },

    #[error("structure `{structure}` has no field `{field}`")]
    UnknownField {
        structure: StructureName,
        field: FieldName,
    },

    #[error("expected a pointer; got: {found}")]
    NotAPointer { found: Type },

    #[error("expected a structure; got: {found}")]
    NotAStructure { found: Type },

    #[error("invalid operand of type {operand} for `{operation}`")]
    InvalidOperand { operation: String, operand: Type },

    #[error("duplicate structure name: {name}")]
    DuplicateStructureName { name: StructureName },

    #[error("duplicate field `{field}` in structure `{structure}`")]
    DuplicateFieldName {
        structure: StructureName,
        field: Variable,
    },

    #[error("duplicate function name: {name}")]
    DuplicateFunctionName { name: FunctionName },

    #[error("duplicate parameter `{parameter}` in function `{function}`")]
    DuplicateParameterName {
        function: FunctionName,
        parameter: Variable,
    },

    #[error("field `{field}` of structure `{structure}` has type void")]
    VoidField {
        structure: StructureName,
        field: Variable,
    },

    #[error("parameter `{parameter}` of function `{function}` has type void")]
    VoidParameter {
        function: FunctionName,
        parameter: Variable,
    },

    #[error("variable `{name}` declared with type void")]
    VoidVariable { name: Variable },

    #[error("break outside of loop")]
    BreakOutsideLoop,

    #[error("continue outside of loop")]
    ContinueOutsideLoop,

    #[error("unreachable code after return")]
    UnreachableCode,

    #[error("function `{function}` returning {return_type} may finish without returning a value")]
    MissingReturn {
        function: FunctionName,
        return_type: Type,
    },
}

impl TypeError {
    /// Fail with `TypeMismatch` unless `found` is exactly `expected`
    pub fn ensure_same(expected: &Type, found: &Type) -> Result<(), TypeError> {
        if expected == found {
            Ok(())
        } else {
            Err(TypeError::TypeMismatch {
                expected: expected.clone(),
                found: found.clone(),
            })
        }
    }

    /// Name of the error kind, stable across message wording changes
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeError::UnboundVariable { .. } => "UnboundVariable",
            TypeError::TypeMismatch { .. } => "TypeMismatch",
            TypeError::ArityMismatch { .. } => "ArityMismatch",
            TypeError::UnknownFunction { .. } => "UnknownFunction",
            TypeError::UnknownStructure { .. } => "UnknownStructure",
            TypeError::UnknownField { .. } => "UnknownField",
            TypeError::NotAPointer { .. } => "NotAPointer",
            TypeError::NotAStructure { .. } => "NotAStructure",
            TypeError::InvalidOperand { .. } => "InvalidOperand",
            TypeError::DuplicateStructureName { .. } => "DuplicateStructureName",
            TypeError::DuplicateFieldName { .. } => "DuplicateFieldName",
            TypeError::DuplicateFunctionName { .. } => "DuplicateFunctionName",
            TypeError::DuplicateParameterName { .. } => "DuplicateParameterName",
            TypeError::VoidField { .. } => "VoidField",
            TypeError::VoidParameter { .. } => "VoidParameter",
            TypeError::VoidVariable { .. } => "VoidVariable",
            TypeError::BreakOutsideLoop => "BreakOutsideLoop",
            TypeError::ContinueOutsideLoop => "ContinueOutsideLoop",
            TypeError::UnreachableCode => "UnreachableCode",
            TypeError::MissingReturn { .. } => "MissingReturn",
        }
    }
}

impl From<TypeError> for CompilerError {
    fn from(err: TypeError) -> Self {
        CompilerError::type_error(err.kind_name(), err.to_string())
    }
}

//! Top-level declarations and whole programs

use super::statements::Statement;
use crate::types::Type;
use minic_common::{FunctionName, StructureName, Variable};
use serde::{Deserialize, Serialize};

/// `type name`, used for locals, parameters and structure fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub var_type: Type,
    pub name: Variable,
}

impl VariableDeclaration {
    pub fn new(var_type: Type, name: impl Into<Variable>) -> Self {
        Self {
            var_type,
            name: name.into(),
        }
    }
}

/// `Name { fields }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureDeclaration {
    pub name: StructureName,
    pub fields: Vec<VariableDeclaration>,
}

impl StructureDeclaration {
    pub fn new(name: impl Into<StructureName>, fields: Vec<VariableDeclaration>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Function definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub return_type: Type,
    pub name: FunctionName,
    pub parameters: Vec<VariableDeclaration>,
    pub body: Statement,
}

impl FunctionDefinition {
    pub fn new(
        return_type: Type,
        name: impl Into<FunctionName>,
        parameters: Vec<VariableDeclaration>,
        body: Statement,
    ) -> Self {
        Self {
            return_type,
            name: name.into(),
            parameters,
            body,
        }
    }
}

/// A whole program as handed over by the parser
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub structures: Vec<StructureDeclaration>,
    #[serde(default)]
    pub functions: Vec<FunctionDefinition>,
}

impl Program {
    pub fn new(structures: Vec<StructureDeclaration>, functions: Vec<FunctionDefinition>) -> Self {
        Self {
            structures,
            functions,
        }
    }
}

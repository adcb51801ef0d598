//! Declaration tables
//!
//! Structure and function shapes are collected once per program, before
//! any body is checked, so declarations may reference each other in any
//! order.

use crate::ast::{FunctionDefinition, StructureDeclaration, VariableDeclaration};
use crate::semantic::errors::TypeError;
use crate::Type;
use indexmap::IndexMap;
use log::trace;
use minic_common::{FieldName, FunctionName, StructureName};
use std::collections::{HashMap, HashSet};

/// Fields of one structure, in declaration order
pub type FieldTable = IndexMap<FieldName, Type>;

/// Structure name -> fields
#[derive(Debug, Clone, Default)]
pub struct StructureTable {
    structures: HashMap<StructureName, FieldTable>,
}

impl StructureTable {
    /// Build the table, rejecting duplicate structures, duplicate fields
    /// and `void` fields
    pub fn build(declarations: &[StructureDeclaration]) -> Result<Self, TypeError> {
        let mut structures = HashMap::with_capacity(declarations.len());

        for decl in declarations {
            if structures.contains_key(&decl.name) {
                return Err(TypeError::DuplicateStructureName {
                    name: decl.name.clone(),
                });
            }

            let mut fields = FieldTable::with_capacity(decl.fields.len());
            for field in &decl.fields {
                if field.var_type.is_void() {
                    return Err(TypeError::VoidField {
                        structure: decl.name.clone(),
                        field: field.name.clone(),
                    });
                }
                if fields.insert(FieldName::from(&field.name), field.var_type.clone()).is_some() {
                    return Err(TypeError::DuplicateFieldName {
                        structure: decl.name.clone(),
                        field: field.name.clone(),
                    });
                }
            }

            trace!("Registered structure {} with {} fields", decl.name, fields.len());
            structures.insert(decl.name.clone(), fields);
        }

        Ok(Self { structures })
    }

    pub fn fields(&self, name: &StructureName) -> Result<&FieldTable, TypeError> {
        self.structures
            .get(name)
            .ok_or_else(|| TypeError::UnknownStructure { name: name.clone() })
    }

    /// Declared type of `structure.field`
    pub fn field_type(&self, structure: &StructureName, field: &FieldName) -> Result<&Type, TypeError> {
        self.fields(structure)?
            .get(field)
            .ok_or_else(|| TypeError::UnknownField {
                structure: structure.clone(),
                field: field.clone(),
            })
    }

    /// Structures sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&StructureName, &FieldTable)> {
        let mut entries: Vec<_> = self.structures.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
}

/// Parameter types and return type of a function
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub parameters: Vec<Type>,
    pub return_type: Type,
}

/// Function name -> signature
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<FunctionName, FunctionSignature>,
}

impl FunctionTable {
    /// Build the table, rejecting duplicate functions, `void` parameters
    /// and duplicate parameter names
    pub fn build(definitions: &[FunctionDefinition]) -> Result<Self, TypeError> {
        let mut functions = HashMap::with_capacity(definitions.len());

        for def in definitions {
            if functions.contains_key(&def.name) {
                return Err(TypeError::DuplicateFunctionName {
                    name: def.name.clone(),
                });
            }

            validate_parameters(&def.name, &def.parameters)?;

            let signature = FunctionSignature {
                parameters: def.parameters.iter().map(|p| p.var_type.clone()).collect(),
                return_type: def.return_type.clone(),
            };
            trace!("Registered function {} with {} parameters", def.name, signature.parameters.len());
            functions.insert(def.name.clone(), signature);
        }

        Ok(Self { functions })
    }

    pub fn signature(&self, name: &FunctionName) -> Result<&FunctionSignature, TypeError> {
        self.functions
            .get(name)
            .ok_or_else(|| TypeError::UnknownFunction { name: name.clone() })
    }

    /// Functions sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&FunctionName, &FunctionSignature)> {
        let mut entries: Vec<_> = self.functions.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

fn validate_parameters(function: &FunctionName, parameters: &[VariableDeclaration]) -> Result<(), TypeError> {
    let mut seen = HashSet::with_capacity(parameters.len());
    for param in parameters {
        if param.var_type.is_void() {
            return Err(TypeError::VoidParameter {
                function: function.clone(),
                parameter: param.name.clone(),
            });
        }
        if !seen.insert(&param.name) {
            return Err(TypeError::DuplicateParameterName {
                function: function.clone(),
                parameter: param.name.clone(),
            });
        }
    }
    Ok(())
}

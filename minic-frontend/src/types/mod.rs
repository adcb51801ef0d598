//! Type system definitions
//!
//! The checked language has a closed set of types: the three scalars,
//! `void`, pointers and named structures. Equality is structural.

use minic_common::StructureName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// minic type system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Void type, legal only as a return type or a pointee
    Void,
    Int,
    Char,
    Bool,

    /// Pointer to another type
    Pointer(Box<Type>),

    /// Named structure, resolved through the structure table
    Structure(StructureName),
}

impl Type {
    /// Build `T*`
    pub fn pointer_to(target: Type) -> Self {
        Type::Pointer(Box::new(target))
    }

    /// `void*`, the type of `malloc` and the operand of `free`
    pub fn void_pointer() -> Self {
        Type::pointer_to(Type::Void)
    }

    pub fn structure(name: impl Into<StructureName>) -> Self {
        Type::Structure(name.into())
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// Get the structure name if this is a structure type
    pub fn structure_name(&self) -> Option<&StructureName> {
        match self {
            Type::Structure(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Int => write!(f, "int"),
            Type::Char => write!(f, "char"),
            Type::Bool => write!(f, "bool"),
            Type::Pointer(target) => write!(f, "{target}*"),
            Type::Structure(name) => write!(f, "struct {name}"),
        }
    }
}

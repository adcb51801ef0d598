//! Identifier types used throughout the checker
//!
//! Variables, structures, functions and fields live in separate
//! namespaces, so each gets its own newtype around the spelled name.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }
    };
}

identifier!(
    /// Name of a local variable, parameter or structure field declaration
    Variable
);

identifier!(
    /// Name of a declared structure
    StructureName
);

identifier!(
    /// Name of a declared function
    FunctionName
);

identifier!(
    /// Name of a field in a field access (`e.field`)
    FieldName
);

impl From<Variable> for FieldName {
    fn from(variable: Variable) -> Self {
        FieldName(variable.0)
    }
}

impl From<&Variable> for FieldName {
    fn from(variable: &Variable) -> Self {
        FieldName(variable.0.clone())
    }
}

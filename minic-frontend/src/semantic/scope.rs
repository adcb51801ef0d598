//! Type environment for one function body
//!
//! A `Scope` is a persistent value: `extended` copies the bindings and
//! returns a new scope, so a scope handed to one branch of an `if` or to
//! a loop body can never leak bindings into its siblings.

use crate::ast::VariableDeclaration;
use crate::semantic::errors::TypeError;
use crate::Type;
use minic_common::Variable;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Scope {
    variables: Rc<HashMap<Variable, Type>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope holding the parameters of a function
    pub fn from_parameters(parameters: &[VariableDeclaration]) -> Self {
        let variables = parameters
            .iter()
            .map(|p| (p.name.clone(), p.var_type.clone()))
            .collect();
        Self {
            variables: Rc::new(variables),
        }
    }

    /// New scope with `name` bound to `var_type`; a previous binding of
    /// the same name is shadowed
    pub fn extended(&self, name: Variable, var_type: Type) -> Self {
        let mut variables = HashMap::clone(&self.variables);
        variables.insert(name, var_type);
        Self {
            variables: Rc::new(variables),
        }
    }

    pub fn lookup(&self, name: &Variable) -> Result<&Type, TypeError> {
        self.variables
            .get(name)
            .ok_or_else(|| TypeError::UnboundVariable { name: name.clone() })
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

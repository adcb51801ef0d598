//! Type inference for assignable expressions

use crate::ast::Lhs;
use crate::semantic::errors::TypeError;
use crate::semantic::scope::Scope;
use crate::semantic::symbols::StructureTable;
use crate::Type;

pub struct LhsAnalyzer<'a> {
    pub structures: &'a StructureTable,
}

impl<'a> LhsAnalyzer<'a> {
    pub fn new(structures: &'a StructureTable) -> Self {
        Self { structures }
    }

    /// Type of the location named by `lhs`
    pub fn type_of_lhs(&self, scope: &Scope, lhs: &Lhs) -> Result<Type, TypeError> {
        match lhs {
            Lhs::Variable(name) => scope.lookup(name).cloned(),

            Lhs::FieldAccess { base, field } => {
                let base_type = self.type_of_lhs(scope, base)?;
                let structure = base_type
                    .structure_name()
                    .ok_or_else(|| TypeError::NotAStructure { found: base_type.clone() })?;
                self.structures.field_type(structure, field).cloned()
            }

            Lhs::Dereference(base) => match self.type_of_lhs(scope, base)? {
                Type::Pointer(target) => Ok(*target),
                other => Err(TypeError::NotAPointer { found: other }),
            },
        }
    }
}

//! Main expression analyzer that coordinates all expression analysis

use crate::ast::*;
use crate::semantic::errors::TypeError;
use crate::semantic::scope::Scope;
use crate::semantic::symbols::{FunctionTable, StructureTable};
use crate::Type;
use log::trace;

use super::binary::BinaryOperationAnalyzer;
use super::lhs::LhsAnalyzer;

pub struct ExpressionAnalyzer<'a> {
    pub structures: &'a StructureTable,
    pub functions: &'a FunctionTable,
}

impl<'a> ExpressionAnalyzer<'a> {
    pub fn new(structures: &'a StructureTable, functions: &'a FunctionTable) -> Self {
        Self {
            structures,
            functions,
        }
    }

    /// Infer the type of an expression
    pub fn type_of(&self, scope: &Scope, expr: &Expression) -> Result<Type, TypeError> {
        let expr_type = match expr {
            Expression::IntLiteral(_) => Type::Int,
            Expression::CharLiteral(_) => Type::Char,
            Expression::BoolLiteral(_) => Type::Bool,

            Expression::Variable(name) => scope.lookup(name)?.clone(),

            Expression::Malloc(amount) => {
                let amount_type = self.type_of(scope, amount)?;
                TypeError::ensure_same(&Type::Int, &amount_type)?;
                Type::void_pointer()
            }

            Expression::Free(value) => {
                self.check_freeable(scope, value)?;
                Type::Void
            }

            Expression::Sizeof(_) => Type::Int,

            Expression::Binary { op, left, right } => {
                let left_type = self.type_of(scope, left)?;
                let right_type = self.type_of(scope, right)?;
                BinaryOperationAnalyzer::analyze(*op, &left_type, &right_type)?
            }

            Expression::MakeStructure { name, arguments } => {
                let fields = self.structures.fields(name)?;
                let field_types: Vec<&Type> = fields.values().collect();
                self.check_arguments(scope, name.as_str(), &field_types, arguments)?;
                Type::Structure(name.clone())
            }

            Expression::Call { function, arguments } => {
                let signature = self.functions.signature(function)?;
                let parameter_types: Vec<&Type> = signature.parameters.iter().collect();
                self.check_arguments(scope, function.as_str(), &parameter_types, arguments)?;
                signature.return_type.clone()
            }

            Expression::Cast { target_type, operand } => {
                // The operand only has to be well-typed; the conversion itself is trusted
                self.type_of(scope, operand)?;
                target_type.clone()
            }

            Expression::AddressOf(lhs) => {
                let target = LhsAnalyzer::new(self.structures).type_of_lhs(scope, lhs)?;
                Type::pointer_to(target)
            }

            Expression::Dereference(operand) => match self.type_of(scope, operand)? {
                Type::Pointer(target) => *target,
                other => return Err(TypeError::NotAPointer { found: other }),
            },

            Expression::FieldAccess { object, field } => {
                let object_type = self.type_of(scope, object)?;
                let structure = object_type
                    .structure_name()
                    .ok_or_else(|| TypeError::NotAStructure { found: object_type.clone() })?;
                self.structures.field_type(structure, field)?.clone()
            }
        };

        trace!("{expr:?} : {expr_type}");
        Ok(expr_type)
    }

    /// Operand rule shared by the expression and statement forms of `free`
    pub fn check_freeable(&self, scope: &Scope, value: &Expression) -> Result<(), TypeError> {
        let value_type = self.type_of(scope, value)?;
        TypeError::ensure_same(&Type::void_pointer(), &value_type)
    }

    /// Positional check of call or construction arguments
    fn check_arguments(
        &self,
        scope: &Scope,
        name: &str,
        expected: &[&Type],
        arguments: &[Expression],
    ) -> Result<(), TypeError> {
        if expected.len() != arguments.len() {
            return Err(TypeError::ArityMismatch {
                name: name.to_string(),
                expected: expected.len(),
                found: arguments.len(),
            });
        }

        for (arg, expected_type) in arguments.iter().zip(expected) {
            let arg_type = self.type_of(scope, arg)?;
            TypeError::ensure_same(expected_type, &arg_type)?;
        }

        Ok(())
    }
}

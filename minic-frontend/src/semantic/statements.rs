//! Statement semantic analysis
//!
//! Statements are checked against a scope that is threaded forward
//! through sequences. Alongside the resulting scope every statement
//! reports whether it definitely returns, which drives the
//! missing-return and unreachable-code checks.

use crate::ast::*;
use crate::semantic::errors::TypeError;
use crate::semantic::expressions::{ExpressionAnalyzer, LhsAnalyzer};
use crate::semantic::scope::Scope;
use crate::Type;
use log::trace;

/// Result of checking one statement
#[derive(Debug, Clone)]
pub struct StatementOutcome {
    /// Scope visible to the statement sequenced after this one
    pub scope: Scope,
    /// Every path through the statement ends in `return`
    pub returns: bool,
}

impl StatementOutcome {
    fn falls_through(scope: Scope) -> Self {
        Self {
            scope,
            returns: false,
        }
    }

    fn returned(scope: Scope) -> Self {
        Self {
            scope,
            returns: true,
        }
    }
}

pub struct StatementAnalyzer<'a> {
    pub expressions: ExpressionAnalyzer<'a>,
    /// Declared return type of the enclosing function
    pub return_type: &'a Type,
}

impl<'a> StatementAnalyzer<'a> {
    pub fn new(expressions: ExpressionAnalyzer<'a>, return_type: &'a Type) -> Self {
        Self {
            expressions,
            return_type,
        }
    }

    /// Analyze a statement
    pub fn analyze_statement(
        &self,
        scope: &Scope,
        in_loop: bool,
        stmt: &Statement,
    ) -> Result<StatementOutcome, TypeError> {
        match stmt {
            Statement::Expression(expr) => {
                self.expressions.type_of(scope, expr)?;
                Ok(StatementOutcome::falls_through(scope.clone()))
            }

            Statement::VariableDeclaration { declaration, initializer } => {
                if declaration.var_type.is_void() {
                    return Err(TypeError::VoidVariable {
                        name: declaration.name.clone(),
                    });
                }
                let init_type = self.expressions.type_of(scope, initializer)?;
                TypeError::ensure_same(&declaration.var_type, &init_type)?;

                trace!("Declared {}: {}", declaration.name, declaration.var_type);
                let extended = scope.extended(declaration.name.clone(), declaration.var_type.clone());
                Ok(StatementOutcome::falls_through(extended))
            }

            Statement::Assignment { target, value } => {
                let target_type = LhsAnalyzer::new(self.expressions.structures).type_of_lhs(scope, target)?;
                let value_type = self.expressions.type_of(scope, value)?;
                TypeError::ensure_same(&target_type, &value_type)?;
                Ok(StatementOutcome::falls_through(scope.clone()))
            }

            Statement::If { condition, then_stmt, else_stmt } => {
                self.check_condition(scope, condition)?;

                // Branches start from the same scope and their bindings die with them
                let then_outcome = self.analyze_statement(scope, in_loop, then_stmt)?;
                let else_outcome = self.analyze_statement(scope, in_loop, else_stmt)?;

                Ok(StatementOutcome {
                    scope: scope.clone(),
                    returns: then_outcome.returns && else_outcome.returns,
                })
            }

            Statement::While { condition, body } => {
                self.check_condition(scope, condition)?;

                // The guard may be false on entry, so a loop never definitely returns
                self.analyze_statement(scope, true, body)?;
                Ok(StatementOutcome::falls_through(scope.clone()))
            }

            Statement::Break => {
                if !in_loop {
                    return Err(TypeError::BreakOutsideLoop);
                }
                Ok(StatementOutcome::falls_through(scope.clone()))
            }

            Statement::Continue => {
                if !in_loop {
                    return Err(TypeError::ContinueOutsideLoop);
                }
                Ok(StatementOutcome::falls_through(scope.clone()))
            }

            Statement::ReturnVoid => {
                TypeError::ensure_same(self.return_type, &Type::Void)?;
                Ok(StatementOutcome::returned(scope.clone()))
            }

            Statement::Return(value) => {
                let value_type = self.expressions.type_of(scope, value)?;
                TypeError::ensure_same(self.return_type, &value_type)?;
                Ok(StatementOutcome::returned(scope.clone()))
            }

            Statement::Free(value) => {
                self.expressions.check_freeable(scope, value)?;
                Ok(StatementOutcome::falls_through(scope.clone()))
            }

            Statement::Sequence(first, second) => {
                let first_outcome = self.analyze_statement(scope, in_loop, first)?;
                if first_outcome.returns {
                    return Err(TypeError::UnreachableCode);
                }
                self.analyze_statement(&first_outcome.scope, in_loop, second)
            }
        }
    }

    fn check_condition(&self, scope: &Scope, condition: &Expression) -> Result<(), TypeError> {
        let condition_type = self.expressions.type_of(scope, condition)?;
        TypeError::ensure_same(&Type::Bool, &condition_type)
    }
}

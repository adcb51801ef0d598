//! Semantic Analysis
//!
//! Performs type checking, scope resolution and control-flow validation
//! on a parsed program. Checking is fail-fast: the first error aborts
//! the whole program.

pub mod errors;
pub mod expressions;
pub mod scope;
pub mod statements;
pub mod symbols;

use crate::ast::*;
use crate::Type;
use log::debug;

pub use errors::TypeError;
pub use expressions::{ExpressionAnalyzer, LhsAnalyzer};
pub use scope::Scope;
pub use statements::{StatementAnalyzer, StatementOutcome};
pub use symbols::{FieldTable, FunctionSignature, FunctionTable, StructureTable};

/// Program-level checker holding the declaration tables of one program
#[derive(Debug, Clone, Default)]
pub struct TypeChecker {
    structures: StructureTable,
    functions: FunctionTable,
}

impl TypeChecker {
    /// Build the declaration tables for `program`
    pub fn new(program: &Program) -> Result<Self, TypeError> {
        // First pass: collect every structure and function shape
        let structures = StructureTable::build(&program.structures)?;
        let functions = FunctionTable::build(&program.functions)?;
        debug!(
            "Collected {} structures and {} functions",
            structures.len(),
            functions.len()
        );

        Ok(Self {
            structures,
            functions,
        })
    }

    /// Check every function body of `program` against the tables
    pub fn check_program(&self, program: &Program) -> Result<(), TypeError> {
        // Second pass: analyze function bodies
        for func in &program.functions {
            self.check_function(func)?;
        }
        Ok(())
    }

    /// Check one function body against its declared signature
    pub fn check_function(&self, func: &FunctionDefinition) -> Result<(), TypeError> {
        debug!("Checking function {} -> {}", func.name, func.return_type);

        let scope = Scope::from_parameters(&func.parameters);
        let analyzer = StatementAnalyzer::new(self.expression_analyzer(), &func.return_type);
        let outcome = analyzer.analyze_statement(&scope, false, &func.body)?;

        if !func.return_type.is_void() && !outcome.returns {
            return Err(TypeError::MissingReturn {
                function: func.name.clone(),
                return_type: func.return_type.clone(),
            });
        }
        Ok(())
    }

    /// Infer the type of an expression under `scope` and this program's tables
    pub fn type_of(&self, scope: &Scope, expr: &Expression) -> Result<Type, TypeError> {
        self.expression_analyzer().type_of(scope, expr)
    }

    pub fn structures(&self) -> &StructureTable {
        &self.structures
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    fn expression_analyzer(&self) -> ExpressionAnalyzer<'_> {
        ExpressionAnalyzer::new(&self.structures, &self.functions)
    }
}

/// Check a whole program; `Ok(())` means it is well-typed
pub fn typecheck_program(program: &Program) -> Result<(), TypeError> {
    TypeChecker::new(program)?.check_program(program)
}

/// Infer the type of an expression with no variables, structures or
/// functions in scope
pub fn type_of_closed_expression(expr: &Expression) -> Result<Type, TypeError> {
    TypeChecker::default().type_of(&Scope::new(), expr)
}

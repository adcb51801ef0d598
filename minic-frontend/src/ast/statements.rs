//! Statement AST nodes
//!
//! Blocks do not exist as a node of their own: a body is a right-nested
//! chain of `Sequence` statements.

use super::declarations::VariableDeclaration;
use super::expressions::{Expression, Lhs};
use crate::types::Type;
use minic_common::Variable;
use serde::{Deserialize, Serialize};

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Expression statement
    Expression(Expression),

    /// Variable declaration with its mandatory initializer
    VariableDeclaration {
        declaration: VariableDeclaration,
        initializer: Expression,
    },

    /// `target = value;`
    Assignment {
        target: Lhs,
        value: Expression,
    },

    /// If statement; both branches are required
    If {
        condition: Expression,
        then_stmt: Box<Statement>,
        else_stmt: Box<Statement>,
    },

    /// While loop
    While {
        condition: Expression,
        body: Box<Statement>,
    },

    /// Break statement
    Break,

    /// Continue statement
    Continue,

    /// `return;`
    ReturnVoid,

    /// `return value;`
    Return(Expression),

    /// `free(value);`
    Free(Expression),

    /// `first; second`
    Sequence(Box<Statement>, Box<Statement>),
}

impl Statement {
    pub fn expression(expr: Expression) -> Self {
        Statement::Expression(expr)
    }

    pub fn declare(var_type: Type, name: impl Into<Variable>, initializer: Expression) -> Self {
        Statement::VariableDeclaration {
            declaration: VariableDeclaration::new(var_type, name),
            initializer,
        }
    }

    pub fn assign(target: Lhs, value: Expression) -> Self {
        Statement::Assignment { target, value }
    }

    pub fn if_else(condition: Expression, then_stmt: Statement, else_stmt: Statement) -> Self {
        Statement::If {
            condition,
            then_stmt: Box::new(then_stmt),
            else_stmt: Box::new(else_stmt),
        }
    }

    pub fn while_loop(condition: Expression, body: Statement) -> Self {
        Statement::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn ret(value: Expression) -> Self {
        Statement::Return(value)
    }

    pub fn free(value: Expression) -> Self {
        Statement::Free(value)
    }

    /// Chain statements into right-nested sequences: `first; rest...`
    pub fn sequence(first: Statement, rest: impl IntoIterator<Item = Statement>) -> Self {
        let mut statements: Vec<Statement> = rest.into_iter().collect();
        let Some(mut result) = statements.pop() else {
            return first;
        };
        while let Some(stmt) = statements.pop() {
            result = Statement::Sequence(Box::new(stmt), Box::new(result));
        }
        Statement::Sequence(Box::new(first), Box::new(result))
    }
}

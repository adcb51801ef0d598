//! Expression AST nodes
//!
//! This module defines expression nodes and the assignable subset of
//! them (`Lhs`).

use crate::types::Type;
use super::ops::BinaryOp;
use minic_common::{FieldName, FunctionName, StructureName, Variable};
use serde::{Deserialize, Serialize};

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Integer literal
    IntLiteral(i64),

    /// Character literal
    CharLiteral(char),

    /// Boolean literal
    BoolLiteral(bool),

    /// Variable reference
    Variable(Variable),

    /// `malloc(amount)`
    Malloc(Box<Expression>),

    /// `free(value)` used as an expression; evaluates to void
    Free(Box<Expression>),

    /// `sizeof(type)`
    Sizeof(Type),

    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Structure construction `Name(args)`
    MakeStructure {
        name: StructureName,
        arguments: Vec<Expression>,
    },

    /// Function call `name(args)`
    Call {
        function: FunctionName,
        arguments: Vec<Expression>,
    },

    /// Explicit cast `(type) operand`
    Cast {
        target_type: Type,
        operand: Box<Expression>,
    },

    /// `&lhs`
    AddressOf(Lhs),

    /// `*operand`
    Dereference(Box<Expression>),

    /// `object.field`
    FieldAccess {
        object: Box<Expression>,
        field: FieldName,
    },
}

impl Expression {
    pub fn int(value: i64) -> Self {
        Expression::IntLiteral(value)
    }

    pub fn char(value: char) -> Self {
        Expression::CharLiteral(value)
    }

    pub fn bool(value: bool) -> Self {
        Expression::BoolLiteral(value)
    }

    pub fn var(name: impl Into<Variable>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn malloc(amount: Expression) -> Self {
        Expression::Malloc(Box::new(amount))
    }

    pub fn free(value: Expression) -> Self {
        Expression::Free(Box::new(value))
    }

    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn make_structure(name: impl Into<StructureName>, arguments: Vec<Expression>) -> Self {
        Expression::MakeStructure {
            name: name.into(),
            arguments,
        }
    }

    pub fn call(function: impl Into<FunctionName>, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            function: function.into(),
            arguments,
        }
    }

    pub fn cast(target_type: Type, operand: Expression) -> Self {
        Expression::Cast {
            target_type,
            operand: Box::new(operand),
        }
    }

    pub fn address_of(lhs: Lhs) -> Self {
        Expression::AddressOf(lhs)
    }

    pub fn deref(operand: Expression) -> Self {
        Expression::Dereference(Box::new(operand))
    }

    pub fn field(object: Expression, field: impl Into<FieldName>) -> Self {
        Expression::FieldAccess {
            object: Box::new(object),
            field: field.into(),
        }
    }
}

/// Assignable expressions: the left of `=` and the operand of `&`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Lhs {
    Variable(Variable),

    FieldAccess {
        base: Box<Lhs>,
        field: FieldName,
    },

    Dereference(Box<Lhs>),
}

impl Lhs {
    pub fn var(name: impl Into<Variable>) -> Self {
        Lhs::Variable(name.into())
    }

    pub fn field(base: Lhs, field: impl Into<FieldName>) -> Self {
        Lhs::FieldAccess {
            base: Box::new(base),
            field: field.into(),
        }
    }

    pub fn deref(base: Lhs) -> Self {
        Lhs::Dereference(Box::new(base))
    }

    /// Read this location as an ordinary expression
    pub fn to_expression(&self) -> Expression {
        match self {
            Lhs::Variable(name) => Expression::Variable(name.clone()),
            Lhs::FieldAccess { base, field } => Expression::field(base.to_expression(), field.clone()),
            Lhs::Dereference(base) => Expression::deref(base.to_expression()),
        }
    }
}

impl From<Lhs> for Expression {
    fn from(lhs: Lhs) -> Self {
        lhs.to_expression()
    }
}

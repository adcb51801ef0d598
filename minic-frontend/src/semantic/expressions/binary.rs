//! Binary expression operations and type checking

use crate::ast::BinaryOp;
use crate::semantic::errors::TypeError;
use crate::Type;

pub struct BinaryOperationAnalyzer;

impl BinaryOperationAnalyzer {
    /// Analyze binary operation on already inferred operand types and
    /// return the result type
    pub fn analyze(op: BinaryOp, left_type: &Type, right_type: &Type) -> Result<Type, TypeError> {
        match op {
            BinaryOp::Add => Self::analyze_addition(left_type, right_type),

            BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                TypeError::ensure_same(&Type::Int, left_type)?;
                TypeError::ensure_same(&Type::Int, right_type)?;
                Ok(Type::Int)
            }

            BinaryOp::Equal => {
                TypeError::ensure_same(left_type, right_type)?;
                Ok(Type::Bool)
            }

            BinaryOp::Less => {
                TypeError::ensure_same(&Type::Int, left_type)?;
                TypeError::ensure_same(&Type::Int, right_type)?;
                Ok(Type::Bool)
            }
        }
    }

    /// `int + int` and pointer arithmetic `T* + int`
    fn analyze_addition(left_type: &Type, right_type: &Type) -> Result<Type, TypeError> {
        let result = match left_type {
            Type::Int | Type::Pointer(_) => left_type.clone(),
            _ => {
                return Err(TypeError::InvalidOperand {
                    operation: BinaryOp::Add.to_string(),
                    operand: left_type.clone(),
                })
            }
        };
        TypeError::ensure_same(&Type::Int, right_type)?;
        Ok(result)
    }
}

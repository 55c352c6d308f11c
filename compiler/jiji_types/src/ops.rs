//! Operator rules for the primitive types.
//!
//! Uses direct enum-based dispatch for the fixed set of built-in operators.
//! Equality is handled by the checker itself: any two values of the same
//! type can be compared with `==` and `!=`.

use jiji_ir::{BinaryOp, Type, UnaryOp};

/// What each type supports.
pub trait TypeOps: Copy {
    /// The result of applying a prefix operator, if the type supports it.
    fn unary_op(self, op: UnaryOp) -> Option<Self>;

    /// The result of an arithmetic or concatenation operator with `rhs`.
    ///
    /// Equality and comparison operators always return `None` here.
    fn basic_binary_op(self, op: BinaryOp, rhs: Self) -> Option<Self>;

    /// Whether `<`, `<=`, `>` and `>=` may compare `self` against `rhs`.
    fn is_orderable_against(self, rhs: Self) -> bool;
}

impl TypeOps for Type {
    fn unary_op(self, op: UnaryOp) -> Option<Type> {
        match (op, self) {
            (UnaryOp::Not, Type::Bool) => Some(Type::Bool),
            (UnaryOp::Neg | UnaryOp::Pos, ty) if ty.is_numeric() => Some(ty),
            _ => None,
        }
    }

    fn basic_binary_op(self, op: BinaryOp, rhs: Type) -> Option<Type> {
        match (self, op, rhs) {
            (
                Type::Int,
                BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod,
                Type::Int,
            ) => Some(Type::Int),
            (
                Type::Float,
                BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod,
                Type::Float,
            ) => Some(Type::Float),
            (Type::String, BinaryOp::Concat, Type::String) => Some(Type::String),
            _ => None,
        }
    }

    fn is_orderable_against(self, rhs: Type) -> bool {
        matches!((self, rhs), (Type::Int, Type::Int) | (Type::Float, Type::Float))
    }
}

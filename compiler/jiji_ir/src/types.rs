//! Primitive types of the Jiji language.
//!
//! The type universe is closed: five primitives, no user-defined types.
//! Types compare by value, so there is exactly one `Int`.

use std::fmt;

/// A Jiji type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// The type of statements, blocks without a trailing expression and
    /// `if`s without an `else`.
    Unit,
    Int,
    Float,
    Bool,
    String,
}

impl Type {
    /// Every type, in declaration order.
    pub const ALL: [Type; 5] = [Type::Unit, Type::Int, Type::Float, Type::Bool, Type::String];

    /// The name used to spell this type in source.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Unit => "Unit",
            Type::Int => "Int",
            Type::Float => "Float",
            Type::Bool => "Bool",
            Type::String => "String",
        }
    }

    /// Look up a type by the name used in a `let` ascription.
    pub fn from_name(name: &str) -> Option<Type> {
        Type::ALL.into_iter().find(|ty| ty.name() == name)
    }

    /// `Int` or `Float`.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

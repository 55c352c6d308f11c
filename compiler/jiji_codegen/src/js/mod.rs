//! JavaScript emission.
//!
//! Each expression lowers to a [`Lowered`] pair: statements that must run
//! first, and a side-effect-free expression denoting the value. Blocks
//! and `if`s used as values are hoisted into temporaries.

mod expr;
mod stmt;

use jiji_ir::BinaryOp;

/// Where a statement appears.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum StmtPosition {
    /// Directly in the module body; non-`Unit` values are printed.
    TopLevel,
    /// Inside a block; only side effects are kept.
    Nested,
}

/// A lowered expression.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Lowered {
    /// Statements to run before `result` is evaluated.
    pub side_effects: String,
    /// A pure JavaScript expression for the value.
    pub result: String,
    /// JavaScript binding strength of `result`'s outermost operator.
    pub prec: u8,
}

impl Lowered {
    /// A result with no side effects.
    pub fn pure(result: impl Into<String>, prec: u8) -> Self {
        Lowered {
            side_effects: String::new(),
            result: result.into(),
            prec,
        }
    }

    /// `result`, parenthesized if it binds looser than `min`.
    fn operand(&self, min: u8) -> String {
        if self.prec < min {
            format!("({})", self.result)
        } else {
            self.result.clone()
        }
    }
}

/// JavaScript operator precedence levels used by the emitter.
pub(crate) mod prec {
    pub const EQUALITY: u8 = 8;
    pub const RELATIONAL: u8 = 9;
    pub const ADDITIVE: u8 = 11;
    pub const MULTIPLICATIVE: u8 = 12;
    pub const UNARY: u8 = 14;
    /// Literals, identifiers, calls and parenthesized expressions.
    pub const ATOM: u8 = u8::MAX;
}

/// The JavaScript spelling and precedence of a binary operator.
fn js_binary_op(op: BinaryOp) -> (&'static str, u8) {
    match op {
        BinaryOp::Eq => ("===", prec::EQUALITY),
        BinaryOp::NotEq => ("!==", prec::EQUALITY),
        BinaryOp::Lt => ("<", prec::RELATIONAL),
        BinaryOp::LtEq => ("<=", prec::RELATIONAL),
        BinaryOp::Gt => (">", prec::RELATIONAL),
        BinaryOp::GtEq => (">=", prec::RELATIONAL),
        BinaryOp::Add | BinaryOp::Concat => ("+", prec::ADDITIVE),
        BinaryOp::Sub => ("-", prec::ADDITIVE),
        BinaryOp::Mul => ("*", prec::MULTIPLICATIVE),
        BinaryOp::Div => ("/", prec::MULTIPLICATIVE),
        BinaryOp::Mod => ("%", prec::MULTIPLICATIVE),
    }
}

/// Render a float literal.
///
/// `{:?}` always keeps a fractional part or exponent and round-trips
/// through JavaScript's number parser.
fn float_literal(value: f64) -> String {
    if value.is_infinite() {
        "Infinity".to_string()
    } else {
        format!("{value:?}")
    }
}

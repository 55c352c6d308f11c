//! Jiji IR - Intermediate Representation Types
//!
//! Shared data types for every stage of the Jiji compiler:
//!
//! - [`SourceFile`], [`Span`] and [`Location`] for source positions
//! - [`Name`] and [`StringInterner`] for interned identifiers
//! - [`Token`] and [`TokenKind`] produced by the lexer
//! - The flat AST ([`ExprArena`], [`ExprId`], [`StmtId`], [`Module`])
//! - The primitive [`Type`] enum shared by the type checker and codegen
//!
//! # Design
//!
//! The AST is flat: nodes live in contiguous vectors inside [`ExprArena`]
//! and refer to their children by `u32` index. Later passes attach their
//! results through dense side tables keyed by the same indices instead of
//! mutating the tree.

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
pub mod quote;
mod source;
mod span;
mod token;
mod types;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, Expr, ExprKind, IfBranch, Module, Stmt, StmtKind, TypeAscription, UnaryOp,
};
pub use expr_id::{BranchRange, ExprId, StmtId, StmtRange};
pub use interner::StringInterner;
pub use name::Name;
pub use source::{Location, SourceFile};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use types::Type;

/// Trait for types that have a source span.
pub trait Spanned {
    fn span(&self) -> Span;
}

/// Compile-time size assertion.
///
/// Keeps hot IR types from silently growing.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

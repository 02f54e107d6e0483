/// The binder itself.
///
/// Walks a syntax tree, resolves every operator against its operand types and
/// produces a typed bound tree, recording type errors as diagnostics.
pub mod core;

/// Operator resolution tables.
///
/// Static rows mapping a syntactic operator and operand types to a typed
/// internal operation.
pub mod operator;

/// The typed tree produced by the binder.
pub mod bound_tree;

pub use self::{bound_tree::BoundExpression, core::Binder};

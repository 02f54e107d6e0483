/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], which walks a bound tree and dispatches
/// each node to the unary or binary handlers.
pub mod core;

/// Unary operator evaluation.
///
/// Implements identity, integer negation and logical NOT.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements integer arithmetic, logical operators and equality.
pub mod binary;

pub use self::core::{EvalResult, Evaluator};

use thiserror::Error;

use crate::{
    interpreter::{
        binder::operator::{BoundBinaryOperatorKind, BoundUnaryOperatorKind},
        value::Value,
    },
    util::span::TextSpan,
};

/// A fatal failure while evaluating a bound tree.
///
/// Unlike a [`Diagnostic`](crate::error::Diagnostic), a runtime error ends the
/// current evaluation request and is never mixed into the diagnostics list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Integer division with a zero divisor.
    #[error("division by zero at {span}")]
    DivisionByZero {
        /// Span of the `/` operator.
        span: TextSpan,
    },
    /// The exact result does not fit in a 64-bit signed integer.
    #[error("integer overflow at {span}")]
    Overflow {
        /// Span of the operator that overflowed.
        span: TextSpan,
    },
    /// A unary operator met an operand of the wrong type.
    ///
    /// Like [`RuntimeError::InvalidOperands`], this can only come from a
    /// bound tree the binder did not produce.
    #[error("internal error at {span}: {operator:?} cannot be applied to {operand}")]
    InvalidOperand {
        /// The resolved operator.
        operator: BoundUnaryOperatorKind,
        /// Operand value.
        operand:  Value,
        /// Span of the operator.
        span:     TextSpan,
    },
    /// An operator met operands of the wrong type.
    ///
    /// The binder never produces such a tree, so this signals a hand-built or
    /// corrupted bound tree rather than bad input.
    #[error("internal error at {span}: {operator:?} cannot be applied to {left} and {right}")]
    InvalidOperands {
        /// The resolved operator.
        operator: BoundBinaryOperatorKind,
        /// Left operand value.
        left:     Value,
        /// Right operand value.
        right:    Value,
        /// Span of the operator.
        span:     TextSpan,
    },
}

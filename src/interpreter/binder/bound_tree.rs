use crate::{
    interpreter::{
        binder::operator::{BoundBinaryOperator, BoundUnaryOperator},
        value::{Value, ValueType},
    },
    util::span::TextSpan,
};

/// A node of the typed tree the evaluator walks.
///
/// Operators point at their row in the static resolution tables, so every
/// node knows its result type. Parentheses have no bound node of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundExpression {
    /// A constant.
    Literal {
        /// The constant value.
        value: Value,
    },
    /// A resolved prefix operation.
    Unary {
        /// The resolved operator.
        operator: &'static BoundUnaryOperator,
        /// The operand.
        operand:  Box<Self>,
        /// Span of the operator token.
        span:     TextSpan,
    },
    /// A resolved infix operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The resolved operator.
        operator: &'static BoundBinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Span of the operator token.
        span:     TextSpan,
    },
}

impl BoundExpression {
    /// The static type of the value this node evaluates to.
    #[must_use]
    pub const fn ty(&self) -> ValueType {
        match self {
            Self::Literal { value } => value.ty(),
            Self::Unary { operator, .. } => operator.result_type,
            Self::Binary { operator, .. } => operator.result_type,
        }
    }
}

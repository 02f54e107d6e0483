use crate::{
    error::RuntimeError,
    interpreter::{binder::bound_tree::BoundExpression, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a fatal
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Computes the value of a bound tree.
///
/// The tree is expected to come from a binder run that reported no
/// diagnostics; the evaluator does not re-check operand types. Operands are
/// evaluated left to right and `&&`/`||` always evaluate both sides.
pub struct Evaluator<'a> {
    root: &'a BoundExpression,
}

impl<'a> Evaluator<'a> {
    #[must_use]
    pub const fn new(root: &'a BoundExpression) -> Self {
        Self { root }
    }

    /// Evaluates the whole tree.
    ///
    /// # Errors
    /// Returns a `RuntimeError` on division by zero, integer overflow, or an
    /// operator applied to operands of the wrong type.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::{
    ///     binder::Binder, evaluator::Evaluator, parser::SyntaxTree, value::Value,
    /// };
    ///
    /// let tree = SyntaxTree::parse("(1 + 2) * 3");
    /// let bound = Binder::new().bind_expression(tree.root());
    ///
    /// assert_eq!(Evaluator::new(&bound).evaluate().unwrap(), Value::Integer(9));
    /// ```
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn evaluate(&self) -> EvalResult<Value> {
        let value = Self::evaluate_expression(self.root)?;
        tracing::debug!(%value, "evaluated expression");
        Ok(value)
    }

    /// Evaluates a single node and its children.
    pub fn evaluate_expression(node: &BoundExpression) -> EvalResult<Value> {
        match node {
            BoundExpression::Literal { value } => Ok(*value),
            BoundExpression::Unary { operator,
                                     operand,
                                     span, } => {
                let operand = Self::evaluate_expression(operand)?;
                Self::eval_unary(operator.kind, operand, *span)
            },
            BoundExpression::Binary { left,
                                      operator,
                                      right,
                                      span, } => {
                let left = Self::evaluate_expression(left)?;
                let right = Self::evaluate_expression(right)?;
                Self::eval_binary(operator.kind, left, right, *span)
            },
        }
    }
}

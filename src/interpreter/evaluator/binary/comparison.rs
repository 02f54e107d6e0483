use crate::{
    error::RuntimeError,
    interpreter::{
        binder::operator::BoundBinaryOperatorKind,
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
    util::span::TextSpan,
};

impl Evaluator<'_> {
    /// Evaluates `==` or `!=`.
    ///
    /// Both operands must have the same type; integers compare by value and
    /// booleans by truth value.
    ///
    /// # Example
    /// ```
    /// use minicalc::{
    ///     interpreter::{
    ///         binder::operator::BoundBinaryOperatorKind, evaluator::Evaluator, value::Value,
    ///     },
    ///     util::span::TextSpan,
    /// };
    ///
    /// let result = Evaluator::eval_equality(BoundBinaryOperatorKind::NotEquals,
    ///                                       Value::Boolean(true),
    ///                                       Value::Boolean(false),
    ///                                       TextSpan::new(5, 2));
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_equality(operator: BoundBinaryOperatorKind,
                         left: Value,
                         right: Value,
                         span: TextSpan)
                         -> EvalResult<Value> {
        if left.ty() != right.ty() {
            return Err(RuntimeError::InvalidOperands { operator,
                                                       left,
                                                       right,
                                                       span });
        }

        match operator {
            BoundBinaryOperatorKind::Equals => Ok(Value::Boolean(left == right)),
            BoundBinaryOperatorKind::NotEquals => Ok(Value::Boolean(left != right)),
            _ => Err(RuntimeError::InvalidOperands { operator,
                                                     left,
                                                     right,
                                                     span }),
        }
    }
}

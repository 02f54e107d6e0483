use crate::{
    error::RuntimeError,
    interpreter::{
        binder::operator::BoundUnaryOperatorKind,
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
    util::span::TextSpan,
};

impl Evaluator<'_> {
    /// Applies a resolved unary operator to a value.
    ///
    /// Supported operators:
    /// - `Identity`: returns the integer unchanged.
    /// - `Negation`: integer negation; `-(i64::MIN)` overflows.
    /// - `LogicalNegation`: boolean NOT.
    ///
    /// # Errors
    /// `Overflow` when negation does not fit, `InvalidOperand` when the value
    /// has the wrong type for the operator.
    ///
    /// # Example
    /// ```
    /// use minicalc::{
    ///     interpreter::{
    ///         binder::operator::BoundUnaryOperatorKind, evaluator::Evaluator, value::Value,
    ///     },
    ///     util::span::TextSpan,
    /// };
    ///
    /// let span = TextSpan::new(0, 1);
    /// let v = Evaluator::eval_unary(BoundUnaryOperatorKind::Negation, Value::Integer(5), span);
    /// assert_eq!(v.unwrap(), Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(BoundUnaryOperatorKind::LogicalNegation,
    ///                               Value::Boolean(false),
    ///                               span);
    /// assert_eq!(v.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_unary(operator: BoundUnaryOperatorKind,
                      operand: Value,
                      span: TextSpan)
                      -> EvalResult<Value> {
        match (operator, operand) {
            (BoundUnaryOperatorKind::Identity, Value::Integer(n)) => Ok(Value::Integer(n)),
            (BoundUnaryOperatorKind::Negation, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { span })
            },
            (BoundUnaryOperatorKind::LogicalNegation, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
            (operator, operand) => Err(RuntimeError::InvalidOperand { operator,
                                                                      operand,
                                                                      span }),
        }
    }
}

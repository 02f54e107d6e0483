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
    /// Evaluates integer arithmetic with 64-bit checked semantics.
    ///
    /// Division truncates toward zero. A zero divisor is a
    /// `DivisionByZero` error; any result outside the `i64` range is an
    /// `Overflow` error.
    ///
    /// # Example
    /// ```
    /// use minicalc::{
    ///     error::RuntimeError,
    ///     interpreter::{
    ///         binder::operator::BoundBinaryOperatorKind, evaluator::Evaluator, value::Value,
    ///     },
    ///     util::span::TextSpan,
    /// };
    ///
    /// let span = TextSpan::new(2, 1);
    /// let q = Evaluator::eval_arithmetic(BoundBinaryOperatorKind::Division,
    ///                                    Value::Integer(-7),
    ///                                    Value::Integer(2),
    ///                                    span);
    /// assert_eq!(q.unwrap(), Value::Integer(-3));
    ///
    /// let err = Evaluator::eval_arithmetic(BoundBinaryOperatorKind::Division,
    ///                                      Value::Integer(1),
    ///                                      Value::Integer(0),
    ///                                      span);
    /// assert_eq!(err, Err(RuntimeError::DivisionByZero { span }));
    /// ```
    pub fn eval_arithmetic(operator: BoundBinaryOperatorKind,
                           left: Value,
                           right: Value,
                           span: TextSpan)
                           -> EvalResult<Value> {
        use BoundBinaryOperatorKind::{Addition, Division, Multiplication, Subtraction};

        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(RuntimeError::InvalidOperands { operator,
                                                       left,
                                                       right,
                                                       span });
        };

        let result = match operator {
            Addition => a.checked_add(b),
            Subtraction => a.checked_sub(b),
            Multiplication => a.checked_mul(b),
            Division => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { span });
                }
                a.checked_div(b)
            },
            _ => {
                return Err(RuntimeError::InvalidOperands { operator,
                                                           left,
                                                           right,
                                                           span });
            },
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { span })
    }
}

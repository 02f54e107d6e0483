use crate::{
    interpreter::{
        binder::operator::BoundBinaryOperatorKind,
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
    util::span::TextSpan,
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operation to a specialized handler: arithmetic operators go
    /// to `eval_arithmetic`, `&&` and `||` to `eval_logic`, and equality to
    /// `eval_equality`. Both operands have already been evaluated, left first.
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
    /// let result = Evaluator::eval_binary(BoundBinaryOperatorKind::Addition,
    ///                                     Value::Integer(3),
    ///                                     Value::Integer(4),
    ///                                     TextSpan::new(2, 1));
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(operator: BoundBinaryOperatorKind,
                       left: Value,
                       right: Value,
                       span: TextSpan)
                       -> EvalResult<Value> {
        use BoundBinaryOperatorKind::{
            Addition, Division, Equals, LogicalAnd, LogicalOr, Multiplication, NotEquals,
            Subtraction,
        };

        match operator {
            Addition | Subtraction | Multiplication | Division => {
                Self::eval_arithmetic(operator, left, right, span)
            },
            LogicalAnd | LogicalOr => Self::eval_logic(operator, left, right, span),
            Equals | NotEquals => Self::eval_equality(operator, left, right, span),
        }
    }
}

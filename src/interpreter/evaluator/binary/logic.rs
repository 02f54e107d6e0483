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
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both operands are already evaluated, so there is no short-circuiting.
    pub fn eval_logic(operator: BoundBinaryOperatorKind,
                      left: Value,
                      right: Value,
                      span: TextSpan)
                      -> EvalResult<Value> {
        match (operator, left, right) {
            (BoundBinaryOperatorKind::LogicalAnd, Value::Boolean(a), Value::Boolean(b)) => {
                Ok(Value::Boolean(a && b))
            },
            (BoundBinaryOperatorKind::LogicalOr, Value::Boolean(a), Value::Boolean(b)) => {
                Ok(Value::Boolean(a || b))
            },
            _ => Err(RuntimeError::InvalidOperands { operator,
                                                     left,
                                                     right,
                                                     span }),
        }
    }
}

use std::fmt;

/// The static type of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 64-bit signed integers.
    Integer,
    /// `true` and `false`.
    Boolean,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "Integer"),
            Self::Boolean => write!(f, "Boolean"),
        }
    }
}

/// Represents a runtime value in the interpreter.
///
/// Literal tokens carry a `Value` from the lexer onwards, and the evaluator
/// produces one as the result of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, produced by literals, comparisons and logical operators.
    Boolean(bool),
}

impl Value {
    /// Returns the static type of this value.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::value::{Value, ValueType};
    ///
    /// assert_eq!(Value::Integer(3).ty(), ValueType::Integer);
    /// assert_eq!(Value::Boolean(false).ty(), ValueType::Boolean);
    /// ```
    #[must_use]
    pub const fn ty(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Boolean(_) => ValueType::Boolean,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

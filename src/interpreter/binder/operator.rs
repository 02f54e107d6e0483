use crate::interpreter::{lexer::TokenKind, value::ValueType};

/// The operation a resolved unary operator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundUnaryOperatorKind {
    /// `+x`
    Identity,
    /// `-x`
    Negation,
    /// `!x`
    LogicalNegation,
}

/// The operation a resolved binary operator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundBinaryOperatorKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    LogicalAnd,
    LogicalOr,
    Equals,
    NotEquals,
}

/// One row of the unary operator table.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BoundUnaryOperator {
    pub syntax_kind:  TokenKind,
    pub kind:         BoundUnaryOperatorKind,
    pub operand_type: ValueType,
    pub result_type:  ValueType,
}

/// One row of the binary operator table.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BoundBinaryOperator {
    pub syntax_kind: TokenKind,
    pub kind:        BoundBinaryOperatorKind,
    pub left_type:   ValueType,
    pub right_type:  ValueType,
    pub result_type: ValueType,
}

impl BoundUnaryOperator {
    const fn new(syntax_kind: TokenKind,
                 kind: BoundUnaryOperatorKind,
                 operand_type: ValueType)
                 -> Self {
        Self { syntax_kind,
               kind,
               operand_type,
               result_type: operand_type }
    }

    /// Finds the row for `syntax_kind` applied to an operand of
    /// `operand_type`.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::{
    ///     binder::operator::{BoundUnaryOperator, BoundUnaryOperatorKind},
    ///     lexer::TokenKind,
    ///     value::ValueType,
    /// };
    ///
    /// let op = BoundUnaryOperator::bind(TokenKind::Minus, ValueType::Integer).unwrap();
    /// assert_eq!(op.kind, BoundUnaryOperatorKind::Negation);
    /// assert!(BoundUnaryOperator::bind(TokenKind::Minus, ValueType::Boolean).is_none());
    /// ```
    #[must_use]
    pub fn bind(syntax_kind: TokenKind, operand_type: ValueType) -> Option<&'static Self> {
        UNARY_OPERATORS.iter()
                       .find(|op| op.syntax_kind == syntax_kind && op.operand_type == operand_type)
    }
}

impl BoundBinaryOperator {
    const fn new(syntax_kind: TokenKind,
                 kind: BoundBinaryOperatorKind,
                 operand_type: ValueType,
                 result_type: ValueType)
                 -> Self {
        Self { syntax_kind,
               kind,
               left_type: operand_type,
               right_type: operand_type,
               result_type }
    }

    /// Finds the row for `syntax_kind` applied to operands of `left_type` and
    /// `right_type`. There is no implicit conversion between integers and
    /// booleans.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::{
    ///     binder::operator::BoundBinaryOperator, lexer::TokenKind, value::ValueType,
    /// };
    ///
    /// let op = BoundBinaryOperator::bind(TokenKind::EqualsEquals,
    ///                                    ValueType::Boolean,
    ///                                    ValueType::Boolean).unwrap();
    /// assert_eq!(op.result_type, ValueType::Boolean);
    /// assert!(BoundBinaryOperator::bind(TokenKind::Plus,
    ///                                   ValueType::Integer,
    ///                                   ValueType::Boolean).is_none());
    /// ```
    #[must_use]
    pub fn bind(syntax_kind: TokenKind,
                left_type: ValueType,
                right_type: ValueType)
                -> Option<&'static Self> {
        BINARY_OPERATORS.iter().find(|op| {
                                   op.syntax_kind == syntax_kind
                                   && op.left_type == left_type
                                   && op.right_type == right_type
                               })
    }
}

static UNARY_OPERATORS: [BoundUnaryOperator; 3] =
    [BoundUnaryOperator::new(TokenKind::Plus, BoundUnaryOperatorKind::Identity, ValueType::Integer),
     BoundUnaryOperator::new(TokenKind::Minus, BoundUnaryOperatorKind::Negation, ValueType::Integer),
     BoundUnaryOperator::new(TokenKind::Bang,
                             BoundUnaryOperatorKind::LogicalNegation,
                             ValueType::Boolean)];

static BINARY_OPERATORS: [BoundBinaryOperator; 10] = {
    use BoundBinaryOperatorKind::{
        Addition, Division, Equals, LogicalAnd, LogicalOr, Multiplication, NotEquals, Subtraction,
    };
    use ValueType::{Boolean, Integer};

    [BoundBinaryOperator::new(TokenKind::Plus, Addition, Integer, Integer),
     BoundBinaryOperator::new(TokenKind::Minus, Subtraction, Integer, Integer),
     BoundBinaryOperator::new(TokenKind::Star, Multiplication, Integer, Integer),
     BoundBinaryOperator::new(TokenKind::Slash, Division, Integer, Integer),
     BoundBinaryOperator::new(TokenKind::AmpersandAmpersand, LogicalAnd, Boolean, Boolean),
     BoundBinaryOperator::new(TokenKind::PipePipe, LogicalOr, Boolean, Boolean),
     BoundBinaryOperator::new(TokenKind::EqualsEquals, Equals, Integer, Boolean),
     BoundBinaryOperator::new(TokenKind::BangEquals, NotEquals, Integer, Boolean),
     BoundBinaryOperator::new(TokenKind::EqualsEquals, Equals, Boolean, Boolean),
     BoundBinaryOperator::new(TokenKind::BangEquals, NotEquals, Boolean, Boolean)]
};

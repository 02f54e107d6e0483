use std::fmt;

use crate::{
    interpreter::{lexer::SyntaxToken, value::Value},
    util::span::TextSpan,
};

/// The tag of a [`SyntaxNode`], used when walking or printing a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    LiteralExpression,
    UnaryExpression,
    BinaryExpression,
    ParenthesizedExpression,
}

/// A node of the untyped syntax tree built by the parser.
///
/// Every node owns its children, keeps the tokens it was built from and
/// carries no type information. Binding turns it into a
/// [`BoundExpression`](crate::interpreter::binder::bound_tree::BoundExpression).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A number or boolean literal.
    Literal {
        /// The literal token.
        literal_token: SyntaxToken,
        /// The literal value. `None` when the token was invented during
        /// error recovery.
        value:         Option<Value>,
    },
    /// A prefix operator applied to an operand (`-x`, `!x`).
    Unary {
        /// The operator token.
        operator_token: SyntaxToken,
        /// The operand expression.
        operand:        Box<Self>,
    },
    /// An infix operator between two operands.
    Binary {
        /// Left operand.
        left:           Box<Self>,
        /// The operator token.
        operator_token: SyntaxToken,
        /// Right operand.
        right:          Box<Self>,
    },
    /// An expression wrapped in parentheses.
    Parenthesized {
        /// The `(` token.
        open_parenthesis_token:  SyntaxToken,
        /// The inner expression.
        expression:              Box<Self>,
        /// The `)` token, zero-length if it was missing from the source.
        close_parenthesis_token: SyntaxToken,
    },
}

impl SyntaxNode {
    /// Builds a literal node from a literal token, copying its value.
    #[must_use]
    pub fn literal(literal_token: SyntaxToken) -> Self {
        let value = literal_token.value;
        Self::Literal { literal_token,
                        value }
    }

    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        match self {
            Self::Literal { .. } => SyntaxKind::LiteralExpression,
            Self::Unary { .. } => SyntaxKind::UnaryExpression,
            Self::Binary { .. } => SyntaxKind::BinaryExpression,
            Self::Parenthesized { .. } => SyntaxKind::ParenthesizedExpression,
        }
    }

    /// Returns the direct children of this node in source order.
    ///
    /// # Example
    /// ```
    /// use minicalc::{ast::SyntaxKind, interpreter::parser::SyntaxTree};
    ///
    /// let tree = SyntaxTree::parse("1 + 2");
    /// let names: Vec<String> =
    ///     tree.root().children().iter().map(|child| child.kind_name()).collect();
    ///
    /// assert_eq!(tree.root().kind(), SyntaxKind::BinaryExpression);
    /// assert_eq!(names, ["LiteralExpression", "Plus", "LiteralExpression"]);
    /// ```
    #[must_use]
    pub fn children(&self) -> Vec<SyntaxElement<'_>> {
        match self {
            Self::Literal { literal_token, .. } => vec![SyntaxElement::Token(literal_token)],
            Self::Unary { operator_token,
                          operand, } => {
                vec![SyntaxElement::Token(operator_token), SyntaxElement::Node(operand)]
            },
            Self::Binary { left,
                           operator_token,
                           right, } => vec![SyntaxElement::Node(left),
                                            SyntaxElement::Token(operator_token),
                                            SyntaxElement::Node(right)],
            Self::Parenthesized { open_parenthesis_token,
                                  expression,
                                  close_parenthesis_token, } => {
                vec![SyntaxElement::Token(open_parenthesis_token),
                     SyntaxElement::Node(expression),
                     SyntaxElement::Token(close_parenthesis_token)]
            },
        }
    }

    /// The span from the first to the last token of this node.
    #[must_use]
    pub fn span(&self) -> TextSpan {
        match self {
            Self::Literal { literal_token, .. } => literal_token.span,
            Self::Unary { operator_token,
                          operand, } => {
                TextSpan::from_bounds(operator_token.span.start, operand.span().end())
            },
            Self::Binary { left, right, .. } => {
                TextSpan::from_bounds(left.span().start, right.span().end())
            },
            Self::Parenthesized { open_parenthesis_token,
                                  close_parenthesis_token,
                                  .. } => {
                TextSpan::from_bounds(open_parenthesis_token.span.start,
                                      close_parenthesis_token.span.end())
            },
        }
    }
}

/// A child of a [`SyntaxNode`]: either another node or a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxElement<'a> {
    Node(&'a SyntaxNode),
    Token(&'a SyntaxToken),
}

impl<'a> SyntaxElement<'a> {
    /// The node kind or token kind, as written in tree dumps.
    #[must_use]
    pub fn kind_name(&self) -> String {
        match self {
            Self::Node(node) => format!("{:?}", node.kind()),
            Self::Token(token) => format!("{:?}", token.kind),
        }
    }

    /// The literal value of a token. Nodes have none.
    #[must_use]
    pub const fn value(&self) -> Option<Value> {
        match self {
            Self::Node(_) => None,
            Self::Token(token) => token.value,
        }
    }

    /// The element's own children; tokens are leaves.
    #[must_use]
    pub fn children(&self) -> Vec<SyntaxElement<'a>> {
        match *self {
            Self::Node(node) => node.children(),
            Self::Token(_) => Vec::new(),
        }
    }
}

impl fmt::Display for SyntaxElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}:   {value}", self.kind_name()),
            None => write!(f, "{}", self.kind_name()),
        }
    }
}

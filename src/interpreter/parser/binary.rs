use crate::{
    ast::SyntaxNode,
    interpreter::{
        lexer::{SyntaxToken, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, Parser},
    },
};

/// Returns how tightly a binary operator binds, or `0` if the token is not a
/// binary operator.
///
/// Tiers, from loosest to tightest: `||`, `&&`, equality and comparison,
/// additive, multiplicative. All binary operators are left-associative.
///
/// # Example
/// ```
/// use minicalc::interpreter::{lexer::TokenKind, parser::binary::binary_operator_precedence};
///
/// assert!(binary_operator_precedence(TokenKind::Star) > binary_operator_precedence(TokenKind::Plus));
/// assert!(binary_operator_precedence(TokenKind::AmpersandAmpersand)
///         > binary_operator_precedence(TokenKind::PipePipe));
/// assert_eq!(binary_operator_precedence(TokenKind::Bang), 0);
/// ```
#[must_use]
pub const fn binary_operator_precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Star | TokenKind::Slash => 5,
        TokenKind::Plus | TokenKind::Minus => 4,
        TokenKind::EqualsEquals
        | TokenKind::BangEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => 3,
        TokenKind::AmpersandAmpersand => 2,
        TokenKind::PipePipe => 1,
        _ => 0,
    }
}

/// Returns the precedence of a prefix operator, or `0` if the token is not
/// one. Prefix operators bind tighter than every binary operator.
#[must_use]
pub const fn unary_operator_precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Plus | TokenKind::Minus | TokenKind::Bang => 6,
        _ => 0,
    }
}

impl Parser {
    /// Parses operators whose precedence is above `parent_precedence` and
    /// returns the node with the height of its subtree.
    ///
    /// A prefix operator is taken first when its tier is at least the
    /// parent's; otherwise the left operand is a primary expression. Binary
    /// operators are then folded in left to right while they bind tighter than
    /// the parent, which makes `a - b - c` parse as `(a - b) - c`.
    ///
    /// Neither the recursion nor the folded tree may exceed
    /// [`MAX_NESTING_DEPTH`]; past it the rest of the input is abandoned and a
    /// valueless number literal stands in for the missing operand.
    ///
    /// Grammar:
    /// ```text
    ///     binary(p) := (unary | primary) (op binary(prec(op)))*   where prec(op) > p
    /// ```
    pub(in crate::interpreter::parser) fn parse_binary_expression(&mut self,
                                                                  parent_precedence: u8)
                                                                  -> (SyntaxNode, usize) {
        if self.depth >= MAX_NESTING_DEPTH {
            let span = self.current().span;
            self.abandon_nesting(span);
            return (SyntaxNode::literal(SyntaxToken::missing(TokenKind::Number, span.start)), 1);
        }
        self.depth += 1;

        let unary_precedence = unary_operator_precedence(self.current().kind);
        let (mut left, mut height) =
            if unary_precedence != 0 && unary_precedence >= parent_precedence {
                self.parse_unary_expression(unary_precedence)
            } else {
                self.parse_primary_expression()
            };

        loop {
            let precedence = binary_operator_precedence(self.current().kind);
            if precedence == 0 || precedence <= parent_precedence {
                break;
            }

            let operator_token = self.next_token();
            let (right, right_height) = self.parse_binary_expression(precedence);
            let folded_height = height.max(right_height) + 1;
            if folded_height > MAX_NESTING_DEPTH {
                self.abandon_nesting(operator_token.span);
                break;
            }

            left = SyntaxNode::Binary { left: Box::new(left),
                                        operator_token,
                                        right: Box::new(right) };
            height = folded_height;
        }

        self.depth -= 1;
        (left, height)
    }
}

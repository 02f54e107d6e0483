use crate::{
    ast::SyntaxNode,
    interpreter::{
        lexer::{SyntaxToken, TokenKind},
        parser::core::Parser,
    },
};

impl Parser {
    /// Parses a prefix operator and its operand.
    ///
    /// The operand is parsed at the operator's own tier, so `-1 * 2` is
    /// `(-1) * 2` and `--1` nests as `-(-1)`.
    ///
    /// Grammar: `unary := ("+" | "-" | "!") binary(6)`
    pub(in crate::interpreter::parser) fn parse_unary_expression(&mut self,
                                                                 precedence: u8)
                                                                 -> (SyntaxNode, usize) {
        let operator_token = self.next_token();
        let (operand, height) = self.parse_binary_expression(precedence);
        (SyntaxNode::Unary { operator_token,
                             operand: Box::new(operand) },
         height + 1)
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "(" expression ")"
    ///              | "true" | "false"
    ///              | number
    /// ```
    /// Anything else is reported as an unexpected token where a number was
    /// expected, and a valueless number literal takes its place.
    pub(in crate::interpreter::parser) fn parse_primary_expression(&mut self)
                                                                   -> (SyntaxNode, usize) {
        match self.current().kind {
            TokenKind::OpenParenthesis => self.parse_parenthesized_expression(),
            TokenKind::TrueKeyword | TokenKind::FalseKeyword => {
                (SyntaxNode::literal(self.next_token()), 1)
            },
            _ => (SyntaxNode::literal(self.match_token(TokenKind::Number)), 1),
        }
    }

    /// Parses `( expression )`.
    ///
    /// A missing `)` is reported once as `expected closing parenthesis` and a
    /// zero-length `)` is recorded so the node keeps its shape. Once the input
    /// has been abandoned for nesting too deeply, missing parentheses are no
    /// longer reported.
    fn parse_parenthesized_expression(&mut self) -> (SyntaxNode, usize) {
        let open_parenthesis_token = self.next_token();
        let (expression, height) = self.parse_expression();

        let close_parenthesis_token = if self.current().kind == TokenKind::CloseParenthesis {
            self.next_token()
        } else {
            let span = self.current().span;
            if !self.too_deep {
                self.diagnostics.report_missing_closing_parenthesis(span);
            }
            SyntaxToken::missing(TokenKind::CloseParenthesis, span.start)
        };

        (SyntaxNode::Parenthesized { open_parenthesis_token,
                                     expression: Box::new(expression),
                                     close_parenthesis_token },
         height + 1)
    }
}

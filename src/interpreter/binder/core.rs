use crate::{
    ast::SyntaxNode,
    error::Diagnostics,
    interpreter::{
        binder::{
            bound_tree::BoundExpression,
            operator::{BoundBinaryOperator, BoundUnaryOperator},
        },
        lexer::SyntaxToken,
        value::Value,
    },
};

/// Turns syntax trees into typed bound trees.
///
/// Binding is total: every syntax tree produces a bound tree. Operators that
/// are not defined for their operand types are reported as diagnostics and
/// dropped from the result, so the returned tree is only meaningful to
/// evaluate when [`Binder::diagnostics`] is empty.
#[derive(Debug, Default)]
pub struct Binder {
    diagnostics: Diagnostics,
}

impl Binder {
    #[must_use]
    pub const fn new() -> Self {
        Self { diagnostics: Diagnostics::new() }
    }

    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Binds an expression and all of its children.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::{binder::Binder, parser::SyntaxTree, value::ValueType};
    ///
    /// let tree = SyntaxTree::parse("1 + true");
    /// let mut binder = Binder::new();
    /// let bound = binder.bind_expression(tree.root());
    ///
    /// // The `+` is dropped and only the left operand survives.
    /// assert_eq!(bound.ty(), ValueType::Integer);
    /// assert_eq!(binder.diagnostics().len(), 1);
    /// ```
    #[tracing::instrument(level = "trace", skip_all, fields(kind = ?syntax.kind()))]
    pub fn bind_expression(&mut self, syntax: &SyntaxNode) -> BoundExpression {
        match syntax {
            SyntaxNode::Literal { value, .. } => Self::bind_literal_expression(*value),
            SyntaxNode::Unary { operator_token,
                                operand, } => self.bind_unary_expression(operator_token, operand),
            SyntaxNode::Binary { left,
                                 operator_token,
                                 right, } => {
                self.bind_binary_expression(left, operator_token, right)
            },
            SyntaxNode::Parenthesized { expression, .. } => self.bind_expression(expression),
        }
    }

    /// Literals whose token was invented during error recovery have no value
    /// and bind as `0`.
    fn bind_literal_expression(value: Option<Value>) -> BoundExpression {
        BoundExpression::Literal { value: value.unwrap_or(Value::Integer(0)) }
    }

    /// On an undefined operator, reports it and returns the bound operand
    /// unchanged.
    fn bind_unary_expression(&mut self,
                             operator_token: &SyntaxToken,
                             operand: &SyntaxNode)
                             -> BoundExpression {
        let bound_operand = self.bind_expression(operand);

        let Some(operator) = BoundUnaryOperator::bind(operator_token.kind, bound_operand.ty())
        else {
            self.diagnostics.report_undefined_unary_operator(operator_token.span,
                                                             &operator_token.text,
                                                             bound_operand.ty());
            return bound_operand;
        };

        BoundExpression::Unary { operator,
                                 operand: Box::new(bound_operand),
                                 span: operator_token.span }
    }

    /// Both operands are always bound, left first. On an undefined operator,
    /// reports it and returns the bound left operand alone.
    fn bind_binary_expression(&mut self,
                              left: &SyntaxNode,
                              operator_token: &SyntaxToken,
                              right: &SyntaxNode)
                              -> BoundExpression {
        let bound_left = self.bind_expression(left);
        let bound_right = self.bind_expression(right);

        let Some(operator) =
            BoundBinaryOperator::bind(operator_token.kind, bound_left.ty(), bound_right.ty())
        else {
            self.diagnostics.report_undefined_binary_operator(operator_token.span,
                                                              &operator_token.text,
                                                              bound_left.ty(),
                                                              bound_right.ty());
            return bound_left;
        };

        BoundExpression::Binary { left: Box::new(bound_left),
                                  operator,
                                  right: Box::new(bound_right),
                                  span: operator_token.span }
    }
}

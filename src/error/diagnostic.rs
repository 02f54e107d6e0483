use std::fmt;

use thiserror::Error;

use crate::{
    interpreter::{lexer::TokenKind, value::ValueType},
    util::span::TextSpan,
};

/// How serious a [`Diagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Something suspicious that does not block evaluation on its own.
    Warning,
    /// Malformed or ill-typed input.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A positioned problem found while lexing, parsing or binding.
///
/// Diagnostics describe bad user input. They never abort a stage: the stage
/// records one and carries on with a substitute token or node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{severity} at {span}: {message}")]
pub struct Diagnostic {
    /// Human readable description.
    pub message:  String,
    /// Where in the source the problem is.
    pub span:     TextSpan,
    /// How serious the problem is.
    pub severity: Severity,
}

/// An append-only, ordered collection of [`Diagnostic`]s.
///
/// Each stage owns one collector for the duration of a single compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    /// Appends every diagnostic of `other`, keeping their order.
    pub fn extend(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    fn report(&mut self, span: TextSpan, message: String) {
        tracing::trace!(%span, %message, "diagnostic reported");
        self.items.push(Diagnostic { message,
                                     span,
                                     severity: Severity::Error });
    }

    pub fn report_bad_character(&mut self, span: TextSpan, text: &str) {
        self.report(span, format!("bad character input: '{text}'"));
    }

    pub fn report_invalid_number(&mut self, span: TextSpan, text: &str) {
        self.report(span,
                    format!("the number {text} is not a valid {}", ValueType::Integer));
    }

    pub fn report_unexpected_token(&mut self,
                                   span: TextSpan,
                                   actual: TokenKind,
                                   expected: TokenKind) {
        self.report(span,
                    format!("unexpected token <{actual:?}>, expected <{expected:?}>"));
    }

    pub fn report_missing_closing_parenthesis(&mut self, span: TextSpan) {
        self.report(span, "expected closing parenthesis".to_string());
    }

    pub fn report_nesting_too_deep(&mut self, span: TextSpan) {
        self.report(span, "expression nested too deeply".to_string());
    }

    pub fn report_undefined_unary_operator(&mut self,
                                           span: TextSpan,
                                           operator: &str,
                                           operand: ValueType) {
        self.report(span,
                    format!("unary operator '{operator}' is not defined for type {operand}"));
    }

    pub fn report_undefined_binary_operator(&mut self,
                                            span: TextSpan,
                                            operator: &str,
                                            left: ValueType,
                                            right: ValueType) {
        self.report(span,
                    format!("binary operator '{operator}' is not defined for types {left} and {right}"));
    }
}

impl IntoIterator for Diagnostics {
    type IntoIter = std::vec::IntoIter<Diagnostic>;
    type Item = Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type IntoIter = std::slice::Iter<'a, Diagnostic>;
    type Item = &'a Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<Diagnostics> for Vec<Diagnostic> {
    fn from(diagnostics: Diagnostics) -> Self {
        diagnostics.items
    }
}

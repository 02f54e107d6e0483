use crate::{
    error::{Diagnostic, Diagnostics},
    interpreter::{
        binder::{Binder, BoundExpression},
        evaluator::{EvalResult, Evaluator},
        parser::SyntaxTree,
        value::Value,
    },
};

/// What a successful evaluation request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationResult {
    /// The input was well formed and well typed.
    Value(Value),
    /// The input had problems; nothing was evaluated. Never empty.
    Diagnostics(Vec<Diagnostic>),
}

/// One source line taken through parsing and binding.
///
/// Binding runs even when parsing reported problems, so that type errors in
/// the recovered tree are reported in the same pass.
#[derive(Debug, Clone)]
pub struct Compilation {
    syntax_tree: SyntaxTree,
    bound_root:  BoundExpression,
    diagnostics: Diagnostics,
}

impl Compilation {
    /// Parses and binds `text`.
    #[tracing::instrument(level = "trace", skip_all)]
    #[must_use]
    pub fn new(text: &str) -> Self {
        let syntax_tree = SyntaxTree::parse(text);
        let mut binder = Binder::new();
        let bound_root = binder.bind_expression(syntax_tree.root());

        let mut diagnostics = syntax_tree.diagnostics().clone();
        diagnostics.extend(binder.into_diagnostics());
        tracing::debug!(diagnostics = diagnostics.len(), "bound expression");

        Self { syntax_tree,
               bound_root,
               diagnostics }
    }

    #[must_use]
    pub const fn syntax_tree(&self) -> &SyntaxTree {
        &self.syntax_tree
    }

    #[must_use]
    pub const fn bound_root(&self) -> &BoundExpression {
        &self.bound_root
    }

    /// All diagnostics: lexer and parser first, then binder.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Evaluates the bound tree, unless any diagnostic was reported.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for fatal evaluation failures such as
    /// division by zero. These never appear among the diagnostics.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::{
    ///     compilation::{Compilation, EvaluationResult},
    ///     value::Value,
    /// };
    ///
    /// let ok = Compilation::new("!true == false").evaluate().unwrap();
    /// assert_eq!(ok, EvaluationResult::Value(Value::Boolean(true)));
    ///
    /// let bad = Compilation::new("1 + true").evaluate().unwrap();
    /// assert!(matches!(bad, EvaluationResult::Diagnostics(d) if d.len() == 1));
    ///
    /// assert!(Compilation::new("1 / 0").evaluate().is_err());
    /// ```
    pub fn evaluate(&self) -> EvalResult<EvaluationResult> {
        if !self.diagnostics.is_empty() {
            return Ok(EvaluationResult::Diagnostics(self.diagnostics.as_slice().to_vec()));
        }

        Evaluator::new(&self.bound_root).evaluate()
                                        .map(EvaluationResult::Value)
    }
}

use crate::{
    ast::SyntaxNode,
    error::Diagnostics,
    interpreter::lexer::{Lexer, SyntaxToken, TokenKind},
    util::span::TextSpan,
};

/// How deep a syntax tree may grow before the parser gives up on the input.
///
/// Binding, evaluation and dropping a tree all recurse once per level, so the
/// limit keeps every stage well inside the stack of a default thread.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The result of parsing one line of source text.
///
/// A syntax tree is always produced, even for malformed input: problems are
/// recorded in [`SyntaxTree::diagnostics`] and the tree is patched with
/// invented tokens where something was missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    root:              SyntaxNode,
    end_of_file_token: SyntaxToken,
    diagnostics:       Diagnostics,
}

impl SyntaxTree {
    /// Lexes and parses `text`.
    ///
    /// The diagnostics of the result list lexer problems first, then parser
    /// problems, each in the order they were found.
    ///
    /// # Example
    /// ```
    /// use minicalc::{ast::SyntaxKind, interpreter::parser::SyntaxTree};
    ///
    /// let tree = SyntaxTree::parse("(1 + 2");
    /// assert_eq!(tree.root().kind(), SyntaxKind::ParenthesizedExpression);
    /// assert_eq!(tree.diagnostics().len(), 1);
    /// ```
    #[tracing::instrument(level = "trace", skip_all)]
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Parser::new(text).parse()
    }

    /// Lexes `text` into its full token list, ending with `EndOfFile`.
    /// Lexer diagnostics are dropped.
    #[must_use]
    pub fn parse_tokens(text: &str) -> Vec<SyntaxToken> {
        Lexer::new(text).collect()
    }

    #[must_use]
    pub const fn root(&self) -> &SyntaxNode {
        &self.root
    }

    #[must_use]
    pub const fn end_of_file_token(&self) -> &SyntaxToken {
        &self.end_of_file_token
    }

    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Recursive-descent parser over a fully lexed token list.
///
/// The parser never fails. When a required token is missing it reports a
/// diagnostic and substitutes a zero-length token of the expected kind without
/// consuming input, so later stages always receive a well-formed tree.
///
/// Input nested deeper than [`MAX_NESTING_DEPTH`] is reported once and the
/// rest of it is skipped.
pub struct Parser {
    tokens:                                         Vec<SyntaxToken>,
    position:                                       usize,
    pub(in crate::interpreter::parser) depth:       usize,
    pub(in crate::interpreter::parser) too_deep:    bool,
    pub(in crate::interpreter::parser) diagnostics: Diagnostics,
}

impl Parser {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut lexer = Lexer::new(text);
        let tokens: Vec<SyntaxToken> = lexer.by_ref().collect();
        let diagnostics = lexer.into_diagnostics();
        tracing::debug!(tokens = tokens.len(),
                        diagnostics = diagnostics.len(),
                        "lexed input");

        Self { tokens,
               position: 0,
               depth: 0,
               too_deep: false,
               diagnostics }
    }

    /// Parses a single expression followed by the end of input.
    ///
    /// Tokens left over after the expression are reported once, at the first
    /// of them, and skipped.
    #[must_use]
    pub fn parse(mut self) -> SyntaxTree {
        let (root, _) = self.parse_expression();
        if self.current().kind != TokenKind::EndOfFile {
            let (span, actual) = (self.current().span, self.current().kind);
            self.diagnostics.report_unexpected_token(span, actual, TokenKind::EndOfFile);
            self.skip_to_end();
        }
        let end_of_file_token = self.next_token();
        tracing::debug!(root = ?root.kind(),
                        diagnostics = self.diagnostics.len(),
                        "parsed expression");

        SyntaxTree { root,
                     end_of_file_token,
                     diagnostics: self.diagnostics }
    }

    /// Parses a full expression, starting at the lowest precedence tier.
    /// Returns the node and the height of its subtree.
    ///
    /// Grammar: `expression := binary(0)`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> (SyntaxNode, usize) {
        self.parse_binary_expression(0)
    }

    /// The token under the cursor. The cursor never passes `EndOfFile`, which
    /// the lexer always emits last.
    pub(in crate::interpreter::parser) fn current(&self) -> &SyntaxToken {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.position.min(last)]
    }

    /// Moves the cursor onto `EndOfFile`.
    fn skip_to_end(&mut self) {
        self.position = self.tokens.len().saturating_sub(1);
    }

    /// Reports that the expression nests too deeply at `span` and skips the
    /// rest of the input. Only the first report is kept.
    pub(in crate::interpreter::parser) fn abandon_nesting(&mut self, span: TextSpan) {
        if !self.too_deep {
            self.too_deep = true;
            tracing::debug!(%span, depth = self.depth, "nesting limit reached");
            self.diagnostics.report_nesting_too_deep(span);
        }
        self.skip_to_end();
    }

    /// Returns the current token and moves past it. The cursor never moves
    /// beyond `EndOfFile`.
    pub(in crate::interpreter::parser) fn next_token(&mut self) -> SyntaxToken {
        let token = self.current().clone();
        if token.kind != TokenKind::EndOfFile {
            self.position += 1;
        }
        token
    }

    /// Consumes a token of the given kind.
    ///
    /// On a mismatch, reports `unexpected token` at the current token and
    /// returns a zero-length stand-in of `kind`, leaving the cursor where it
    /// is.
    pub(in crate::interpreter::parser) fn match_token(&mut self, kind: TokenKind) -> SyntaxToken {
        if self.current().kind == kind {
            return self.next_token();
        }

        let (span, actual) = (self.current().span, self.current().kind);
        self.diagnostics.report_unexpected_token(span, actual, kind);
        SyntaxToken::missing(kind, span.start)
    }
}

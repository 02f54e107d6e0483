use logos::Logos;

use crate::{error::Diagnostics, interpreter::value::Value, util::span::TextSpan};

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace is skipped and never produces a token. `EndOfFile` is not
/// matched from the input; the [`Lexer`] appends it once the text runs out.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `true`
    #[token("true")]
    TrueKeyword,
    /// `false`
    #[token("false")]
    FalseKeyword,
    /// Identifier tokens. Reserved; no expression accepts them yet.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `&&`
    #[token("&&")]
    AmpersandAmpersand,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `==`
    #[token("==")]
    EqualsEquals,
    /// `!=`
    #[token("!=")]
    BangEquals,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEquals,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEquals,
    /// `(`
    #[token("(")]
    OpenParenthesis,
    /// `)`
    #[token(")")]
    CloseParenthesis,
    /// End of input.
    EndOfFile,
}

/// A token together with its position, source text and literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken {
    /// What kind of token this is.
    pub kind:  TokenKind,
    /// Where the token sits in the source.
    pub span:  TextSpan,
    /// The exact source text of the token. Empty for invented tokens.
    pub text:  String,
    /// The literal value of `Number`, `TrueKeyword` and `FalseKeyword` tokens.
    pub value: Option<Value>,
}

impl SyntaxToken {
    /// Creates a zero-length token with no text or value.
    ///
    /// The parser uses these as stand-ins when a required token is missing.
    #[must_use]
    pub const fn missing(kind: TokenKind, position: usize) -> Self {
        Self { kind,
               span: TextSpan::new(position, 0),
               text: String::new(),
               value: None }
    }
}

/// Turns source text into [`SyntaxToken`]s.
///
/// The lexer is an iterator: it produces tokens on demand and finishes with
/// exactly one [`TokenKind::EndOfFile`] token. Cloning it restarts from the
/// clone's position. Problems (unknown characters, integer literals that do
/// not fit in an `i64`) are collected as diagnostics and lexing always
/// continues.
///
/// # Example
/// ```
/// use minicalc::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("1 <= 2").map(|token| token.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::LessEquals, TokenKind::Number, TokenKind::EndOfFile]);
/// ```
#[derive(Clone)]
pub struct Lexer<'src> {
    inner:       logos::Lexer<'src, TokenKind>,
    diagnostics: Diagnostics,
    finished:    bool,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:       TokenKind::lexer(source),
               diagnostics: Diagnostics::new(),
               finished:    false, }
    }

    /// Consumes the lexer and returns its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn make_token(&mut self, kind: TokenKind) -> SyntaxToken {
        let span = TextSpan::from(self.inner.span());
        let text = self.inner.slice();
        let value = match kind {
            TokenKind::Number => Some(self.parse_number(span, text)),
            TokenKind::TrueKeyword => Some(Value::Boolean(true)),
            TokenKind::FalseKeyword => Some(Value::Boolean(false)),
            _ => None,
        };

        SyntaxToken { kind,
                      span,
                      text: text.to_string(),
                      value }
    }

    /// Parses a digit run. Out-of-range literals are reported and replaced
    /// with zero so that later stages still see a number.
    fn parse_number(&mut self, span: TextSpan, text: &str) -> Value {
        text.parse::<i64>().map_or_else(|_| {
                                            self.diagnostics.report_invalid_number(span, text);
                                            Value::Integer(0)
                                        },
                                        Value::Integer)
    }
}

impl Iterator for Lexer<'_> {
    type Item = SyntaxToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next() {
                Some(Ok(kind)) => return Some(self.make_token(kind)),
                Some(Err(())) => {
                    let span = TextSpan::from(self.inner.span());
                    self.diagnostics.report_bad_character(span, self.inner.slice());
                },
                None if self.finished => return None,
                None => {
                    self.finished = true;
                    let end = self.inner.source().len();
                    return Some(SyntaxToken::missing(TokenKind::EndOfFile, end));
                },
            }
        }
    }
}

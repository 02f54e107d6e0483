/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind, span, text and literal value. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with source positions.
/// - Parses integer and boolean literals eagerly.
/// - Reports unknown characters and out-of-range numbers without stopping.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// Recursive descent with precedence climbing. Malformed input is reported as
/// diagnostics and patched over so a tree is always produced.
pub mod parser;
/// The binder module resolves types and operators.
///
/// Converts the untyped syntax tree into a bound tree whose every node has a
/// static type, using fixed operator resolution tables.
///
/// # Responsibilities
/// - Resolves unary and binary operators against operand types.
/// - Reports undefined operator/type combinations as diagnostics.
/// - Always completes, dropping unresolved operators from the result.
pub mod binder;
/// The evaluator module computes the value of a bound tree.
pub mod evaluator;
/// The value module defines runtime values and static types.
pub mod value;
/// Drives one request through every stage.
///
/// Runs the parser and binder, gathers their diagnostics in order and only
/// evaluates when there are none.
pub mod compilation;

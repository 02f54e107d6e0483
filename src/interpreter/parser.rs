/// Core parser state and the syntax tree entry point.
///
/// Holds the token cursor, token matching with error recovery, the nesting
/// limit and [`SyntaxTree::parse`].
pub mod core;

/// Binary operator parsing.
///
/// Implements precedence climbing over the binary operator tiers and exposes
/// the precedence tables.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals and parenthesized expressions.
pub mod unary;

pub use self::core::{MAX_NESTING_DEPTH, Parser, SyntaxTree};

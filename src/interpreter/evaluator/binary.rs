/// Binary operator dispatch.
pub mod core;

/// Integer arithmetic: `+`, `-`, `*` and `/`.
pub mod arithmetic;

/// Logical operators: `&&` and `||`.
pub mod logic;

/// Equality: `==` and `!=`.
pub mod comparison;

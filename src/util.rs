/// Source positions.
///
/// Defines [`span::TextSpan`], the byte range attached to every token,
/// diagnostic and runtime error.
pub mod span;

/// Process-wide logging setup.
///
/// Installs a `tracing` subscriber filtered by the `MINICALC_LOG`
/// environment variable.
pub mod logging;

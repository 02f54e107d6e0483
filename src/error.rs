/// Diagnosed, recoverable errors.
///
/// Defines the [`Diagnostic`] record and the [`Diagnostics`] collector shared
/// by the lexer, parser and binder. Diagnostics carry a source span and a
/// severity and suppress evaluation when present.
pub mod diagnostic;
/// Fatal evaluation failures.
///
/// Division by zero, integer overflow and operator/operand mismatches in a
/// bound tree. These end an evaluation request and are reported separately
/// from diagnostics.
pub mod runtime_error;

pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use runtime_error::RuntimeError;

/// Runtime values and their static types.
///
/// Declares [`Value`], the result of evaluating a bound tree, and
/// [`ValueType`], the type the binder assigns to every bound node.
pub mod core;

pub use self::core::{Value, ValueType};

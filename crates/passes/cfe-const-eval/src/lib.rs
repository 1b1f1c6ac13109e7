//! Compile-time constant expression evaluation
//!
//! This crate decides whether a type-checked expression subtree denotes
//! a compile-time integer constant and, if so, computes its exact
//! 64-bit value. Invoked wherever the language requires a constant:
//! - Array bounds: `int a[N];`
//! - `case` labels
//! - Bit-field widths
//! - Enumerator values and static initializers

mod error;
mod evaluator;

pub use error::ConstError;
pub use evaluator::ConstEvaluator;

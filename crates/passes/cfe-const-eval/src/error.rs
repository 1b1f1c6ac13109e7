//! Constant evaluation errors

use cfe_span::FileSpan;
use thiserror::Error;

/// Errors that can occur during constant evaluation
///
/// Every variant carries the offending source position; callers that
/// must abandon a constant-required context report it there and stop.
/// None of these is recoverable within the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstError {
    /// Expression is statically typed as floating-point where an
    /// integer constant was required
    #[error("expected integer constant, found floating-point")]
    NotIntegerConstant {
        /// Location of the floating-point expression
        span: FileSpan,
    },

    /// A named variable reference appears where only literals and
    /// operators are allowed
    #[error("identifier in constant expression")]
    NonConstantReference {
        /// Location of the identifier
        span: FileSpan,
    },

    /// A function call, or a temporary derived from one, appears in
    /// the subtree
    #[error("function call is not allowed in constant expression")]
    CallInConstantExpression {
        /// Location of the call or temporary
        span: FileSpan,
    },

    /// A constant divisor evaluated to zero under `/` or `%`
    #[error("division by zero in constant expression")]
    DivisionByZero {
        /// Location of the division operation
        span: FileSpan,
    },

    /// A node or operator that can never be part of a constant
    /// expression (dereference, negative array extent)
    #[error("expression is not a constant expression")]
    NotConstantExpression {
        /// Location of the offending node
        span: FileSpan,
    },

    /// Expression nesting exceeded the evaluator's depth limit
    #[error("constant expression is nested too deeply")]
    TooDeeplyNested {
        /// Location of the node where the limit was hit
        span: FileSpan,
    },
}

impl ConstError {
    /// Returns the span where the error occurred
    #[must_use]
    pub fn span(&self) -> FileSpan {
        match self {
            Self::NotIntegerConstant { span }
            | Self::NonConstantReference { span }
            | Self::CallInConstantExpression { span }
            | Self::DivisionByZero { span }
            | Self::NotConstantExpression { span }
            | Self::TooDeeplyNested { span } => *span,
        }
    }
}

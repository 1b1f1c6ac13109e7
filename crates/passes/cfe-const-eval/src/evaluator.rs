//! Constant integer evaluator
//!
//! A pure, read-only query over a typed AST subtree. All arithmetic is
//! performed on 64-bit signed integers, the widest native integer
//! width, with wrapping semantics. Division and remainder truncate
//! toward zero.
//!
//! The ternary operator evaluates only the taken branch; `&&` and `||`
//! evaluate both operands and then combine. The asymmetry is
//! deliberate: constant-expression operands are side-effect-free, so
//! folding both logical operands is harmless, while an untaken ternary
//! branch may be ill-formed as a constant and must stay uninspected.

use crate::ConstError;
use cfe_ast::visitor::ExprVisitor;
use cfe_ast::{BinOp, ExprId, ExprPool, Literal, UnOp};
use cfe_intern::Symbol;
use cfe_span::FileSpan;

/// Nesting depth allowed before evaluation fails with
/// [`ConstError::TooDeeplyNested`]
const DEFAULT_DEPTH_LIMIT: usize = 512;

/// Constant expression evaluator
///
/// Stateless between invocations: each call to [`Self::eval_int`] is an
/// independent computation over an immutable subtree, so a single
/// evaluator may be shared freely across translation units.
#[derive(Debug, Clone, Copy)]
pub struct ConstEvaluator {
    depth_limit: usize,
}

impl ConstEvaluator {
    /// Creates an evaluator with the default nesting limit
    #[must_use]
    pub fn new() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }

    /// Creates an evaluator with an explicit nesting limit
    ///
    /// Used by hosts whose stack budget differs from the default
    /// assumption (embedded builds, deeply recursive test fixtures).
    #[must_use]
    pub fn with_depth_limit(depth_limit: usize) -> Self {
        Self { depth_limit }
    }

    /// Evaluates an expression subtree as a compile-time integer
    /// constant.
    ///
    /// `err_span` is the position reported when the offending node has
    /// no usable position of its own (synthesized nodes).
    ///
    /// # Errors
    ///
    /// Returns [`ConstError`] if the subtree is not an integer constant
    /// expression: it is floating-typed, references a variable,
    /// contains a call or call-derived temporary, divides by zero, uses
    /// an operator with no constant meaning, or nests beyond the depth
    /// limit.
    pub fn eval_int(
        &self,
        expr_id: ExprId,
        pool: &ExprPool,
        err_span: FileSpan,
    ) -> Result<i64, ConstError> {
        let mut cx = EvalCx {
            err_span,
            depth: 0,
            depth_limit: self.depth_limit,
        };
        cx.eval(expr_id, pool)
    }

    /// Evaluates an expression as an array extent.
    ///
    /// The dominant caller shape: array bounds must be integer
    /// constants and must not be negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConstError`] under the same conditions as
    /// [`Self::eval_int`], plus [`ConstError::NotConstantExpression`]
    /// for a negative result.
    pub fn eval_array_size(
        &self,
        expr_id: ExprId,
        pool: &ExprPool,
        err_span: FileSpan,
    ) -> Result<u64, ConstError> {
        let value = self.eval_int(expr_id, pool, err_span)?;
        u64::try_from(value).map_err(|_| ConstError::NotConstantExpression {
            span: pool.exprs[expr_id].span(),
        })
    }
}

impl Default for ConstEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-invocation state: the fallback position and the recursion
/// budget. Discarded when `eval_int` returns.
struct EvalCx {
    err_span: FileSpan,
    depth: usize,
    depth_limit: usize,
}

impl EvalCx {
    /// Depth-checked recursion entry point; all child evaluation goes
    /// through here.
    fn eval(&mut self, expr_id: ExprId, pool: &ExprPool) -> Result<i64, ConstError> {
        if self.depth >= self.depth_limit {
            return Err(ConstError::TooDeeplyNested {
                span: self.fail_span(expr_id, pool),
            });
        }
        self.depth += 1;
        let result = self.visit_expr(expr_id, pool);
        self.depth -= 1;
        result
    }

    /// The node's own position, or the caller-provided fallback when
    /// the node was synthesized without one.
    fn fail_span(&self, expr_id: ExprId, pool: &ExprPool) -> FileSpan {
        let span = pool.exprs[expr_id].span();
        if span.span.is_empty() { self.err_span } else { span }
    }
}

impl ExprVisitor for EvalCx {
    type Output = Result<i64, ConstError>;

    fn visit_constant(
        &mut self,
        value: Literal,
        expr_id: ExprId,
        pool: &ExprPool,
    ) -> Self::Output {
        match value {
            Literal::Int(v) if !pool.exprs[expr_id].ty().is_float() => Ok(v),
            Literal::Int(_) | Literal::Float(_) => Err(ConstError::NotIntegerConstant {
                span: self.fail_span(expr_id, pool),
            }),
        }
    }

    fn visit_identifier(
        &mut self,
        _name: Symbol,
        expr_id: ExprId,
        pool: &ExprPool,
    ) -> Self::Output {
        // Enumerator constants are pre-folded by the type checker and
        // never reach here as identifiers.
        Err(ConstError::NonConstantReference {
            span: self.fail_span(expr_id, pool),
        })
    }

    fn visit_unary(
        &mut self,
        op: UnOp,
        operand: ExprId,
        expr_id: ExprId,
        pool: &ExprPool,
    ) -> Self::Output {
        // Upstream type-checker contract, not a user diagnostic.
        debug_assert!(
            pool.exprs[expr_id].ty().is_integer(),
            "unary node reached the constant evaluator with a non-integer type"
        );

        match op {
            // Cast is identity: external type coercion has already made
            // the operand integral.
            UnOp::Plus | UnOp::Cast => self.eval(operand, pool),
            UnOp::Neg => Ok(self.eval(operand, pool)?.wrapping_neg()),
            UnOp::BitNot => Ok(!self.eval(operand, pool)?),
            UnOp::LogicalNot => Ok(i64::from(self.eval(operand, pool)? == 0)),
            UnOp::Deref => Err(ConstError::NotConstantExpression {
                span: self.fail_span(expr_id, pool),
            }),
        }
    }

    fn visit_binary(
        &mut self,
        op: BinOp,
        lhs: ExprId,
        rhs: ExprId,
        expr_id: ExprId,
        pool: &ExprPool,
    ) -> Self::Output {
        // Upstream type-checker contract, not a user diagnostic.
        debug_assert!(
            pool.exprs[expr_id].ty().is_integer(),
            "binary node reached the constant evaluator with a non-integer type"
        );

        // `=` and `,` take their value from the right operand; the left
        // side is never inspected.
        if matches!(op, BinOp::Assign | BinOp::Comma) {
            return self.eval(rhs, pool);
        }

        let l = self.eval(lhs, pool)?;
        let r = self.eval(rhs, pool)?;
        match op {
            BinOp::Add => Ok(l.wrapping_add(r)),
            BinOp::Sub => Ok(l.wrapping_sub(r)),
            BinOp::Mul => Ok(l.wrapping_mul(r)),
            BinOp::Div | BinOp::Rem => {
                if r == 0 {
                    return Err(ConstError::DivisionByZero {
                        span: self.fail_span(expr_id, pool),
                    });
                }
                if op == BinOp::Rem {
                    Ok(l.wrapping_rem(r))
                } else {
                    Ok(l.wrapping_div(r))
                }
            }
            BinOp::Lt => Ok(i64::from(l < r)),
            BinOp::Gt => Ok(i64::from(l > r)),
            BinOp::BitOr => Ok(l | r),
            BinOp::BitAnd => Ok(l & r),
            BinOp::BitXor => Ok(l ^ r),
            // Shift counts mask to the low six bits, like native
            // 64-bit shifts.
            BinOp::Shl => Ok(l.wrapping_shl(r as u32)),
            BinOp::Shr => Ok(l.wrapping_shr(r as u32)),
            // No short circuit: both operands were already evaluated.
            BinOp::LogicalAnd => Ok(i64::from(l != 0 && r != 0)),
            BinOp::LogicalOr => Ok(i64::from(l != 0 || r != 0)),
            BinOp::Assign | BinOp::Comma => unreachable!("handled before operand evaluation"),
        }
    }

    fn visit_conditional(
        &mut self,
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
        _expr_id: ExprId,
        pool: &ExprPool,
    ) -> Self::Output {
        // Only the taken branch is evaluated: the other branch may be
        // ill-formed as a constant and must not be inspected.
        if self.eval(cond, pool)? != 0 {
            self.eval(then_expr, pool)
        } else {
            self.eval(else_expr, pool)
        }
    }

    fn visit_call(
        &mut self,
        _callee: ExprId,
        _args: &[ExprId],
        expr_id: ExprId,
        pool: &ExprPool,
    ) -> Self::Output {
        Err(ConstError::CallInConstantExpression {
            span: self.fail_span(expr_id, pool),
        })
    }

    fn visit_temp_var(&mut self, _index: u32, expr_id: ExprId, pool: &ExprPool) -> Self::Output {
        // Temporaries only arise from non-constant lowering such as
        // call results; same diagnostic class as a call.
        Err(ConstError::CallInConstantExpression {
            span: self.fail_span(expr_id, pool),
        })
    }
}

//! End-to-end tests driving the evaluator the way front-end callers
//! do: resolve a constant-required context, and on failure hand the
//! error to a diagnostic sink and abandon the context.

use cfe_ast::{BinOp, ExprId, ExprPool, Ty, UnOp};
use cfe_const_eval::{ConstError, ConstEvaluator};
use cfe_diagnostic::{Collected, Ignore, Sink};
use cfe_intern::Interner;
use cfe_span::{FileId, FileSpan, Span};

fn span_at(start: u32, end: u32) -> FileSpan {
    FileSpan::new(FileId(0), Span::new(start, end))
}

/// Stand-in for array-size resolution: `int buf[expr];`
fn resolve_array_size(
    expr: ExprId,
    pool: &ExprPool,
    decl_span: FileSpan,
    sink: &dyn Sink<ConstError>,
) -> Option<u64> {
    match ConstEvaluator::new().eval_array_size(expr, pool, decl_span) {
        Ok(size) => Some(size),
        Err(err) => {
            sink.report(err);
            None
        }
    }
}

#[test]
fn test_array_size_from_folded_expression() {
    // int buf[(1 << 3 | 1) * 2];
    let mut pool = ExprPool::new();
    let span = FileSpan::synthetic();
    let one_a = pool.int_const(1, span);
    let three = pool.int_const(3, span);
    let one_b = pool.int_const(1, span);
    let two = pool.int_const(2, span);
    let shifted = pool.binary(BinOp::Shl, one_a, three, Ty::Int, span);
    let or = pool.binary(BinOp::BitOr, shifted, one_b, Ty::Int, span);
    let size = pool.binary(BinOp::Mul, or, two, Ty::Int, span);

    let sink: Collected<ConstError> = Collected::new();
    assert_eq!(
        resolve_array_size(size, &pool, span, &sink),
        Some(18)
    );
    assert!(sink.is_empty());
}

#[test]
fn test_non_constant_bound_reaches_the_sink() {
    // int buf[n + 1]; where n is a plain variable
    let mut pool = ExprPool::new();
    let interner = Interner::new();
    let n_span = span_at(8, 9);
    let n = pool.ident(interner.intern("n"), Ty::Int, n_span);
    let one = pool.int_const(1, span_at(12, 13));
    let bound = pool.binary(BinOp::Add, n, one, Ty::Int, span_at(8, 13));

    let sink: Collected<ConstError> = Collected::new();
    assert_eq!(resolve_array_size(bound, &pool, span_at(8, 13), &sink), None);

    let reported = sink.into_vec();
    assert_eq!(reported.len(), 1);
    assert!(matches!(
        reported[0],
        ConstError::NonConstantReference { .. }
    ));
    assert_eq!(reported[0].span(), n_span);
}

#[test]
fn test_speculative_probe_ignores_failures() {
    // A caller probing "is this constant?" without wanting the error
    let mut pool = ExprPool::new();
    let interner = Interner::new();
    let span = FileSpan::synthetic();
    let callee = pool.ident(interner.intern("size_of_thing"), Ty::Function, span);
    let call = pool.call(callee, Vec::new(), Ty::Int, span);

    assert_eq!(resolve_array_size(call, &pool, span, &Ignore), None);
}

#[test]
fn test_case_label_folding() {
    // case 'A' + 1: with the label expression pre-typed as int
    let mut pool = ExprPool::new();
    let span = span_at(20, 27);
    let letter = pool.int_const(65, span);
    let one = pool.int_const(1, span);
    let label = pool.binary(BinOp::Add, letter, one, Ty::Int, span);

    let value = ConstEvaluator::new()
        .eval_int(label, &pool, span)
        .expect("case label must fold");
    assert_eq!(value, 66);
}

#[test]
fn test_bitfield_width_with_untaken_fallback() {
    // int field : COND ? 5 : bogus(); the untaken call must not matter
    let mut pool = ExprPool::new();
    let interner = Interner::new();
    let span = FileSpan::synthetic();
    let cond = pool.int_const(1, span);
    let five = pool.int_const(5, span);
    let callee = pool.ident(interner.intern("bogus"), Ty::Function, span);
    let call = pool.call(callee, Vec::new(), Ty::Int, span);
    let width = pool.conditional(cond, five, call, Ty::Int, span);

    assert_eq!(
        ConstEvaluator::new().eval_int(width, &pool, span),
        Ok(5)
    );
}

#[test]
fn test_negation_in_enumerator_value() {
    // enum { FLOOR = -(7 / 2) };
    let mut pool = ExprPool::new();
    let span = FileSpan::synthetic();
    let seven = pool.int_const(7, span);
    let two = pool.int_const(2, span);
    let div = pool.binary(BinOp::Div, seven, two, Ty::Int, span);
    let neg = pool.unary(UnOp::Neg, div, Ty::Int, span);

    assert_eq!(ConstEvaluator::new().eval_int(neg, &pool, span), Ok(-3));
}

//! Visitor infrastructure for traversing AST nodes
//!
//! One trait per node family, one required handler per node kind. The
//! dispatching entry points hold the only `match` over the variants,
//! so each node is routed to exactly one handler. Handlers are
//! deliberately not defaulted: a new `Expr` or `Stmt` variant fails to
//! compile until every algorithm in the workspace declares how it
//! handles it, while a new algorithm is just another trait impl and
//! touches no node code.

use crate::{BinOp, Expr, ExprId, ExprPool, Literal, Stmt, StmtId, UnOp};
use cfe_intern::Symbol;

/// Visitor trait for expressions
pub trait ExprVisitor {
    /// Output type produced by visiting an expression
    type Output;

    /// Visit an expression by ID, routing to the handler for its kind
    fn visit_expr(&mut self, expr_id: ExprId, pool: &ExprPool) -> Self::Output {
        match &pool.exprs[expr_id] {
            Expr::Constant { value, .. } => self.visit_constant(*value, expr_id, pool),
            Expr::Identifier { name, .. } => self.visit_identifier(*name, expr_id, pool),
            Expr::Unary { op, operand, .. } => self.visit_unary(*op, *operand, expr_id, pool),
            Expr::Binary { op, lhs, rhs, .. } => {
                self.visit_binary(*op, *lhs, *rhs, expr_id, pool)
            }
            Expr::Conditional {
                cond,
                then_expr,
                else_expr,
                ..
            } => self.visit_conditional(*cond, *then_expr, *else_expr, expr_id, pool),
            Expr::Call { callee, args, .. } => self.visit_call(*callee, args, expr_id, pool),
            Expr::TempVar { index, .. } => self.visit_temp_var(*index, expr_id, pool),
        }
    }

    /// Handle a literal constant
    fn visit_constant(&mut self, value: Literal, expr_id: ExprId, pool: &ExprPool)
    -> Self::Output;

    /// Handle an identifier reference
    fn visit_identifier(&mut self, name: Symbol, expr_id: ExprId, pool: &ExprPool)
    -> Self::Output;

    /// Handle a unary operation
    fn visit_unary(
        &mut self,
        op: UnOp,
        operand: ExprId,
        expr_id: ExprId,
        pool: &ExprPool,
    ) -> Self::Output;

    /// Handle a binary operation
    fn visit_binary(
        &mut self,
        op: BinOp,
        lhs: ExprId,
        rhs: ExprId,
        expr_id: ExprId,
        pool: &ExprPool,
    ) -> Self::Output;

    /// Handle a conditional operation
    fn visit_conditional(
        &mut self,
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
        expr_id: ExprId,
        pool: &ExprPool,
    ) -> Self::Output;

    /// Handle a function call
    fn visit_call(
        &mut self,
        callee: ExprId,
        args: &[ExprId],
        expr_id: ExprId,
        pool: &ExprPool,
    ) -> Self::Output;

    /// Handle a compiler temporary
    fn visit_temp_var(&mut self, index: u32, expr_id: ExprId, pool: &ExprPool) -> Self::Output;
}

/// Visitor trait for statements
pub trait StmtVisitor {
    /// Output type produced by visiting a statement
    type Output;

    /// Visit a statement by ID, routing to the handler for its kind
    fn visit_stmt(&mut self, stmt_id: StmtId, pool: &ExprPool) -> Self::Output {
        match &pool.stmts[stmt_id] {
            Stmt::Empty { .. } => self.visit_empty(stmt_id, pool),
            Stmt::Label { name, .. } => self.visit_label(*name, stmt_id, pool),
            Stmt::If {
                cond,
                then_stmt,
                else_stmt,
                ..
            } => self.visit_if(*cond, *then_stmt, *else_stmt, stmt_id, pool),
            Stmt::Jump { target, .. } => self.visit_jump(*target, stmt_id, pool),
            Stmt::Return { value, .. } => self.visit_return(*value, stmt_id, pool),
            Stmt::Compound { stmts, .. } => self.visit_compound(stmts, stmt_id, pool),
        }
    }

    /// Handle an empty statement
    fn visit_empty(&mut self, stmt_id: StmtId, pool: &ExprPool) -> Self::Output;

    /// Handle a label statement
    fn visit_label(&mut self, name: Symbol, stmt_id: StmtId, pool: &ExprPool) -> Self::Output;

    /// Handle an if statement
    fn visit_if(
        &mut self,
        cond: ExprId,
        then_stmt: StmtId,
        else_stmt: Option<StmtId>,
        stmt_id: StmtId,
        pool: &ExprPool,
    ) -> Self::Output;

    /// Handle a jump statement
    fn visit_jump(&mut self, target: Symbol, stmt_id: StmtId, pool: &ExprPool) -> Self::Output;

    /// Handle a return statement
    fn visit_return(
        &mut self,
        value: Option<ExprId>,
        stmt_id: StmtId,
        pool: &ExprPool,
    ) -> Self::Output;

    /// Handle a compound statement
    fn visit_compound(
        &mut self,
        stmts: &[StmtId],
        stmt_id: StmtId,
        pool: &ExprPool,
    ) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ty;
    use cfe_span::FileSpan;

    /// Counts nodes of each broad kind; a minimal algorithm exercising
    /// the dispatch without any node-side cooperation.
    #[derive(Default)]
    struct KindCounter {
        leaves: usize,
        operators: usize,
    }

    impl ExprVisitor for KindCounter {
        type Output = ();

        fn visit_constant(&mut self, _value: Literal, _expr_id: ExprId, _pool: &ExprPool) {
            self.leaves += 1;
        }

        fn visit_identifier(&mut self, _name: Symbol, _expr_id: ExprId, _pool: &ExprPool) {
            self.leaves += 1;
        }

        fn visit_unary(&mut self, _op: UnOp, operand: ExprId, _expr_id: ExprId, pool: &ExprPool) {
            self.operators += 1;
            self.visit_expr(operand, pool);
        }

        fn visit_binary(
            &mut self,
            _op: BinOp,
            lhs: ExprId,
            rhs: ExprId,
            _expr_id: ExprId,
            pool: &ExprPool,
        ) {
            self.operators += 1;
            self.visit_expr(lhs, pool);
            self.visit_expr(rhs, pool);
        }

        fn visit_conditional(
            &mut self,
            cond: ExprId,
            then_expr: ExprId,
            else_expr: ExprId,
            _expr_id: ExprId,
            pool: &ExprPool,
        ) {
            self.operators += 1;
            self.visit_expr(cond, pool);
            self.visit_expr(then_expr, pool);
            self.visit_expr(else_expr, pool);
        }

        fn visit_call(
            &mut self,
            callee: ExprId,
            args: &[ExprId],
            _expr_id: ExprId,
            pool: &ExprPool,
        ) {
            self.operators += 1;
            self.visit_expr(callee, pool);
            for arg in args {
                self.visit_expr(*arg, pool);
            }
        }

        fn visit_temp_var(&mut self, _index: u32, _expr_id: ExprId, _pool: &ExprPool) {
            self.leaves += 1;
        }
    }

    #[test]
    fn test_dispatch_reaches_every_node_once() {
        let mut pool = ExprPool::new();
        let span = FileSpan::synthetic();
        let three = pool.int_const(3, span);
        let four = pool.int_const(4, span);
        let two = pool.int_const(2, span);
        let product = pool.binary(BinOp::Mul, four, two, Ty::Int, span);
        let sum = pool.binary(BinOp::Add, three, product, Ty::Int, span);

        let mut counter = KindCounter::default();
        counter.visit_expr(sum, &pool);
        assert_eq!(counter.leaves, 3);
        assert_eq!(counter.operators, 2);
    }
}

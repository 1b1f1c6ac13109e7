//! Expression and statement rendering
//!
//! A second traversal algorithm over the same dispatch traits the
//! constant evaluator uses. Output is a compact single-line rendering
//! with explicit parentheses, meant for diagnostics and test
//! assertions rather than source reconstruction.

use crate::visitor::{ExprVisitor, StmtVisitor};
use crate::{BinOp, ExprId, ExprPool, Literal, StmtId, UnOp};
use cfe_intern::{Interner, Symbol};

/// Renders AST nodes to text
pub struct AstPrinter {
    interner: Interner,
}

impl AstPrinter {
    /// Creates a printer resolving names through `interner`
    #[must_use]
    pub fn new(interner: Interner) -> Self {
        Self { interner }
    }

    /// Renders one expression subtree
    pub fn print_expr(&mut self, expr_id: ExprId, pool: &ExprPool) -> String {
        self.visit_expr(expr_id, pool)
    }

    /// Renders one statement subtree
    pub fn print_stmt(&mut self, stmt_id: StmtId, pool: &ExprPool) -> String {
        self.visit_stmt(stmt_id, pool)
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_constant(&mut self, value: Literal, _expr_id: ExprId, _pool: &ExprPool) -> String {
        match value {
            Literal::Int(v) => v.to_string(),
            Literal::Float(v) => format!("{v:?}"),
        }
    }

    fn visit_identifier(&mut self, name: Symbol, _expr_id: ExprId, _pool: &ExprPool) -> String {
        self.interner.resolve(&name)
    }

    fn visit_unary(&mut self, op: UnOp, operand: ExprId, _expr_id: ExprId, pool: &ExprPool) -> String {
        let operand = self.visit_expr(operand, pool);
        format!("{}{operand}", op.token())
    }

    fn visit_binary(
        &mut self,
        op: BinOp,
        lhs: ExprId,
        rhs: ExprId,
        _expr_id: ExprId,
        pool: &ExprPool,
    ) -> String {
        let lhs = self.visit_expr(lhs, pool);
        let rhs = self.visit_expr(rhs, pool);
        format!("({lhs} {} {rhs})", op.token())
    }

    fn visit_conditional(
        &mut self,
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
        _expr_id: ExprId,
        pool: &ExprPool,
    ) -> String {
        let cond = self.visit_expr(cond, pool);
        let then_expr = self.visit_expr(then_expr, pool);
        let else_expr = self.visit_expr(else_expr, pool);
        format!("({cond} ? {then_expr} : {else_expr})")
    }

    fn visit_call(
        &mut self,
        callee: ExprId,
        args: &[ExprId],
        _expr_id: ExprId,
        pool: &ExprPool,
    ) -> String {
        let callee = self.visit_expr(callee, pool);
        let args: Vec<String> = args.iter().map(|arg| self.visit_expr(*arg, pool)).collect();
        format!("{callee}({})", args.join(", "))
    }

    fn visit_temp_var(&mut self, index: u32, _expr_id: ExprId, _pool: &ExprPool) -> String {
        format!("%t{index}")
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_empty(&mut self, _stmt_id: StmtId, _pool: &ExprPool) -> String {
        ";".to_string()
    }

    fn visit_label(&mut self, name: Symbol, _stmt_id: StmtId, _pool: &ExprPool) -> String {
        format!("{}:", self.interner.resolve(&name))
    }

    fn visit_if(
        &mut self,
        cond: ExprId,
        then_stmt: StmtId,
        else_stmt: Option<StmtId>,
        _stmt_id: StmtId,
        pool: &ExprPool,
    ) -> String {
        let cond = self.print_expr(cond, pool);
        let then_stmt = self.visit_stmt(then_stmt, pool);
        match else_stmt {
            Some(else_id) => {
                let else_stmt = self.visit_stmt(else_id, pool);
                format!("if ({cond}) {then_stmt} else {else_stmt}")
            }
            None => format!("if ({cond}) {then_stmt}"),
        }
    }

    fn visit_jump(&mut self, target: Symbol, _stmt_id: StmtId, _pool: &ExprPool) -> String {
        format!("goto {};", self.interner.resolve(&target))
    }

    fn visit_return(&mut self, value: Option<ExprId>, _stmt_id: StmtId, pool: &ExprPool) -> String {
        match value {
            Some(expr_id) => format!("return {};", self.print_expr(expr_id, pool)),
            None => "return;".to_string(),
        }
    }

    fn visit_compound(&mut self, stmts: &[StmtId], _stmt_id: StmtId, pool: &ExprPool) -> String {
        let rendered: Vec<String> = stmts.iter().map(|id| self.visit_stmt(*id, pool)).collect();
        format!("{{ {} }}", rendered.join(" "))
    }
}

//! Typed AST for the C-family front end
//!
//! Nodes here are produced by the parser and type checker and consumed
//! read-only by every downstream traversal (printing, constant
//! evaluation, code generation). The node-kind families are closed:
//! every traversal algorithm matches on them exhaustively, so adding a
//! variant is a compile-time event for the whole workspace.

pub mod print;
pub mod visitor;

use cfe_arena::{Arena, Idx};
use cfe_intern::Symbol;
use cfe_span::FileSpan;

/// AST node IDs
pub type ExprId = Idx<Expr>;
/// Statement node ID
pub type StmtId = Idx<Stmt>;

/// Resolved semantic type of an expression.
///
/// This subsystem only needs enough of the type lattice to tell
/// integers apart from everything else; the full type representation
/// belongs to the type checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ty {
    /// Any integer type, folded to the widest native width
    Int,
    /// Any floating-point type
    Float,
    /// Pointer type (result of address-of, decay, or dereference of a
    /// pointer-to-pointer)
    Pointer,
    /// Function designator type
    Function,
    /// `void`
    Void,
}

impl Ty {
    /// True for integer-typed expressions
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Int)
    }

    /// True for floating-point-typed expressions
    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float)
    }
}

/// Literal payload of a `Constant` node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// Integer literal, already widened
    Int(i64),
    /// Floating-point literal
    Float(f64),
}

/// Binary operator tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
    /// Remainder (%)
    Rem,
    /// Less than (<)
    Lt,
    /// Greater than (>)
    Gt,
    /// Bitwise OR (|)
    BitOr,
    /// Bitwise AND (&)
    BitAnd,
    /// Bitwise XOR (^)
    BitXor,
    /// Left shift (<<)
    Shl,
    /// Right shift (>>)
    Shr,
    /// Logical AND (&&)
    LogicalAnd,
    /// Logical OR (||)
    LogicalOr,
    /// Assignment (=)
    Assign,
    /// Comma operator (,)
    Comma,
}

impl BinOp {
    /// Source token for this operator
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Assign => "=",
            Self::Comma => ",",
        }
    }
}

/// Unary operator tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    /// Unary plus (+)
    Plus,
    /// Arithmetic negation (-)
    Neg,
    /// Bitwise complement (~)
    BitNot,
    /// Logical NOT (!)
    LogicalNot,
    /// Cast; the node's own type is the target type
    Cast,
    /// Dereference (*)
    Deref,
}

impl UnOp {
    /// Source token for this operator (casts render as their type)
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::BitNot => "~",
            Self::LogicalNot => "!",
            Self::Cast => "(cast)",
            Self::Deref => "*",
        }
    }
}

/// Expression nodes
///
/// Composite kinds own their operands through arena indices; the
/// parser allocates each node exactly once, so an expression is a
/// tree, never a DAG.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal constant
    Constant {
        /// Literal payload
        value: Literal,
        /// Resolved type
        ty: Ty,
        /// Source location
        span: FileSpan,
    },
    /// Named variable reference
    Identifier {
        /// Interned name
        name: Symbol,
        /// Resolved type
        ty: Ty,
        /// Source location
        span: FileSpan,
    },
    /// Unary operation
    Unary {
        /// Operator tag
        op: UnOp,
        /// Operand
        operand: ExprId,
        /// Resolved type
        ty: Ty,
        /// Source location
        span: FileSpan,
    },
    /// Binary operation
    Binary {
        /// Operator tag
        op: BinOp,
        /// Left operand
        lhs: ExprId,
        /// Right operand
        rhs: ExprId,
        /// Resolved type
        ty: Ty,
        /// Source location
        span: FileSpan,
    },
    /// Ternary conditional operation
    Conditional {
        /// Condition
        cond: ExprId,
        /// Value when the condition is non-zero
        then_expr: ExprId,
        /// Value when the condition is zero
        else_expr: ExprId,
        /// Resolved type
        ty: Ty,
        /// Source location
        span: FileSpan,
    },
    /// Function call
    Call {
        /// Callee designator
        callee: ExprId,
        /// Argument expressions
        args: Vec<ExprId>,
        /// Resolved type
        ty: Ty,
        /// Source location
        span: FileSpan,
    },
    /// Compiler-introduced temporary, produced only when lowering
    /// non-constant constructs such as call results
    TempVar {
        /// Temporary index within the enclosing function
        index: u32,
        /// Resolved type
        ty: Ty,
        /// Source location
        span: FileSpan,
    },
}

impl Expr {
    /// Resolved type of this node
    #[must_use]
    pub fn ty(&self) -> Ty {
        match self {
            Self::Constant { ty, .. }
            | Self::Identifier { ty, .. }
            | Self::Unary { ty, .. }
            | Self::Binary { ty, .. }
            | Self::Conditional { ty, .. }
            | Self::Call { ty, .. }
            | Self::TempVar { ty, .. } => *ty,
        }
    }

    /// Source location of this node
    #[must_use]
    pub fn span(&self) -> FileSpan {
        match self {
            Self::Constant { span, .. }
            | Self::Identifier { span, .. }
            | Self::Unary { span, .. }
            | Self::Binary { span, .. }
            | Self::Conditional { span, .. }
            | Self::Call { span, .. }
            | Self::TempVar { span, .. } => *span,
        }
    }

    /// True if this expression designates a storage location.
    ///
    /// Within this subsystem only a dereference does; identifier
    /// lvalue-ness is resolved upstream against the symbol table.
    #[must_use]
    pub fn is_lvalue(&self) -> bool {
        matches!(
            self,
            Self::Unary {
                op: UnOp::Deref,
                ..
            }
        )
    }
}

/// Statement nodes
///
/// Statements share the dispatch mechanism with expressions but are
/// never constant-evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Empty statement (`;`)
    Empty {
        /// Source location
        span: FileSpan,
    },
    /// Label statement
    Label {
        /// Label name
        name: Symbol,
        /// Source location
        span: FileSpan,
    },
    /// If statement
    If {
        /// Condition
        cond: ExprId,
        /// Then branch
        then_stmt: StmtId,
        /// Optional else branch
        else_stmt: Option<StmtId>,
        /// Source location
        span: FileSpan,
    },
    /// Unconditional jump (`goto`)
    Jump {
        /// Target label
        target: Symbol,
        /// Source location
        span: FileSpan,
    },
    /// Return statement
    Return {
        /// Optional return value
        value: Option<ExprId>,
        /// Source location
        span: FileSpan,
    },
    /// Compound statement (`{ ... }`)
    Compound {
        /// Component statements in order
        stmts: Vec<StmtId>,
        /// Source location
        span: FileSpan,
    },
}

impl Stmt {
    /// Source location of this node
    #[must_use]
    pub fn span(&self) -> FileSpan {
        match self {
            Self::Empty { span }
            | Self::Label { span, .. }
            | Self::If { span, .. }
            | Self::Jump { span, .. }
            | Self::Return { span, .. }
            | Self::Compound { span, .. } => *span,
        }
    }
}

/// Node storage for one function body or initializer context.
///
/// The parser and type checker fill the pool; traversals borrow it
/// immutably. Indices handed out by the allocators below are the only
/// way nodes refer to each other.
#[derive(Debug, Clone, Default)]
pub struct ExprPool {
    /// Expression arena
    pub exprs: Arena<Expr>,
    /// Statement arena
    pub stmts: Arena<Stmt>,
}

impl ExprPool {
    /// Creates an empty pool
    #[must_use]
    pub fn new() -> Self {
        Self {
            exprs: Arena::new(),
            stmts: Arena::new(),
        }
    }

    /// Allocates an expression node
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        self.exprs.alloc(expr)
    }

    /// Allocates a statement node
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        self.stmts.alloc(stmt)
    }

    /// Allocates an integer constant
    pub fn int_const(&mut self, value: i64, span: FileSpan) -> ExprId {
        self.alloc_expr(Expr::Constant {
            value: Literal::Int(value),
            ty: Ty::Int,
            span,
        })
    }

    /// Allocates a floating-point constant
    pub fn float_const(&mut self, value: f64, span: FileSpan) -> ExprId {
        self.alloc_expr(Expr::Constant {
            value: Literal::Float(value),
            ty: Ty::Float,
            span,
        })
    }

    /// Allocates an identifier reference
    pub fn ident(&mut self, name: Symbol, ty: Ty, span: FileSpan) -> ExprId {
        self.alloc_expr(Expr::Identifier { name, ty, span })
    }

    /// Allocates a unary operation
    pub fn unary(&mut self, op: UnOp, operand: ExprId, ty: Ty, span: FileSpan) -> ExprId {
        self.alloc_expr(Expr::Unary {
            op,
            operand,
            ty,
            span,
        })
    }

    /// Allocates a binary operation
    pub fn binary(&mut self, op: BinOp, lhs: ExprId, rhs: ExprId, ty: Ty, span: FileSpan) -> ExprId {
        self.alloc_expr(Expr::Binary {
            op,
            lhs,
            rhs,
            ty,
            span,
        })
    }

    /// Allocates a conditional operation
    pub fn conditional(
        &mut self,
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
        ty: Ty,
        span: FileSpan,
    ) -> ExprId {
        self.alloc_expr(Expr::Conditional {
            cond,
            then_expr,
            else_expr,
            ty,
            span,
        })
    }

    /// Allocates a function call
    pub fn call(&mut self, callee: ExprId, args: Vec<ExprId>, ty: Ty, span: FileSpan) -> ExprId {
        self.alloc_expr(Expr::Call {
            callee,
            args,
            ty,
            span,
        })
    }

    /// Allocates a compiler temporary
    pub fn temp_var(&mut self, index: u32, ty: Ty, span: FileSpan) -> ExprId {
        self.alloc_expr(Expr::TempVar { index, ty, span })
    }
}

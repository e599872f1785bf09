//! Expression nodes and their rendering.
//!
//! Nodes are immutable and shared: an [`Expr`] is a reference-counted handle,
//! so a sub-expression can be attached to several parents or statements and
//! stays alive for as long as anything refers to it.

use core::fmt;
use std::rc::Rc;

use super::types::{Literal, ValueKind};
use crate::error::{Result, SqlGenError};
use crate::render::RenderContext;
use crate::schema::{Column, Table};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Logical
    And,
    Or,

    // Comparison
    Gt,
    Lt,
    Eq,
    GtEq,
    LtEq,
    NotEq,
    Like,

    // Assignment (SET / VALUES entries)
    Assign,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Eq | Self::Assign => "=",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::NotEq => "<>",
            Self::Like => "LIKE",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Operator text as emitted between operands.
    ///
    /// Equality, assignment and arithmetic are emitted tight (`a=1`, `a+1`),
    /// keywords and the other comparisons are spaced (`a >= 1`).
    const fn infix(&self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
            Self::Gt => " > ",
            Self::Lt => " < ",
            Self::GtEq => " >= ",
            Self::LtEq => " <= ",
            Self::NotEq => " <> ",
            Self::Like => " LIKE ",
            Self::Eq | Self::Assign => "=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Returns true for logical and comparison operators, which yield `Bool`.
    #[must_use]
    pub const fn is_predicate(&self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Or
                | Self::Gt
                | Self::Lt
                | Self::Eq
                | Self::GtEq
                | Self::LtEq
                | Self::NotEq
                | Self::Like
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate and set functions taking a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Distinct,
    Max,
    Min,
    Avg,
    Count,
    Sum,
}

impl Aggregate {
    /// Returns the SQL function name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Distinct => "DISTINCT",
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Avg => "AVG",
            Self::Count => "COUNT",
            Self::Sum => "SUM",
        }
    }
}

/// A two-table join with an equality condition.
#[derive(Debug, Clone)]
pub struct Join {
    from: Table,
    to: Table,
    on: Expr,
}

impl Join {
    /// Creates a join of `from` with `to` on `on`.
    #[must_use]
    pub fn new(from: &Table, to: &Table, on: impl Into<Expr>) -> Self {
        Self {
            from: from.clone(),
            to: to.clone(),
            on: on.into(),
        }
    }

    /// Returns the left table.
    #[must_use]
    pub const fn from_table(&self) -> &Table {
        &self.from
    }

    /// Returns the joined table.
    #[must_use]
    pub const fn to_table(&self) -> &Table {
        &self.to
    }

    /// Returns the ON condition.
    #[must_use]
    pub const fn condition(&self) -> &Expr {
        &self.on
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        let is_equality = matches!(self.on.as_binary(), Some((BinaryOp::Eq, _, _)));
        ctx.check(is_equality, || SqlGenError::JoinNeedsEquality {
            found: self.on.describe(),
        })?;

        ctx.push_str(self.from.name());
        ctx.push_str(" JOIN ");
        ctx.push_str(self.to.name());
        ctx.push_str(" ON ");
        ctx.render_top(&self.on)
    }
}

/// The closed set of expression variants.
#[derive(Debug)]
pub enum ExprKind {
    /// A literal value.
    Literal(Literal),
    /// A table column, qualified when the context asks for it.
    Column(Column),
    /// A bare named value, never qualified.
    Variable {
        /// The name as written.
        name: String,
        /// The declared kind.
        kind: ValueKind,
    },
    /// The `*` selector.
    Star,
    /// A binary operation.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        left: Expr,
        /// Right operand.
        right: Expr,
    },
    /// An aggregate function call.
    Function {
        /// The function.
        func: Aggregate,
        /// Its operand.
        arg: Expr,
    },
    /// A join used as a FROM source.
    Join(Join),
}

/// A shared, immutable expression node.
#[derive(Debug, Clone)]
pub struct Expr(Rc<ExprKind>);

impl Expr {
    /// Wraps a node.
    #[must_use]
    pub fn new(kind: ExprKind) -> Self {
        Self(Rc::new(kind))
    }

    /// Creates a literal expression.
    #[must_use]
    pub fn lit(value: impl Into<Literal>) -> Self {
        Self::new(ExprKind::Literal(value.into()))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub fn null() -> Self {
        Self::lit(Literal::Null)
    }

    /// Creates the `*` selector.
    #[must_use]
    pub fn star() -> Self {
        Self::new(ExprKind::Star)
    }

    /// Creates a bare named value of the given kind.
    #[must_use]
    pub fn variable(name: &str, kind: ValueKind) -> Self {
        Self::new(ExprKind::Variable {
            name: String::from(name),
            kind,
        })
    }

    /// Creates a binary operation.
    ///
    /// Every operator helper funnels through here.
    #[must_use]
    pub fn binary(op: BinaryOp, left: impl Into<Self>, right: impl Into<Self>) -> Self {
        Self::new(ExprKind::Binary {
            op,
            left: left.into(),
            right: right.into(),
        })
    }

    /// Creates an aggregate call.
    #[must_use]
    pub fn function(func: Aggregate, arg: impl Into<Self>) -> Self {
        Self::new(ExprKind::Function {
            func,
            arg: arg.into(),
        })
    }

    /// Returns the node.
    #[must_use]
    pub fn node(&self) -> &ExprKind {
        &self.0
    }

    /// Returns true if the node is a binary operation.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(*self.0, ExprKind::Binary { .. })
    }

    /// Returns the operator and operands of a binary operation.
    #[must_use]
    pub fn as_binary(&self) -> Option<(BinaryOp, &Self, &Self)> {
        match &*self.0 {
            ExprKind::Binary { op, left, right } => Some((*op, left, right)),
            _ => None,
        }
    }

    /// Returns the value kind the expression reports.
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        match &*self.0 {
            ExprKind::Literal(lit) => lit.kind(),
            ExprKind::Column(col) => col.kind(),
            ExprKind::Variable { kind, .. } => *kind,
            ExprKind::Star | ExprKind::Join(_) => ValueKind::None,
            ExprKind::Binary { op, left, .. } => {
                if op.is_predicate() {
                    ValueKind::Bool
                } else if *op == BinaryOp::Assign {
                    ValueKind::None
                } else {
                    left.value_kind()
                }
            }
            ExprKind::Function { arg, .. } => arg.value_kind(),
        }
    }

    /// Short description used in error messages.
    pub(crate) fn describe(&self) -> String {
        match &*self.0 {
            ExprKind::Literal(lit) => format!("literal {}", lit.to_sql()),
            ExprKind::Column(col) => format!("column `{}`", col.name()),
            ExprKind::Variable { name, .. } => format!("variable `{name}`"),
            ExprKind::Star => String::from("`*`"),
            ExprKind::Binary { op, .. } => format!("`{op}` expression"),
            ExprKind::Function { func, .. } => format!("{}() call", func.as_str()),
            ExprKind::Join(_) => String::from("join"),
        }
    }

    /// Renders the expression into the context.
    ///
    /// A binary operation wraps itself in parentheses when the context asks
    /// it to, and asks the same of its operands whenever either operand is a
    /// binary operation. Nested operations are therefore always
    /// parenthesized and the rendered text never relies on operator
    /// precedence.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, according to the context's policy.
    pub fn render(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        match &*self.0 {
            ExprKind::Literal(lit) => {
                if let &Literal::Float(value) = lit {
                    ctx.check(value.is_finite(), || SqlGenError::NonFiniteFloat { value })?;
                }
                lit.write_sql(ctx.buffer());
            }
            ExprKind::Column(col) => {
                let qualify = ctx.qualify();
                col.write_sql(qualify, ctx.buffer());
            }
            ExprKind::Variable { name, .. } => ctx.push_str(name),
            ExprKind::Star => ctx.push_str("*"),
            ExprKind::Binary { op, left, right } => render_binary(*op, left, right, ctx)?,
            ExprKind::Function { func, arg } => {
                ctx.push_str(func.as_str());
                ctx.push_str("(");
                ctx.render_top(arg)?;
                ctx.push_str(")");
            }
            ExprKind::Join(join) => join.render(ctx)?,
        }
        Ok(())
    }
}

fn render_binary(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    ctx: &mut RenderContext<'_>,
) -> Result<()> {
    let (lk, rk) = (left.value_kind(), right.value_kind());
    let compatible = if op == BinaryOp::Assign {
        lk.accepts(rk)
    } else {
        lk == rk
    };
    ctx.check(compatible, || SqlGenError::TypeMismatch {
        op,
        left: lk,
        right: rk,
    })?;
    if op == BinaryOp::Like {
        ctx.check(rk == ValueKind::String, || SqlGenError::LikeNeedsString {
            found: rk,
        })?;
    }

    let wrap = ctx.parenthesize();
    if wrap {
        ctx.push_str("(");
    }

    // Reset before each operand: rendering the left subtree rewrites the flag.
    let nested = left.is_binary() || right.is_binary();
    ctx.set_parenthesize(nested);
    left.render(ctx)?;
    ctx.push_str(op.infix());
    ctx.set_parenthesize(nested);
    right.render(ctx)?;

    if wrap {
        ctx.push_str(")");
    }
    Ok(())
}

macro_rules! binary_builders {
    ($($(#[$doc:meta])* $name:ident => $op:ident),+ $(,)?) => {
        impl Expr {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $name(self, rhs: impl Into<Self>) -> Self {
                    Self::binary(BinaryOp::$op, self, rhs)
                }
            )+
        }

        impl Column {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $name(&self, rhs: impl Into<Expr>) -> Expr {
                    Expr::binary(BinaryOp::$op, self, rhs)
                }
            )+
        }
    };
}

binary_builders! {
    /// Creates an AND expression.
    and => And,
    /// Creates an OR expression.
    or => Or,
    /// Creates an equality expression.
    eq => Eq,
    /// Creates an inequality (`<>`) expression.
    not_eq => NotEq,
    /// Creates a less-than expression.
    lt => Lt,
    /// Creates a less-than-or-equal expression.
    lt_eq => LtEq,
    /// Creates a greater-than expression.
    gt => Gt,
    /// Creates a greater-than-or-equal expression.
    gt_eq => GtEq,
    /// Creates a LIKE expression.
    like => Like,
    /// Creates an assignment for SET and VALUES lists.
    assign => Assign,
}

macro_rules! arithmetic_ops {
    ($($trait:ident :: $method:ident => $op:ident),+ $(,)?) => {
        $(
            impl<R: Into<Expr>> std::ops::$trait<R> for Expr {
                type Output = Self;

                fn $method(self, rhs: R) -> Self {
                    Self::binary(BinaryOp::$op, self, rhs)
                }
            }

            impl<R: Into<Expr>> std::ops::$trait<R> for &Column {
                type Output = Expr;

                fn $method(self, rhs: R) -> Expr {
                    Expr::binary(BinaryOp::$op, self, rhs)
                }
            }

            impl<R: Into<Expr>> std::ops::$trait<R> for Column {
                type Output = Expr;

                fn $method(self, rhs: R) -> Expr {
                    Expr::binary(BinaryOp::$op, self, rhs)
                }
            }
        )+
    };
}

arithmetic_ops! {
    Add::add => Add,
    Sub::sub => Sub,
    Mul::mul => Mul,
    Div::div => Div,
    Rem::rem => Mod,
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Self::new(ExprKind::Literal(lit))
    }
}

impl From<&Column> for Expr {
    fn from(col: &Column) -> Self {
        Self::new(ExprKind::Column(col.clone()))
    }
}

impl From<Column> for Expr {
    fn from(col: Column) -> Self {
        Self::new(ExprKind::Column(col))
    }
}

impl From<Join> for Expr {
    fn from(join: Join) -> Self {
        Self::new(ExprKind::Join(join))
    }
}

impl From<&Self> for Expr {
    fn from(expr: &Self) -> Self {
        expr.clone()
    }
}

macro_rules! literal_into_expr {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::lit(value)
                }
            }
        )+
    };
}

literal_into_expr!(i64, i32, u32, f64, f32, bool, &str, String);

impl<T: Into<Literal>> From<Option<T>> for Expr {
    fn from(value: Option<T>) -> Self {
        Self::lit(value)
    }
}

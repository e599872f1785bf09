//! Free-standing expression constructors.
//!
//! Column comparisons live on [`Column`](crate::schema::Column) and
//! [`Expr`] themselves (`age.gt_eq(18)`, `&age + 10`); this module adds the
//! leaves and aggregate calls that have no natural receiver.

use crate::ast::{Aggregate, Expr, Literal, ValueKind};

/// Creates a literal.
#[must_use]
pub fn lit(value: impl Into<Literal>) -> Expr {
    Expr::lit(value)
}

/// Creates a NULL literal.
#[must_use]
pub fn null() -> Expr {
    Expr::null()
}

/// Creates the `*` selector.
#[must_use]
pub fn star() -> Expr {
    Expr::star()
}

/// Creates a bare named value, rendered without a table prefix.
#[must_use]
pub fn var(name: &str, kind: ValueKind) -> Expr {
    Expr::variable(name, kind)
}

/// `DISTINCT(expr)`.
#[must_use]
pub fn distinct(expr: impl Into<Expr>) -> Expr {
    Expr::function(Aggregate::Distinct, expr)
}

/// `MAX(expr)`.
#[must_use]
pub fn max(expr: impl Into<Expr>) -> Expr {
    Expr::function(Aggregate::Max, expr)
}

/// `MIN(expr)`.
#[must_use]
pub fn min(expr: impl Into<Expr>) -> Expr {
    Expr::function(Aggregate::Min, expr)
}

/// `AVG(expr)`.
#[must_use]
pub fn avg(expr: impl Into<Expr>) -> Expr {
    Expr::function(Aggregate::Avg, expr)
}

/// `COUNT(expr)`.
///
/// Like every aggregate, the call reports its operand's kind: `COUNT(age)` is
/// `Int` and can be compared with integers, while `COUNT(*)` has no kind.
#[must_use]
pub fn count(expr: impl Into<Expr>) -> Expr {
    Expr::function(Aggregate::Count, expr)
}

/// `SUM(expr)`.
#[must_use]
pub fn sum(expr: impl Into<Expr>) -> Expr {
    Expr::function(Aggregate::Sum, expr)
}

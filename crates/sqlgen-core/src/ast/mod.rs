//! Expression node types and value kinds.

mod expression;
mod types;

pub use expression::{Aggregate, BinaryOp, Expr, ExprKind, Join};
pub use types::{Literal, ValueKind};

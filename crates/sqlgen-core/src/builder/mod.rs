//! Statement builders.
//!
//! Each builder accumulates shared expression nodes through a fluent API and
//! validates the statement when it is rendered. Rendering never mutates the
//! builder, so a statement can be rendered any number of times.
//!
//! # Example
//!
//! ```rust
//! use sqlgen_core::builder::{Select, Statement};
//! use sqlgen_core::schema::Table;
//! use sqlgen_core::ValueKind;
//!
//! let users = Table::builder("Users")
//!     .column("name", ValueKind::String)
//!     .column("age", ValueKind::Int)
//!     .build();
//!
//! let sql = Select::new()
//!     .select([&users["name"], &users["age"]])
//!     .from(&users)
//!     .where_clause(users["age"].gt_eq(18))
//!     .to_sql()
//!     .unwrap();
//!
//! assert_eq!(sql, "SELECT name,age FROM Users WHERE age >= 18");
//! ```

mod delete;
mod expr;
mod insert;
mod select;
mod update;

use tracing::debug;

use crate::ast::{Expr, ValueKind};
use crate::config::RenderConfig;
use crate::error::{Result, SqlGenError};
use crate::render::RenderContext;

pub use delete::Delete;
pub use expr::{avg, count, distinct, lit, max, min, null, star, sum, var};
pub use insert::Insert;
pub use select::{OrderDirection, Select, Source};
pub use update::Update;

// Typestate markers shared by the table-targeting builders

/// Marker: No table specified yet.
pub struct NoTable;
/// Marker: Table has been specified.
pub struct HasTable;

/// A statement that can be rendered to SQL text.
pub trait Statement {
    /// Renders the statement into `ctx`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, according to the context's policy.
    fn render(&self, ctx: &mut RenderContext<'_>) -> Result<()>;

    /// Renders the statement with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, according to `config`.
    fn to_sql_with(&self, config: &RenderConfig) -> Result<String> {
        let mut ctx = RenderContext::new(config);
        self.render(&mut ctx)?;
        let sql = ctx.finish();
        debug!(%sql, "rendered statement");
        Ok(sql)
    }

    /// Renders the statement with strict validation.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    fn to_sql(&self) -> Result<String> {
        self.to_sql_with(&RenderConfig::default())
    }
}

/// Renders ` <clause> <predicate>` after checking the predicate is boolean.
fn render_predicate(
    clause: &'static str,
    predicate: &Expr,
    ctx: &mut RenderContext<'_>,
) -> Result<()> {
    let found = predicate.value_kind();
    ctx.check(found == ValueKind::Bool, || SqlGenError::PredicateNotBool {
        clause,
        found,
    })?;
    ctx.push_str(" ");
    ctx.push_str(clause);
    ctx.push_str(" ");
    ctx.render_top(predicate)
}

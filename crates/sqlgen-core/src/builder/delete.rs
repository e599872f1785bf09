//! DELETE statement builder using the typestate pattern.

use std::marker::PhantomData;

use super::{HasTable, NoTable, Statement};
use crate::ast::Expr;
use crate::error::Result;
use crate::render::RenderContext;
use crate::schema::Table;

/// A DELETE statement builder.
///
/// Uses the typestate pattern to ensure that rendering is only available
/// once the table is specified.
pub struct Delete<State> {
    table: Option<Table>,
    where_clause: Option<Expr>,
    _state: PhantomData<State>,
}

impl Delete<NoTable> {
    /// Creates a new DELETE builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: None,
            where_clause: None,
            _state: PhantomData,
        }
    }

    /// Specifies the table to delete from.
    #[must_use]
    pub fn from(self, table: &Table) -> Delete<HasTable> {
        Delete {
            table: Some(table.clone()),
            where_clause: self.where_clause,
            _state: PhantomData,
        }
    }
}

impl Default for Delete<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State> Delete<State> {
    /// Adds a WHERE clause.
    ///
    /// **Important**: DELETE without WHERE deletes all rows!
    #[must_use]
    pub fn where_clause(mut self, predicate: impl Into<Expr>) -> Self {
        self.where_clause = Some(predicate.into());
        self
    }

    /// Returns true if a WHERE clause is specified.
    #[must_use]
    pub const fn has_where_clause(&self) -> bool {
        self.where_clause.is_some()
    }
}

impl Statement for Delete<HasTable> {
    fn render(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        ctx.push_str("DELETE FROM ");
        if let Some(ref table) = self.table {
            ctx.push_str(table.name());
        }

        // No kind check here: the predicate validates its own operands.
        if let Some(ref predicate) = self.where_clause {
            ctx.push_str(" WHERE ");
            ctx.render_top(predicate)?;
        }
        Ok(())
    }
}

//! UPDATE statement builder using the typestate pattern.

use std::marker::PhantomData;

use super::{HasTable, NoTable, Statement, render_predicate};
use crate::ast::{BinaryOp, Expr};
use crate::error::{Result, SqlGenError};
use crate::render::RenderContext;
use crate::schema::Table;

/// An UPDATE statement builder.
pub struct Update<State> {
    table: Option<Table>,
    assignments: Vec<Expr>,
    where_clause: Option<Expr>,
    _state: PhantomData<State>,
}

impl Update<NoTable> {
    /// Creates a new UPDATE builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: None,
            assignments: vec![],
            where_clause: None,
            _state: PhantomData,
        }
    }

    /// Specifies the table to update.
    #[must_use]
    pub fn update(self, table: &Table) -> Update<HasTable> {
        Update {
            table: Some(table.clone()),
            assignments: self.assignments,
            where_clause: self.where_clause,
            _state: PhantomData,
        }
    }
}

impl Default for Update<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State> Update<State> {
    /// Appends assignments to the SET list.
    #[must_use]
    pub fn set<I>(mut self, assignments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.assignments
            .extend(assignments.into_iter().map(Into::into));
        self
    }

    /// Sets the WHERE predicate.
    #[must_use]
    pub fn where_clause(mut self, predicate: impl Into<Expr>) -> Self {
        self.where_clause = Some(predicate.into());
        self
    }
}

impl Statement for Update<HasTable> {
    fn render(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        ctx.check(!self.assignments.is_empty(), || SqlGenError::EmptyClause {
            clause: "SET",
        })?;

        ctx.push_str("UPDATE ");
        if let Some(ref table) = self.table {
            ctx.push_str(table.name());
        }
        ctx.push_str(" SET ");

        for (i, assignment) in self.assignments.iter().enumerate() {
            let is_assign = matches!(assignment.as_binary(), Some((BinaryOp::Assign, _, _)));
            ctx.check(is_assign, || SqlGenError::NotAnAssignment {
                clause: "SET",
                found: assignment.describe(),
            })?;
            if i > 0 {
                ctx.push_str(",");
            }
            ctx.render_top(assignment)?;
        }

        if let Some(ref predicate) = self.where_clause {
            render_predicate("WHERE", predicate, ctx)?;
        }
        Ok(())
    }
}

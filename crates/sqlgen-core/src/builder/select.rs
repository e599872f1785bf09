//! SELECT statement builder.

use tracing::warn;

use super::{Statement, render_predicate};
use crate::ast::{Expr, Join};
use crate::error::{Result, SqlGenError};
use crate::render::RenderContext;
use crate::schema::{Column, Table};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// The FROM source of a SELECT.
#[derive(Debug, Clone)]
pub enum Source {
    /// A single table.
    Table(Table),
    /// Two joined tables.
    Join(Join),
}

impl From<&Table> for Source {
    fn from(table: &Table) -> Self {
        Self::Table(table.clone())
    }
}

impl From<Table> for Source {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<Join> for Source {
    fn from(join: Join) -> Self {
        Self::Join(join)
    }
}

/// A SELECT statement builder.
///
/// Every clause is optional. An empty select list renders as `*`, WHERE is
/// only emitted together with a FROM source, and a join source turns on
/// table qualification for every column in the statement.
#[derive(Debug, Clone, Default)]
pub struct Select {
    columns: Vec<Expr>,
    source: Option<Source>,
    where_clause: Option<Expr>,
    group_by: Option<Column>,
    order_by: Option<(Column, OrderDirection)>,
    having: Option<Expr>,
    limit: i64,
    offset: i64,
}

impl Select {
    /// Creates a new SELECT builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends expressions to the select list.
    #[must_use]
    pub fn select<I>(mut self, exprs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.columns.extend(exprs.into_iter().map(Into::into));
        self
    }

    /// Sets the FROM source, replacing any previous one.
    #[must_use]
    pub fn from(mut self, source: impl Into<Source>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the WHERE predicate.
    #[must_use]
    pub fn where_clause(mut self, predicate: impl Into<Expr>) -> Self {
        self.where_clause = Some(predicate.into());
        self
    }

    /// Sets the GROUP BY column.
    #[must_use]
    pub fn group_by(mut self, column: &Column) -> Self {
        self.group_by = Some(column.clone());
        self
    }

    /// Sets the ORDER BY column and direction.
    #[must_use]
    pub fn order_by(mut self, column: &Column, direction: OrderDirection) -> Self {
        self.order_by = Some((column.clone(), direction));
        self
    }

    /// Sets the HAVING predicate.
    #[must_use]
    pub fn having(mut self, predicate: impl Into<Expr>) -> Self {
        self.having = Some(predicate.into());
        self
    }

    /// Sets LIMIT; zero means no limit.
    #[must_use]
    pub const fn limit(mut self, n: i64) -> Self {
        self.limit = n;
        self
    }

    /// Sets OFFSET; zero means no offset.
    #[must_use]
    pub const fn offset(mut self, n: i64) -> Self {
        self.offset = n;
        self
    }
}

fn render_column(column: &Column, ctx: &mut RenderContext<'_>) {
    let qualify = ctx.qualify();
    column.write_sql(qualify, ctx.buffer());
}

fn render_bound(clause: &'static str, value: i64, ctx: &mut RenderContext<'_>) -> Result<()> {
    ctx.check(value >= 0, || SqlGenError::NegativeBound { clause, value })?;
    if value != 0 {
        ctx.push_str(&format!(" {clause} {value}"));
    }
    Ok(())
}

impl Statement for Select {
    fn render(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        ctx.set_qualify(matches!(self.source, Some(Source::Join(_))));

        ctx.push_str("SELECT ");
        if self.columns.is_empty() {
            ctx.push_str("*");
        }
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                ctx.push_str(",");
            }
            ctx.render_top(column)?;
        }

        match &self.source {
            Some(source) => {
                ctx.push_str(" FROM ");
                match source {
                    Source::Table(table) => ctx.push_str(table.name()),
                    Source::Join(join) => join.render(ctx)?,
                }
                if let Some(ref predicate) = self.where_clause {
                    render_predicate("WHERE", predicate, ctx)?;
                }
            }
            None if self.where_clause.is_some() => {
                warn!("WHERE clause dropped: SELECT has no FROM source");
            }
            None => {}
        }

        ctx.check(
            self.group_by.is_none() || self.order_by.is_none(),
            || SqlGenError::OrderAndGroup,
        )?;

        if let Some(ref column) = self.group_by {
            ctx.push_str(" GROUP BY ");
            render_column(column, ctx);
        }

        if let Some(ref predicate) = self.having {
            render_predicate("HAVING", predicate, ctx)?;
        }

        if let Some((ref column, direction)) = self.order_by {
            ctx.push_str(" ORDER BY ");
            render_column(column, ctx);
            ctx.push_str(" ");
            ctx.push_str(direction.as_str());
        }

        render_bound("LIMIT", self.limit, ctx)?;
        render_bound("OFFSET", self.offset, ctx)
    }
}

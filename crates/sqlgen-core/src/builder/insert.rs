//! INSERT statement builder using the typestate pattern.

use std::marker::PhantomData;

use super::{HasTable, NoTable, Statement};
use crate::ast::{BinaryOp, Expr};
use crate::error::{Result, SqlGenError};
use crate::render::RenderContext;
use crate::schema::Table;

/// An INSERT statement builder.
///
/// Each call to [`values`](Insert::values) adds one row of assignments
/// (`column = value`) in column order. The first row fixes both the column
/// list and the row width.
pub struct Insert<State> {
    table: Option<Table>,
    rows: Vec<Vec<Expr>>,
    _state: PhantomData<State>,
}

impl Insert<NoTable> {
    /// Creates a new INSERT builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: None,
            rows: vec![],
            _state: PhantomData,
        }
    }

    /// Specifies the table to insert into.
    #[must_use]
    pub fn insert_into(self, table: &Table) -> Insert<HasTable> {
        Insert {
            table: Some(table.clone()),
            rows: self.rows,
            _state: PhantomData,
        }
    }
}

impl Default for Insert<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State> Insert<State> {
    /// Adds one row of assignments.
    #[must_use]
    pub fn values<I>(mut self, row: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }
}

/// Splits a VALUES entry into its column and value.
fn assignment<'e>(expr: &'e Expr, ctx: &RenderContext<'_>) -> Result<(&'e Expr, &'e Expr)> {
    let not_assignment = || SqlGenError::NotAnAssignment {
        clause: "VALUES",
        found: expr.describe(),
    };
    // Without a binary node there is no column to derive, whatever the policy.
    let (op, column, value) = expr.as_binary().ok_or_else(not_assignment)?;
    ctx.check(op == BinaryOp::Assign, not_assignment)?;

    let (ck, vk) = (column.value_kind(), value.value_kind());
    ctx.check(ck.accepts(vk), || SqlGenError::TypeMismatch {
        op,
        left: ck,
        right: vk,
    })?;
    Ok((column, value))
}

impl Statement for Insert<HasTable> {
    fn render(&self, ctx: &mut RenderContext<'_>) -> Result<()> {
        ctx.check(!self.rows.is_empty(), || SqlGenError::EmptyClause {
            clause: "VALUES",
        })?;

        let width = self.rows.first().map_or(0, Vec::len);
        for (row, exprs) in self.rows.iter().enumerate().skip(1) {
            ctx.check(exprs.len() == width, || SqlGenError::RowWidthMismatch {
                expected: width,
                found: exprs.len(),
                row,
            })?;
        }

        let rows = self
            .rows
            .iter()
            .map(|exprs| {
                exprs
                    .iter()
                    .map(|expr| assignment(expr, ctx))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        ctx.push_str("INSERT INTO ");
        if let Some(ref table) = self.table {
            ctx.push_str(table.name());
        }

        ctx.push_str("(");
        if let Some(first) = rows.first() {
            for (i, (column, _)) in first.iter().enumerate() {
                if i > 0 {
                    ctx.push_str(",");
                }
                ctx.render_top(column)?;
            }
        }
        ctx.push_str(") VALUES ");

        for (r, row) in rows.iter().enumerate() {
            if r > 0 {
                ctx.push_str(",");
            }
            ctx.push_str("(");
            for (i, (_, value)) in row.iter().enumerate() {
                if i > 0 {
                    ctx.push_str(",");
                }
                ctx.render_top(value)?;
            }
            ctx.push_str(")");
        }
        Ok(())
    }
}

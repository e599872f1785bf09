//! Table and column metadata.
//!
//! Tables are declared once by the embedding application and shared by every
//! statement built against them. A [`Table`] is a cheap, clonable handle; its
//! columns remember the name of the table that owns them so they can render
//! qualified (`Users.age`) when a statement needs it.
//!
//! ```rust
//! use sqlgen_core::schema::Table;
//! use sqlgen_core::ValueKind;
//!
//! let users = Table::builder("Users")
//!     .column("name", ValueKind::String)
//!     .column("age", ValueKind::Int)
//!     .build();
//!
//! assert_eq!(users["age"].kind(), ValueKind::Int);
//! assert_eq!(users["age"].table_name(), "Users");
//! ```

use std::ops::Index;
use std::rc::Rc;

use crate::ast::{Expr, Join, ValueKind};

/// A typed column owned by a table.
#[derive(Debug, Clone)]
pub struct Column {
    table: Rc<str>,
    name: Rc<str>,
    kind: ValueKind,
}

impl Column {
    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the owning table.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Returns the value kind of the column.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the column as an expression node.
    #[must_use]
    pub fn expr(&self) -> Expr {
        Expr::from(self)
    }

    /// Appends the column to `out`, prefixed with its table when `qualify` is set.
    pub(crate) fn write_sql(&self, qualify: bool, out: &mut String) {
        if qualify {
            out.push_str(&self.table);
            out.push('.');
        }
        out.push_str(&self.name);
    }
}

#[derive(Debug)]
struct TableInner {
    name: Rc<str>,
    columns: Vec<Column>,
}

/// A table and the columns declared against it.
#[derive(Debug, Clone)]
pub struct Table {
    inner: Rc<TableInner>,
}

impl Table {
    /// Starts declaring a table.
    #[must_use]
    pub fn builder(name: &str) -> TableBuilder {
        TableBuilder {
            name: Rc::from(name),
            columns: vec![],
        }
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.inner.columns
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.inner.columns.iter().find(|c| c.name() == name)
    }

    /// Joins this table with `other`; the condition must be an equality.
    #[must_use]
    pub fn join(&self, other: &Self, on: impl Into<Expr>) -> Join {
        Join::new(self, other, on)
    }
}

impl Index<&str> for Table {
    type Output = Column;

    /// # Panics
    ///
    /// Panics if the table has no column with that name.
    fn index(&self, name: &str) -> &Column {
        self.column(name)
            .unwrap_or_else(|| panic!("table `{}` has no column `{name}`", self.name()))
    }
}

/// Builder for [`Table`].
#[derive(Debug)]
pub struct TableBuilder {
    name: Rc<str>,
    columns: Vec<Column>,
}

impl TableBuilder {
    /// Declares a column.
    #[must_use]
    pub fn column(mut self, name: &str, kind: ValueKind) -> Self {
        self.columns.push(Column {
            table: Rc::clone(&self.name),
            name: Rc::from(name),
            kind,
        });
        self
    }

    /// Finishes the declaration.
    #[must_use]
    pub fn build(self) -> Table {
        Table {
            inner: Rc::new(TableInner {
                name: self.name,
                columns: self.columns,
            }),
        }
    }
}

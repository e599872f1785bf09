//! # sqlgen-core
//!
//! An embedded SQL statement builder with render-time validation.
//!
//! This crate provides:
//! - Typed expression nodes (literals, columns, operators, aggregates, joins)
//! - SELECT / INSERT / UPDATE / DELETE builders that render ANSI-flavored SQL
//! - Validation of value kinds and clause shapes while rendering
//! - Sequential decoding of text result sets into typed rows
//!
//! ## Building statements
//!
//! Columns come from tables declared once by the application; expressions are
//! composed from columns and literals and fed into a builder:
//!
//! ```rust
//! use sqlgen_core::{Insert, Select, Statement, Table, ValueKind};
//!
//! let users = Table::builder("Users")
//!     .column("name", ValueKind::String)
//!     .column("age", ValueKind::Int)
//!     .build();
//!
//! let insert = Insert::new()
//!     .insert_into(&users)
//!     .values([users["name"].assign("a"), users["age"].assign(1)])
//!     .values([users["name"].assign("b"), users["age"].assign(2)]);
//! assert_eq!(
//!     insert.to_sql().unwrap(),
//!     "INSERT INTO Users(name,age) VALUES ('a',1),('b',2)"
//! );
//!
//! let select = Select::new()
//!     .select([&users["name"]])
//!     .from(&users)
//!     .where_clause(users["age"].gt_eq(18).and(users["name"].like("a%")));
//! assert_eq!(
//!     select.to_sql().unwrap(),
//!     "SELECT name FROM Users WHERE (age >= 18) AND (name LIKE 'a%')"
//! );
//! ```
//!
//! ## Validation
//!
//! Mismatched value kinds and malformed clauses are reported when the
//! statement is rendered. What happens then is chosen per render through
//! [`RenderConfig`]: fail, log with `tracing` and continue, or skip checks.
//!
//! ```rust
//! use sqlgen_core::{RenderConfig, Select, Statement, Table, ValueKind};
//!
//! let users = Table::builder("Users").column("age", ValueKind::Int).build();
//! let select = Select::new().from(&users).where_clause(users["age"].eq("x"));
//!
//! assert!(select.to_sql().is_err());
//! assert_eq!(
//!     select.to_sql_with(&RenderConfig::trusted()).unwrap(),
//!     "SELECT * FROM Users WHERE age='x'"
//! );
//! ```
//!
//! String literals are emitted verbatim between single quotes, without any
//! escaping: only pass trusted text.

pub mod ast;
pub mod builder;
pub mod config;
pub mod error;
pub mod reader;
pub mod render;
pub mod schema;

pub use ast::{Expr, Literal, ValueKind};
pub use builder::{Delete, Insert, Select, Statement, Update};
pub use config::{RenderConfig, ValidationPolicy};
pub use error::{Result, SqlGenError, ViolationKind};
pub use schema::{Column, Table};

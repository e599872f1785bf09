//! Sequential result reading and row unpacking.
//!
//! Drivers expose query results through [`ResultReader`], a cursor handing out
//! text fields one at a time. [`FromSql`] turns that stream back into typed
//! values: scalars consume one field, tuples and row structs consume their
//! fields in column order, and `Vec<T>` consumes one `T` per remaining row.
//!
//! ```rust
//! use sqlgen_core::reader::{MemoryResultReader, unpack};
//!
//! let mut reader = MemoryResultReader::new(
//!     2,
//!     vec![
//!         vec![Some("lis".into()), Some("12".into())],
//!         vec![Some("mid".into()), Some("18".into())],
//!     ],
//! );
//! let rows: Vec<(String, i64)> = unpack(&mut reader).unwrap();
//! assert_eq!(rows[1], (String::from("mid"), 18));
//! ```

use tracing::trace;

use crate::ast::ValueKind;
use crate::error::{Result, SqlGenError};

/// A cursor over a materialized result set.
pub trait ResultReader {
    /// Number of fields in each row.
    fn field_count(&self) -> usize;

    /// Number of rows in the result.
    fn row_count(&self) -> usize;

    /// Number of rows not yet fully read, counting a partly read current row.
    fn remaining_rows(&self) -> usize;

    /// Moves to the next row. Returns false once the rows are exhausted.
    fn advance_row(&mut self) -> bool;

    /// Returns the next field, moving to the next row when the current one
    /// has been consumed. `None` is SQL NULL.
    ///
    /// # Errors
    ///
    /// Returns [`SqlGenError::ResultExhausted`] past the last field.
    fn next_field(&mut self) -> Result<Option<&str>>;
}

/// A [`ResultReader`] over rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResultReader {
    fields: usize,
    rows: Vec<Vec<Option<String>>>,
    next_row: usize,
    current: Option<usize>,
    field: usize,
}

impl MemoryResultReader {
    /// Creates a reader over `rows`, each holding `fields` values.
    #[must_use]
    pub const fn new(fields: usize, rows: Vec<Vec<Option<String>>>) -> Self {
        Self {
            fields,
            rows,
            next_row: 0,
            current: None,
            field: 0,
        }
    }
}

impl ResultReader for MemoryResultReader {
    fn field_count(&self) -> usize {
        self.fields
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn remaining_rows(&self) -> usize {
        self.rows.len() - self.next_row + usize::from(self.current.is_some())
    }

    fn advance_row(&mut self) -> bool {
        self.field = 0;
        if self.next_row < self.rows.len() {
            trace!(row = self.next_row, "advancing result row");
            self.current = Some(self.next_row);
            self.next_row += 1;
            true
        } else {
            self.current = None;
            false
        }
    }

    fn next_field(&mut self) -> Result<Option<&str>> {
        if self.current.is_none() && !self.advance_row() {
            return Err(SqlGenError::ResultExhausted);
        }
        let row = self.current.ok_or(SqlGenError::ResultExhausted)?;
        let field = self.field;
        self.field += 1;
        if self.field >= self.fields {
            self.current = None;
        }
        self.rows[row]
            .get(field)
            .map(Option::as_deref)
            .ok_or(SqlGenError::ResultExhausted)
    }
}

/// Conversion of a single non-NULL text field.
pub trait FromField: Sized {
    /// Parses the field text.
    ///
    /// # Errors
    ///
    /// Returns [`SqlGenError::Decode`] if the text does not parse.
    fn from_field(field: &str) -> Result<Self>;
}

fn decode_error(expected: ValueKind, field: &str) -> SqlGenError {
    SqlGenError::Decode {
        expected,
        value: String::from(field),
    }
}

impl FromField for String {
    fn from_field(field: &str) -> Result<Self> {
        Ok(Self::from(field))
    }
}

impl FromField for i64 {
    fn from_field(field: &str) -> Result<Self> {
        field
            .trim()
            .parse()
            .map_err(|_| decode_error(ValueKind::Int, field))
    }
}

impl FromField for i32 {
    fn from_field(field: &str) -> Result<Self> {
        field
            .trim()
            .parse()
            .map_err(|_| decode_error(ValueKind::Int, field))
    }
}

impl FromField for f64 {
    fn from_field(field: &str) -> Result<Self> {
        field
            .trim()
            .parse()
            .map_err(|_| decode_error(ValueKind::Float, field))
    }
}

impl FromField for bool {
    fn from_field(field: &str) -> Result<Self> {
        match field.trim() {
            "1" | "t" | "true" | "TRUE" => Ok(true),
            "0" | "f" | "false" | "FALSE" => Ok(false),
            _ => Err(decode_error(ValueKind::Bool, field)),
        }
    }
}

/// Conversion from the reader's field stream.
pub trait FromSql: Sized {
    /// Reads as many fields as the value needs.
    ///
    /// # Errors
    ///
    /// Returns a decode error if a field is NULL, malformed or missing.
    fn from_sql<R: ResultReader + ?Sized>(reader: &mut R) -> Result<Self>;
}

macro_rules! impl_from_sql_scalar {
    ($($ty:ty),+) => {
        $(
            impl FromSql for $ty {
                fn from_sql<R: ResultReader + ?Sized>(reader: &mut R) -> Result<Self> {
                    let field = reader.next_field()?.ok_or(SqlGenError::UnexpectedNull)?;
                    <$ty as FromField>::from_field(field)
                }
            }

            impl FromSql for Option<$ty> {
                fn from_sql<R: ResultReader + ?Sized>(reader: &mut R) -> Result<Self> {
                    reader
                        .next_field()?
                        .map(<$ty as FromField>::from_field)
                        .transpose()
                }
            }
        )+
    };
}

impl_from_sql_scalar!(String, i64, i32, f64, bool);

impl<T: FromSql> FromSql for Vec<T> {
    fn from_sql<R: ResultReader + ?Sized>(reader: &mut R) -> Result<Self> {
        let rows = reader.remaining_rows();
        let mut out = Self::with_capacity(rows);
        for _ in 0..rows {
            out.push(T::from_sql(reader)?);
        }
        Ok(out)
    }
}

// Implement FromSql for tuples (up to 6)
macro_rules! impl_from_sql_tuple {
    ($($ty:ident),+) => {
        impl<$($ty: FromSql),+> FromSql for ($($ty,)+) {
            fn from_sql<R: ResultReader + ?Sized>(reader: &mut R) -> Result<Self> {
                Ok(($($ty::from_sql(reader)?,)+))
            }
        }
    };
}

impl_from_sql_tuple!(A);
impl_from_sql_tuple!(A, B);
impl_from_sql_tuple!(A, B, C);
impl_from_sql_tuple!(A, B, C, D);
impl_from_sql_tuple!(A, B, C, D, E);
impl_from_sql_tuple!(A, B, C, D, E, F);

/// Reads a `T` from the reader's current position.
///
/// # Errors
///
/// Returns a decode error if the result does not fit `T`.
pub fn unpack<T: FromSql, R: ResultReader + ?Sized>(reader: &mut R) -> Result<T> {
    T::from_sql(reader)
}

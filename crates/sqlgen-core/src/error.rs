//! Error types for statement rendering and result decoding.

use thiserror::Error;

use crate::ast::{BinaryOp, ValueKind};

/// Broad classification of a [`SqlGenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Operands or predicates carry the wrong value kind.
    TypeMismatch,
    /// A clause is built from the wrong kind of expression.
    MalformedClause,
    /// The statement shape is inconsistent (row widths, empty lists).
    Structural,
    /// A result field could not be converted.
    Decode,
}

/// Errors raised while rendering a statement or reading its results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SqlGenError {
    /// The two operands of a binary operation report different value kinds.
    #[error("left operand type ({left}) != right operand type ({right}) for `{op}`")]
    TypeMismatch {
        /// The operator being rendered.
        op: BinaryOp,
        /// Kind of the left operand.
        left: ValueKind,
        /// Kind of the right operand.
        right: ValueKind,
    },

    /// The right-hand side of LIKE is not a string.
    #[error("`LIKE` needs a string pattern, got: {found}")]
    LikeNeedsString {
        /// Kind of the pattern operand.
        found: ValueKind,
    },

    /// A join condition is not an equality.
    #[error("join's `ON` clause needs an equality expression, got: {found}")]
    JoinNeedsEquality {
        /// Description of the offending condition.
        found: String,
    },

    /// WHERE or HAVING received a predicate that is not boolean.
    #[error("`{clause}` clause needs a bool expression, got: {found}")]
    PredicateNotBool {
        /// The clause keyword.
        clause: &'static str,
        /// Kind of the predicate.
        found: ValueKind,
    },

    /// ORDER BY and GROUP BY were both set on one SELECT.
    #[error("can't have both `ORDER BY` and `GROUP BY` clauses")]
    OrderAndGroup,

    /// LIMIT or OFFSET is negative.
    #[error("`{clause}` must be a non-negative value, got: {value}")]
    NegativeBound {
        /// The clause keyword.
        clause: &'static str,
        /// The offending value.
        value: i64,
    },

    /// A SET or VALUES entry is not an assignment.
    #[error("`{clause}` needs assignment expressions, got: {found}")]
    NotAnAssignment {
        /// The clause keyword.
        clause: &'static str,
        /// Description of the offending expression.
        found: String,
    },

    /// An INSERT row has a different width than the first row.
    #[error("values should have the same number of columns: expected {expected}, got {found} in row {row}")]
    RowWidthMismatch {
        /// Width fixed by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
        /// Zero-based index of the offending row.
        row: usize,
    },

    /// A float literal is NaN or infinite, which SQL cannot spell.
    #[error("float literal must be finite, got: {value}")]
    NonFiniteFloat {
        /// The offending value.
        value: f64,
    },

    /// A clause that must have entries has none.
    #[error("`{clause}` clause is empty")]
    EmptyClause {
        /// The clause keyword.
        clause: &'static str,
    },

    /// A result field could not be parsed as the requested kind.
    #[error("can't decode {value:?} as {expected}")]
    Decode {
        /// Kind requested by the caller.
        expected: ValueKind,
        /// Raw field text.
        value: String,
    },

    /// A NULL field was read into a non-optional value.
    #[error("unexpected NULL field")]
    UnexpectedNull,

    /// More fields were requested than the result holds.
    #[error("result set exhausted")]
    ResultExhausted,
}

impl SqlGenError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        match self {
            Self::TypeMismatch { .. }
            | Self::LikeNeedsString { .. }
            | Self::PredicateNotBool { .. } => ViolationKind::TypeMismatch,
            Self::JoinNeedsEquality { .. }
            | Self::OrderAndGroup
            | Self::NegativeBound { .. }
            | Self::NotAnAssignment { .. }
            | Self::NonFiniteFloat { .. } => ViolationKind::MalformedClause,
            Self::RowWidthMismatch { .. } | Self::EmptyClause { .. } => ViolationKind::Structural,
            Self::Decode { .. } | Self::UnexpectedNull | Self::ResultExhausted => {
                ViolationKind::Decode
            }
        }
    }
}

/// Result type alias for rendering and decoding.
pub type Result<T> = std::result::Result<T, SqlGenError>;

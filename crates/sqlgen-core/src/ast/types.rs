//! SQL value kinds and literal values.

use core::fmt;

/// The static type an expression reports for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueKind {
    /// No type (stars, joins, assignments).
    #[default]
    None,
    /// The NULL literal.
    Null,
    /// Character data.
    String,
    /// Integer data.
    Int,
    /// Boolean data.
    Bool,
    /// Floating point data.
    Float,
}

impl ValueKind {
    /// Returns the name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Null => "Null",
            Self::String => "String",
            Self::Int => "Int",
            Self::Bool => "Bool",
            Self::Float => "Float",
        }
    }

    /// Returns true if a value of kind `value` may be assigned to a column of
    /// this kind.
    ///
    /// Kinds must match exactly, except that `Null` may be assigned to anything.
    /// Comparisons get no such exemption: `age = NULL` is never true.
    #[must_use]
    pub fn accepts(self, value: Self) -> bool {
        self == value || value == Self::Null
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value rendered inline.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// NULL.
    Null,
    /// String literal, rendered single-quoted without escaping.
    Str(String),
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
}

impl Literal {
    /// Returns the value kind of the literal.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Str(_) => ValueKind::String,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
        }
    }

    /// Appends the SQL text of the literal to `out`.
    ///
    /// Strings are not escaped: callers must only pass trusted text. NaN and
    /// infinities are written as-is; statement rendering rejects them.
    pub fn write_sql(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("NULL"),
            Self::Str(s) => {
                out.push('\'');
                out.push_str(s);
                out.push('\'');
            }
            Self::Int(n) => out.push_str(&n.to_string()),
            Self::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 {
                    out.push_str(&format!("{f:.1}"));
                } else {
                    out.push_str(&f.to_string());
                }
            }
            Self::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),
        }
    }

    /// Returns the SQL text of the literal.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Literal {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Literal {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for Literal {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::Str(String::from(s))
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<Self>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

//! # Generic Tagged Field
//!
//! `Field` is the already-typed value carrier handed to settings by query
//! parsers and protocol decoders (for example the right-hand side of
//! `SET max_threads = 8`). A setting extracts its native type through one of
//! the typed accessors, which fail with `TypeMismatch` when the stored type
//! does not match. No accessor coerces between types; settings that accept
//! several representations match on the variant themselves.
//!
//! ```ignore
//! use setbox::types::Field;
//!
//! let f = Field::from(42u64);
//! assert_eq!(f.as_u64()?, 42);
//! assert!(f.as_str().is_err());
//! ```

use crate::error::{Result, SettingError};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Null,
    UInt64(u64),
    Int64(i64),
    Float64(f64),
    String(String),
    Array(Vec<Field>),
}

impl Field {
    /// Name of the stored type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Field::Null => "Null",
            Field::UInt64(_) => "UInt64",
            Field::Int64(_) => "Int64",
            Field::Float64(_) => "Float64",
            Field::String(_) => "String",
            Field::Array(_) => "Array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn as_u64(&self) -> Result<u64> {
        match self {
            Field::UInt64(v) => Ok(*v),
            other => Err(other.mismatch("UInt64")),
        }
    }

    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Field::Int64(v) => Ok(*v),
            other => Err(other.mismatch("Int64")),
        }
    }

    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Field::Float64(v) => Ok(*v),
            other => Err(other.mismatch("Float64")),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Field::String(s) => Ok(s.as_str()),
            other => Err(other.mismatch("String")),
        }
    }

    pub fn as_array(&self) -> Result<&[Field]> {
        match self {
            Field::Array(items) => Ok(items.as_slice()),
            other => Err(other.mismatch("Array")),
        }
    }

    pub(crate) fn mismatch(&self, expected: &'static str) -> SettingError {
        SettingError::TypeMismatch {
            expected,
            actual: self.type_name(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Null => write!(f, "NULL"),
            Field::UInt64(v) => write!(f, "{}", v),
            Field::Int64(v) => write!(f, "{}", v),
            Field::Float64(v) => write!(f, "{}", v),
            Field::String(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
            Field::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<u64> for Field {
    fn from(v: u64) -> Self {
        Field::UInt64(v)
    }
}

impl From<i64> for Field {
    fn from(v: i64) -> Self {
        Field::Int64(v)
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::Float64(v)
    }
}

impl From<&str> for Field {
    fn from(v: &str) -> Self {
        Field::String(v.to_string())
    }
}

impl From<String> for Field {
    fn from(v: String) -> Self {
        Field::String(v)
    }
}

impl<T: Into<Field>> From<Vec<T>> for Field {
    fn from(items: Vec<T>) -> Self {
        Field::Array(items.into_iter().map(Into::into).collect())
    }
}

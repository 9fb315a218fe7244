//! # Setting Errors
//!
//! Every fallible setting operation returns [`SettingError`]. A failed call
//! never mutates the box: `value` and `changed` are exactly as before.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | `Parse` | text is not a literal of the native type |
//! | `TypeMismatch` | a `Field` holds a type the setting does not accept |
//! | `UnknownEnumValue` | a name is not in the setting's name table |
//! | `IllegalValue` | a known value is not allowed for this setting kind |
//! | `OutOfRange` | an ordinal has no name (internal invariant violation) |
//! | `Io` | the underlying stream failed; the error is passed through |

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingError {
    #[error("cannot parse '{input}' as {expected}")]
    Parse {
        expected: &'static str,
        input: String,
    },

    #[error("bad type of setting: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("unknown {setting}: '{value}', must be one of {}", quote_names(expected))]
    UnknownEnumValue {
        setting: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    #[error("illegal {setting}: '{value}' {reason}")]
    IllegalValue {
        setting: &'static str,
        value: String,
        reason: String,
    },

    #[error("unknown {setting} ordinal {ordinal}")]
    OutOfRange { setting: &'static str, ordinal: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SettingError>;

fn quote_names(names: &[&str]) -> String {
    names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}

//! # Setting Boxes
//!
//! A setting box is a typed runtime parameter with exactly two fields: the
//! current `value` and a `changed` flag. The flag starts out `false` and is
//! raised by every successful set call, including one that stores the value
//! already held. It is never cleared.
//!
//! Only changed settings are sent to remote servers, so a remote server keeps
//! its own default for everything the session never touched. The flag is the
//! single source of truth for that decision; see [`changes`].
//!
//! ## Box Kinds
//!
//! | Box | Value | Wire form |
//! |-----|-------|-----------|
//! | `SettingUInt64` / `SettingBool` | `u64` | varint |
//! | `SettingFloat` | `f32` | length-prefixed decimal text |
//! | `SettingSeconds` | `Duration` | varint whole seconds |
//! | `SettingMilliseconds` | `Duration` | varint whole milliseconds |
//! | `SettingLoadBalancing` | `LoadBalancing` | length-prefixed name |
//! | `SettingTotalsMode` | `TotalsMode` | length-prefixed name |
//! | `SettingOverflowMode` | `OverflowMode` without `any` | length-prefixed name |
//! | `SettingGroupByOverflowMode` | `OverflowMode` | length-prefixed name |
//!
//! ## Input Representations
//!
//! Every box can be set from four representations:
//!
//! ```text
//! native value ──> set()            (infallible)
//! Field        ──> set_field()      (TypeMismatch on wrong variant)
//! text         ──> set_string()     (Parse / UnknownEnumValue / IllegalValue)
//! byte stream  ──> read_binary()    (Io on short read, then as text for strings)
//! ```
//!
//! A failing call leaves both `value` and `changed` untouched.
//!
//! ## Usage
//!
//! ```ignore
//! use setbox::settings::{Setting, SettingMilliseconds, SettingOverflowMode};
//!
//! let mut timeout = SettingMilliseconds::new(1500);
//! timeout.set_string("2500")?;
//! assert_eq!(timeout.total_milliseconds(), 2500);
//!
//! let mut mode = SettingOverflowMode::default();
//! assert!(mode.set_string("any").is_err());
//! ```

pub mod changes;
mod duration;
mod enums;
mod modes;
mod scalar;

pub use changes::{read_changed, write_changed, SettingsSink};
pub use duration::{SettingMilliseconds, SettingSeconds};
pub use enums::{EnumKind, EnumValue, NameTable, SettingEnum};
pub use modes::{
    LoadBalancing, LoadBalancingKind, OverflowMode, OverflowModeKind, SettingGroupByOverflowMode,
    SettingLoadBalancing, SettingOverflowMode, SettingTotalsMode, TotalsMode, TotalsModeKind,
    LOAD_BALANCING_NAMES, OVERFLOW_MODE_NAMES, TOTALS_MODE_NAMES,
};
pub use scalar::{SettingBool, SettingFloat, SettingUInt64};

use crate::error::{Result, SettingError};
use crate::types::Field;
use std::io::{Read, Write};
use std::str::FromStr;

/// Uniform contract shared by every setting box.
///
/// The trait is object safe so heterogeneous settings can be serialized
/// through `&dyn Setting`.
pub trait Setting {
    /// Whether the setting was explicitly configured.
    fn is_changed(&self) -> bool;

    fn set_field(&mut self, field: &Field) -> Result<()>;

    fn set_string(&mut self, s: &str) -> Result<()>;

    fn read_binary(&mut self, input: &mut dyn Read) -> Result<()>;

    fn write_binary(&self, out: &mut dyn Write) -> Result<()>;

    /// Renders the value in the form accepted by `set_string`.
    fn to_text(&self) -> Result<String>;
}

/// Parses the exact text as `T`. No trimming is applied.
pub(crate) fn parse_text<T: FromStr>(s: &str, expected: &'static str) -> Result<T> {
    s.parse::<T>().map_err(|_| {
        tracing::debug!(input = s, expected, "rejected setting text");
        SettingError::Parse {
            expected,
            input: s.to_string(),
        }
    })
}

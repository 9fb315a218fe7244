//! # Enumerated Setting Boxes
//!
//! Enumerated settings travel by name, never by ordinal: the text form and
//! the wire form are both the canonical lowercase name. Appending a variant
//! therefore never changes how existing values are encoded.
//!
//! ## Name Tables
//!
//! Each enumeration owns one static [`NameTable`], a bidirectional mapping
//! built at compile time:
//!
//! ```text
//! name  ──phf map──>  value        "nearest_hostname" -> NearestHostname
//! value ──ordinal──>  name          NearestHostname(1) -> names[1]
//! ```
//!
//! Name lookup is an exact, case-sensitive match. The ordinal side is a
//! checked slice index; a miss is reported as `OutOfRange` instead of
//! indexing past the table.
//!
//! ## Kinds
//!
//! [`SettingEnum`] is generic over an [`EnumKind`], which names the value type,
//! its table, and an optional extra legality check. Two kinds may share a
//! value type and table while accepting different subsets of it; the
//! overflow-mode kinds do exactly that.

use super::Setting;
use crate::encoding::{read_string, write_string};
use crate::error::{Result, SettingError};
use crate::types::Field;
use std::fmt;
use std::io::{Read, Write};
use tracing::{debug, trace};

/// A fieldless enum usable as a setting value.
pub trait EnumValue: Copy + PartialEq + fmt::Debug + 'static {
    /// Position of the value's name in its table.
    fn ordinal(self) -> usize;
}

pub struct NameTable<T: 'static> {
    setting: &'static str,
    by_name: phf::Map<&'static str, T>,
    names: &'static [&'static str],
}

impl<T: EnumValue> NameTable<T> {
    /// `names` must list every name in ordinal order.
    pub const fn new(
        setting: &'static str,
        by_name: phf::Map<&'static str, T>,
        names: &'static [&'static str],
    ) -> Self {
        Self {
            setting,
            by_name,
            names,
        }
    }

    /// Human-readable setting label used in error messages.
    pub fn setting(&self) -> &'static str {
        self.setting
    }

    /// Canonical names in ordinal order.
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub fn lookup(&self, name: &str) -> Result<T> {
        match self.by_name.get(name) {
            Some(value) => Ok(*value),
            None => {
                debug!(setting = self.setting, value = name, "unknown enum name");
                Err(SettingError::UnknownEnumValue {
                    setting: self.setting,
                    value: name.to_string(),
                    expected: self.names,
                })
            }
        }
    }

    pub fn name_of(&self, value: T) -> Result<&'static str> {
        let ordinal = value.ordinal();
        self.names
            .get(ordinal)
            .copied()
            .ok_or(SettingError::OutOfRange {
                setting: self.setting,
                ordinal,
            })
    }
}

impl<T: 'static> fmt::Debug for NameTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameTable")
            .field("setting", &self.setting)
            .field("names", &self.names)
            .finish()
    }
}

/// Describes one enumerated setting kind.
pub trait EnumKind {
    type Value: EnumValue;

    fn table() -> &'static NameTable<Self::Value>;

    /// Rejects values that are known to the table but not legal for this kind.
    fn check(value: Self::Value) -> Result<Self::Value> {
        Ok(value)
    }
}

pub struct SettingEnum<K: EnumKind> {
    value: K::Value,
    changed: bool,
}

impl<K: EnumKind> SettingEnum<K> {
    /// Creates an unchanged setting. Enumerated settings have no implicit
    /// default, so the initial value is always explicit.
    pub const fn new(value: K::Value) -> Self {
        Self {
            value,
            changed: false,
        }
    }

    pub fn get(&self) -> K::Value {
        self.value
    }

    /// Stores `value` without consulting `EnumKind::check`.
    pub fn set(&mut self, value: K::Value) {
        self.value = value;
        self.changed = true;
        trace!(setting = K::table().setting(), ?value, "setting changed");
    }

    /// Resolves `name` through the kind's table and legality check.
    pub fn parse(name: &str) -> Result<K::Value> {
        let value = K::table().lookup(name)?;
        K::check(value)
    }
}

impl<K: EnumKind> Clone for SettingEnum<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: EnumKind> Copy for SettingEnum<K> {}

impl<K: EnumKind> fmt::Debug for SettingEnum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingEnum")
            .field("value", &self.value)
            .field("changed", &self.changed)
            .finish()
    }
}

impl<K: EnumKind> fmt::Display for SettingEnum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = K::table().name_of(self.value).map_err(|_| fmt::Error)?;
        f.write_str(name)
    }
}

impl<K: EnumKind> Setting for SettingEnum<K> {
    fn is_changed(&self) -> bool {
        self.changed
    }

    fn set_field(&mut self, field: &Field) -> Result<()> {
        let name = field.as_str()?;
        self.set_string(name)
    }

    fn set_string(&mut self, s: &str) -> Result<()> {
        let value = Self::parse(s)?;
        self.set(value);
        Ok(())
    }

    fn read_binary(&mut self, input: &mut dyn Read) -> Result<()> {
        let name = read_string(input)?;
        self.set_string(&name)
    }

    fn write_binary(&self, out: &mut dyn Write) -> Result<()> {
        let name = K::table().name_of(self.value)?;
        write_string(name, out)?;
        Ok(())
    }

    fn to_text(&self) -> Result<String> {
        K::table().name_of(self.value).map(str::to_string)
    }
}

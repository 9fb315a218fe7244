//! # Scalar Setting Boxes
//!
//! `SettingUInt64` covers limits and counters (`max_threads`,
//! `max_rows_to_read`). Flags reuse it as `SettingBool`, where zero is off
//! and anything else is on, so their wire form is the same varint.
//!
//! `SettingFloat` covers ratios. Its wire form is the decimal text of the
//! value rather than raw IEEE-754 bits, which keeps the encoding readable by
//! peers regardless of float layout at the cost of a few bytes. `Display` for
//! `f32` emits the shortest text that parses back to the same value, so the
//! round trip is exact for finite values, infinities and NaN.

use super::{parse_text, Setting};
use crate::encoding::{read_string, read_varint, write_string, write_varint};
use crate::error::Result;
use crate::types::Field;
use std::io::{Read, Write};
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct SettingUInt64 {
    value: u64,
    changed: bool,
}

/// Boolean flags are unsigned settings read as zero / nonzero.
pub type SettingBool = SettingUInt64;

impl SettingUInt64 {
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            changed: false,
        }
    }

    pub fn get(&self) -> u64 {
        self.value
    }

    pub fn is_enabled(&self) -> bool {
        self.value != 0
    }

    pub fn set(&mut self, value: u64) {
        self.value = value;
        self.changed = true;
        trace!(setting = "UInt64", value, "setting changed");
    }
}

impl Setting for SettingUInt64 {
    fn is_changed(&self) -> bool {
        self.changed
    }

    fn set_field(&mut self, field: &Field) -> Result<()> {
        let value = field.as_u64()?;
        self.set(value);
        Ok(())
    }

    fn set_string(&mut self, s: &str) -> Result<()> {
        let value = parse_text::<u64>(s, "UInt64")?;
        self.set(value);
        Ok(())
    }

    fn read_binary(&mut self, input: &mut dyn Read) -> Result<()> {
        let value = read_varint(input)?;
        self.set(value);
        Ok(())
    }

    fn write_binary(&self, out: &mut dyn Write) -> Result<()> {
        write_varint(self.value, out)?;
        Ok(())
    }

    fn to_text(&self) -> Result<String> {
        Ok(self.value.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SettingFloat {
    value: f32,
    changed: bool,
}

impl SettingFloat {
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            changed: false,
        }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.changed = true;
        trace!(setting = "Float32", value, "setting changed");
    }
}

impl Setting for SettingFloat {
    fn is_changed(&self) -> bool {
        self.changed
    }

    /// Accepts unsigned, signed and float fields, each narrowed to `f32`.
    fn set_field(&mut self, field: &Field) -> Result<()> {
        let value = match field {
            Field::UInt64(v) => *v as f32,
            Field::Int64(v) => *v as f32,
            Field::Float64(v) => *v as f32,
            other => return Err(other.mismatch("UInt64, Int64 or Float64")),
        };
        self.set(value);
        Ok(())
    }

    fn set_string(&mut self, s: &str) -> Result<()> {
        let value = parse_text::<f32>(s, "Float32")?;
        self.set(value);
        Ok(())
    }

    fn read_binary(&mut self, input: &mut dyn Read) -> Result<()> {
        let text = read_string(input)?;
        self.set_string(&text)
    }

    fn write_binary(&self, out: &mut dyn Write) -> Result<()> {
        write_string(&self.value.to_string(), out)?;
        Ok(())
    }

    fn to_text(&self) -> Result<String> {
        Ok(self.value.to_string())
    }
}

//! # Changed-Settings Propagation
//!
//! When a query fans out to remote servers, only the settings the session
//! explicitly changed are forwarded. Everything else is left out, so each
//! remote server applies its own default.
//!
//! ## Wire Layout
//!
//! ```text
//! ┌──────────┬───────────┬──────────┬───────────┬─────┬────────┐
//! │ name₁    │ value₁    │ name₂    │ value₂    │ ... │ ""     │
//! │ (string) │ (setting) │ (string) │ (setting) │     │ (0x00) │
//! └──────────┴───────────┴──────────┴───────────┴─────┴────────┘
//! ```
//!
//! Each name is a length-prefixed string and each value is the setting's own
//! binary form. An empty name ends the list. Values carry no type tag, so the
//! reader must know every name it may receive; an unknown name aborts the
//! read because the value that follows cannot be skipped.

use super::Setting;
use crate::encoding::{read_string, write_string};
use crate::error::Result as SettingResult;
use eyre::{bail, Result, WrapErr};
use std::io::{Read, Write};
use tracing::debug;

/// Resolves setting names to boxes while reading a changed-settings list.
pub trait SettingsSink {
    fn setting_mut(&mut self, name: &str) -> Option<&mut dyn Setting>;
}

/// Writes every changed entry followed by the terminator and returns how
/// many entries were written. Unchanged entries are skipped.
pub fn write_changed(
    entries: &[(&str, &dyn Setting)],
    out: &mut dyn Write,
) -> SettingResult<usize> {
    let mut written = 0;
    for (name, setting) in entries {
        if !setting.is_changed() {
            continue;
        }
        write_string(name, out)?;
        setting.write_binary(out)?;
        written += 1;
    }
    write_string("", out)?;

    debug!(written, total = entries.len(), "wrote changed settings");
    Ok(written)
}

/// Reads a changed-settings list into `sink`, returning the names applied in
/// wire order.
pub fn read_changed(input: &mut dyn Read, sink: &mut dyn SettingsSink) -> Result<Vec<String>> {
    let mut applied = Vec::new();
    loop {
        let name = read_string(input).wrap_err("failed to read setting name")?;
        if name.is_empty() {
            break;
        }

        let Some(setting) = sink.setting_mut(&name) else {
            bail!("unknown setting: {}", name);
        };
        setting
            .read_binary(input)
            .wrap_err_with(|| format!("failed to read value of setting '{}'", name))?;
        applied.push(name);
    }

    debug!(applied = applied.len(), "read changed settings");
    Ok(applied)
}

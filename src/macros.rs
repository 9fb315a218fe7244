//! # Internal Macros
//!
//! This module provides internal macros for reducing boilerplate across the
//! setting boxes.
//!
//! ## duration_setting!
//!
//! Generates a duration setting box that stores a `std::time::Duration` but
//! speaks a single integer unit on every external surface (constructor,
//! native setter, text, `Field`, wire).
//!
//! ### Usage
//!
//! ```ignore
//! duration_setting! {
//!     /// Timeout in whole seconds.
//!     SettingSeconds {
//!         unit: "seconds",
//!         from_count: Duration::from_secs,
//!         to_count: whole_seconds,
//!         total: total_seconds,
//!     }
//! }
//!
//! // Generates:
//! // pub struct SettingSeconds { value: Duration, changed: bool }
//! // pub const fn new(seconds: u64) -> Self
//! // pub fn total_seconds(&self) -> u64
//! // impl Setting for SettingSeconds { ... }
//! ```
//!
//! ## enum_value!
//!
//! Implements `EnumValue`, `Display` and `FromStr` for a fieldless `#[repr(u8)]`
//! enum backed by a static `NameTable`.

macro_rules! duration_setting {
    (
        $(#[$meta:meta])*
        $name:ident {
            unit: $unit:literal,
            from_count: $from:path,
            to_count: $to:path,
            total: $total:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name {
            value: ::std::time::Duration,
            changed: bool,
        }

        impl $name {
            #[doc = concat!("Creates an unchanged setting holding `count` ", $unit, ".")]
            pub const fn new(count: u64) -> Self {
                Self {
                    value: $from(count),
                    changed: false,
                }
            }

            pub fn get(&self) -> ::std::time::Duration {
                self.value
            }

            #[doc = concat!("Whole ", $unit, "; any sub-unit remainder is truncated.")]
            pub fn $total(&self) -> u64 {
                $to(self.value)
            }

            pub fn set_duration(&mut self, value: ::std::time::Duration) {
                self.value = value;
                self.changed = true;
                ::tracing::trace!(setting = stringify!($name), ?value, "setting changed");
            }

            #[doc = concat!("Sets the value from a count of ", $unit, ".")]
            pub fn set(&mut self, count: u64) {
                self.set_duration($from(count));
            }
        }

        impl $crate::settings::Setting for $name {
            fn is_changed(&self) -> bool {
                self.changed
            }

            fn set_field(&mut self, field: &$crate::types::Field) -> $crate::error::Result<()> {
                let count = field.as_u64()?;
                self.set(count);
                Ok(())
            }

            fn set_string(&mut self, s: &str) -> $crate::error::Result<()> {
                let count = $crate::settings::parse_text::<u64>(s, "UInt64")?;
                self.set(count);
                Ok(())
            }

            fn read_binary(&mut self, input: &mut dyn ::std::io::Read) -> $crate::error::Result<()> {
                let count = $crate::encoding::read_varint(input)?;
                self.set(count);
                Ok(())
            }

            fn write_binary(&self, out: &mut dyn ::std::io::Write) -> $crate::error::Result<()> {
                $crate::encoding::write_varint(self.$total(), out)?;
                Ok(())
            }

            fn to_text(&self) -> $crate::error::Result<String> {
                Ok(self.$total().to_string())
            }
        }
    };
}

macro_rules! enum_value {
    ($name:ident, $table:ident) => {
        impl $crate::settings::EnumValue for $name {
            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let name = $table.name_of(*self).map_err(|_| ::std::fmt::Error)?;
                f.write_str(name)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::SettingError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $table.lookup(s)
            }
        }
    };
}

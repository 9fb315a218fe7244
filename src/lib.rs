//! # setbox - Typed Query Setting Boxes
//!
//! setbox models the tunable runtime parameters of a query server (row and
//! thread limits, timeouts, replica selection, overflow and totals policy) as
//! small typed boxes. Every box:
//!
//! - **Holds a typed value**: `u64`, `f32`, `Duration`, or a closed enumeration
//! - **Tracks explicit configuration**: a `changed` flag raised by every set
//! - **Accepts four inputs**: native value, tagged `Field`, text, byte stream
//! - **Serializes compactly**: varints, length-prefixed text and names
//!
//! Only changed settings are propagated to remote servers, so a remote server
//! keeps its own default for everything the session never touched.
//!
//! ## Quick Start
//!
//! ```ignore
//! use setbox::settings::{
//!     write_changed, Setting, SettingGroupByOverflowMode, SettingSeconds, SettingUInt64,
//! };
//!
//! let mut max_threads = SettingUInt64::new(8);
//! let mut receive_timeout = SettingSeconds::new(300);
//! let mut group_by_overflow = SettingGroupByOverflowMode::default();
//!
//! max_threads.set_string("16")?;
//! group_by_overflow.set_string("any")?;
//!
//! let mut packet = Vec::new();
//! write_changed(
//!     &[
//!         ("max_threads", &max_threads as &dyn Setting),
//!         ("receive_timeout", &receive_timeout as &dyn Setting),
//!         ("group_by_overflow_mode", &group_by_overflow as &dyn Setting),
//!     ],
//!     &mut packet,
//! )?;
//! // receive_timeout was never changed and is not in the packet.
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Changed-settings propagation       │
//! ├─────────────────────────────────────┤
//! │  Setting boxes (scalar / duration /  │
//! │  enumerated / overflow-mode)         │
//! ├───────────────────┬─────────────────┤
//! │  Field carrier    │  SettingError    │
//! ├───────────────────┴─────────────────┤
//! │  Wire codec (varint, binary string)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`settings`]: Setting boxes, the `Setting` trait, changed-settings lists
//! - [`encoding`]: Varint and length-prefixed string codec
//! - [`types`]: `Field`, the tagged value carrier
//! - [`error`]: `SettingError`
//! - [`config`]: Wire limits and setting defaults

#[macro_use]
mod macros;

pub mod config;
pub mod encoding;
pub mod error;
pub mod settings;
pub mod types;

pub use error::SettingError;
pub use settings::{
    LoadBalancing, OverflowMode, Setting, SettingBool, SettingFloat, SettingGroupByOverflowMode,
    SettingLoadBalancing, SettingMilliseconds, SettingOverflowMode, SettingSeconds,
    SettingTotalsMode, SettingUInt64, TotalsMode,
};
pub use types::Field;

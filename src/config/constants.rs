//! # Setting Wire and Default Constants
//!
//! This module centralizes the limits of the setting wire format and the
//! defaults of the built-in setting kinds. Values that depend on each other
//! are co-located and checked at compile time.
//!
//! ## Dependency Graph
//!
//! ```text
//! VARINT_PAYLOAD_BITS (7)
//!       │
//!       └─> MAX_VARINT_LEN (derived: ceil(64 / 7) = 10)
//!             Every encode buffer in the crate is sized from this.
//!
//! MAX_BINARY_STRING_SIZE (16 MiB - 1)
//!       │
//!       └─> Upper bound for length prefixes read off the wire. Enum names and
//!           float texts are tiny, so anything above this is corrupt input.
//!
//! MILLIS_PER_SECOND (1000)
//!       │
//!       └─> Unit conversion between SettingSeconds and SettingMilliseconds
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use crate::config::{MAX_VARINT_LEN, MAX_BINARY_STRING_SIZE};
//! ```

use crate::settings::OverflowMode;

// ============================================================================
// VARINT CONFIGURATION
// ============================================================================

/// Payload bits carried by each varint byte. The remaining high bit is the
/// continuation flag.
pub const VARINT_PAYLOAD_BITS: u32 = 7;

/// Continuation flag of a varint byte.
pub const VARINT_CONTINUATION: u8 = 0x80;

/// Longest possible encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

const _: () = assert!(
    MAX_VARINT_LEN == (u64::BITS as usize).div_ceil(VARINT_PAYLOAD_BITS as usize),
    "MAX_VARINT_LEN must cover every bit of a u64"
);

const _: () = assert!(
    VARINT_CONTINUATION as u32 == 1 << VARINT_PAYLOAD_BITS,
    "continuation flag must sit directly above the payload bits"
);

// ============================================================================
// STRING CONFIGURATION
// ============================================================================

/// Largest length prefix accepted when reading a string off the wire.
pub const MAX_BINARY_STRING_SIZE: u64 = 0x00FF_FFFF;

const _: () = assert!(
    MAX_BINARY_STRING_SIZE <= usize::MAX as u64,
    "MAX_BINARY_STRING_SIZE must fit in memory"
);

// ============================================================================
// DURATION CONFIGURATION
// ============================================================================

/// Milliseconds in one second.
pub const MILLIS_PER_SECOND: u64 = 1000;

// ============================================================================
// SETTING DEFAULTS
// ============================================================================

/// Default behavior when a query limit is exceeded. Overflow-mode settings
/// are the only enumerated settings with an implicit default.
pub const DEFAULT_OVERFLOW_MODE: OverflowMode = OverflowMode::Throw;

/// The only setting that accepts overflow mode `any`. Quoted in the error
/// raised when `any` reaches any other overflow-mode setting.
pub const GROUP_BY_OVERFLOW_MODE_NAME: &str = "group_by_overflow_mode";

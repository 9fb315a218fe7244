//! # Encoding Module
//!
//! This module provides the binary primitives of the setting wire format:
//!
//! - **Varint encoding**: Base-128 unsigned integers for integer and duration
//!   settings and for every length prefix
//! - **Binary strings**: Varint-length-prefixed UTF-8 for float and enum settings

pub mod binary;
pub mod varint;

pub use binary::{decode_string, read_string, write_string};
pub use varint::{decode_varint, encode_varint, read_varint, varint_len, write_varint};

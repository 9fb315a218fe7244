//! # Variable-Length Integer Encoding
//!
//! This module provides the unsigned varint used on the setting wire format:
//! integer settings, duration counts and the length prefix of every string.
//!
//! ## Encoding Format
//!
//! Little-endian base-128. Each byte carries 7 payload bits, low groups
//! first; the high bit is set on every byte except the last. There is no
//! zig-zag step, so only unsigned values are representable.
//!
//! | Value Range              | Bytes |
//! |--------------------------|-------|
//! | 0 - 127                  | 1     |
//! | 128 - 16383              | 2     |
//! | 16384 - 2097151          | 3     |
//! | 2097152 - 268435455      | 4     |
//! | ...                      | ...   |
//! | 2^63 - u64::MAX          | 10    |
//!
//! ## Examples
//!
//! ```text
//! 0      -> [0x00]
//! 127    -> [0x7F]
//! 128    -> [0x80, 0x01]
//! 1500   -> [0xDC, 0x0B]
//! 16384  -> [0x80, 0x80, 0x01]
//! ```
//!
//! ## Boundary Values
//!
//! - 127: Maximum 1-byte value
//! - 128: Minimum 2-byte value
//! - 16383: Maximum 2-byte value
//! - 16384: Minimum 3-byte value
//! - 2^63 - 1: Maximum 9-byte value
//! - 2^63: Minimum 10-byte value
//!
//! ## Slice and Stream Forms
//!
//! - `encode_varint` writes to a mutable slice, returns bytes written
//! - `decode_varint` reads from a slice, returns (value, bytes_read)
//! - `varint_len` computes length without any I/O
//! - `write_varint` / `read_varint` work on `std::io` streams and surface
//!   short reads as `UnexpectedEof`, so callers can propagate the original
//!   I/O error untouched
//!
//! ## Error Handling
//!
//! `decode_varint` returns `eyre::Result` with descriptive error messages:
//! - Empty buffer: "empty buffer for varint decode"
//! - Truncated encoding: "truncated varint after N bytes"
//! - Too long: "varint exceeds 10 bytes" / "varint overflows u64"

use crate::config::{MAX_VARINT_LEN, VARINT_CONTINUATION, VARINT_PAYLOAD_BITS};
use eyre::{bail, ensure, Result};
use std::io::{self, Read, Write};

const PAYLOAD_MASK: u64 = (VARINT_CONTINUATION - 1) as u64;

pub fn varint_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()).max(1);
    bits.div_ceil(VARINT_PAYLOAD_BITS) as usize
}

pub fn encode_varint(mut value: u64, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        let byte = (value & PAYLOAD_MASK) as u8;
        value >>= VARINT_PAYLOAD_BITS;
        if value == 0 {
            buf[i] = byte;
            return i + 1;
        }
        buf[i] = byte | VARINT_CONTINUATION;
        i += 1;
    }
}

pub fn decode_varint(buf: &[u8]) -> Result<(u64, usize)> {
    ensure!(!buf.is_empty(), "empty buffer for varint decode");

    let mut value = 0u64;
    for (i, &byte) in buf.iter().enumerate() {
        if i == MAX_VARINT_LEN {
            bail!("varint exceeds {} bytes", MAX_VARINT_LEN);
        }
        value = accumulate(value, byte, i).ok_or_else(|| eyre::eyre!("varint overflows u64"))?;
        if byte & VARINT_CONTINUATION == 0 {
            return Ok((value, i + 1));
        }
    }

    bail!("truncated varint after {} bytes", buf.len())
}

pub fn write_varint(value: u64, out: &mut dyn Write) -> io::Result<()> {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let len = encode_varint(value, &mut buf);
    out.write_all(&buf[..len])
}

pub fn read_varint(input: &mut dyn Read) -> io::Result<u64> {
    let mut value = 0u64;
    for i in 0..MAX_VARINT_LEN {
        let mut byte = [0u8; 1];
        input.read_exact(&mut byte)?;
        value = accumulate(value, byte[0], i)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "varint overflows u64"))?;
        if byte[0] & VARINT_CONTINUATION == 0 {
            return Ok(value);
        }
    }

    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("varint exceeds {} bytes", MAX_VARINT_LEN),
    ))
}

/// Folds byte `index` into `value`, or `None` if the payload spills past 64 bits.
fn accumulate(value: u64, byte: u8, index: usize) -> Option<u64> {
    let payload = (byte as u64) & PAYLOAD_MASK;
    let shift = index as u32 * VARINT_PAYLOAD_BITS;
    if shift >= u64::BITS || (payload << shift) >> shift != payload {
        return None;
    }
    Some(value | (payload << shift))
}

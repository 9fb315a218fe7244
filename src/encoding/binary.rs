//! # Length-Prefixed Strings
//!
//! Strings on the setting wire are a varint byte length followed by the
//! UTF-8 bytes, with no terminator:
//!
//! ```text
//! "random" -> [0x06, b'r', b'a', b'n', b'd', b'o', b'm']
//! ""       -> [0x00]
//! ```
//!
//! Float settings travel as their decimal text and enum settings as their
//! canonical name, both through this format.
//!
//! Lengths above `MAX_BINARY_STRING_SIZE` are rejected before any allocation,
//! so a corrupt prefix cannot request gigabytes of buffer.

use super::varint::{decode_varint, read_varint, write_varint};
use crate::config::MAX_BINARY_STRING_SIZE;
use eyre::{ensure, Result, WrapErr};
use std::io::{self, Read, Write};

pub fn write_string(s: &str, out: &mut dyn Write) -> io::Result<()> {
    write_varint(s.len() as u64, out)?;
    out.write_all(s.as_bytes())
}

pub fn read_string(input: &mut dyn Read) -> io::Result<String> {
    let len = read_varint(input)?;
    if len > MAX_BINARY_STRING_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "string length {} exceeds limit of {} bytes",
                len, MAX_BINARY_STRING_SIZE
            ),
        ));
    }

    let mut bytes = vec![0u8; len as usize];
    input.read_exact(&mut bytes)?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Decodes a string in place, returning it with the total bytes consumed.
pub fn decode_string(buf: &[u8]) -> Result<(&str, usize)> {
    let (len, prefix) = decode_varint(buf).wrap_err("failed to decode string length")?;
    ensure!(
        len <= MAX_BINARY_STRING_SIZE,
        "string length {} exceeds limit of {} bytes",
        len,
        MAX_BINARY_STRING_SIZE
    );

    let end = prefix + len as usize;
    ensure!(
        buf.len() >= end,
        "truncated string: need {} bytes, have {}",
        len,
        buf.len() - prefix
    );

    let s = std::str::from_utf8(&buf[prefix..end]).wrap_err("string is not valid UTF-8")?;
    Ok((s, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn write_string_emits_length_then_bytes() {
        let mut out: Vec<u8> = Vec::new();
        write_string("random", &mut out).unwrap();
        assert_eq!(out, b"\x06random");
    }

    #[test]
    fn empty_string_is_single_zero_byte() {
        let mut out: Vec<u8> = Vec::new();
        write_string("", &mut out).unwrap();
        assert_eq!(out, vec![0u8]);

        let s = read_string(&mut Cursor::new(out)).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn long_string_uses_multi_byte_prefix() {
        let text = "x".repeat(200);
        let mut out: Vec<u8> = Vec::new();
        write_string(&text, &mut out).unwrap();
        assert_eq!(&out[..2], &[0xC8, 0x01]);
        assert_eq!(out.len(), 202);

        let (decoded, used) = decode_string(&out).unwrap();
        assert_eq!(decoded, text);
        assert_eq!(used, 202);
    }

    #[test]
    fn read_string_short_body_is_unexpected_eof() {
        let err = read_string(&mut Cursor::new(b"\x05abc".to_vec())).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn read_string_rejects_oversized_prefix() {
        let mut out: Vec<u8> = Vec::new();
        write_varint(MAX_BINARY_STRING_SIZE + 1, &mut out).unwrap();
        let err = read_string(&mut Cursor::new(out)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn read_string_rejects_invalid_utf8() {
        let err = read_string(&mut Cursor::new(vec![0x02, 0xC3, 0x28])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn decode_string_truncated_fails() {
        let result = decode_string(b"\x05ab");
        assert!(result.unwrap_err().to_string().contains("truncated"));
    }

    #[test]
    fn decode_string_leaves_trailing_bytes() {
        let (s, used) = decode_string(b"\x03anyTAIL").unwrap();
        assert_eq!(s, "any");
        assert_eq!(used, 4);
    }
}

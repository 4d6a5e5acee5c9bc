//! Varint and string primitives for the record wire format.
//!
//! Integers are unsigned LEB128, strings are a varint byte length followed by
//! UTF-8 data. These helpers operate on any [`Buf`]/[`BufMut`] so the record
//! reader can parse record bodies independently of the outer stream.

use bytes::{Buf, BufMut};

use crate::error::{Result, WireError};

/// Maximum encoded size of a 64-bit LEB128 varint.
pub const MAX_VARINT_LEN: usize = 10;

/// Read an unsigned LEB128 varint.
pub fn read_varint<B: Buf>(buf: &mut B) -> Result<u64> {
    let mut value = 0u64;
    for i in 0..MAX_VARINT_LEN {
        if !buf.has_remaining() {
            return Err(WireError::Truncated {
                expected: 1,
                remaining: 0,
            });
        }
        let byte = buf.get_u8();
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(WireError::VarintOverflow)
}

/// Read a varint that must fit in 32 bits.
pub fn read_varint_u32<B: Buf>(buf: &mut B) -> Result<u32> {
    u32::try_from(read_varint(buf)?).map_err(|_| WireError::IntOutOfRange)
}

/// Write an unsigned LEB128 varint.
pub fn write_varint<B: BufMut>(buf: &mut B, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.put_u8(byte);
            return;
        }
        buf.put_u8(byte | 0x80);
    }
}

/// Read exactly `len` bytes.
pub fn read_bytes<B: Buf>(buf: &mut B, len: usize) -> Result<bytes::Bytes> {
    if buf.remaining() < len {
        return Err(WireError::Truncated {
            expected: len,
            remaining: buf.remaining(),
        });
    }
    Ok(buf.copy_to_bytes(len))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_string<B: Buf>(buf: &mut B) -> Result<String> {
    let len = usize::try_from(read_varint(buf)?).map_err(|_| WireError::IntOutOfRange)?;
    let bytes = read_bytes(buf, len)?;
    let text = std::str::from_utf8(&bytes).map_err(WireError::InvalidUtf8)?;
    Ok(text.to_owned())
}

/// Write a length-prefixed UTF-8 string.
pub fn write_string<B: BufMut>(buf: &mut B, value: &str) {
    write_varint(buf, value.len() as u64);
    buf.put_slice(value.as_bytes());
}

//! Fixed-width character strings
//!
//! Strings are stored as UTF-16 code units, two bytes each, little-endian.
//! The size-prefixed form carries a 4-byte signed length header holding the
//! payload size in bytes.

use std::io::{Read, Write};

use super::{
    check_multiple, read_bytes_from, read_value_from, write_value, CodecError, Primitive,
};

/// Width of one character in bytes
pub const CHAR_WIDTH: usize = 2;

/// Width of the size prefix in bytes
pub const SIZE_PREFIX_WIDTH: usize = 4;

/// Decode a string occupying the whole buffer
pub fn read_string(bytes: &[u8]) -> Result<String, CodecError> {
    check_multiple(bytes.len(), CHAR_WIDTH)?;
    let units: Vec<u16> = bytes
        .chunks_exact(CHAR_WIDTH)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    Ok(String::from_utf16(&units)?)
}

/// Read `size` bytes from a stream and decode them as a string
pub fn read_string_from<R: Read>(reader: &mut R, size: usize) -> Result<String, CodecError> {
    check_multiple(size, CHAR_WIDTH)?;
    let buffer = read_bytes_from(reader, size)?;
    read_string(&buffer)
}

/// Read a size-prefixed string from a stream
pub fn read_sized_string<R: Read>(reader: &mut R) -> Result<String, CodecError> {
    let size: i32 = read_value_from(reader)?;
    let size = usize::try_from(size).map_err(|_| CodecError::InvalidSizePrefix(size as i64))?;
    read_string_from(reader, size)
}

/// Encode a string without a size prefix
pub fn string_to_bytes(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Encode a string with its 4-byte size prefix
pub fn sized_string_to_bytes(s: &str) -> Result<Vec<u8>, CodecError> {
    let payload = string_to_bytes(s);
    let size = i32::try_from(payload.len())
        .map_err(|_| CodecError::InvalidSizePrefix(payload.len() as i64))?;
    let mut bytes = Vec::with_capacity(i32::WIDTH + payload.len());
    bytes.extend_from_slice(&size.to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Write a size-prefixed string to a stream, returning the number of bytes written
pub fn write_sized_string<W: Write>(writer: &mut W, s: &str) -> Result<usize, CodecError> {
    let payload = string_to_bytes(s);
    let size = i32::try_from(payload.len())
        .map_err(|_| CodecError::InvalidSizePrefix(payload.len() as i64))?;
    let written = write_value(writer, size)?;
    writer.write_all(&payload)?;
    Ok(written + payload.len())
}

//! Binary primitive codec
//!
//! Byte-exact marshalling between byte buffers/streams and fixed-width
//! primitives, UTF-16 strings and homogeneous (1-D and 2-D) arrays, plus
//! gzip/zlib transforms over byte sequences.
//!
//! All multi-byte values use little-endian byte order regardless of the
//! host, so a buffer written on one machine decodes identically on another.
//!
//! The core law of this module is the round trip: encoding a value and then
//! decoding the produced bytes with the matching read function reproduces
//! the original bit pattern exactly.
//!
//! ```
//! use mzconvert::binary::{array_to_bytes, read_array};
//!
//! let values = [1.5f64, -0.0, f64::MAX];
//! let bytes = array_to_bytes(&values);
//! let decoded: Vec<f64> = read_array(&bytes)?;
//! assert_eq!(decoded.len(), 3);
//! assert_eq!(decoded[1].to_bits(), (-0.0f64).to_bits());
//! # Ok::<(), mzconvert::binary::CodecError>(())
//! ```

use std::io::Read;

mod array;
mod compression;
mod error;
mod primitive;
mod string;

pub use array::{
    array_2d_to_bytes, array_to_bytes, read_array, read_array_2d, read_array_from, write_array,
    write_array_2d,
};
pub use compression::{gzip_compress, gzip_decompress, zlib_compress, zlib_decompress};
pub use error::CodecError;
pub use primitive::{read_value, read_value_from, to_bytes, write_value, Primitive};
pub use string::{
    read_sized_string, read_string, read_string_from, sized_string_to_bytes, string_to_bytes,
    write_sized_string, CHAR_WIDTH, SIZE_PREFIX_WIDTH,
};

/// Ensure a byte count is an exact multiple of an element width.
pub(crate) fn check_multiple(size: usize, width: usize) -> Result<usize, CodecError> {
    if width == 0 || size % width != 0 {
        return Err(CodecError::SizeMismatch { size, width });
    }
    Ok(size / width)
}

/// Read exactly `size` bytes from a stream
///
/// The buffer grows with the bytes actually read, so a corrupt size never
/// allocates more than the stream holds. A short stream fails with an
/// [`std::io::ErrorKind::UnexpectedEof`] I/O error.
pub(crate) fn read_bytes_from<R: Read>(
    reader: &mut R,
    size: usize,
) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Vec::new();
    reader.by_ref().take(size as u64).read_to_end(&mut buffer)?;
    if buffer.len() != size {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buffer)
}

use std::io::{Read, Write};

use super::{check_multiple, CodecError, Primitive};

/// Upper bound on elements reserved before any are read from a stream
const MAX_PREALLOCATED: usize = 4096;

/// Decode a homogeneous array occupying the whole buffer
///
/// Fails with [`CodecError::SizeMismatch`] when the buffer length is not a
/// multiple of the element width.
pub fn read_array<T: Primitive>(bytes: &[u8]) -> Result<Vec<T>, CodecError> {
    let count = check_multiple(bytes.len(), T::WIDTH)?;
    let mut values = Vec::with_capacity(count);
    let mut cursor = bytes;
    for _ in 0..count {
        values.push(T::read_from(&mut cursor)?);
    }
    Ok(values)
}

/// Read `size` bytes from a stream and decode them as a homogeneous array
pub fn read_array_from<T: Primitive, R: Read>(
    reader: &mut R,
    size: usize,
) -> Result<Vec<T>, CodecError> {
    let count = check_multiple(size, T::WIDTH)?;
    let mut values = Vec::with_capacity(count.min(MAX_PREALLOCATED));
    for _ in 0..count {
        values.push(T::read_from(reader)?);
    }
    Ok(values)
}

/// Decode a row-major 2-D array with the given number of rows
pub fn read_array_2d<T: Primitive>(bytes: &[u8], rows: usize) -> Result<Vec<Vec<T>>, CodecError> {
    let flat = read_array::<T>(bytes)?;
    if rows == 0 {
        if flat.is_empty() {
            return Ok(Vec::new());
        }
        return Err(CodecError::RowMismatch {
            elements: flat.len(),
            rows,
        });
    }
    if flat.len() % rows != 0 {
        return Err(CodecError::RowMismatch {
            elements: flat.len(),
            rows,
        });
    }
    let columns = flat.len() / rows;
    if columns == 0 {
        return Ok(vec![Vec::new(); rows]);
    }
    Ok(flat.chunks_exact(columns).map(<[T]>::to_vec).collect())
}

/// Encode a homogeneous array
pub fn array_to_bytes<T: Primitive>(values: &[T]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * T::WIDTH);
    for value in values {
        // Writing into a Vec cannot fail
        let _ = value.write_to(&mut bytes);
    }
    bytes
}

/// Encode a 2-D array in row-major order
///
/// All rows must have the same length.
pub fn array_2d_to_bytes<T: Primitive, V: AsRef<[T]>>(rows: &[V]) -> Result<Vec<u8>, CodecError> {
    let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
    let mut bytes = Vec::with_capacity(rows.len() * expected * T::WIDTH);
    for (row, values) in rows.iter().enumerate() {
        let values = values.as_ref();
        if values.len() != expected {
            return Err(CodecError::RaggedRows {
                row,
                expected,
                actual: values.len(),
            });
        }
        bytes.extend_from_slice(&array_to_bytes(values));
    }
    Ok(bytes)
}

/// Write a homogeneous array to a stream, returning the number of bytes written
pub fn write_array<T: Primitive, W: Write>(writer: &mut W, values: &[T]) -> Result<usize, CodecError> {
    for value in values {
        value.write_to(writer)?;
    }
    Ok(values.len() * T::WIDTH)
}

/// Write a 2-D array to a stream in row-major order
pub fn write_array_2d<T: Primitive, V: AsRef<[T]>, W: Write>(
    writer: &mut W,
    rows: &[V],
) -> Result<usize, CodecError> {
    let bytes = array_2d_to_bytes(rows)?;
    writer.write_all(&bytes)?;
    Ok(bytes.len())
}

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::CodecError;

/// A fixed-width value that can be marshalled to and from bytes
pub trait Primitive: Copy + Sized {
    /// Encoded width in bytes
    const WIDTH: usize;

    /// Read one value from a stream
    fn read_from<R: Read>(reader: &mut R) -> std::io::Result<Self>;

    /// Write one value to a stream
    fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()>;
}

macro_rules! impl_primitive {
    ($ty:ty, $width:expr, $read:ident, $write:ident) => {
        impl Primitive for $ty {
            const WIDTH: usize = $width;

            #[inline]
            fn read_from<R: Read>(reader: &mut R) -> std::io::Result<Self> {
                reader.$read::<LittleEndian>()
            }

            #[inline]
            fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
                writer.$write::<LittleEndian>(*self)
            }
        }
    };
}

impl_primitive!(i32, 4, read_i32, write_i32);
impl_primitive!(i64, 8, read_i64, write_i64);
impl_primitive!(u64, 8, read_u64, write_u64);
impl_primitive!(f32, 4, read_f32, write_f32);
impl_primitive!(f64, 8, read_f64, write_f64);

impl Primitive for u8 {
    const WIDTH: usize = 1;

    #[inline]
    fn read_from<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        reader.read_u8()
    }

    #[inline]
    fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u8(*self)
    }
}

/// Booleans occupy one byte; any non-zero byte reads as `true`.
impl Primitive for bool {
    const WIDTH: usize = 1;

    #[inline]
    fn read_from<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        Ok(reader.read_u8()? != 0)
    }

    #[inline]
    fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u8(u8::from(*self))
    }
}

/// Decode a single value from a buffer whose length must equal the value width
pub fn read_value<T: Primitive>(bytes: &[u8]) -> Result<T, CodecError> {
    if bytes.len() != T::WIDTH {
        return Err(CodecError::SizeMismatch {
            size: bytes.len(),
            width: T::WIDTH,
        });
    }
    let mut cursor = bytes;
    Ok(T::read_from(&mut cursor)?)
}

/// Read exactly one value from a stream
pub fn read_value_from<T: Primitive, R: Read>(reader: &mut R) -> Result<T, CodecError> {
    Ok(T::read_from(reader)?)
}

/// Encode a single value
pub fn to_bytes<T: Primitive>(value: T) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(T::WIDTH);
    // Writing into a Vec cannot fail
    let _ = value.write_to(&mut bytes);
    bytes
}

/// Write a single value to a stream, returning the number of bytes written
pub fn write_value<T: Primitive, W: Write>(writer: &mut W, value: T) -> Result<usize, CodecError> {
    value.write_to(writer)?;
    Ok(T::WIDTH)
}

//! Peak list decoding for mzXML
//!
//! mzXML stores each scan's peaks as one base64 text node holding
//! interleaved (m/z, intensity) values. Decoding runs:
//!
//! 1. Base64 decode the text
//! 2. Inflate if `compressionType="zlib"`
//! 3. Undo `byteOrder="network"` (big-endian) storage
//! 4. Interpret bytes as float32 or float64 depending on `precision`

use base64::prelude::*;

use crate::binary::{self, CodecError};

/// Compression declared by the `compressionType` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeakCompression {
    /// Raw bytes
    #[default]
    None,
    /// zlib stream
    Zlib,
}

impl PeakCompression {
    /// Parse an attribute value; a missing attribute means no compression
    pub fn from_attribute(value: Option<&str>) -> Result<Self, PeakDecodeError> {
        match value.map(str::trim) {
            None => Ok(PeakCompression::None),
            Some(v) if v.eq_ignore_ascii_case("none") => Ok(PeakCompression::None),
            Some(v) if v.eq_ignore_ascii_case("zlib") => Ok(PeakCompression::Zlib),
            Some(v) => Err(PeakDecodeError::UnsupportedCompression(v.to_string())),
        }
    }
}

/// Numeric width declared by the `precision` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeakPrecision {
    /// 32-bit floats; used for every value other than `"64"`
    #[default]
    Float32,
    /// 64-bit floats
    Float64,
}

impl PeakPrecision {
    /// Parse an attribute value
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("64") => PeakPrecision::Float64,
            _ => PeakPrecision::Float32,
        }
    }

    /// Byte size per value
    pub fn byte_size(&self) -> usize {
        match self {
            PeakPrecision::Float32 => 4,
            PeakPrecision::Float64 => 8,
        }
    }
}

/// Byte order declared by the `byteOrder` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeakByteOrder {
    /// Big-endian, the mzXML default
    #[default]
    Network,
    /// Little-endian
    Little,
}

impl PeakByteOrder {
    /// Parse an attribute value; anything but `network` is little-endian
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.eq_ignore_ascii_case("network") => PeakByteOrder::Little,
            _ => PeakByteOrder::Network,
        }
    }
}

/// Encoding parameters of one `<peaks>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeakEncoding {
    /// Compression scheme
    pub compression: PeakCompression,
    /// Numeric precision
    pub precision: PeakPrecision,
    /// Byte order
    pub byte_order: PeakByteOrder,
}

impl PeakEncoding {
    /// Build from the raw `compressionType`, `precision` and `byteOrder` values
    pub fn from_attributes(
        compression: Option<&str>,
        precision: Option<&str>,
        byte_order: Option<&str>,
    ) -> Result<Self, PeakDecodeError> {
        Ok(Self {
            compression: PeakCompression::from_attribute(compression)?,
            precision: PeakPrecision::from_attribute(precision),
            byte_order: PeakByteOrder::from_attribute(byte_order),
        })
    }
}

/// Errors that can occur while decoding a peak list
#[derive(Debug, thiserror::Error)]
pub enum PeakDecodeError {
    /// The text node is not valid base64
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Inflating or reinterpreting the payload failed
    #[error("Peak payload error: {0}")]
    Codec(#[from] CodecError),

    /// `compressionType` names a scheme this decoder does not implement
    #[error("Unsupported compression type: {0}")]
    UnsupportedCompression(String),
}

/// Decode one `<peaks>` text node into interleaved (m/z, intensity) values
///
/// 32-bit values are widened to `f64`. A payload whose length is not a
/// multiple of the declared value width fails with
/// [`CodecError::SizeMismatch`].
pub fn decode_peaks(text: &str, encoding: &PeakEncoding) -> Result<Vec<f64>, PeakDecodeError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Ok(Vec::new());
    }

    let decoded = BASE64_STANDARD.decode(compact.as_bytes())?;

    let mut payload = match encoding.compression {
        PeakCompression::None => decoded,
        PeakCompression::Zlib => binary::zlib_decompress(&decoded)?,
    };

    let network = encoding.byte_order == PeakByteOrder::Network;

    // Reversing the whole buffer turns big-endian values into little-endian
    // ones in reverse element order; the second reversal restores the order.
    if network {
        payload.reverse();
    }

    let mut values: Vec<f64> = match encoding.precision {
        PeakPrecision::Float64 => binary::read_array::<f64>(&payload)?,
        PeakPrecision::Float32 => binary::read_array::<f32>(&payload)?
            .into_iter()
            .map(f64::from)
            .collect(),
    };

    if network {
        values.reverse();
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_be_f32(values: &[f32]) -> String {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
        BASE64_STANDARD.encode(bytes)
    }

    #[test]
    fn test_encoding_defaults() {
        let encoding = PeakEncoding::from_attributes(None, None, None).unwrap();
        assert_eq!(encoding.compression, PeakCompression::None);
        assert_eq!(encoding.precision, PeakPrecision::Float32);
        assert_eq!(encoding.byte_order, PeakByteOrder::Network);
    }

    #[test]
    fn test_precision_dispatch() {
        assert_eq!(PeakPrecision::from_attribute(Some("64")), PeakPrecision::Float64);
        assert_eq!(PeakPrecision::from_attribute(Some("32")), PeakPrecision::Float32);
        assert_eq!(PeakPrecision::from_attribute(Some("16")), PeakPrecision::Float32);
        assert_eq!(PeakPrecision::Float64.byte_size(), 8);
    }

    #[test]
    fn test_unsupported_compression_fails_fast() {
        let err = PeakEncoding::from_attributes(Some("lzma"), Some("32"), Some("network"))
            .unwrap_err();
        assert!(matches!(err, PeakDecodeError::UnsupportedCompression(ref s) if s == "lzma"));
        assert!(PeakCompression::from_attribute(Some("ZLIB")).is_ok());
    }

    #[test]
    fn test_network_order_f32() {
        let text = encode_be_f32(&[100.0, 10.0, 200.5, 20.0]);
        let encoding = PeakEncoding::from_attributes(Some("none"), Some("32"), Some("network"))
            .unwrap();
        let values = decode_peaks(&text, &encoding).unwrap();
        assert_eq!(values, vec![100.0, 10.0, 200.5, 20.0]);
    }

    #[test]
    fn test_network_order_f64_zlib() {
        let raw: Vec<u8> = [400.25f64, 3.0, 512.0, 7.5]
            .iter()
            .flat_map(|v| v.to_be_bytes())
            .collect();
        let text = BASE64_STANDARD.encode(binary::zlib_compress(&raw).unwrap());
        let encoding = PeakEncoding::from_attributes(Some("zlib"), Some("64"), Some("network"))
            .unwrap();
        let values = decode_peaks(&text, &encoding).unwrap();
        assert_eq!(values, vec![400.25, 3.0, 512.0, 7.5]);
    }

    #[test]
    fn test_little_endian_payload() {
        let text = BASE64_STANDARD.encode(binary::array_to_bytes(&[1.5f64, 2.5]));
        let encoding = PeakEncoding::from_attributes(None, Some("64"), Some("little"))
            .unwrap();
        assert_eq!(decode_peaks(&text, &encoding).unwrap(), vec![1.5, 2.5]);
    }

    #[test]
    fn test_whitespace_in_text_is_ignored() {
        let text = encode_be_f32(&[100.0, 1.0]);
        let (head, tail) = text.split_at(4);
        let wrapped = format!("\n  {}\n  {}\n", head, tail);
        let values = decode_peaks(&wrapped, &PeakEncoding::default()).unwrap();
        assert_eq!(values, vec![100.0, 1.0]);
    }

    #[test]
    fn test_precision_mismatch_is_size_error() {
        // 12 bytes: three f32 values but not a whole number of f64 values
        let text = encode_be_f32(&[1.0, 2.0, 3.0]);
        let encoding = PeakEncoding::from_attributes(None, Some("64"), None).unwrap();
        let err = decode_peaks(&text, &encoding).unwrap_err();
        assert!(matches!(
            err,
            PeakDecodeError::Codec(CodecError::SizeMismatch { size: 12, width: 8 })
        ));
    }

    #[test]
    fn test_corrupt_zlib_payload() {
        let text = BASE64_STANDARD.encode(b"not zlib at all");
        let encoding = PeakEncoding::from_attributes(Some("zlib"), None, None).unwrap();
        let err = decode_peaks(&text, &encoding).unwrap_err();
        assert!(matches!(err, PeakDecodeError::Codec(CodecError::Decompression(_))));
    }

    #[test]
    fn test_invalid_base64() {
        let err = decode_peaks("@@@@", &PeakEncoding::default()).unwrap_err();
        assert!(matches!(err, PeakDecodeError::Base64(_)));
    }

    #[test]
    fn test_empty_text_yields_no_values() {
        assert!(decode_peaks("", &PeakEncoding::default()).unwrap().is_empty());
        assert!(decode_peaks("  \n", &PeakEncoding::default()).unwrap().is_empty());
    }
}

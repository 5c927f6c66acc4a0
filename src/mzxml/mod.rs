//! mzXML input
//!
//! - [`peaks`]: base64/zlib/byte-order decoding of `<peaks>` payloads
//! - [`normalize`]: interleaved values to an ordered (m/z, intensity) table
//! - [`retention`]: `retentionTime` attribute to minutes
//! - [`streamer`]: pull-based scan decoder over a `BufRead`

pub mod normalize;
pub mod peaks;
pub mod retention;
pub mod streamer;

pub use normalize::{mz_pairs_to_table, normalize_pairs};
pub use peaks::{
    decode_peaks, PeakByteOrder, PeakCompression, PeakDecodeError, PeakEncoding, PeakPrecision,
};
pub use retention::parse_retention_time;
pub use streamer::{MzXmlError, MzXmlStreamer, ScanIterator, DEFAULT_INPUT_BUFFER_SIZE};

//! # Scan Writer Module
//!
//! Destination side of a conversion. The driver only depends on the
//! [`ScanWriter`] trait: it hands over every decoded [`ScanRecord`] and
//! finalizes the writer exactly once, whatever the outcome of the scan loop.
//!
//! [`ScanFileWriter`] is the concrete destination used by the binary. It
//! stores the source header and the scans in a compact little-endian file
//! built from the [`crate::binary`] codec; [`ScanFileReader`] reads it back.
//!
//! ## File layout
//!
//! | field                    | encoding                                  |
//! |--------------------------|-------------------------------------------|
//! | magic                    | `b"MZSB"`                                 |
//! | format version           | i32                                       |
//! | vendor, model, serial    | size-prefixed UTF-16 strings              |
//! | acquisition date         | size-prefixed string (RFC 3339)           |
//! | original file name       | size-prefixed string                      |
//! | MS1 / MS2 mass analyzer  | size-prefixed strings                     |
//! | compressed scans         | bool                                      |
//! | scan block (repeated)    | tag `1`, see [`ScanFileWriter::add_scan`] |
//! | trailer                  | tag `0`, scan count as i64                |

use crate::scan::ScanRecord;

mod config;
mod error;
mod reader;
mod scan_file;
mod stats;


pub use config::WriterConfig;
pub use error::WriterError;
pub use reader::{ScanFileHeader, ScanFileReader};
pub use scan_file::{ScanFileWriter, FORMAT_VERSION, MAGIC};
pub use stats::WriterStats;

pub(crate) const TAG_SCAN: u8 = 1;
pub(crate) const TAG_END: u8 = 0;

/// Destination for the scans of one source file
pub trait ScanWriter {
    /// Append one scan
    fn add_scan(&mut self, scan: &ScanRecord) -> Result<(), WriterError>;

    /// Complete the output and release it
    fn finalize(self: Box<Self>) -> Result<WriterStats, WriterError>;
}

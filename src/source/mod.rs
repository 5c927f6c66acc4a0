//! Scan sources
//!
//! A [`ScanSource`] is an open input file that exposes its
//! [`SourceMetadata`] and yields [`ScanRecord`]s one at a time. The concrete
//! implementation is chosen from the file extension by [`open_source`].

use std::path::Path;

use crate::metadata::SourceMetadata;
use crate::scan::ScanRecord;

mod error;
mod format;
mod mzxml;


pub use error::SourceError;
pub use format::SourceFormat;

/// An open input producing scans in acquisition order
pub trait ScanSource {
    /// Header information, fixed for the lifetime of the source
    fn metadata(&self) -> &SourceMetadata;

    /// Announced number of scans, or -1 when unknown
    fn total_scan_count(&self) -> i64 {
        self.metadata().total_scan_count
    }

    /// Produce the next scan, or `None` once the source is exhausted
    fn next_scan(&mut self) -> Result<Option<ScanRecord>, SourceError>;

    /// Release every resource held by the source
    fn close(self: Box<Self>) -> Result<(), SourceError>;
}

/// Open the scan source matching the file extension of `path`
///
/// Returns `Ok(None)` when no reader handles the file.
pub fn open_source(
    path: &Path,
    buffer_size: usize,
) -> Result<Option<Box<dyn ScanSource>>, SourceError> {
    match SourceFormat::detect(path) {
        SourceFormat::MzXml => {
            let streamer =
                crate::mzxml::MzXmlStreamer::open_with_buffer_size(path, buffer_size)?;
            Ok(Some(Box::new(streamer)))
        }
        #[cfg(feature = "thermo")]
        SourceFormat::ThermoRaw => {
            let source = crate::thermo::ThermoScanSource::open(path)?;
            Ok(Some(Box::new(source)))
        }
        #[cfg(not(feature = "thermo"))]
        SourceFormat::ThermoRaw => {
            log::warn!(
                "{}: Thermo RAW support is not enabled (build with the `thermo` feature)",
                path.display()
            );
            Ok(None)
        }
        SourceFormat::Unsupported => Ok(None),
    }
}

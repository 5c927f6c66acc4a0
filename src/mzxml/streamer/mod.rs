//! Streaming mzXML parser using quick-xml
//!
//! The document header is read once when the streamer is created; scans
//! are then decoded one at a time on demand, so memory use stays bounded
//! by the size of a single scan regardless of the file size.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;

use crate::metadata::SourceMetadata;
use crate::scan::ScanRecord;

pub use error::MzXmlError;
pub use iterators::ScanIterator;

mod error;
mod header;
mod helpers;
mod iterators;
mod scan;

#[cfg(test)]
mod tests;

use scan::{Capture, ScanBuilder};

/// Default input buffer size (64KB)
pub const DEFAULT_INPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Streaming parser for mzXML files
pub struct MzXmlStreamer<R: BufRead> {
    reader: Reader<R>,
    metadata: SourceMetadata,
    /// Scan whose start tag has been read but which has not been yielded
    current: Option<ScanBuilder>,
    /// Completed scan waiting to be yielded before reading further
    ready: Option<ScanRecord>,
    /// Error raised by a child scan, reported after its parent is yielded
    pending_error: Option<MzXmlError>,
    capture: Capture,
    finished: bool,
}

impl<R: BufRead> MzXmlStreamer<R> {
    /// Create a new streamer from a BufRead source and read its header
    pub fn new(reader: R) -> Result<Self, MzXmlError> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut streamer = Self {
            reader: xml_reader,
            metadata: SourceMetadata::default(),
            current: None,
            ready: None,
            pending_error: None,
            capture: Capture::None,
            finished: false,
        };
        streamer.read_header()?;
        Ok(streamer)
    }

    /// Header information of the document
    pub fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    /// Scan count announced by `<msRun scanCount=..>`, or -1
    pub fn total_scan_count(&self) -> i64 {
        self.metadata.total_scan_count
    }

    /// Iterate over all remaining scans
    pub fn scans(self) -> ScanIterator<R> {
        ScanIterator {
            streamer: self,
            failed: false,
        }
    }

    /// Release the underlying reader
    pub fn close(self) -> R {
        self.reader.into_inner()
    }
}

impl MzXmlStreamer<BufReader<File>> {
    /// Open an mzXML file for streaming with default buffer size (64KB)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MzXmlError> {
        Self::open_with_buffer_size(path, DEFAULT_INPUT_BUFFER_SIZE)
    }

    /// Open an mzXML file for streaming with custom buffer size
    ///
    /// # Example
    /// ```rust,no_run
    /// use mzconvert::mzxml::MzXmlStreamer;
    ///
    /// let streamer = MzXmlStreamer::open_with_buffer_size("run.mzXML", 1024 * 1024)?;
    /// for scan in streamer.scans() {
    ///     let scan = scan?;
    ///     println!("{} peaks at {:.2} min", scan.peaks().len(), scan.retention_time());
    /// }
    /// # Ok::<(), mzconvert::mzxml::MzXmlError>(())
    /// ```
    pub fn open_with_buffer_size<P: AsRef<Path>>(
        path: P,
        buffer_size: usize,
    ) -> Result<Self, MzXmlError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::with_capacity(buffer_size, file);
        Self::new(reader)
    }
}

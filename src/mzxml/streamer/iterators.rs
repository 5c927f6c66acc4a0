use std::io::BufRead;

use super::{MzXmlError, MzXmlStreamer};
use crate::scan::ScanRecord;

/// Iterator over scans in an mzXML file
///
/// Yields nothing further after the first error.
pub struct ScanIterator<R: BufRead> {
    pub(super) streamer: MzXmlStreamer<R>,
    pub(super) failed: bool,
}

impl<R: BufRead> Iterator for ScanIterator<R> {
    type Item = Result<ScanRecord, MzXmlError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.streamer.next_scan() {
            Ok(Some(scan)) => Some(Ok(scan)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for ScanIterator<R> {}

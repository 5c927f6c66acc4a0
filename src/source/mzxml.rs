use std::io::BufRead;

use super::{ScanSource, SourceError};
use crate::metadata::SourceMetadata;
use crate::mzxml::MzXmlStreamer;
use crate::scan::ScanRecord;

impl<R: BufRead> ScanSource for MzXmlStreamer<R> {
    fn metadata(&self) -> &SourceMetadata {
        MzXmlStreamer::metadata(self)
    }

    fn next_scan(&mut self) -> Result<Option<ScanRecord>, SourceError> {
        Ok(MzXmlStreamer::next_scan(self)?)
    }

    fn close(self: Box<Self>) -> Result<(), SourceError> {
        drop(MzXmlStreamer::close(*self));
        Ok(())
    }
}

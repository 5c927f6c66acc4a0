use std::io::BufRead;

use log::debug;
use quick_xml::events::{BytesStart, Event};

use super::helpers::{
    get_attribute, name_is, MS_INSTRUMENT, MS_MANUFACTURER, MS_MASS_ANALYZER, MS_MODEL, MS_RUN,
    PARENT_FILE, SCAN,
};
use super::{MzXmlError, MzXmlStreamer, ScanBuilder};
use crate::metadata::{MassAnalyzerType, VendorType};

impl<R: BufRead> MzXmlStreamer<R> {
    /// Read header elements up to the end of the instrument description
    ///
    /// A `<scan>` met before `</msInstrument>` also ends the header; it is
    /// kept so that the first call to `next_scan` yields it.
    pub(super) fn read_header(&mut self) -> Result<(), MzXmlError> {
        let mut buf = Vec::new();
        loop {
            match self.reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    if name_is(e.local_name().as_ref(), SCAN) {
                        let decoder = self.reader.decoder();
                        self.current = Some(ScanBuilder::from_element(e, decoder)?);
                        break;
                    }
                    self.apply_header_element(e)?;
                }
                Event::Empty(ref e) => {
                    if name_is(e.local_name().as_ref(), SCAN) {
                        let decoder = self.reader.decoder();
                        self.ready = Some(ScanBuilder::from_element(e, decoder)?.finish());
                        break;
                    }
                    self.apply_header_element(e)?;
                }
                Event::End(ref e) => {
                    if name_is(e.local_name().as_ref(), MS_INSTRUMENT) {
                        break;
                    }
                }
                Event::Eof => {
                    self.finished = true;
                    break;
                }
                _ => {}
            }
            buf.clear();
        }

        debug!(
            "mzXML header: vendor={} model={} parent={} scans={}",
            self.metadata.vendor,
            self.metadata.instrument_model,
            self.metadata.original_file_name,
            self.metadata.total_scan_count
        );
        Ok(())
    }

    fn apply_header_element(&mut self, e: &BytesStart) -> Result<(), MzXmlError> {
        let name = e.local_name();
        let name = name.as_ref();
        let decoder = self.reader.decoder();

        if name_is(name, MS_MANUFACTURER) {
            if let Some(value) = get_attribute(e, "value", decoder)? {
                self.metadata.vendor = VendorType::from_manufacturer(&value);
                self.metadata.vendor_name = Some(value);
            }
        } else if name_is(name, MS_MODEL) {
            if let Some(value) = get_attribute(e, "value", decoder)? {
                self.metadata.instrument_model = value;
            }
        } else if name_is(name, PARENT_FILE) {
            if let Some(value) = get_attribute(e, "fileName", decoder)? {
                self.metadata.original_file_name = value;
            }
        } else if name_is(name, MS_RUN) {
            if let Some(count) = get_attribute(e, "scanCount", decoder)?
                .and_then(|s| s.trim().parse::<i64>().ok())
            {
                self.metadata.total_scan_count = count;
            }
        } else if name_is(name, MS_MASS_ANALYZER) {
            if let Some(value) = get_attribute(e, "value", decoder)? {
                let analyzer = MassAnalyzerType::from_description(&value);
                self.metadata.ms1_analyzer = analyzer;
                self.metadata.ms2_analyzer = analyzer;
            }
        }
        Ok(())
    }
}

use std::io::BufRead;

use log::debug;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};

use super::helpers::{get_attribute, name_is, PEAKS, PRECURSOR_MZ, SCAN};
use super::{MzXmlError, MzXmlStreamer};
use crate::mzxml::{decode_peaks, mz_pairs_to_table, parse_retention_time, PeakEncoding};
use crate::scan::{MsLevel, MzTable, PrecursorSelection, ScanRecord};

/// Text node being collected for the element currently open
#[derive(Debug, Default)]
pub(super) enum Capture {
    #[default]
    None,
    Peaks {
        encoding: PeakEncoding,
        text: String,
    },
    Precursor {
        width: Option<String>,
        text: String,
    },
}

impl Capture {
    fn push_str(&mut self, chunk: &str) {
        match self {
            Capture::Peaks { text, .. } | Capture::Precursor { text, .. } => text.push_str(chunk),
            Capture::None => {}
        }
    }
}

/// Values of a `<scan>` collected until it is yielded
#[derive(Debug)]
pub(super) struct ScanBuilder {
    ms_level: MsLevel,
    centroid: bool,
    retention_time: f64,
    peaks: MzTable,
    precursors: Vec<PrecursorSelection>,
}

impl ScanBuilder {
    /// Read the `centroided`, `msLevel` and `retentionTime` attributes
    pub(super) fn from_element(e: &BytesStart, decoder: Decoder) -> Result<Self, MzXmlError> {
        let centroid = get_attribute(e, "centroided", decoder)?
            .map(|v| parse_centroided(&v))
            .unwrap_or(true);

        let ms_level = get_attribute(e, "msLevel", decoder)?
            .and_then(|v| v.trim().parse::<i32>().ok())
            .map(MsLevel::from_declared_order)
            .unwrap_or(MsLevel::UNKNOWN);

        let retention_time = match get_attribute(e, "retentionTime", decoder)? {
            Some(v) => parse_retention_time(&v)?,
            None => f64::NAN,
        };

        Ok(Self {
            ms_level,
            centroid,
            retention_time,
            peaks: MzTable::new(),
            precursors: Vec::new(),
        })
    }

    pub(super) fn finish(self) -> ScanRecord {
        ScanRecord::new(
            self.peaks,
            self.retention_time,
            self.ms_level,
            self.centroid,
            self.precursors,
        )
    }
}

/// Interpret a `centroided` value; only an explicit false or `0` means profile
fn parse_centroided(value: &str) -> bool {
    let value = value.trim();
    if value.eq_ignore_ascii_case("false") || value == "0" {
        return false;
    }
    true
}

/// Build the isolation window of a `<precursorMz>` element
///
/// A missing width or an empty center yields the full-range window.
pub(super) fn precursor_window(
    width: Option<&str>,
    center: &str,
) -> Result<PrecursorSelection, MzXmlError> {
    let center = center.trim();
    let width = width.map(str::trim).filter(|w| !w.is_empty());
    let (width, center) = match width {
        Some(width) if !center.is_empty() => (width, center),
        _ => return Ok(PrecursorSelection::full_range()),
    };

    let width = parse_finite(width, "windowWideness")?;
    let center = parse_finite(center, "precursorMz")?;

    Ok(PrecursorSelection::from_center(center, width))
}

/// Parse a finite number; `NaN` and infinities are rejected like any other bad text
fn parse_finite(text: &str, field: &'static str) -> Result<f64, MzXmlError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MzXmlError::InvalidNumber {
            field,
            value: text.to_string(),
        })
}

impl<R: BufRead> MzXmlStreamer<R> {
    /// Read the next scan from the stream
    ///
    /// Nested scans are yielded in document order: a scan is complete at its
    /// end tag or when a child `<scan>` starts, whichever comes first.
    /// Returns `Ok(None)` once the document has no further scans.
    pub fn next_scan(&mut self) -> Result<Option<ScanRecord>, MzXmlError> {
        if let Some(scan) = self.ready.take() {
            return Ok(Some(scan));
        }
        if let Some(err) = self.pending_error.take() {
            return Err(err);
        }
        if self.finished {
            return Ok(None);
        }

        let mut buf = Vec::new();
        loop {
            match self.reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    if let Some(scan) = self.open_element(e, false)? {
                        return Ok(Some(scan));
                    }
                }
                Event::Empty(ref e) => {
                    if let Some(scan) = self.open_element(e, true)? {
                        return Ok(Some(scan));
                    }
                }
                Event::Text(ref t) => {
                    if !matches!(self.capture, Capture::None) {
                        self.capture.push_str(&t.unescape()?);
                    }
                }
                Event::CData(ref c) => {
                    if !matches!(self.capture, Capture::None) {
                        self.capture.push_str(std::str::from_utf8(c)?);
                    }
                }
                Event::End(ref e) => {
                    let name = e.local_name();
                    let name = name.as_ref();
                    if name_is(name, PEAKS) {
                        self.close_peaks()?;
                    } else if name_is(name, PRECURSOR_MZ) {
                        self.close_precursor()?;
                    } else if name_is(name, SCAN) {
                        self.capture = Capture::None;
                        if let Some(builder) = self.current.take() {
                            return Ok(Some(self.emit(builder)));
                        }
                    }
                }
                Event::Eof => {
                    self.finished = true;
                    if self.current.take().is_some() {
                        return Err(MzXmlError::InvalidStructure(
                            "end of input inside <scan>".to_string(),
                        ));
                    }
                    return Ok(None);
                }
                _ => {}
            }
            buf.clear();
        }
    }

    /// Handle a start or empty tag, returning a scan if one became complete
    fn open_element(
        &mut self,
        e: &BytesStart,
        empty: bool,
    ) -> Result<Option<ScanRecord>, MzXmlError> {
        let name = e.local_name();
        let name = name.as_ref();

        if name_is(name, SCAN) {
            self.capture = Capture::None;
            let parent = self.current.take();
            let builder = match ScanBuilder::from_element(e, self.reader.decoder()) {
                Ok(builder) => builder,
                Err(err) => {
                    // the parent is complete; yield it and fail on the next pull
                    let Some(parent) = parent else {
                        return Err(err);
                    };
                    self.pending_error = Some(err);
                    self.finished = true;
                    return Ok(Some(self.emit(parent)));
                }
            };

            if empty {
                let scan = self.emit(builder);
                return Ok(Some(match parent {
                    Some(parent) => {
                        self.ready = Some(scan);
                        self.emit(parent)
                    }
                    None => scan,
                }));
            }

            self.current = Some(builder);
            return Ok(parent.map(|parent| self.emit(parent)));
        }

        if self.current.is_none() {
            return Ok(None);
        }

        let decoder = self.reader.decoder();
        if name_is(name, PEAKS) {
            let encoding = PeakEncoding::from_attributes(
                get_attribute(e, "compressionType", decoder)?.as_deref(),
                get_attribute(e, "precision", decoder)?.as_deref(),
                get_attribute(e, "byteOrder", decoder)?.as_deref(),
            )?;
            self.capture = Capture::Peaks {
                encoding,
                text: String::new(),
            };
            if empty {
                self.close_peaks()?;
            }
        } else if name_is(name, PRECURSOR_MZ) {
            self.capture = Capture::Precursor {
                width: get_attribute(e, "windowWideness", decoder)?,
                text: String::new(),
            };
            if empty {
                self.close_precursor()?;
            }
        }
        Ok(None)
    }

    fn close_peaks(&mut self) -> Result<(), MzXmlError> {
        if let Capture::Peaks { encoding, text } = std::mem::take(&mut self.capture) {
            let values = decode_peaks(&text, &encoding)?;
            if let Some(builder) = self.current.as_mut() {
                builder.peaks = mz_pairs_to_table(&values);
            }
        }
        Ok(())
    }

    fn close_precursor(&mut self) -> Result<(), MzXmlError> {
        if let Capture::Precursor { width, text } = std::mem::take(&mut self.capture) {
            let window = precursor_window(width.as_deref(), &text)?;
            if let Some(builder) = self.current.as_mut() {
                builder.precursors.push(window);
            }
        }
        Ok(())
    }

    fn emit(&self, builder: ScanBuilder) -> ScanRecord {
        let scan = builder.finish();
        debug!(
            "scan: level={} rt={:.4} centroid={} peaks={} precursors={}",
            scan.ms_level(),
            scan.retention_time(),
            scan.is_centroid(),
            scan.peaks().len(),
            scan.precursors().len()
        );
        scan
    }
}

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{WriterError, FORMAT_VERSION, MAGIC, TAG_END, TAG_SCAN};
use crate::binary::{
    gzip_decompress, read_array_2d, read_bytes_from, read_sized_string, read_value_from,
};
use crate::scan::{MsLevel, MzTable, PrecursorSelection, ScanRecord};

/// Header fields of a scan file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFileHeader {
    /// Layout version
    pub version: i32,
    /// Vendor name
    pub vendor: String,
    /// Instrument model
    pub instrument_model: String,
    /// Instrument serial number
    pub serial_number: String,
    /// Acquisition date as RFC 3339 text
    pub acquisition_date: String,
    /// Original file name
    pub original_file_name: String,
    /// Survey scan analyzer
    pub ms1_analyzer: String,
    /// Fragment scan analyzer
    pub ms2_analyzer: String,
    /// Whether peak tables are gzipped
    pub compressed: bool,
}

/// Reads a scan file written by [`super::ScanFileWriter`]
pub struct ScanFileReader<R: Read = BufReader<File>> {
    reader: R,
    header: ScanFileHeader,
    scans_read: usize,
    finished: bool,
}

impl ScanFileReader<BufReader<File>> {
    /// Open a scan file and read its header
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, WriterError> {
        let file = File::open(path.as_ref())?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read> ScanFileReader<R> {
    /// Read the header from `reader`
    pub fn new(mut reader: R) -> Result<Self, WriterError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(WriterError::InvalidFormat("bad file signature".to_string()));
        }

        let version: i32 = read_value_from(&mut reader)?;
        if version != FORMAT_VERSION {
            return Err(WriterError::InvalidFormat(format!(
                "unsupported version {}",
                version
            )));
        }

        let header = ScanFileHeader {
            version,
            vendor: read_sized_string(&mut reader)?,
            instrument_model: read_sized_string(&mut reader)?,
            serial_number: read_sized_string(&mut reader)?,
            acquisition_date: read_sized_string(&mut reader)?,
            original_file_name: read_sized_string(&mut reader)?,
            ms1_analyzer: read_sized_string(&mut reader)?,
            ms2_analyzer: read_sized_string(&mut reader)?,
            compressed: read_value_from(&mut reader)?,
        };

        Ok(Self {
            reader,
            header,
            scans_read: 0,
            finished: false,
        })
    }

    /// Header fields
    pub fn header(&self) -> &ScanFileHeader {
        &self.header
    }

    /// Number of scans read so far
    pub fn scans_read(&self) -> usize {
        self.scans_read
    }

    /// Read the next scan, or `None` after the trailer
    ///
    /// The scan count stored in the trailer must match the number of scan
    /// blocks read.
    pub fn next_scan(&mut self) -> Result<Option<ScanRecord>, WriterError> {
        if self.finished {
            return Ok(None);
        }

        let tag: u8 = read_value_from(&mut self.reader)?;
        match tag {
            TAG_SCAN => {
                let scan = self.read_scan()?;
                self.scans_read += 1;
                Ok(Some(scan))
            }
            TAG_END => {
                self.finished = true;
                let declared: i64 = read_value_from(&mut self.reader)?;
                if usize::try_from(declared).ok() != Some(self.scans_read) {
                    return Err(WriterError::InvalidFormat(format!(
                        "trailer declares {} scans, found {}",
                        declared, self.scans_read
                    )));
                }
                Ok(None)
            }
            other => Err(WriterError::InvalidFormat(format!(
                "unknown block tag {}",
                other
            ))),
        }
    }

    fn read_scan(&mut self) -> Result<ScanRecord, WriterError> {
        let r = &mut self.reader;
        let retention_time: f64 = read_value_from(r)?;
        let level: i32 = read_value_from(r)?;
        let centroid: bool = read_value_from(r)?;

        let window_count = read_count(r, "precursor count")?;
        let mut precursors = Vec::with_capacity(window_count.min(64));
        for _ in 0..window_count {
            let start: f64 = read_value_from(r)?;
            let end: f64 = read_value_from(r)?;
            precursors.push(PrecursorSelection::new(start, end));
        }

        let peak_count = read_count(r, "peak count")?;
        let payload_len = read_count(r, "payload size")?;
        let payload = read_bytes_from(r, payload_len)?;

        let table = if self.header.compressed {
            gzip_decompress(&payload)?
        } else {
            payload
        };
        let mut rows = read_array_2d::<f64>(&table, 2)?.into_iter();
        let (mz, intensity) = match (rows.next(), rows.next()) {
            (Some(mz), Some(intensity)) => (mz, intensity),
            _ => return Err(WriterError::InvalidFormat("missing peak rows".to_string())),
        };
        if mz.len() != peak_count {
            return Err(WriterError::InvalidFormat(format!(
                "peak count {} does not match table of {} pairs",
                peak_count,
                mz.len()
            )));
        }
        let peaks = MzTable::from_rows(mz, intensity)
            .ok_or_else(|| WriterError::InvalidFormat("unequal peak rows".to_string()))?;

        Ok(ScanRecord::new(
            peaks,
            retention_time,
            MsLevel::from_code(level),
            centroid,
            precursors,
        ))
    }
}

fn read_count<R: Read>(reader: &mut R, what: &str) -> Result<usize, WriterError> {
    let value: i32 = read_value_from(reader)?;
    usize::try_from(value)
        .map_err(|_| WriterError::InvalidFormat(format!("negative {}: {}", what, value)))
}

use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use super::{ScanWriter, WriterConfig, WriterError, WriterStats, TAG_END, TAG_SCAN};
use crate::binary::{array_2d_to_bytes, gzip_compress, write_sized_string, write_value};
use crate::metadata::SourceMetadata;
use crate::scan::ScanRecord;

/// File signature
pub const MAGIC: &[u8; 4] = b"MZSB";

/// Layout version written after the signature
pub const FORMAT_VERSION: i32 = 1;

/// Writes scans to a scan file
///
/// The header is written on creation; [`ScanWriter::finalize`] appends the
/// trailer and flushes. A writer dropped without being finalized leaves a
/// file that [`super::ScanFileReader`] rejects.
pub struct ScanFileWriter<W: Write = BufWriter<File>> {
    writer: W,
    config: WriterConfig,
    stats: WriterStats,
}

impl ScanFileWriter<BufWriter<File>> {
    /// Create or truncate `path` and write the header
    pub fn create<P: AsRef<Path>>(
        path: P,
        metadata: &SourceMetadata,
        config: WriterConfig,
    ) -> Result<Self, WriterError> {
        let file = File::create(path.as_ref())?;
        Self::new(BufWriter::new(file), metadata, config)
    }
}

impl<W: Write> ScanFileWriter<W> {
    /// Write the header to `writer`
    pub fn new(
        mut writer: W,
        metadata: &SourceMetadata,
        config: WriterConfig,
    ) -> Result<Self, WriterError> {
        writer.write_all(MAGIC)?;
        let mut bytes = MAGIC.len();
        bytes += write_value(&mut writer, FORMAT_VERSION)?;

        let date = metadata.acquisition_date.to_rfc3339();
        let fields: [&str; 7] = [
            metadata.vendor.as_str(),
            &metadata.instrument_model,
            &metadata.serial_number,
            &date,
            &metadata.original_file_name,
            metadata.ms1_analyzer.as_str(),
            metadata.ms2_analyzer.as_str(),
        ];
        for field in fields {
            bytes += write_sized_string(&mut writer, field)?;
        }
        bytes += write_value(&mut writer, config.compress_scans)?;

        Ok(Self {
            writer,
            config,
            stats: WriterStats {
                bytes_written: bytes as u64,
                ..WriterStats::default()
            },
        })
    }

    /// Statistics so far
    pub fn stats(&self) -> &WriterStats {
        &self.stats
    }

    /// Encode one scan block
    ///
    /// tag `1` (u8), retention time (f64), level code (i32), centroid
    /// (bool), window count (i32) followed by start/end pairs (f64), peak
    /// count (i32), payload length (i32), payload. The payload is the 2-row
    /// f64 peak table, gzipped when [`WriterConfig::compress_scans`] is set.
    fn write_scan(&mut self, scan: &ScanRecord) -> Result<usize, WriterError> {
        let peaks = scan.peaks();
        if peaks
            .mz()
            .windows(2)
            .any(|w| w[0].total_cmp(&w[1]) == Ordering::Greater)
        {
            return Err(WriterError::InvalidData(
                "m/z values are not in ascending order".to_string(),
            ));
        }

        let peak_count = to_i32(peaks.len(), "peak count")?;
        let window_count = to_i32(scan.precursors().len(), "precursor count")?;

        let table = array_2d_to_bytes::<f64, _>(&peaks.rows())?;
        let payload = if self.config.compress_scans {
            gzip_compress(&table)?
        } else {
            table
        };
        let payload_len = to_i32(payload.len(), "payload size")?;

        let w = &mut self.writer;
        let mut bytes = write_value(w, TAG_SCAN)?;
        bytes += write_value(w, scan.retention_time())?;
        bytes += write_value(w, scan.ms_level().code())?;
        bytes += write_value(w, scan.is_centroid())?;
        bytes += write_value(w, window_count)?;
        for window in scan.precursors() {
            bytes += write_value(w, window.window_start())?;
            bytes += write_value(w, window.window_end())?;
        }
        bytes += write_value(w, peak_count)?;
        bytes += write_value(w, payload_len)?;
        w.write_all(&payload)?;
        bytes += payload.len();

        Ok(bytes)
    }
}

fn to_i32(value: usize, what: &str) -> Result<i32, WriterError> {
    i32::try_from(value).map_err(|_| WriterError::InvalidData(format!("{} too large: {}", what, value)))
}

impl<W: Write> ScanWriter for ScanFileWriter<W> {
    fn add_scan(&mut self, scan: &ScanRecord) -> Result<(), WriterError> {
        let bytes = self.write_scan(scan)?;
        self.stats.scans_written += 1;
        self.stats.peaks_written += scan.peaks().len();
        self.stats.bytes_written += bytes as u64;
        Ok(())
    }

    fn finalize(mut self: Box<Self>) -> Result<WriterStats, WriterError> {
        let scans = i64::try_from(self.stats.scans_written)
            .map_err(|_| WriterError::InvalidData("scan count overflow".to_string()))?;
        let mut bytes = write_value(&mut self.writer, TAG_END)?;
        bytes += write_value(&mut self.writer, scans)?;
        self.writer.flush()?;
        self.stats.bytes_written += bytes as u64;

        debug!("{}", self.stats);
        Ok(self.stats.clone())
    }
}

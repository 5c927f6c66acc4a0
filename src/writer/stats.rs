use std::fmt;

/// Statistics from a completed write operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterStats {
    /// Number of scans written to the file
    pub scans_written: usize,
    /// Total number of (m/z, intensity) pairs written
    pub peaks_written: usize,
    /// Total file size in bytes
    pub bytes_written: u64,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} scans ({} peaks, {} bytes)",
            self.scans_written, self.peaks_written, self.bytes_written
        )
    }
}

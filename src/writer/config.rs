use serde::{Deserialize, Serialize};

/// Configuration for the scan file writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// gzip each scan's peak table
    pub compress_scans: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compress_scans: true,
        }
    }
}

impl WriterConfig {
    /// Configuration writing uncompressed peak tables
    pub fn uncompressed() -> Self {
        Self {
            compress_scans: false,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scan::MsLevel;

use super::{MassAnalyzerType, VendorType};

/// Placeholder for text fields the source does not report
pub const UNKNOWN_VALUE: &str = "Unknown";

/// Scan count reported when the source does not announce one
pub const UNKNOWN_SCAN_COUNT: i64 = -1;

/// Header information of one open scan source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Recognised vendor
    pub vendor: VendorType,

    /// Manufacturer string exactly as found in the source, if any
    pub vendor_name: Option<String>,

    /// Instrument model name
    pub instrument_model: String,

    /// Instrument serial number
    pub serial_number: String,

    /// Acquisition date; the open time when the source carries none
    pub acquisition_date: DateTime<Utc>,

    /// Name of the file the source was derived from
    pub original_file_name: String,

    /// Announced number of scans, or [`UNKNOWN_SCAN_COUNT`]
    pub total_scan_count: i64,

    /// Analyzer used for survey scans
    pub ms1_analyzer: MassAnalyzerType,

    /// Analyzer used for fragment scans
    pub ms2_analyzer: MassAnalyzerType,
}

impl Default for SourceMetadata {
    fn default() -> Self {
        Self {
            vendor: VendorType::Unknown,
            vendor_name: None,
            instrument_model: UNKNOWN_VALUE.to_string(),
            serial_number: UNKNOWN_VALUE.to_string(),
            acquisition_date: Utc::now(),
            original_file_name: UNKNOWN_VALUE.to_string(),
            total_scan_count: UNKNOWN_SCAN_COUNT,
            ms1_analyzer: MassAnalyzerType::Unknown,
            ms2_analyzer: MassAnalyzerType::Unknown,
        }
    }
}

impl SourceMetadata {
    /// Metadata with every field at its "unknown" default
    pub fn new() -> Self {
        Self::default()
    }

    /// Mass analyzer used at the given level tag
    ///
    /// Level tags follow [`MsLevel`]: [`MsLevel::UNKNOWN`] and
    /// [`MsLevel::LEVEL1`] ask for the survey analyzer, anything higher for
    /// the fragment analyzer.
    pub fn mass_analyzer(&self, level: MsLevel) -> MassAnalyzerType {
        if level.code() <= MsLevel::LEVEL1.code() {
            self.ms1_analyzer
        } else {
            self.ms2_analyzer
        }
    }

    /// Whether the source announced its scan count
    pub fn has_scan_count(&self) -> bool {
        self.total_scan_count >= 0
    }
}

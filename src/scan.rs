//! Scan records handed to the destination writer
//!
//! A [`ScanRecord`] is created once per decoded spectrum, is immutable
//! afterwards and is consumed immediately by a [`crate::writer::ScanWriter`].

use std::fmt;

/// Lower bound of the default precursor window (full instrument range)
pub const FULL_RANGE_START: f64 = 0.0;

/// Upper bound of the default precursor window (full instrument range)
pub const FULL_RANGE_END: f64 = 5000.0;

/// MS level tag as understood by the destination writer
///
/// The tag is numerically one less than the 1-based `msLevel` declared in
/// mzXML: `msLevel="1"` becomes code 0, `msLevel="2"` becomes code 1 and so
/// on. A scan without a usable `msLevel` gets [`MsLevel::UNKNOWN`]. The
/// vendor RAW delegate passes the reported MS order through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct MsLevel(i32);

impl MsLevel {
    /// Tag used when the level is not known
    pub const UNKNOWN: MsLevel = MsLevel(0);
    /// Tag for level 1
    pub const LEVEL1: MsLevel = MsLevel(1);
    /// Tag for level 2
    pub const LEVEL2: MsLevel = MsLevel(2);

    /// Build a tag from its raw code
    pub const fn from_code(code: i32) -> Self {
        MsLevel(code)
    }

    /// Build a tag from the 1-based order declared in mzXML
    pub const fn from_declared_order(order: i32) -> Self {
        MsLevel(order.saturating_sub(1))
    }

    /// Raw numeric code
    pub const fn code(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for MsLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "Unknown"),
            n => write!(f, "Level{}", n),
        }
    }
}

/// An m/z isolation window selected for fragmentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecursorSelection {
    window_start: f64,
    window_end: f64,
}

impl PrecursorSelection {
    /// Create a window from two bounds; the smaller becomes the start
    pub fn new(a: f64, b: f64) -> Self {
        if b < a {
            Self {
                window_start: b,
                window_end: a,
            }
        } else {
            Self {
                window_start: a,
                window_end: b,
            }
        }
    }

    /// Create a window from its center and total width
    pub fn from_center(center: f64, width: f64) -> Self {
        let half = width / 2.0;
        Self::new(center - half, center + half)
    }

    /// The window covering the whole instrument range
    pub fn full_range() -> Self {
        Self::new(FULL_RANGE_START, FULL_RANGE_END)
    }

    /// Lower bound in m/z
    pub fn window_start(&self) -> f64 {
        self.window_start
    }

    /// Upper bound in m/z
    pub fn window_end(&self) -> f64 {
        self.window_end
    }
}

impl Default for PrecursorSelection {
    fn default() -> Self {
        Self::full_range()
    }
}

/// Two-row (m/z, intensity) table with equal row lengths
///
/// Tables produced by [`crate::mzxml::normalize_pairs`] have a
/// non-decreasing m/z row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MzTable {
    mz: Vec<f64>,
    intensity: Vec<f64>,
}

impl MzTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from two rows
    ///
    /// Returns `None` when the rows have different lengths.
    pub fn from_rows(mz: Vec<f64>, intensity: Vec<f64>) -> Option<Self> {
        if mz.len() != intensity.len() {
            return None;
        }
        Some(Self { mz, intensity })
    }

    /// Create a table from (m/z, intensity) pairs, keeping their order
    pub fn from_pairs<I: IntoIterator<Item = (f64, f64)>>(pairs: I) -> Self {
        let (mz, intensity) = pairs.into_iter().unzip();
        Self { mz, intensity }
    }

    /// Row 0: m/z values
    pub fn mz(&self) -> &[f64] {
        &self.mz
    }

    /// Row 1: intensities matching [`MzTable::mz`]
    pub fn intensity(&self) -> &[f64] {
        &self.intensity
    }

    /// Both rows in order
    pub fn rows(&self) -> [&[f64]; 2] {
        [&self.mz, &self.intensity]
    }

    /// Number of (m/z, intensity) pairs
    pub fn len(&self) -> usize {
        self.mz.len()
    }

    /// Whether the table holds no pairs
    pub fn is_empty(&self) -> bool {
        self.mz.is_empty()
    }

    /// Iterate over (m/z, intensity) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mz.iter().copied().zip(self.intensity.iter().copied())
    }
}

/// One decoded spectrum
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    peaks: MzTable,
    retention_time: f64,
    ms_level: MsLevel,
    centroid: bool,
    precursors: Vec<PrecursorSelection>,
}

impl ScanRecord {
    /// Assemble a scan record
    pub fn new(
        peaks: MzTable,
        retention_time: f64,
        ms_level: MsLevel,
        centroid: bool,
        precursors: Vec<PrecursorSelection>,
    ) -> Self {
        Self {
            peaks,
            retention_time,
            ms_level,
            centroid,
            precursors,
        }
    }

    /// The (m/z, intensity) table
    pub fn peaks(&self) -> &MzTable {
        &self.peaks
    }

    /// Retention time in minutes
    pub fn retention_time(&self) -> f64 {
        self.retention_time
    }

    /// MS level tag
    pub fn ms_level(&self) -> MsLevel {
        self.ms_level
    }

    /// Whether peaks are centroided (as opposed to profile data)
    pub fn is_centroid(&self) -> bool {
        self.centroid
    }

    /// Precursor selection windows, empty for survey scans
    pub fn precursors(&self) -> &[PrecursorSelection] {
        &self.precursors
    }
}

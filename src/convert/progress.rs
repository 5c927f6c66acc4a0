//! Console progress for a single conversion

use std::fmt;
use std::io::Write;

/// Number of percentage updates printed over a file with a known scan count
const PERCENT_UPDATES: i64 = 212;

/// Scans between indicator updates when the scan count is unknown
const INDICATOR_INTERVAL: u64 = 100;

const INDICATORS: [&str; 4] = ["...", " ..", ". .", ".. "];

/// One progress line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressUpdate {
    /// Percentage of the announced scan count, rounded to one decimal
    Percent(f64),
    /// Activity glyph used when the scan count is unknown
    Indicator(&'static str),
}

impl fmt::Display for ProgressUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressUpdate::Percent(p) => write!(f, "{}%", p),
            ProgressUpdate::Indicator(glyph) => f.write_str(glyph),
        }
    }
}

/// Decides when to print progress and what to print
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    name: String,
    total: i64,
    indicator_count: usize,
    enabled: bool,
}

impl ProgressReporter {
    /// Reporter for a file announcing `total` scans (-1 or 0 when unknown)
    pub fn new(name: impl Into<String>, total: i64, enabled: bool) -> Self {
        Self {
            name: name.into(),
            total,
            indicator_count: 0,
            enabled,
        }
    }

    /// Whether the percentage path is used
    pub fn is_percentage(&self) -> bool {
        self.total > 0
    }

    /// Update due after `scan_index` scans, if any
    ///
    /// With a known scan count an update is due every `max(1, total / 212)`
    /// scans; otherwise every 100 scans, cycling through the glyphs.
    pub fn update_for(&mut self, scan_index: u64) -> Option<ProgressUpdate> {
        if self.is_percentage() {
            let step = (self.total / PERCENT_UPDATES).max(1) as u64;
            if scan_index % step != 0 {
                return None;
            }
            let percent = scan_index as f64 / self.total as f64 * 100.0;
            Some(ProgressUpdate::Percent((percent * 10.0).round() / 10.0))
        } else {
            if scan_index % INDICATOR_INTERVAL != 0 {
                return None;
            }
            let glyph = INDICATORS[self.indicator_count % INDICATORS.len()];
            self.indicator_count += 1;
            Some(ProgressUpdate::Indicator(glyph))
        }
    }

    /// Print the update due after `scan_index` scans
    pub fn report(&mut self, scan_index: u64) {
        if let Some(update) = self.update_for(scan_index) {
            if self.enabled {
                print!("{}Processing: {} [{}]", super::CLEAR_LINE, self.name, update);
                let _ = std::io::stdout().flush();
            }
        }
    }

    /// Whether progress lines are printed
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

//! # Conversion Driver
//!
//! Converts one source file end to end: the [`ScanSource`] is resolved from
//! the file extension, every scan is handed to a [`ScanWriter`] and the file
//! is reported as `[DONE]` or `[FAILED]` on stdout.
//!
//! Failures inside the scan loop never escape [`Converter::convert_source`]:
//! the loop stops, the error is printed, and the writer is still finalized
//! and the source still closed. Only failures that happen before the loop
//! starts (opening the source or creating the destination) are returned as
//! a [`ConversionError`].
//!
//! ```no_run
//! use std::path::Path;
//! use mzconvert::convert::{ConversionConfig, Converter};
//!
//! let converter = Converter::new(ConversionConfig::default());
//! if let Some(report) = converter.try_convert(Path::new("run.mzXML"), None)? {
//!     println!("{}", report.destination.display());
//! }
//! # Ok::<(), mzconvert::convert::ConversionError>(())
//! ```

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::mzxml::DEFAULT_INPUT_BUFFER_SIZE;
use crate::source::{open_source, ScanSource, SourceError};
use crate::writer::{ScanFileWriter, ScanWriter, WriterConfig, WriterError, WriterStats};

#[cfg(feature = "colorized_output")]
use console::style;

mod batch;
mod progress;


pub use progress::{ProgressReporter, ProgressUpdate};

/// Extension given to converted files when no destination is supplied
pub const DEFAULT_TARGET_EXTENSION: &str = "mzsb";

/// Blanks the current console line before a status or progress line
pub(crate) const CLEAR_LINE: &str =
    "\r                                                                                \r";

/// Configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Extension that replaces the source extension in derived destinations
    pub target_extension: String,

    /// Print progress lines while scans are converted
    pub show_progress: bool,

    /// Destination writer settings
    pub writer: WriterConfig,

    /// Read buffer size for streamed sources, in bytes
    pub buffer_size: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
            show_progress: true,
            writer: WriterConfig::default(),
            buffer_size: DEFAULT_INPUT_BUFFER_SIZE,
        }
    }
}

/// Errors that prevent a conversion from starting
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The source could not be opened
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// The destination could not be created
    #[error("Writer error: {0}")]
    Writer(#[from] WriterError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Terminal status of one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    /// Every scan was written and the destination finalized
    Done,
    /// The scan loop or the finalization failed
    Failed,
}

impl ConversionStatus {
    /// Console tag for the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionStatus::Done => "[DONE]",
            ConversionStatus::Failed => "[FAILED]",
        }
    }
}

/// Outcome of converting one file
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Input file
    pub source: PathBuf,
    /// Output file
    pub destination: PathBuf,
    /// Terminal status
    pub status: ConversionStatus,
    /// Scans handed to the writer
    pub scans_converted: u64,
    /// Writer statistics, when finalization succeeded
    pub stats: Option<WriterStats>,
    /// Message of the error that failed the file
    pub error: Option<String>,
}

impl ConversionReport {
    /// Whether the file converted successfully
    pub fn is_success(&self) -> bool {
        self.status == ConversionStatus::Done
    }

    pub(crate) fn failed(source: PathBuf, destination: PathBuf, error: String) -> Self {
        Self {
            source,
            destination,
            status: ConversionStatus::Failed,
            scans_converted: 0,
            stats: None,
            error: Some(error),
        }
    }
}

/// Destination for `source`: the same path with `extension` in place of
/// the source extension
pub fn default_destination(source: &Path, extension: &str) -> PathBuf {
    source.with_extension(extension)
}

/// File name used in console status lines
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Converts source files to scan files
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    /// Create a converter with the given configuration
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert `source` into `destination`
    ///
    /// Without a destination the source path with the target extension is
    /// used. Returns `Ok(None)` when no reader handles the source extension.
    pub fn try_convert(
        &self,
        source: &Path,
        destination: Option<&Path>,
    ) -> Result<Option<ConversionReport>, ConversionError> {
        let Some(scans) = open_source(source, self.config.buffer_size)? else {
            info!("{}: no reader for this file type, skipped", source.display());
            return Ok(None);
        };

        let destination = destination
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_destination(source, &self.config.target_extension));
        info!("Converting {} -> {}", source.display(), destination.display());

        let writer = match ScanFileWriter::create(
            &destination,
            scans.metadata(),
            self.config.writer.clone(),
        ) {
            Ok(writer) => writer,
            Err(e) => {
                if let Err(close_err) = scans.close() {
                    warn!("{}: failed to close source: {}", source.display(), close_err);
                }
                return Err(e.into());
            }
        };

        let mut report =
            self.convert_source(&display_name(source), scans, Box::new(writer), &destination);
        report.source = source.to_path_buf();
        Ok(Some(report))
    }

    /// Convert one file, printing failures to open it instead of returning them
    ///
    /// Returns `None` when no reader handles the source extension.
    pub fn convert_file(
        &self,
        source: &Path,
        destination: Option<&Path>,
    ) -> Option<ConversionReport> {
        match self.try_convert(source, destination) {
            Ok(report) => report,
            Err(e) => {
                println!("Error: {}", e);
                print_status(&display_name(source), ConversionStatus::Failed, false);
                let destination = destination
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| default_destination(source, &self.config.target_extension));
                Some(ConversionReport::failed(
                    source.to_path_buf(),
                    destination,
                    e.to_string(),
                ))
            }
        }
    }

    /// Stream every scan of an opened source into a writer
    ///
    /// The writer is always finalized and the source always closed. A
    /// failure while reading, writing or finalizing marks the report
    /// [`ConversionStatus::Failed`]; it is printed, never returned.
    pub fn convert_source(
        &self,
        name: &str,
        mut source: Box<dyn ScanSource>,
        mut writer: Box<dyn ScanWriter>,
        destination: &Path,
    ) -> ConversionReport {
        let mut progress =
            ProgressReporter::new(name, source.total_scan_count(), self.config.show_progress);
        progress.report(0);

        let mut scans_converted = 0u64;
        let mut error = None;
        loop {
            match source.next_scan() {
                Ok(Some(scan)) => {
                    if let Err(e) = writer.add_scan(&scan) {
                        error = Some(e.to_string());
                        break;
                    }
                    scans_converted += 1;
                    progress.report(scans_converted);
                }
                Ok(None) => break,
                Err(e) => {
                    error = Some(e.to_string());
                    break;
                }
            }
        }

        if let Some(message) = &error {
            println!("{}Error: {}", CLEAR_LINE, message);
        }

        let stats = match writer.finalize() {
            Ok(stats) => Some(stats),
            Err(e) => {
                println!("{}Error: {}", CLEAR_LINE, e);
                if error.is_none() {
                    error = Some(e.to_string());
                }
                None
            }
        };

        if let Err(e) = source.close() {
            warn!("{}: failed to close source: {}", name, e);
        }

        let status = if error.is_none() {
            ConversionStatus::Done
        } else {
            ConversionStatus::Failed
        };
        print_status(name, status, progress.is_enabled());
        if let Some(stats) = &stats {
            info!("{}: {}", name, stats);
        }

        ConversionReport {
            source: PathBuf::from(name),
            destination: destination.to_path_buf(),
            status,
            scans_converted,
            stats,
            error,
        }
    }
}

pub(crate) fn print_status(name: &str, status: ConversionStatus, clear: bool) {
    let prefix = if clear { CLEAR_LINE } else { "" };

    #[cfg(feature = "colorized_output")]
    {
        let tag = match status {
            ConversionStatus::Done => style(status.as_str()).green().bold(),
            ConversionStatus::Failed => style(status.as_str()).red().bold(),
        };
        println!("{}{} {}", prefix, name, tag);
    }

    #[cfg(not(feature = "colorized_output"))]
    println!("{}{} {}", prefix, name, status.as_str());
}

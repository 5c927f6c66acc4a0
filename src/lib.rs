//! # mzconvert - Streaming mzXML Conversion
//!
//! `mzconvert` reads mass spectrometry runs one scan at a time and hands
//! each decoded spectrum to a destination writer, so memory stays bounded
//! whatever the size of the input.
//!
//! ## Key Features
//!
//! - **Pull-based mzXML decoding**: [`mzxml::MzXmlStreamer`] reads the run
//!   header once, then yields one [`scan::ScanRecord`] per `<scan>` element.
//!
//! - **Peak payload decoding**: base64 transport, optional zlib compression,
//!   32/64-bit precision and network byte order are all handled by
//!   [`mzxml::decode_peaks`].
//!
//! - **Canonical peak tables**: [`mzxml::normalize_pairs`] drops empty pairs
//!   and guarantees a non-decreasing m/z row.
//!
//! - **Pluggable sources and destinations**: conversion only depends on the
//!   [`source::ScanSource`] and [`writer::ScanWriter`] traits. Thermo RAW
//!   files are read through the optional `thermo` feature.
//!
//! - **Failure isolation**: a broken file is reported as `[FAILED]`, its
//!   output is still finalized and a folder conversion moves on.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mzconvert::mzxml::MzXmlStreamer;
//!
//! let streamer = MzXmlStreamer::open("run01.mzXML")?;
//! println!("Vendor: {}", streamer.metadata().vendor);
//!
//! for scan in streamer.scans() {
//!     let scan = scan?;
//!     println!(
//!         "{} RT={:.2} min, {} peaks",
//!         scan.ms_level(),
//!         scan.retention_time(),
//!         scan.peaks().len()
//!     );
//! }
//! # Ok::<(), mzconvert::mzxml::MzXmlError>(())
//! ```
//!
//! ## Converting Files
//!
//! ```rust,no_run
//! use std::path::Path;
//! use mzconvert::convert::{ConversionConfig, Converter};
//!
//! let converter = Converter::new(ConversionConfig::default());
//! let reports = converter.convert_folder(Path::new("raw_data"), Some(Path::new("converted")))?;
//! for report in reports {
//!     println!("{} -> {:?}", report.source.display(), report.status);
//! }
//! # Ok::<(), mzconvert::convert::ConversionError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`binary`]: little-endian primitive, string and array codec plus gzip/zlib
//! - [`scan`]: scan records, peak tables, precursor windows and MS level tags
//! - [`metadata`]: source metadata, vendor and mass analyzer recognition
//! - [`mzxml`]: peak codec, normalizer, retention time parsing and streamer
//! - [`source`]: the scan source trait and extension-based format detection
//! - `thermo`: Thermo RAW scan source (`thermo` feature)
//! - [`writer`]: the destination writer trait and the scan file format
//! - [`convert`]: single file and folder conversion with progress reporting

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod binary;
pub mod convert;
pub mod metadata;
pub mod mzxml;
pub mod scan;
pub mod source;
#[cfg(feature = "thermo")]
pub mod thermo;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::convert::{
        ConversionConfig, ConversionError, ConversionReport, ConversionStatus, Converter,
    };
    pub use crate::metadata::{MassAnalyzerType, SourceMetadata, VendorType};
    pub use crate::mzxml::{MzXmlError, MzXmlStreamer};
    pub use crate::scan::{MsLevel, MzTable, PrecursorSelection, ScanRecord};
    pub use crate::source::{open_source, ScanSource, SourceError, SourceFormat};
    #[cfg(feature = "thermo")]
    pub use crate::thermo::{ThermoError, ThermoScanSource};
    pub use crate::writer::{
        ScanFileReader, ScanFileWriter, ScanWriter, WriterConfig, WriterError, WriterStats,
    };
}

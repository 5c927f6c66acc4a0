//! Thermo RAW input
//!
//! Reads Thermo Fisher RAW files through the `thermorawfilereader` crate,
//! which hosts Thermo's RawFileReader .NET library. Only compiled with the
//! `thermo` feature.
//!
//! # Requirements
//!
//! - .NET 8 runtime must be installed on the system
//! - x86/x86_64 host; opening fails with `PlatformNotSupported` elsewhere
//!
//! # Example
//!
//! ```no_run
//! use mzconvert::source::ScanSource;
//! use mzconvert::thermo::ThermoScanSource;
//!
//! let mut source = ThermoScanSource::open("sample.raw")?;
//! println!("{} scans", source.total_scan_count());
//! while let Some(scan) = source.next_scan()? {
//!     println!("{} at {:.2} min", scan.ms_level(), scan.retention_time());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod streamer;

pub use error::ThermoError;
pub use streamer::ThermoScanSource;

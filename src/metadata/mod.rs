//! # Source metadata
//!
//! Header information extracted once when a scan source is opened: vendor
//! identity, instrument model and serial number, acquisition date, the
//! originating file name, the announced scan count and the mass analyzer
//! used at each MS level.
//!
//! Values are frozen after the header has been read and live for as long as
//! the source handle that produced them.

mod instrument;
mod source;


pub use instrument::{MassAnalyzerType, VendorType};
pub use source::{SourceMetadata, UNKNOWN_SCAN_COUNT, UNKNOWN_VALUE};

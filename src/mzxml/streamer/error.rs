use crate::mzxml::PeakDecodeError;

/// Errors that can occur during mzXML parsing
#[derive(Debug, thiserror::Error)]
pub enum MzXmlError {
    /// Error parsing XML
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding a peak list
    #[error("Peak decode error: {0}")]
    PeakDecode(#[from] PeakDecodeError),

    /// Invalid mzXML document structure
    #[error("Invalid mzXML structure: {0}")]
    InvalidStructure(String),

    /// A numeric attribute or text node could not be parsed
    #[error("Invalid numeric value for {field}: {value:?}")]
    InvalidNumber {
        /// Attribute or element the value came from
        field: &'static str,
        /// The offending text
        value: String,
    },

    /// UTF-8 encoding error in text content
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

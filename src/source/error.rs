use crate::mzxml::MzXmlError;
#[cfg(feature = "thermo")]
use crate::thermo::ThermoError;

/// Errors raised while opening or reading a scan source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// mzXML decoding failed
    #[error(transparent)]
    MzXml(#[from] MzXmlError),

    /// Thermo RAW reading failed
    #[cfg(feature = "thermo")]
    #[error(transparent)]
    Thermo(#[from] ThermoError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

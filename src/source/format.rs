use std::fmt;
use std::path::Path;

/// Input format recognised from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// `.mzXML`
    MzXml,
    /// Thermo `.raw`
    ThermoRaw,
    /// No reader handles this file
    Unsupported,
}

impl SourceFormat {
    /// Classify a path by its extension, ignoring case
    pub fn detect(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("mzxml") => SourceFormat::MzXml,
            Some("raw") => SourceFormat::ThermoRaw,
            _ => SourceFormat::Unsupported,
        }
    }

    /// Whether this build can read the format
    pub fn is_supported(&self) -> bool {
        match self {
            SourceFormat::MzXml => true,
            SourceFormat::ThermoRaw => cfg!(feature = "thermo"),
            SourceFormat::Unsupported => false,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::MzXml => write!(f, "mzXML"),
            SourceFormat::ThermoRaw => write!(f, "Thermo RAW"),
            SourceFormat::Unsupported => write!(f, "unsupported"),
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Instrument vendor recognised from a free-text manufacturer name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VendorType {
    /// Thermo Fisher Scientific
    Thermo,
    /// AB Sciex / SCIEX
    Sciex,
    /// Bruker
    Bruker,
    /// Waters
    Waters,
    /// Agilent
    Agilent,
    /// Shimadzu
    Shimadzu,
    /// Anything not recognised
    #[default]
    Unknown,
}

impl VendorType {
    const KNOWN: [VendorType; 6] = [
        VendorType::Thermo,
        VendorType::Sciex,
        VendorType::Bruker,
        VendorType::Waters,
        VendorType::Agilent,
        VendorType::Shimadzu,
    ];

    /// Recognise a vendor by case-insensitive substring match
    ///
    /// `"Thermo Scientific"`, `"ThermoFinnigan"` and `"thermo"` all map to
    /// [`VendorType::Thermo`]; `"ABSciex"` maps to [`VendorType::Sciex`].
    pub fn from_manufacturer(name: &str) -> Self {
        let lower = name.to_lowercase();
        Self::KNOWN
            .into_iter()
            .find(|vendor| lower.contains(vendor.key()))
            .unwrap_or(VendorType::Unknown)
    }

    fn key(&self) -> &'static str {
        match self {
            VendorType::Thermo => "thermo",
            VendorType::Sciex => "sciex",
            VendorType::Bruker => "bruker",
            VendorType::Waters => "waters",
            VendorType::Agilent => "agilent",
            VendorType::Shimadzu => "shimadzu",
            VendorType::Unknown => "unknown",
        }
    }

    /// Display name handed to the destination writer
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorType::Thermo => "Thermo",
            VendorType::Sciex => "Sciex",
            VendorType::Bruker => "Bruker",
            VendorType::Waters => "Waters",
            VendorType::Agilent => "Agilent",
            VendorType::Shimadzu => "Shimadzu",
            VendorType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for VendorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mass analyzer family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MassAnalyzerType {
    /// Orbitrap
    Orbitrap,
    /// Fourier transform ion cyclotron resonance
    FtIcr,
    /// Linear or 3-D ion trap
    IonTrap,
    /// Time of flight
    Tof,
    /// Quadrupole
    Quadrupole,
    /// Not reported or not recognised
    #[default]
    Unknown,
}

impl MassAnalyzerType {
    /// Recognise an analyzer from an `msMassAnalyzer` value
    pub fn from_description(value: &str) -> Self {
        let lower = value.to_lowercase();
        if lower.contains("orbitrap") {
            MassAnalyzerType::Orbitrap
        } else if lower.contains("ftms")
            || lower.contains("ft-icr")
            || lower.contains("fticr")
            || lower.contains("cyclotron")
        {
            MassAnalyzerType::FtIcr
        } else if lower.contains("ion trap") || lower.contains("iontrap") || lower == "itms" {
            MassAnalyzerType::IonTrap
        } else if lower.contains("tof") || lower.contains("time-of-flight") {
            MassAnalyzerType::Tof
        } else if lower.contains("quadrupole") {
            MassAnalyzerType::Quadrupole
        } else {
            MassAnalyzerType::Unknown
        }
    }

    /// Display name handed to the destination writer
    pub fn as_str(&self) -> &'static str {
        match self {
            MassAnalyzerType::Orbitrap => "Orbitrap",
            MassAnalyzerType::FtIcr => "FTICR",
            MassAnalyzerType::IonTrap => "IonTrap",
            MassAnalyzerType::Tof => "TOF",
            MassAnalyzerType::Quadrupole => "Quadrupole",
            MassAnalyzerType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MassAnalyzerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

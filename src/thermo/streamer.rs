//! Scan-by-scan access to Thermo RAW files.

use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use thermorawfilereader::schema::SpectrumMode;
use thermorawfilereader::{RawFileReader, RawSpectrum};

use crate::metadata::{SourceMetadata, VendorType, UNKNOWN_VALUE};
use crate::mzxml::normalize_pairs;
use crate::scan::{MsLevel, PrecursorSelection, ScanRecord};
use crate::source::{ScanSource, SourceError, SourceFormat};

use super::ThermoError;

/// RawFileReader's .NET assemblies only load on x86/x86_64.
fn check_platform_support() -> Result<(), ThermoError> {
    // Thermo's RawFileReader .NET assemblies only support x86/x86_64 architectures
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        return Err(ThermoError::PlatformNotSupported(std::env::consts::ARCH));
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    Ok(())
}

/// Thermo RAW file opened as a [`ScanSource`]
///
/// Scans are read in scan number order. The MS order reported by the
/// instrument is used as the level tag without adjustment, and the
/// precursor isolation window bounds become the precursor selection.
pub struct ThermoScanSource {
    reader: RawFileReader,
    metadata: SourceMetadata,
    next_index: usize,
    total_spectra: usize,
}

impl ThermoScanSource {
    /// Open a RAW file.
    ///
    /// Fails with [`ThermoError::PlatformNotSupported`] on hosts other than
    /// x86/x86_64, before the path is looked at.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ThermoError> {
        check_platform_support()?;

        let path = path.as_ref();

        if !path.exists() {
            return Err(ThermoError::MissingFile(path.to_path_buf()));
        }
        if SourceFormat::detect(path) != SourceFormat::ThermoRaw {
            return Err(ThermoError::NotRawFile(path.to_path_buf()));
        }

        let mut reader = RawFileReader::open(path).map_err(|e| ThermoError::OpenError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        reader.set_signal_loading(true);

        let total_spectra = reader.len();
        let metadata = Self::read_metadata(&reader, path, total_spectra);
        debug!(
            "Opened {}: model={} serial={} spectra={}",
            path.display(),
            metadata.instrument_model,
            metadata.serial_number,
            total_spectra
        );

        Ok(Self {
            reader,
            metadata,
            next_index: 0,
            total_spectra,
        })
    }

    fn read_metadata(reader: &RawFileReader, path: &Path, total_spectra: usize) -> SourceMetadata {
        let model = reader.instrument_model();
        let description = reader.file_description();

        let acquisition_date = description
            .creation_date()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        SourceMetadata {
            vendor: VendorType::Thermo,
            vendor_name: Some("Thermo Scientific".to_string()),
            instrument_model: model.model().unwrap_or(UNKNOWN_VALUE).to_string(),
            serial_number: model.serial_number().unwrap_or(UNKNOWN_VALUE).to_string(),
            acquisition_date,
            original_file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
            total_scan_count: i64::try_from(total_spectra).unwrap_or(i64::MAX),
            ..SourceMetadata::default()
        }
    }

    /// Total number of spectra in the RAW file.
    pub fn len(&self) -> usize {
        self.total_spectra
    }

    /// Whether the RAW file is empty.
    pub fn is_empty(&self) -> bool {
        self.total_spectra == 0
    }

    fn convert(raw: &RawSpectrum) -> ScanRecord {
        let view = raw.view();

        let centroid = !matches!(view.mode(), SpectrumMode::Profile);
        let ms_level = MsLevel::from_code(i32::from(view.ms_level()));

        let precursors = view
            .precursor()
            .map(|precursor| {
                let window = precursor.isolation_window();
                vec![PrecursorSelection::new(window.lower(), window.upper())]
            })
            .unwrap_or_default();

        let peaks = match view.data() {
            Some(data) => match (data.mz(), data.intensity()) {
                (Some(mz), Some(intensity)) => normalize_pairs(
                    mz.iter()
                        .zip(intensity.iter())
                        .map(|(m, i)| (m, f64::from(i))),
                ),
                _ => Default::default(),
            },
            None => Default::default(),
        };

        ScanRecord::new(peaks, view.time(), ms_level, centroid, precursors)
    }
}

impl ScanSource for ThermoScanSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn next_scan(&mut self) -> Result<Option<ScanRecord>, SourceError> {
        while self.next_index < self.total_spectra {
            let idx = self.next_index;
            self.next_index += 1;
            match self.reader.get(idx) {
                Some(raw) => return Ok(Some(Self::convert(&raw))),
                None => warn!("Skipping spectrum {} (read returned None)", idx + 1),
            }
        }
        Ok(None)
    }

    fn close(self: Box<Self>) -> Result<(), SourceError> {
        Ok(())
    }
}

impl std::fmt::Debug for ThermoScanSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThermoScanSource")
            .field("total_spectra", &self.total_spectra)
            .field("next_index", &self.next_index)
            .finish()
    }
}

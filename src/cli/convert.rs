use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;

use super::config::Config;
use mzconvert::convert::{ConversionConfig, Converter};

/// Convert a file or every file of a folder
///
/// Failed files are reported on stdout and do not fail the command.
pub fn run(input: PathBuf, output: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let mut config = ConversionConfig::default();
    if let Some(path) = config_path {
        info!("Loading config from: {}", path.display());
        config = Config::from_file(&path)?.conversion.apply(config);
    }

    let converter = Converter::new(config);

    if input.is_dir() {
        let reports = converter.convert_folder(&input, output.as_deref())?;
        let converted = reports.iter().filter(|r| r.is_success()).count();
        info!(
            "{} of {} files converted from {}",
            converted,
            reports.len(),
            input.display()
        );
    } else {
        match converter.convert_file(&input, output.as_deref()) {
            Some(report) => {
                if let Some(stats) = &report.stats {
                    info!("{} -> {}: {}", input.display(), report.destination.display(), stats);
                }
            }
            None => warn!("{}: unsupported file type, nothing converted", input.display()),
        }
    }

    Ok(())
}

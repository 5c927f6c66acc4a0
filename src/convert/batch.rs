//! Folder conversion

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{default_destination, ConversionError, ConversionReport, Converter};

impl Converter {
    /// Convert every file directly inside `input_dir`
    ///
    /// Files are processed one after another in name order; subdirectories
    /// are not entered. Converted files are written to `output_dir`, or next
    /// to their source when it is `None`. Files without a reader are
    /// skipped. A file that cannot be opened is reported as failed and the
    /// batch moves on; only a failure to list `input_dir` or create
    /// `output_dir` is returned.
    pub fn convert_folder(
        &self,
        input_dir: &Path,
        output_dir: Option<&Path>,
    ) -> Result<Vec<ConversionReport>, ConversionError> {
        let mut files: Vec<PathBuf> = fs::read_dir(input_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        if let Some(dir) = output_dir {
            fs::create_dir_all(dir)?;
        }
        info!("Converting {} files from {}", files.len(), input_dir.display());

        let mut reports = Vec::new();
        for file in files {
            let destination = match output_dir {
                Some(dir) => {
                    let target = default_destination(&file, &self.config.target_extension);
                    match target.file_name() {
                        Some(name) => dir.join(name),
                        None => target,
                    }
                }
                None => default_destination(&file, &self.config.target_extension),
            };

            match self.convert_file(&file, Some(&destination)) {
                Some(report) => reports.push(report),
                None => debug!("Skipping {}", file.display()),
            }
        }

        Ok(reports)
    }
}

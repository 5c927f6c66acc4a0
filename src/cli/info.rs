use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

use mzconvert::writer::ScanFileReader;

/// Display information about a scan file
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let mut reader = ScanFileReader::open(&file).context("Failed to open scan file")?;
    let header = reader.header().clone();

    println!("Scan File Information");
    println!("=====================");
    println!("File: {}", file.display());
    println!("Format version: {}", header.version);
    println!();

    println!("Source:");
    println!("  Vendor: {}", header.vendor);
    println!("  Instrument model: {}", header.instrument_model);
    println!("  Serial number: {}", header.serial_number);
    println!("  Acquisition date: {}", header.acquisition_date);
    println!("  Original file: {}", header.original_file_name);
    println!("  MS1 analyzer: {}", header.ms1_analyzer);
    println!("  MS2 analyzer: {}", header.ms2_analyzer);
    println!("  Compressed scans: {}", header.compressed);
    println!();

    let mut levels: BTreeMap<i32, usize> = BTreeMap::new();
    let mut peaks = 0usize;
    let mut centroided = 0usize;
    let mut rt_range: Option<(f64, f64)> = None;

    while let Some(scan) = reader.next_scan().context("Failed to read scan")? {
        *levels.entry(scan.ms_level().code()).or_default() += 1;
        peaks += scan.peaks().len();
        if scan.is_centroid() {
            centroided += 1;
        }
        let rt = scan.retention_time();
        if rt.is_finite() {
            rt_range = Some(match rt_range {
                Some((lo, hi)) => (lo.min(rt), hi.max(rt)),
                None => (rt, rt),
            });
        }
    }

    println!("Scans:");
    println!("  Total: {}", reader.scans_read());
    println!("  Centroided: {}", centroided);
    println!("  Peaks: {}", peaks);
    for (code, count) in &levels {
        println!("  Level tag {}: {}", code, count);
    }
    if let Some((lo, hi)) = rt_range {
        println!("  Retention time: {:.3} - {:.3} min", lo, hi);
    }

    Ok(())
}

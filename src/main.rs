//! # mzconvert
//!
//! Command-line converter from mzXML (and, with the `thermo` feature,
//! Thermo RAW) to the compact scan file format.
//!
//! ## Usage
//!
//! ```bash
//! # Convert one file next to its source
//! mzconvert -in run01.mzXML
//!
//! # Convert every file of a folder into another folder
//! mzconvert -in raw_data/ -out converted/
//!
//! # Inspect a converted file
//! mzconvert info run01.mzsb
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse_from(cli::normalize_args(std::env::args_os()));
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}

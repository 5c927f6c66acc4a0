use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

mod config;
mod convert;
mod info;

/// mzconvert - streaming mzXML to scan file converter
#[derive(Parser)]
#[command(name = "mzconvert")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input file or folder (also accepted as -in)
    #[arg(long = "in", value_name = "PATH", required = true)]
    input: Option<PathBuf>,

    /// Output file or folder (also accepted as -out)
    #[arg(long = "out", value_name = "PATH")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the header and scan statistics of a converted scan file
    Info {
        /// Scan file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

/// Rewrite the single-dash `-in`/`-out` spellings to `--in`/`--out`
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-in" {
                OsString::from("--in")
            } else if arg == "-out" {
                OsString::from("--out")
            } else {
                arg
            }
        })
        .collect()
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Info { file }) => info::run(file),
        None => match cli.input {
            Some(input) => convert::run(input, cli.output, cli.config),
            None => anyhow::bail!("missing input: pass -in <path>"),
        },
    }
}

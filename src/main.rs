//! Sheetlink - header-addressed report over a single worksheet

mod config;
mod error;
mod report;

use anyhow::{Context, Result};
use error::CliError;
use sheetlink_core::{CsvGrid, Table};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

fn print_usage() {
    eprintln!("Usage: sheetlink [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                          Worksheet to read (.csv, row 1 holds headers)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>             Load report settings from a TOML file");
    eprintln!("  --set <HEADER> <INDEX> <VALUE>  Write VALUE at position INDEX of a column, then save");
    eprintln!("  -h, --help                      Print help");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=debug) to see log output on stderr.");
}

/// A single column write requested with `--set`.
#[derive(Debug)]
struct SetCell {
    header: String,
    index: usize,
    value: String,
}

#[derive(Debug, Default)]
struct Args {
    file: Option<PathBuf>,
    config: Option<PathBuf>,
    set: Option<SetCell>,
}

/// Parse command-line arguments. Returns None when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Args>, CliError> {
    let mut parsed = Args::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "-c" | "--config" => {
                i += 1;
                let path = args.get(i).ok_or(CliError::MissingValue {
                    option: "--config",
                    what: "a file path",
                })?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--set" => {
                let (Some(header), Some(index), Some(value)) =
                    (args.get(i + 1), args.get(i + 2), args.get(i + 3))
                else {
                    return Err(CliError::MissingValue {
                        option: "--set",
                        what: "<HEADER> <INDEX> <VALUE>",
                    });
                };
                let index = index
                    .parse::<usize>()
                    .map_err(|_| CliError::InvalidIndex(index.clone()))?;
                parsed.set = Some(SetCell {
                    header: header.clone(),
                    index,
                    value: value.clone(),
                });
                i += 3;
            }
            arg if arg.starts_with('-') => {
                return Err(CliError::UnknownOption(arg.to_string()));
            }
            _ => {
                if parsed.file.is_none() {
                    parsed.file = Some(PathBuf::from(&args[i]));
                } else {
                    return Err(CliError::UnexpectedArgument(args[i].clone()));
                }
            }
        }
        i += 1;
    }
    Ok(Some(parsed))
}

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let (config, warnings) = config::load_config(args.config.as_ref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let path = args
        .file
        .or_else(|| config.sheet.path.clone())
        .ok_or(CliError::NoSheet)?;
    let grid = CsvGrid::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let table = Table::new(Arc::new(grid))?;
    info!(path = %path.display(), headers = table.headers().len(), "opened worksheet");

    if let Some(set) = args.set {
        let mut column = table.column_by_header(&set.header)?;
        column.set(set.index, set.value)?;
    }

    print!("{}", report::render(&table, &config.report)?);
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let parsed = match parse_args(&args) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    init_logging();

    if let Err(e) = run(parsed) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

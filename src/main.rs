//! logtint - streaming keyword highlighter for terminal log output
//!
//! Reads lines from stdin or from files and writes them to stdout with
//! the configured keywords (error and warning markers by default)
//! painted in ANSI color.

mod app;
mod cell;
mod config;
mod error;
mod highlight;
mod render;

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use app::App;
use config::Config;
use error::{Result, TintError};
use highlight::LineScanner;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<PathBuf> = None;
    let mut files: Vec<PathBuf> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(PathBuf::from(path)),
                    None => {
                        return Err(TintError::Message(
                            "--config requires a file path".to_string(),
                        ))
                    }
                }
            }
            arg => files.push(PathBuf::from(arg)),
        }
        i += 1;
    }

    let config = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    let scanner = LineScanner::new(Arc::new(config.keywords));
    let mut tint = App::new(scanner);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if files.is_empty() {
        let stdin = io::stdin();
        tint.run(stdin.lock(), &mut out)?;
    } else {
        for path in &files {
            let file = File::open(path)?;
            tint.run(BufReader::new(file), &mut out)?;
        }
    }

    Ok(())
}

fn print_usage() {
    println!(
        "logtint {} - keyword highlighter for log output",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: logtint [OPTIONS] [FILE...]");
    println!();
    println!("Reads from stdin when no files are given.");
    println!();
    println!("Options:");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
    println!("  -c, --config PATH  Load the keyword table from PATH");
    println!();
    println!("Configuration:");
    println!("  ~/.logtint.toml, a [[keyword]] array with `pattern` and an");
    println!("  optional `color = [r, g, b]`. Without a file the built-in");
    println!("  error/warning table is used.");
}

fn print_version() {
    println!("logtint {}", env!("CARGO_PKG_VERSION"));
}

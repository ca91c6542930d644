//! Command-line text extraction from HTML files.
//!
//! Usage: `textlines <path> [<path> ...]`
//!
//! For each path, prints a `==== <path> ====` header followed by one line
//! per content-bearing tag. With no paths, prints nothing and exits 0.
//! Extracted text goes to stdout; diagnostics go to stderr. The first
//! unreadable or non-UTF-8 file aborts the run with a non-zero exit.

use std::env;
use std::process;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use textlines::{extract_file, Result};

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    for path in env::args().skip(1) {
        let lines = extract_file(&path)?;
        println!("==== {path} ====");
        for line in &lines {
            println!("{line}");
        }
    }
    Ok(())
}

/// Route log output to stderr at warn level, keeping stdout for the
/// extracted text.
fn init_logging() {
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

#![deny(clippy::all, clippy::pedantic)]
//! bin2hex — convert a binary file into multiline hex text.

use std::io::{self, Write};
use std::path::Path;

use clap::Parser;

use bintools::dump::{self, DumpError};

/// Convert a binary file into multiline hex text.
#[derive(Debug, Parser)]
#[command(
    name = "bin2hex",
    about = "Convert a binary file into multiline hex text",
    version
)]
struct Cli {
    /// How many bytes per line.
    #[arg(short, long, value_name = "N", default_value_t = 4)]
    width: usize,

    /// Input file.
    #[arg(short, long, value_name = "PATH")]
    input: String,
}

fn run(cli: &Cli) -> Result<(), DumpError> {
    let lines = dump::dump_file(Path::new(cli.input.trim()), cli.width)?;

    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}").map_err(|source| DumpError::Write { source })?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("bin2hex: {err}");
        std::process::exit(err.exit_code());
    }
}

#![deny(clippy::all, clippy::pedantic)]
//! cfmt — forward a format request to clang-format.

use clap::{ArgGroup, Parser};

use bintools::forward::{ForwardError, Invocation, DEFAULT_FORMATTER};

/// Forward a format request to clang-format.
#[derive(Debug, Parser)]
#[command(
    name = "cfmt",
    about = "Forward a format request to clang-format",
    version,
    group(ArgGroup::new("target").required(true).args(["file", "input"]))
)]
struct Cli {
    /// Path to the clang-format executable.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_FORMATTER)]
    parser: String,

    /// File to format in place.
    #[arg(short, long, value_name = "PATH")]
    file: Option<String>,

    /// File to format in place (alias of --file).
    #[arg(short, long, value_name = "PATH")]
    input: Option<String>,
}

fn run(cli: &Cli) -> Result<(), ForwardError> {
    // The arg group guarantees exactly one of --file/--input is present.
    let target = match (&cli.file, &cli.input) {
        (Some(path), _) | (_, Some(path)) => path.as_str(),
        (None, None) => "",
    };

    Invocation::clang_format(&cli.parser, target).launch()
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("cfmt: {err}");
        std::process::exit(err.exit_code());
    }
}

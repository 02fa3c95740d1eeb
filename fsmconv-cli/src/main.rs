//! fsmconv CLI entry point
//!
//! Flag parsing, input/output plumbing and exit-code mapping. All
//! conversion logic lives in fsmconv-core.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use fsmconv_core::{
    determinize, eliminate_epsilons, parse_automaton, serialize_automaton, ConvertError,
};

mod logging;

#[derive(Parser)]
#[command(
    name = "fsmconv",
    about = "Finite automaton conversion: epsilon elimination and determinization",
    version = "0.1.0"
)]
struct Cli {
    /// Input file (default: standard input)
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (default: standard output)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Remove epsilon rules only
    #[arg(short = 'e', long = "no-epsilon-rules")]
    no_epsilon_rules: bool,

    /// Determinize the automaton (removes epsilon rules first)
    #[arg(short = 'd', long)]
    determinization: bool,

    /// Lowercase the input before parsing
    #[arg(short = 'i', long)]
    case_insensitive: bool,

    /// Log level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Exit 1 per the flag contract; clap's own conflict handling exits 2.
    if cli.no_epsilon_rules && cli.determinization {
        eprintln!("Error: the flags -e and -d cannot be combined");
        process::exit(1);
    }

    let source = match read_input(cli.input.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: cannot read input: {}", e);
            process::exit(1);
        }
    };

    let text = match convert(&source, &cli) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = write_output(cli.output.as_deref(), &text) {
        eprintln!("Error: cannot write output: {}", e);
        process::exit(1);
    }
}

/// Parse, transform per the flags, and serialize.
///
/// Without `-e` or `-d` the automaton passes through the model unchanged,
/// so the output is the normalized, sorted form of the input.
fn convert(source: &str, cli: &Cli) -> Result<String, ConvertError> {
    let mut automaton = parse_automaton(source, cli.case_insensitive)?;
    if cli.no_epsilon_rules || cli.determinization {
        eliminate_epsilons(&mut automaton);
    }
    if cli.determinization {
        automaton = determinize(&automaton)?;
    }
    Ok(serialize_automaton(&automaton))
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> std::io::Result<()> {
    match path {
        Some(path) => std::fs::write(path, text),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()
        }
    }
}

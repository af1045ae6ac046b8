//! `txon` CLI — translate TXON to and from JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Extract TXON from a text file and print it as JSON (stdin → stdout)
//! echo 'notes... name:`Ada` langs:`:`en` :`fr``' | txon to-json
//!
//! # Translate from file to file, single-line output
//! txon to-json -i notes.txt -o notes.json --layout linear
//!
//! # JSON back to TXON
//! txon to-txon -i data.json
//!
//! # Normalize a TXON document (sorted keys, indented layout)
//! txon fmt -i notes.txt
//!
//! # Debug logging on stderr (or set RUST_LOG)
//! txon -v to-json -i notes.txt
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use txon_core::Layout;

#[derive(Parser)]
#[command(name = "txon", version, about = "TXON <-> JSON translator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate TXON embedded in text into JSON
    ToJson(IoArgs),
    /// Translate JSON into TXON
    ToTxon(IoArgs),
    /// Re-serialize TXON with sorted keys and the chosen layout
    Fmt(IoArgs),
}

#[derive(Args)]
struct IoArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Output layout
    #[arg(long, value_enum, env = "TXON_LAYOUT", default_value_t = LayoutArg::Auto)]
    layout: LayoutArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    /// Same as indented
    Auto,
    /// Single line, terms separated by spaces
    Linear,
    /// One term per line, two-space indent per level
    Indented,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Auto => Layout::Auto,
            LayoutArg::Linear => Layout::Linear,
            LayoutArg::Indented => Layout::Indented,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::ToJson(io) => {
            let bytes = read_input(io.input.as_deref())?;
            let tree = txon_core::read_bytes(&bytes);
            debug!(bytes = bytes.len(), "parsed TXON input");
            let json = txon_core::to_json(&tree, io.layout.into());
            write_output(io.output.as_deref(), &json)?;
        }
        Commands::ToTxon(io) => {
            let bytes = read_input(io.input.as_deref())?;
            let json = String::from_utf8(bytes).context("JSON input is not valid UTF-8")?;
            let txon = txon_core::json_to_txon(&json, io.layout.into())
                .context("Failed to decode JSON")?;
            write_output(io.output.as_deref(), &txon)?;
        }
        Commands::Fmt(io) => {
            let bytes = read_input(io.input.as_deref())?;
            let tree = txon_core::read_bytes(&bytes);
            debug!(bytes = bytes.len(), "parsed TXON input");
            let txon = txon_core::write(&tree, io.layout.into());
            write_output(io.output.as_deref(), &txon)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            debug!(path, "reading input file");
            std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            debug!(path, bytes = content.len(), "writing output file");
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

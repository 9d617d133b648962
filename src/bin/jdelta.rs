//! jdelta command-line host.
//!
//! Thin shell over the library: reads the two documents, runs the pipeline,
//! prints the rendered diff (or the parse failure) and exits non-zero when
//! the inputs differ structurally or fail to parse.

use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jdelta::NormalizeConfig;

#[derive(Parser)]
#[command(
    name = "jdelta",
    version,
    about = "Line-level structural diff between two JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Diff two documents after canonicalization.
    Diff {
        /// Path to the "before" document, or `-` for stdin.
        before: PathBuf,
        /// Path to the "after" document, or `-` for stdin.
        after: PathBuf,
        /// Treat objects with the same entries in different key order as equal.
        #[arg(long)]
        sort_keys: bool,
        /// Treat arrays with the same elements in different order as equal.
        #[arg(long)]
        ignore_array_order: bool,
        /// Exchange the two inputs before diffing.
        #[arg(long)]
        swap: bool,
        /// Emit the rendered lines as JSON instead of prefixed text.
        #[arg(long)]
        json: bool,
    },
    /// Reparse one document and pretty-print it canonically, order untouched.
    Fmt {
        /// Path to the document, or `-` for stdin.
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    match cli.command {
        Command::Diff {
            before,
            after,
            sort_keys,
            ignore_array_order,
            swap,
            json,
        } => {
            let mut before_text = read_input(&before)?;
            let mut after_text = read_input(&after)?;
            if swap {
                std::mem::swap(&mut before_text, &mut after_text);
            }
            let cfg = NormalizeConfig {
                sort_keys,
                ignore_array_order,
            };
            let script = jdelta::compare(&before_text, &after_text, &cfg)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&script.to_lines())?);
            } else {
                let text = script.to_text();
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            if script.has_changes() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Command::Fmt { input } => {
            let text = read_input(&input)?;
            println!("{}", jdelta::reformat(&text)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_input(path: &PathBuf) -> Result<String, Box<dyn Error>> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

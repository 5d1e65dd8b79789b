//! Fluent Extension Generator
//!
//! Regenerates `GeneratedExtensions.cs` from the built-in method tables.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use fluent_define::Catalog;
use fluent_gen::errors::GeneratorError;
use fluent_gen::output::{DEFAULT_DESTINATION, generate, render_to_string};
use tracing::{Level, info};

/// Exit code for every generation failure.
const FAILURE_EXIT_CODE: u8 = 2;

/// Fluent extension generator - writes the Flurl.Http GeneratedExtensions file
#[derive(Parser, Debug)]
#[command(name = "fluent-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the generated C# file (its directory must already exist)
    #[arg(default_value = DEFAULT_DESTINATION)]
    destination: PathBuf,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Print the request method descriptors as JSON and exit
    #[arg(long, conflicts_with = "dry_run")]
    list: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(&error);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

fn run(cli: &Cli) -> Result<(), GeneratorError> {
    let catalog = Catalog::standard();
    info!(
        "Enumerated {} request and {} fluent methods",
        catalog.request_methods.len(),
        catalog.fluent_methods.len()
    );

    if cli.list {
        println!("{}", serde_json::to_string_pretty(&catalog.request_methods)?);
        return Ok(());
    }

    if cli.dry_run {
        print!("{}", render_to_string(&catalog)?);
        return Ok(());
    }

    generate(&cli.destination, &catalog)?;
    println!("File writing succeeded.");
    Ok(())
}

/// Prints the error and its full cause chain to stderr.
fn report_error(error: &GeneratorError) {
    eprintln!("{}", error.to_string().red().bold());
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  {} {}", "caused by:".red(), cause);
        source = cause.source();
    }
}

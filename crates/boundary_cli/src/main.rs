//! Boundary CLI
//!
//! Reference host for the boundary C ABI. Does what `demos/c/main.c` does,
//! from Rust: fills a buffer, fills a record, classifies an enum value, then
//! allocates and releases a library-owned record, printing each result.

mod config;
mod report;

use clap::Parser;
use config::{parse_discriminant, HostConfig, OutputFormat};
use tracing_subscriber::EnvFilter;

/// Exercise the boundary C ABI and print what comes back.
#[derive(Parser)]
#[command(name = "boundary")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Capacity of the caller-owned buffer in bytes
    #[arg(short, long, default_value_t = 32)]
    capacity: usize,

    /// Enum value to classify (one, two, three, or raw:<u32>)
    #[arg(short = 'e', long, default_value = "two")]
    variant: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = HostConfig::new()
        .capacity(cli.capacity)
        .discriminant(parse_discriminant(&cli.variant)?)
        .format(OutputFormat::from_name(&cli.format));
    config.validate()?;

    let report = report::run(&config);

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print!("{}", report::render_text(&report));
        }
    }

    Ok(())
}

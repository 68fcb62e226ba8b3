//! Simple-Timeline: command-line entry point

use clap::Parser;
use simple_timeline::cli::{execute, Cli};
use simple_timeline::error::Result;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = execute(&cli)?;
    println!("{}", output);
    Ok(())
}

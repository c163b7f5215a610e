//! mtsfix CLI - command-line front end for the archive converter

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mtsfix")]
#[command(about = "Icon fixer for MTS content packs (1.16.5 -> 1.20.1)", long_about = None)]
struct Cli {
    /// Content-pack jar (or zip) to convert
    input: PathBuf,

    /// Also strip letters from version strings in META-INF/mods.toml
    #[arg(long)]
    fix_metadata: bool,
}

/// Run the mtsfix CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let output = crate::converter::convert_archive(&cli.input, cli.fix_metadata)?;
    println!("File successfully processed: {}", output.display());

    Ok(())
}

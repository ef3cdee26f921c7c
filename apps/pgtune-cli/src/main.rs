//! Command-line front end for the PostgreSQL settings generator.
//!
//! Reads server facts from flags (or a JSON request file), generates the
//! recommended settings and prints them as postgresql.conf lines or JSON.

mod cli;
mod render;

use clap::Parser;
use tracing::Level;

use cli::{Cli, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays a clean config file.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let request = cli.to_request()?;
    let params = pgtune_core::generate(&request);
    let kernel = cli
        .kernel
        .then(|| pgtune_core::kernel_settings(&request));

    let output = match cli.format {
        OutputFormat::Conf => render::render_conf(&request, &params, kernel),
        OutputFormat::Json => render::render_json(&params, kernel)?,
    };
    print!("{}", output);
    if cli.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

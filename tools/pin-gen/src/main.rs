use anyhow::{Context, Result};
use clap::Parser;
use renderer::{render_to_file, RenderConfig};

mod logging;

/// Draws the map-pin marker icon and writes it as a PNG.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    logging::init_logging();

    let config = RenderConfig::default();
    log::debug!("{config:?}");
    render_to_file(&config)
        .with_context(|| format!("failed to write pin to {}", config.output.display()))?;
    println!("Pin created successfully!");
    Ok(())
}

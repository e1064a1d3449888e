use std::path::PathBuf;

use clap::Parser;
use rs_truco::DEFAULT_INPUT_PATH;
use rs_truco::core::Deck;
use rs_truco::truco::{generate_hand_stats, write_hand_stats};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "truco-strength")]
#[command(about = "Score every three card truco hand and write the table")]
struct Cli {
    /// Where to write the table
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let stats = generate_hand_stats(&Deck::default())?;
    write_hand_stats(&cli.output, &stats)?;
    info!(hands = stats.len(), output = %cli.output.display(), "wrote hand table");
    Ok(())
}

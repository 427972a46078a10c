//! Board Proof Driver
//!
//! Loads a player board, prints its root commitment and, when a cell is
//! configured, the JSON proof for that cell.

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use board_proof::{Generator, PlayerBoardFile, ProverConfig, VERSION};

fn main() -> Result<()> {
    let config = ProverConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    info!("Board Proof v{}", VERSION);

    let text = std::fs::read_to_string(&config.board_file)
        .with_context(|| format!("failed to read board file {}", config.board_file.display()))?;
    let player = PlayerBoardFile::from_json(&text)
        .with_context(|| format!("invalid player file {}", config.board_file.display()))?;

    if let Some(address) = &player.address {
        info!("Player: {}", address);
    }
    info!(
        "Board: {}x{} ({} occupied)",
        player.board.rows(),
        player.board.columns(),
        player.board.occupied_count()
    );

    let generator = Generator::new(player.board);

    let Some(root) = generator.root_hex() else {
        warn!("Board is empty, nothing to commit");
        return Ok(());
    };
    info!("Root commitment: {}", root);

    let Some(field) = config.field else {
        println!("{}", root);
        return Ok(());
    };

    let export = generator.export_proof(field)?;
    if !export.verify() {
        bail!("proof for {} failed self-verification", field);
    }
    info!("Proof for {}: {} steps", field, export.proof.len());

    println!("{}", export.to_json()?);
    Ok(())
}

//! Terminal host for the tile coordinate overlay.
//!
//! Simulates a small tile world (title screen, player, cursor, a few
//! locations) and drives the overlay through the same event bus a real game
//! integration would use.
//!
//! ```bash
//! COORDS_MOD_DIR=./mods/PlayerCoordinates cargo run -p coords-client
//! ```
mod app;
mod config;
mod host;
mod input;
mod logging;
mod settings;
mod terminal;
mod ui;
mod world;

use anyhow::Result;

use crate::app::App;
use crate::config::ClientConfig;
use crate::terminal::TerminalSession;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging()?;

    std::fs::create_dir_all(&config.mod_dir)?;
    tracing::info!("Starting client");
    tracing::info!("Mod directory: {}", config.mod_dir.display());
    tracing::info!("Platform: {}", config.platform);

    let mut session = TerminalSession::open()?;
    let result = App::new(&config).run(session.tui()).await;
    session.close()?;
    result
}

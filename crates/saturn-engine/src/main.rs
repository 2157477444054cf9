//! Headless game binary for the Saturn colony simulation.
//!
//! Wires the session, the tick loop, and the save slot together and runs
//! until Ctrl-C. The in-game journal is mirrored to the diagnostic log.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `saturn-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Create the game clock and random source
//! 4. Restore the saved colony, or start a new one
//! 5. Run the game loop with autosave until Ctrl-C
//! 6. Write a final save
//!
//! Passing `--reset` discards the saved colony and starts over. A save
//! that cannot be read is moved to `<save>.corrupt` and a new colony
//! starts in its place.

mod autosave;
mod error;

use std::path::Path;

use anyhow::Context;
use saturn_core::config::{LogFormat, LoggingConfig};
use saturn_core::{GameClock, Session, SimulationConfig, run_game, simulation_rng};
use saturn_persist::SaveStore;
use saturn_types::{GameState, now_millis};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::autosave::AutosaveCallback;
use crate::error::EngineError;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "saturn-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if startup fails or the final save cannot be
/// written.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let reset = std::env::args().skip(1).any(|arg| arg == "--reset");
    run(reset).await.context("saturn-engine failed")
}

async fn run(reset: bool) -> Result<(), EngineError> {
    // 1. Load configuration.
    let (config, config_found) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!("saturn-engine starting");
    if !config_found {
        info!("Config file not found, using defaults");
    }
    info!(
        seed = config.world.seed,
        tick_interval_ms = config.time.tick_interval_ms,
        day_length_ms = config.time.day_length_ms,
        autosave_interval_secs = config.time.autosave_interval_secs,
        save_path = %config.persistence.save_path.display(),
        "Configuration loaded"
    );

    // 3. Clock and random source.
    let clock = GameClock::from_config(&config.time)?;
    let rng = simulation_rng(config.world.seed);

    // 4. Restore or start.
    let store = SaveStore::new(&config.persistence.save_path);
    let capacity = config.logging.journal_capacity;
    let now = now_millis();
    let restored = if reset {
        store.clear()?;
        info!("Saved colony discarded");
        None
    } else {
        restore(&store)
    };
    let mut session = match restored {
        Some(state) => Session::resume(state, clock, rng, capacity, now),
        None => Session::new(clock, rng, capacity, now),
    };

    // 5. Run until Ctrl-C.
    let mut callback = AutosaveCallback::new(store);
    let summary = run_game(&mut session, &config, &mut callback, shutdown_signal()).await;

    // 6. Final save.
    callback.store().save(session.state())?;
    info!(
        ticks = summary.ticks,
        autosaves = summary.autosaves,
        autosave_failures = callback.failures(),
        final_day = summary.final_day,
        metal = session.state().metal,
        "saturn-engine shutdown complete"
    );

    Ok(())
}

/// Load the saved colony. An unreadable save is set aside and `None`
/// returned so the caller starts a new game.
fn restore(store: &SaveStore) -> Option<GameState> {
    match store.load() {
        Ok(state) => state,
        Err(e) => {
            warn!(
                error = %e,
                path = %store.path().display(),
                "Saved colony could not be read, starting a new one"
            );
            if let Err(e) = store.set_aside() {
                warn!(error = %e, "Failed to set the unreadable save aside");
            }
            None
        }
    }
}

/// Load configuration from [`CONFIG_PATH`]. Returns whether the file was
/// found.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((SimulationConfig::from_file(config_path)?, true))
    } else {
        let mut config = SimulationConfig::default();
        config.persistence.apply_env_overrides();
        Ok((config, false))
    }
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence
/// over the configured level.
fn init_logging(config: &LoggingConfig) -> Result<(), EngineError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| EngineError::Logging {
        message: e.to_string(),
    })
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, shutting down");
    }
}

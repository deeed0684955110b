//! Process shell: launch options, terminal setup and the scene loop.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use space_garbage_core::{Config, SceneAssets};
use space_garbage_engine::Game;
use space_garbage_input::KeyboardInput;
use space_garbage_term::{self as term, TerminalCanvas};

use crate::{assets, logging};

const DEFAULT_ASSETS_DIR: &str = "frames";

/// Options read from the environment at startup.
///
/// | Variable | Meaning |
/// |----------|---------|
/// | `SPACE_GARBAGE_CONFIG` | JSON file overriding [`Config`] defaults |
/// | `SPACE_GARBAGE_ASSETS` | frame directory (default `frames`) |
/// | `SPACE_GARBAGE_SEED` | RNG seed, overrides the config file |
/// | `SPACE_GARBAGE_LOG` | log file; no logging when unset |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub config_path: Option<PathBuf>,
    pub assets_dir: PathBuf,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

impl LaunchOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let config_path = non_empty(lookup("SPACE_GARBAGE_CONFIG")).map(PathBuf::from);
        let assets_dir = non_empty(lookup("SPACE_GARBAGE_ASSETS"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));
        let seed = non_empty(lookup("SPACE_GARBAGE_SEED")).and_then(|s| s.parse().ok());
        let log_path = non_empty(lookup("SPACE_GARBAGE_LOG")).map(PathBuf::from);

        Self {
            config_path,
            assets_dir,
            seed,
            log_path,
        }
    }

    /// Defaults, then the config file, then the seed override.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config_path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                Config::from_json_str(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => Config::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// Run the scene on the current terminal until the player quits.
pub fn run() -> Result<()> {
    let options = LaunchOptions::from_env();
    logging::init(options.log_path.as_deref())?;
    info!(?options, "starting");

    let config = options.load_config()?;
    let table = assets::load_dir(&options.assets_dir)?;
    let assets = SceneAssets::from_table(&table)
        .with_context(|| format!("incomplete frames in {}", options.assets_dir.display()))?;
    let canvas = TerminalCanvas::fullscreen()?;

    in_terminal(term::enter, term::leave, || play(config, assets, canvas))
}

/// Run `body` between `enter` and `leave`. `leave` runs even when `enter`
/// fails partway, and its own error is dropped in favour of the body's.
fn in_terminal<T>(
    enter: impl FnOnce() -> Result<()>,
    leave: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let result = enter().and_then(|()| body());
    let _ = leave();
    result
}

fn play(config: Config, assets: SceneAssets, canvas: TerminalCanvas) -> Result<()> {
    let mut game = Game::new(config, assets, Box::new(canvas), Box::new(KeyboardInput::new()))?;
    game.populate();
    game.run()?;

    let stats = game.stats();
    info!(
        year = game.year(),
        game_over = game.is_game_over(),
        spawned = stats.debris_spawned,
        rejected = stats.spawn_rejected,
        destroyed = stats.debris_destroyed,
        shots = stats.shots_fired,
        "session finished"
    );
    Ok(())
}

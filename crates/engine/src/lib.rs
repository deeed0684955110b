//! Scene engine - cooperative tasks over a shared world
//!
//! This crate turns the pure model in `space_garbage_core` into a running
//! scene. Every moving thing (the ship, each star, each piece of debris, each
//! projectile, an explosion, the year clock) is an `async fn` task. A
//! single-threaded [`Scheduler`] resumes each live task once per pass, and
//! tasks meet only through the shared [`World`].
//!
//! # Module Structure
//!
//! - [`scheduler`]: live task set, spawn queue, pass loop and tick futures
//! - [`scene`]: entity registry with owner leases
//! - [`world`]: scene + render surface + input + rng + year
//! - [`director`]: the handle tasks use to reach the world and spawn tasks
//! - [`canvas`]: render surface trait and clipped drawing helpers
//! - [`input`]: non-blocking control source trait
//! - [`game`]: configuration, seeding and the top-level loop
//!
//! # Example
//!
//! ```
//! use space_garbage_core::{AssetTable, Config, SceneAssets};
//! use space_garbage_engine::{Game, GlyphGrid, ScriptedInput};
//!
//! let mut table = AssetTable::new();
//! table.insert("ship", "rocket_frame_1", " A \n/#\\");
//! table.insert("ship", "rocket_frame_2", " A \n\\#/");
//! table.insert("debris", "rock", "@@");
//! table.insert("explosion", "1", "*");
//! let assets = SceneAssets::from_table(&table).unwrap();
//!
//! let config = Config { seed: Some(1), ..Config::default() };
//! let mut game = Game::new(
//!     config,
//!     assets,
//!     Box::new(GlyphGrid::new(24, 80)),
//!     Box::new(ScriptedInput::new()),
//! )
//! .unwrap();
//! game.populate();
//! for _ in 0..30 {
//!     game.step().unwrap();
//! }
//! assert_eq!(game.year(), 1958);
//! ```

pub mod canvas;
pub mod director;
pub mod game;
pub mod input;
pub mod scene;
pub mod scheduler;
pub mod world;

mod tasks;

#[cfg(test)]
mod testing;

pub use canvas::{draw_frame, draw_text, put_glyph, Canvas, GlyphGrid, Ink};
pub use director::Director;
pub use game::Game;
pub use input::{InputSource, ScriptedInput};
pub use scene::{EntityId, EntityKind, Lease, Scene, SceneError};
pub use scheduler::{next_tick, sleep, PassReport, Scheduler, Sleep, Spawner, TaskId};
pub use world::{Stats, World};

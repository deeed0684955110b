//! Core model module - pure, deterministic, and testable
//!
//! This crate holds the parts of the scene that involve no scheduling and no
//! I/O: glyph frames, positioned entities and their collision test, the speed
//! model, the year tables and configuration. It has **no dependency** on the
//! terminal, the keyboard, or the task scheduler, which makes it:
//!
//! - **Deterministic**: randomness only comes from a seeded [`GameRng`]
//! - **Testable**: every rule is a plain function or value type
//! - **Portable**: usable by any front end (terminal, headless tests, benches)
//!
//! # Module Structure
//!
//! - [`frame`]: immutable named glyph blocks with derived size
//! - [`assets`]: category/name asset table and the validated [`SceneAssets`]
//! - [`entity`]: positioned frames and corner-in-box intersection
//! - [`physics`]: speed smoothing for the ship
//! - [`epoch`]: debris spawn cadence and milestones by year
//! - [`rng`]: seeded randomness
//! - [`config`]: tuning knobs, defaults and validation
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use space_garbage_core::{update_speed, Entity, Frame, SpeedLimits, Velocity};
//!
//! let ship = Entity::new(Rc::new(Frame::new("ship", " ^\n/_\\")), 10.0, 10.0);
//! let rock = Entity::new(Rc::new(Frame::glyph('o')), 12.0, 11.0);
//! assert!(ship.intersects(&rock));
//!
//! let v = update_speed(Velocity::ZERO, 1, 0, SpeedLimits::new(2.0, 2.0), 0.8).unwrap();
//! assert_eq!(v.x, 0.75);
//! ```

pub mod assets;
pub mod config;
pub mod entity;
pub mod epoch;
pub mod error;
pub mod frame;
pub mod physics;
pub mod rng;

pub use space_garbage_types as types;

// Re-export commonly used types for convenience
pub use assets::{AssetTable, SceneAssets, ShipFrame, ShipFrames};
pub use config::{Config, ShipConfig};
pub use entity::{BoundingBox, Entity};
pub use epoch::{latest_milestone, milestone, status_line, CadenceStep, SpawnCadence};
pub use error::CoreError;
pub use frame::{frame_size, Frame};
pub use physics::{update_speed, SpeedLimits, Velocity};
pub use rng::GameRng;

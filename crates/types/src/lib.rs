//! Core types module - shared data structures and tuning defaults
//!
//! This crate defines the small value types passed between the scene tasks, the
//! input layer and the terminal surface. Everything here is plain data with no
//! external dependencies, so any crate in the workspace can use it.
//!
//! # Timing
//!
//! The scene advances in fixed ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Scheduler pass interval |
//! | `TICKS_PER_YEAR` | 15 | Ticks between two increments of the year counter |
//! | `START_YEAR` | 1957 | Year shown when the scene starts |
//! | `GUN_UNLOCK_YEAR` | 2020 | First year the ship may fire |
//!
//! # Motion
//!
//! Speeds are expressed in cells per tick:
//!
//! - `SHIP_SPEED_LIMIT`: 2.0 on both axes
//! - `SHIP_FADING`: 0.8, the passive deceleration factor applied every tick
//! - `DEBRIS_SPEED`: 0.5 rows per tick, downwards
//! - `PROJECTILE_SPEED`: -0.3 rows per tick, upwards
//!
//! # Examples
//!
//! ```
//! use space_garbage_types::{Controls, GlyphStyle};
//!
//! let mut controls = Controls::default();
//! assert!(controls.is_idle());
//!
//! controls.x_direction = -1;
//! controls.fire = true;
//! assert!(!controls.is_idle());
//!
//! assert_eq!(GlyphStyle::from_str("bold"), Some(GlyphStyle::Bold));
//! ```

/// Scheduler pass interval in milliseconds.
pub const TICK_MS: u64 = 100;

/// Ticks between two increments of the year counter (1.5 seconds at 100ms ticks).
pub const TICKS_PER_YEAR: u32 = 15;

/// Year the scene starts in.
pub const START_YEAR: i32 = 1957;

/// First year the ship's gun is available.
pub const GUN_UNLOCK_YEAR: i32 = 2020;

/// Stars per interior cell. Must be greater than zero.
pub const STAR_DENSITY: f64 = 0.02;

/// Symbols a star is drawn with.
pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];

/// Shortest and longest time a star holds one brightness phase, in ticks.
pub const STAR_PHASE_MIN_TICKS: u32 = 1;
pub const STAR_PHASE_MAX_TICKS: u32 = 10;

/// Ship speed limit on each axis, in cells per tick.
pub const SHIP_SPEED_LIMIT: f64 = 2.0;

/// Ship speed multiplier applied every control read.
pub const SHIP_FADING: f64 = 0.8;

/// Control reads (and ticks) per ship animation frame.
pub const SHIP_CONTROLS_PER_FRAME: u32 = 2;

/// Acceleration impulse scale used by the speed model.
pub const ACCELERATION: f64 = 0.75;

/// Speeds with a smaller magnitude are snapped to zero.
pub const SPEED_SNAP: f64 = 0.1;

/// Debris fall speed in rows per tick.
pub const DEBRIS_SPEED: f64 = 0.5;

/// Projectile speed in rows per tick (negative is upwards).
pub const PROJECTILE_SPEED: f64 = -0.3;

/// Maximum keyboard events consumed per input poll.
pub const MAX_KEYS_PER_POLL: usize = 32;

/// Debris spawn cadence: `(first year, ticks between spawn attempts)`.
///
/// Years before the first entry spawn nothing.
pub const SPAWN_CADENCE: [(i32, u32); 6] = [
    (1961, 20),
    (1969, 14),
    (1981, 10),
    (1995, 8),
    (2010, 6),
    (2020, 2),
];

/// Milestones shown on the status line, by year.
pub const MILESTONES: [(i32, &str); 8] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

/// Banner displayed once the ship has been hit.
pub const GAME_OVER_BANNER: &str = r"
   _____                         ____
  / ____|                       / __ \
 | |  __  __ _ _ __ ___   ___  | |  | |_   _____ _ __
 | | |_ |/ _` | '_ ` _ \ / _ \ | |  | \ \ / / _ \ '__|
 | |__| | (_| | | | | | |  __/ | |__| |\ V /  __/ |
  \_____|\__,_|_| |_| |_|\___|  \____/  \_/ \___|_|
";

/// Brightness a glyph is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GlyphStyle {
    #[default]
    Normal,
    Dim,
    Bold,
}

impl GlyphStyle {
    /// Parse a style name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(GlyphStyle::Normal),
            "dim" => Some(GlyphStyle::Dim),
            "bold" => Some(GlyphStyle::Bold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GlyphStyle::Normal => "normal",
            GlyphStyle::Dim => "dim",
            GlyphStyle::Bold => "bold",
        }
    }
}

/// Player intent accumulated since the previous input poll.
///
/// Directions are `-1`, `0` or `1`: `x_direction = -1` pulls left,
/// `y_direction = -1` pulls up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub x_direction: i8,
    pub y_direction: i8,
    pub fire: bool,
}

impl Controls {
    pub const fn new(x_direction: i8, y_direction: i8, fire: bool) -> Self {
        Self {
            x_direction,
            y_direction,
            fire,
        }
    }

    /// True when nothing was pressed.
    pub fn is_idle(&self) -> bool {
        self.x_direction == 0 && self.y_direction == 0 && !self.fire
    }
}

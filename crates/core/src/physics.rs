//! Speed smoothing for player-controlled motion.
//!
//! Every call fades the current speed, then nudges each axis toward the input
//! direction with a cosine-shaped impulse: large near standstill, tiny near
//! the limit. The result is clamped to the limit and snapped to zero when it
//! gets small, so a released ship always comes to a full stop.

use space_garbage_types::{ACCELERATION, SPEED_SNAP};

use crate::error::CoreError;

/// Speed on both axes, in cells per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-axis speed limits. Only the magnitude is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLimits {
    pub x: f64,
    pub y: f64,
}

impl SpeedLimits {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Compute the next velocity from the current one and the input directions.
///
/// Directions must be `-1`, `0` or `1`, `fading` must be within `[0, 1]` and
/// limits must be finite and non-zero; anything else is
/// [`CoreError::InvalidArgument`]. The function is pure.
pub fn update_speed(
    velocity: Velocity,
    x_direction: i8,
    y_direction: i8,
    limits: SpeedLimits,
    fading: f64,
) -> Result<Velocity, CoreError> {
    check_direction("x_direction", x_direction)?;
    check_direction("y_direction", y_direction)?;
    if !(0.0..=1.0).contains(&fading) {
        return Err(CoreError::invalid_argument(format!(
            "fading must be between 0 and 1, got {fading}"
        )));
    }
    let x_limit = check_limit("x limit", limits.x)?;
    let y_limit = check_limit("y limit", limits.y)?;

    Ok(Velocity {
        x: update_axis(velocity.x * fading, x_direction, x_limit),
        y: update_axis(velocity.y * fading, y_direction, y_limit),
    })
}

fn check_direction(label: &str, direction: i8) -> Result<(), CoreError> {
    if (-1..=1).contains(&direction) {
        Ok(())
    } else {
        Err(CoreError::invalid_argument(format!(
            "{label} must be -1, 0 or 1, got {direction}"
        )))
    }
}

fn check_limit(label: &str, limit: f64) -> Result<f64, CoreError> {
    let limit = limit.abs();
    if limit.is_finite() && limit > 0.0 {
        Ok(limit)
    } else {
        Err(CoreError::invalid_argument(format!(
            "{label} must be finite and non-zero, got {limit}"
        )))
    }
}

fn update_axis(speed: f64, direction: i8, limit: f64) -> f64 {
    let mut speed = speed;
    if direction != 0 {
        let delta = (speed / limit).cos() * ACCELERATION;
        if direction > 0 {
            speed += delta;
        } else {
            speed -= delta;
        }
    }

    let speed = speed.clamp(-limit, limit);
    if speed.abs() < SPEED_SNAP {
        0.0
    } else {
        speed
    }
}

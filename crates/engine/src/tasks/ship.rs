use std::rc::Rc;

use anyhow::Result;
use space_garbage_core::{update_speed, Entity, Frame, ShipFrame, Velocity};
use space_garbage_types::GlyphStyle;
use tracing::{debug, info};

use crate::canvas::{draw_frame, Ink};
use crate::director::Director;
use crate::scene::EntityKind;
use crate::scheduler::next_tick;

/// Clamp one axis so a block of `size` cells starting at `next` stays inside
/// the border. `inclusive_edge` picks whether touching the far edge already
/// counts as out.
fn clamp_axis(next: f64, size: f64, max: f64, inclusive_edge: bool) -> f64 {
    let past_edge = if inclusive_edge {
        next + size >= max
    } else {
        next + size > max
    };
    if next <= 1.0 {
        1.0
    } else if past_edge {
        max - size
    } else {
        next
    }
}

/// Drive the player ship until it is hit.
///
/// Per animation frame: draw, then poll input `controls_per_frame` times (one
/// tick each), erase, move, maybe fire, and check for a collision.
pub(crate) async fn animate_ship(director: Director) -> Result<()> {
    let config = director.config().clone();
    let limits = config.ship.limits();
    let frames = director.assets().ship.clone();

    let (lease, mut x, mut y) = director.with_world(|world| {
        let (rows, cols) = world.bounds();
        let frame = Rc::clone(frames.get(ShipFrame::Idle));
        let x = ((f64::from(cols) - frame.width() as f64) / 2.0).round();
        let y = ((f64::from(rows) - frame.height() as f64) / 2.0).round();
        let lease = world
            .scene
            .register(EntityKind::Ship, Entity::new(frame, x, y));
        (lease, x, y)
    });
    debug!(x, y, "ship launched");

    let mut velocity = Velocity::ZERO;
    let mut phase = ShipFrame::Idle;

    loop {
        let frame: Rc<Frame> = Rc::clone(frames.get(phase));
        director.with_world(|world| {
            if let Some(ship) = world.scene.entity_mut(&lease) {
                ship.set_frame(Rc::clone(&frame));
            }
            draw_frame(world.canvas.as_mut(), x, y, &frame, Ink::Draw(GlyphStyle::Normal));
        });

        let mut fire = false;
        for _ in 0..config.ship.controls_per_frame {
            let controls = director.with_world(|world| world.input.read_controls());
            velocity = update_speed(
                velocity,
                controls.x_direction,
                controls.y_direction,
                limits,
                config.ship.fading,
            )?;
            fire |= controls.fire;
            next_tick().await;
        }

        let (hit, gun_ready) = director.with_world(|world| {
            draw_frame(world.canvas.as_mut(), x, y, &frame, Ink::Erase);

            let (rows, cols) = world.bounds();
            let (max_y, max_x) = (f64::from(rows) - 1.0, f64::from(cols) - 1.0);
            y = clamp_axis(y + velocity.y, frame.height() as f64, max_y, false);
            x = clamp_axis(x + velocity.x, frame.width() as f64, max_x, true);
            if let Some(ship) = world.scene.entity_mut(&lease) {
                ship.move_to(x, y);
            }

            let gun_ready = fire && world.year >= config.gun_unlock_year;
            if gun_ready {
                world.stats.shots_fired += 1;
            }
            (world.check_game_over(&lease), gun_ready)
        });

        if gun_ready {
            let muzzle_x = (x + (frame.width() / 2) as f64).round();
            director.spawn_projectile(muzzle_x, y, Velocity::new(0.0, config.projectile_speed));
        }

        if hit {
            let year = director.with_world(|world| {
                let _ = world.scene.release(lease);
                world.year
            });
            info!(year, "game over");
            director.spawn_game_over();
            return Ok(());
        }

        phase = phase.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use space_garbage_types::Controls;

    #[test]
    fn clamp_keeps_block_inside_border() {
        // 20 rows: interior rows are 1..=18, max index 19.
        assert_eq!(clamp_axis(-3.0, 2.0, 19.0, false), 1.0);
        assert_eq!(clamp_axis(17.0, 2.0, 19.0, false), 17.0);
        assert_eq!(clamp_axis(17.5, 2.0, 19.0, false), 17.0);
        assert_eq!(clamp_axis(17.0, 2.0, 19.0, true), 17.0);
        assert_eq!(clamp_axis(16.9, 2.0, 19.0, true), 16.9);
    }

    #[test]
    fn ship_starts_centred_and_moves_with_input() {
        let mut harness = Harness::new(21, 41);
        harness.input.borrow_mut().push(Controls::new(1, 0, false));
        harness.director.spawn_ship();

        harness.steps(1);
        let start = harness.ship_position().unwrap();
        assert_eq!(start, (19.0, 9.0));

        // One full frame: two control polls, then the move.
        harness.steps(2);
        let moved = harness.ship_position().unwrap();
        assert!(moved.0 > start.0);
        assert_eq!(moved.1, start.1);
    }

    #[test]
    fn ship_never_leaves_the_interior() {
        let mut harness = Harness::new(12, 20);
        for _ in 0..200 {
            harness.input.borrow_mut().push(Controls::new(-1, -1, false));
        }
        harness.director.spawn_ship();
        harness.steps(120);
        let (x, y) = harness.ship_position().unwrap();
        assert_eq!((x, y), (1.0, 1.0));
    }

    #[test]
    fn gun_stays_locked_before_unlock_year() {
        let mut harness = Harness::new(21, 41);
        for _ in 0..10 {
            harness.input.borrow_mut().push(Controls::new(0, 0, true));
        }
        harness.director.spawn_ship();
        harness.steps(10);
        assert_eq!(harness.stats().shots_fired, 0);
        assert!(!harness.task_names().contains(&"projectile"));
    }

    #[test]
    fn fires_once_unlocked() {
        let mut harness = Harness::new(21, 41);
        harness.director.with_world(|world| world.year = 2020);
        harness.input.borrow_mut().push(Controls::new(0, 0, true));
        harness.director.spawn_ship();
        harness.steps(3);
        assert_eq!(harness.stats().shots_fired, 1);
        assert!(harness.task_names().contains(&"projectile"));
    }

    #[test]
    fn muzzle_flash_sits_on_the_nose() {
        let mut harness = Harness::new(21, 41);
        harness.director.with_world(|world| world.year = 2020);
        harness.input.borrow_mut().push(Controls::new(0, 0, true));
        harness.director.spawn_ship();

        harness.steps(1);
        assert_eq!(harness.ship_position(), Some((19.0, 9.0)));
        assert_eq!(harness.grid.borrow().get(9, 20), Some('A'));
        harness.steps(2);
        assert_eq!(harness.stats().shots_fired, 1);

        // The ship redraws first, then the flash lands on its nose.
        harness.steps(1);
        assert_eq!(harness.grid.borrow().get(9, 20), Some('*'));
        assert_eq!(harness.grid.borrow().get(9, 21), Some(' '));
    }
}

use std::rc::Rc;

use anyhow::Result;
use space_garbage_core::{Entity, Frame, Velocity};
use space_garbage_types::GlyphStyle;
use tracing::debug;

use crate::canvas::{draw_frame, put_glyph, Ink};
use crate::director::Director;
use crate::scene::EntityKind;
use crate::scheduler::next_tick;

fn cell(v: f64) -> i64 {
    v.round() as i64
}

/// Muzzle flash, then constant-velocity flight until the shot leaves the
/// playfield or hits debris.
///
/// A hit destroys the debris (erasing it), and schedules an explosion centred
/// on it.
pub(crate) async fn fly_projectile(director: Director, x: f64, y: f64, velocity: Velocity) -> Result<()> {
    for flash in ['*', 'O'] {
        director.with_world(|world| {
            put_glyph(world.canvas.as_mut(), cell(y), cell(x), flash, GlyphStyle::Bold)
        });
        next_tick().await;
    }
    director.with_world(|world| put_glyph(world.canvas.as_mut(), cell(y), cell(x), ' ', GlyphStyle::Normal));

    let symbol = if velocity.x != 0.0 { '-' } else { '|' };
    let (mut x, mut y) = (x + velocity.x, y + velocity.y);
    let lease = director.with_world(|world| {
        world
            .scene
            .register(EntityKind::Projectile, Entity::new(Rc::new(Frame::glyph(symbol)), x, y))
    });

    loop {
        let (inside, hit) = director.with_world(|world| {
            let (rows, cols) = world.bounds();
            let inside = 1.0 < y && y < f64::from(rows) - 1.0 && 1.0 < x && x < f64::from(cols) - 1.0;
            let hit = world
                .scene
                .entity(&lease)
                .and_then(|shot| world.scene.first_hit(shot, EntityKind::Debris));
            (inside, hit)
        });

        if let Some(debris_id) = hit {
            let center = director.with_world(|world| -> Result<(f64, f64)> {
                let debris = world.scene.destroy(debris_id)?;
                let frame = Rc::clone(debris.frame());
                let (dx, dy) = debris.position();
                draw_frame(world.canvas.as_mut(), dx, dy, &frame, Ink::Erase);
                world.stats.debris_destroyed += 1;
                let _ = world.scene.release(lease);
                Ok((dx + frame.width() as f64 / 2.0, dy + frame.height() as f64 / 2.0))
            })?;
            debug!(debris = %debris_id, "debris shot down");
            director.spawn_explosion(center.0, center.1);
            return Ok(());
        }

        if !inside {
            break;
        }

        director.with_world(|world| {
            put_glyph(world.canvas.as_mut(), cell(y), cell(x), symbol, GlyphStyle::Normal)
        });
        next_tick().await;
        director.with_world(|world| {
            put_glyph(world.canvas.as_mut(), cell(y), cell(x), ' ', GlyphStyle::Normal);
            x += velocity.x;
            y += velocity.y;
            if let Some(shot) = world.scene.entity_mut(&lease) {
                shot.move_to(x, y);
            }
        });
    }

    director.with_world(|world| {
        let _ = world.scene.release(lease);
    });
    Ok(())
}

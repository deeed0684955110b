use std::rc::Rc;

use anyhow::Result;
use space_garbage_types::GlyphStyle;
use tracing::debug;

use crate::canvas::{draw_frame, Ink};
use crate::director::Director;
use crate::scene::Lease;
use crate::scheduler::{next_tick, sleep};

/// Spawn debris forever at the cadence the current year allows.
pub(crate) async fn fill_orbit_with_garbage(director: Director) -> Result<()> {
    loop {
        let year = director.with_world(|world| world.year);
        match director.config().cadence.delay_for(year) {
            None => next_tick().await,
            Some(delay) => {
                director.try_spawn_debris();
                sleep(delay).await;
            }
        }
    }
}

/// Move one piece of debris down until it falls out of the bottom or is
/// destroyed by a projectile.
///
/// A destroyed piece has already been erased by whoever destroyed it, so the
/// task just stops.
pub(crate) async fn fly_debris(director: Director, lease: Lease) -> Result<()> {
    let speed = director.config().debris_speed;
    loop {
        let drawn = director.with_world(|world| {
            let entity = world.scene.entity(&lease)?;
            let (x, y) = entity.position();
            let frame = Rc::clone(entity.frame());
            draw_frame(world.canvas.as_mut(), x, y, &frame, Ink::Draw(GlyphStyle::Normal));
            Some(())
        });
        if drawn.is_none() {
            debug!(debris = %lease.id(), "debris gone before draw");
            return Ok(());
        }

        next_tick().await;

        let landed = director.with_world(|world| {
            let (rows, _) = world.bounds();
            let entity = world.scene.entity_mut(&lease)?;
            let (x, y) = entity.position();
            let frame = Rc::clone(entity.frame());
            entity.move_to(x, y + speed);
            draw_frame(world.canvas.as_mut(), x, y, &frame, Ink::Erase);
            Some(y + speed >= f64::from(rows))
        });

        match landed {
            None => {
                debug!(debris = %lease.id(), "debris destroyed in flight");
                return Ok(());
            }
            Some(true) => break,
            Some(false) => {}
        }
    }

    director.with_world(|world| {
        let _ = world.scene.release(lease);
    });
    Ok(())
}

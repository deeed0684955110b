//! Shared state every task reads and writes between suspend points.

use space_garbage_core::GameRng;
use tracing::info;

use crate::canvas::Canvas;
use crate::input::InputSource;
use crate::scene::{EntityKind, Lease, Scene};

/// Counters kept for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub spawn_attempts: u64,
    pub debris_spawned: u64,
    /// Attempts skipped because the new piece would overlap something.
    pub spawn_rejected: u64,
    pub debris_destroyed: u64,
    pub shots_fired: u64,
}

pub struct World {
    pub scene: Scene,
    pub canvas: Box<dyn Canvas>,
    pub input: Box<dyn InputSource>,
    pub rng: GameRng,
    /// Epoch counter, only ever incremented.
    pub year: i32,
    pub game_over: bool,
    pub stats: Stats,
}

impl World {
    pub fn new(
        canvas: Box<dyn Canvas>,
        input: Box<dyn InputSource>,
        rng: GameRng,
        year: i32,
    ) -> Self {
        Self {
            scene: Scene::new(),
            canvas,
            input,
            rng,
            year,
            game_over: false,
            stats: Stats::default(),
        }
    }

    /// `(height, width)` of the surface, border included.
    pub fn bounds(&self) -> (u16, u16) {
        self.canvas.bounds()
    }

    /// Latch game over if any debris touches the ship. Returns the latched state.
    pub fn check_game_over(&mut self, ship: &Lease) -> bool {
        if self.game_over {
            return true;
        }
        let Some(ship) = self.scene.entity(ship) else {
            return false;
        };
        if let Some(id) = self.scene.first_hit(ship, EntityKind::Debris) {
            info!(debris = %id, year = self.year, "ship hit");
            self.game_over = true;
        }
        self.game_over
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("scene", &self.scene)
            .field("bounds", &self.bounds())
            .field("year", &self.year)
            .field("game_over", &self.game_over)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::GlyphGrid;
    use crate::input::ScriptedInput;
    use space_garbage_core::{Entity, Frame};
    use std::rc::Rc;

    fn world() -> World {
        World::new(
            Box::new(GlyphGrid::new(20, 40)),
            Box::new(ScriptedInput::new()),
            GameRng::new(1),
            1957,
        )
    }

    #[test]
    fn debris_on_ship_latches_game_over() {
        let mut world = world();
        let hull = Rc::new(Frame::new("ship", "/\\\n||"));
        let ship = world.scene.register(EntityKind::Ship, Entity::new(hull, 19.0, 9.0));
        assert!(!world.check_game_over(&ship));

        let debris = world
            .scene
            .register(EntityKind::Debris, Entity::new(Rc::new(Frame::glyph('o')), 20.0, 10.0));
        assert!(world.check_game_over(&ship));

        // Stays over even once the debris is gone.
        let _ = world.scene.release(debris);
        assert!(world.check_game_over(&ship));
        let _ = world.scene.release(ship);
    }

    #[test]
    fn projectiles_do_not_end_the_game() {
        let mut world = world();
        let frame = Rc::new(Frame::glyph('A'));
        let ship = world.scene.register(EntityKind::Ship, Entity::new(Rc::clone(&frame), 5.0, 5.0));
        let shot = world.scene.register(EntityKind::Projectile, Entity::new(frame, 5.0, 5.0));
        assert!(!world.check_game_over(&ship));
        let _ = world.scene.release(shot);
        let _ = world.scene.release(ship);
    }
}

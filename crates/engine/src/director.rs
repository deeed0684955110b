//! Scene director: the handle tasks use to reach the world and schedule more
//! tasks.
//!
//! Every task owns a clone. Access to the [`World`] goes through
//! [`Director::with_world`], which scopes the borrow to a closure so no task
//! can hold it across a suspend point.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use space_garbage_core::{Config, Entity, SceneAssets, Velocity};
use tracing::{debug, info};

use crate::scene::{EntityId, EntityKind};
use crate::scheduler::{Spawner, TaskId};
use crate::tasks;
use crate::world::World;

#[derive(Clone)]
pub struct Director {
    world: Rc<RefCell<World>>,
    spawner: Spawner,
    assets: Rc<SceneAssets>,
    config: Rc<Config>,
}

impl Director {
    pub fn new(world: World, spawner: Spawner, assets: SceneAssets, config: Config) -> Self {
        Self {
            world: Rc::new(RefCell::new(world)),
            spawner,
            assets: Rc::new(assets),
            config: Rc::new(config),
        }
    }

    pub fn with_world<R>(&self, f: impl FnOnce(&mut World) -> R) -> R {
        f(&mut self.world.borrow_mut())
    }

    pub fn assets(&self) -> &SceneAssets {
        &self.assets
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Initial population: stars, the ship, the debris spawner and the year clock.
    pub fn populate(&self) {
        let stars = self.spawn_stars();
        self.spawn_ship();
        self.spawn_garbage_spawner();
        self.spawn_year_clock();
        info!(stars, "scene populated");
    }

    /// Scatter stars over the interior. Returns how many were placed.
    pub fn spawn_stars(&self) -> usize {
        let config = &self.config;
        let stars: Vec<(i64, i64, char)> = self.with_world(|world| {
            let (rows, cols) = world.bounds();
            if rows < 3 || cols < 3 {
                return Vec::new();
            }
            let (inner_rows, inner_cols) = (i32::from(rows) - 2, i32::from(cols) - 2);
            let wanted = ((f64::from(inner_rows * inner_cols)) * config.star_density).round() as usize;

            // Duplicate positions collapse; BTreeSet keeps spawn order stable per seed.
            let mut positions = BTreeSet::new();
            for _ in 0..wanted.max(1) {
                let row = world.rng.range(1..=inner_rows);
                let col = world.rng.range(1..=inner_cols);
                positions.insert((i64::from(row), i64::from(col)));
            }
            positions
                .into_iter()
                .filter_map(|(row, col)| {
                    world
                        .rng
                        .pick(&config.star_symbols)
                        .map(|&symbol| (row, col, symbol))
                })
                .collect()
        });

        for &(row, col, symbol) in &stars {
            self.spawner
                .spawn("star", tasks::blink(self.clone(), row, col, symbol));
        }
        stars.len()
    }

    pub fn spawn_ship(&self) -> TaskId {
        self.spawner.spawn("ship", tasks::animate_ship(self.clone()))
    }

    pub fn spawn_garbage_spawner(&self) -> TaskId {
        self.spawner
            .spawn("garbage", tasks::fill_orbit_with_garbage(self.clone()))
    }

    pub fn spawn_year_clock(&self) -> TaskId {
        self.spawner.spawn("years", tasks::advance_years(self.clone()))
    }

    /// Launch a projectile from `(x, y)`.
    pub fn spawn_projectile(&self, x: f64, y: f64, velocity: Velocity) -> TaskId {
        self.spawner
            .spawn("projectile", tasks::fly_projectile(self.clone(), x, y, velocity))
    }

    /// Play the explosion animation centred on `(x, y)`.
    pub fn spawn_explosion(&self, center_x: f64, center_y: f64) -> TaskId {
        self.spawner
            .spawn("explosion", tasks::explode(self.clone(), center_x, center_y))
    }

    pub fn spawn_game_over(&self) -> TaskId {
        self.spawner.spawn("game_over", tasks::show_game_over(self.clone()))
    }

    /// Register `entity` as debris and start its fall.
    pub fn spawn_debris(&self, entity: Entity) -> EntityId {
        let lease = self.with_world(|world| world.scene.register(EntityKind::Debris, entity));
        let id = lease.id();
        self.spawner
            .spawn("debris", tasks::fly_debris(self.clone(), lease));
        id
    }

    /// One spawn attempt: a random debris frame just above the top edge.
    ///
    /// Returns `None` when the new piece would overlap a live entity; the
    /// attempt is simply skipped.
    pub fn try_spawn_debris(&self) -> Option<EntityId> {
        let assets = &self.assets;
        let probe = self.with_world(|world| {
            world.stats.spawn_attempts += 1;
            let frame = Rc::clone(world.rng.pick(&assets.debris)?);
            let (_, cols) = world.bounds();
            let x = world.rng.range(2 - frame.width() as i32..=i32::from(cols) - 2);
            let y = -(frame.height() as f64);
            let probe = Entity::new(frame, f64::from(x), y);
            if world.scene.overlaps_any(&probe) {
                world.stats.spawn_rejected += 1;
                debug!(x, frame = probe.frame().name(), "debris spawn rejected");
                return None;
            }
            world.stats.debris_spawned += 1;
            Some(probe)
        })?;
        Some(self.spawn_debris(probe))
    }
}

impl std::fmt::Debug for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Director")
            .field("world", &self.world)
            .field("spawner", &self.spawner)
            .finish_non_exhaustive()
    }
}

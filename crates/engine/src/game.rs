//! Top-level scene: validates configuration, seeds the world and drives the
//! scheduler loop.

use std::ops::ControlFlow;

use anyhow::Result;
use space_garbage_core::{Config, CoreError, GameRng, SceneAssets};
use tracing::info;

use crate::canvas::Canvas;
use crate::director::Director;
use crate::input::InputSource;
use crate::scheduler::{PassReport, Scheduler};
use crate::world::{Stats, World};

pub struct Game {
    scheduler: Scheduler,
    director: Director,
}

impl Game {
    pub fn new(
        config: Config,
        assets: SceneAssets,
        canvas: Box<dyn Canvas>,
        input: Box<dyn InputSource>,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let (rows, cols) = canvas.bounds();
        info!(seed = rng.seed(), rows, cols, "scene seeded");

        let world = World::new(canvas, input, rng, config.start_year);
        let scheduler = Scheduler::new();
        let director = Director::new(world, scheduler.spawner(), assets, config);
        Ok(Self {
            scheduler,
            director,
        })
    }

    /// Queue the initial tasks. They start on the next pass.
    pub fn populate(&mut self) {
        self.director.populate();
    }

    /// One pass followed by a redraw.
    pub fn step(&mut self) -> Result<PassReport> {
        let report = self.scheduler.step()?;
        self.director.with_world(|world| world.canvas.present())?;
        Ok(report)
    }

    /// Run until every task has finished or the player quits. Returns the
    /// number of passes run.
    pub fn run(&mut self) -> Result<u64> {
        let interval = self.director.config().tick_interval();
        let director = self.director.clone();
        let passes = self.scheduler.run(interval, || {
            director.with_world(|world| -> Result<ControlFlow<()>> {
                world.canvas.present()?;
                if world.input.quit_requested() {
                    info!(year = world.year, "quit requested");
                    return Ok(ControlFlow::Break(()));
                }
                Ok(ControlFlow::Continue(()))
            })
        })?;
        info!(passes, "scene stopped");
        Ok(passes)
    }

    pub fn director(&self) -> &Director {
        &self.director
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn stats(&self) -> Stats {
        self.director.with_world(|world| world.stats)
    }

    pub fn year(&self) -> i32 {
        self.director.with_world(|world| world.year)
    }

    pub fn is_game_over(&self) -> bool {
        self.director.with_world(|world| world.game_over)
    }

    pub fn seed(&self) -> u64 {
        self.director.with_world(|world| world.rng.seed())
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("scheduler", &self.scheduler)
            .field("director", &self.director)
            .finish()
    }
}

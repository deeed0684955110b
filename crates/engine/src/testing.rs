//! Headless fixture shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use space_garbage_core::{AssetTable, Config, GameRng, SceneAssets};

use crate::canvas::GlyphGrid;
use crate::director::Director;
use crate::input::ScriptedInput;
use crate::scene::EntityKind;
use crate::scheduler::Scheduler;
use crate::world::{Stats, World};

pub(crate) fn scene_assets() -> SceneAssets {
    let mut table = AssetTable::new();
    table.insert("ship", "rocket_frame_1", " A \n|#|\n/ \\");
    table.insert("ship", "rocket_frame_2", " A \n|#|\n\\ /");
    table.insert("debris", "pebble", "@");
    table.insert("explosion", "1", "(*)");
    table.insert("explosion", "2", "( * )\n(   )");
    SceneAssets::from_table(&table).expect("fixture assets are complete")
}

pub(crate) struct Harness {
    pub scheduler: Scheduler,
    pub director: Director,
    pub grid: Rc<RefCell<GlyphGrid>>,
    pub input: Rc<RefCell<ScriptedInput>>,
}

impl Harness {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self::with_config(rows, cols, Config::default())
    }

    pub fn with_config(rows: u16, cols: u16, config: Config) -> Self {
        let grid = Rc::new(RefCell::new(GlyphGrid::new(rows, cols)));
        let input = Rc::new(RefCell::new(ScriptedInput::new()));
        let world = World::new(
            Box::new(Rc::clone(&grid)),
            Box::new(Rc::clone(&input)),
            GameRng::new(config.seed.unwrap_or(7)),
            config.start_year,
        );
        let scheduler = Scheduler::new();
        let director = Director::new(world, scheduler.spawner(), scene_assets(), config);
        Self {
            scheduler,
            director,
            grid,
            input,
        }
    }

    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.scheduler.step().expect("pass failed");
        }
    }

    pub fn ship_position(&self) -> Option<(f64, f64)> {
        self.director.with_world(|world| {
            world
                .scene
                .iter()
                .find(|&(_, kind, _)| kind == EntityKind::Ship)
                .map(|(_, _, ship)| ship.position())
        })
    }

    pub fn stats(&self) -> Stats {
        self.director.with_world(|world| world.stats)
    }

    pub fn year(&self) -> i32 {
        self.director.with_world(|world| world.year)
    }

    pub fn task_names(&self) -> Vec<&'static str> {
        self.scheduler.task_names()
    }
}

//! End-to-end scene scenarios on a headless glyph grid.

use std::cell::RefCell;
use std::rc::Rc;

use space_garbage::core::{AssetTable, Config, Entity, Frame, GameRng, SceneAssets};
use space_garbage::engine::{Director, EntityKind, GlyphGrid, Scheduler, ScriptedInput, World};
use space_garbage::types::SPAWN_CADENCE;

struct Scene {
    scheduler: Scheduler,
    director: Director,
    grid: Rc<RefCell<GlyphGrid>>,
}

impl Scene {
    fn new(rows: u16, cols: u16, config: Config) -> Self {
        let mut table = AssetTable::new();
        table.insert("ship", "rocket_frame_1", " ^ \n|o|\n/ \\");
        table.insert("ship", "rocket_frame_2", " ^ \n|o|\n/*\\");
        table.insert("debris", "dot", ".");
        table.insert("explosion", "1", "(*)");
        table.insert("explosion", "2", "(   )");
        let assets = SceneAssets::from_table(&table).unwrap();

        let grid = Rc::new(RefCell::new(GlyphGrid::new(rows, cols)));
        let world = World::new(
            Box::new(Rc::clone(&grid)),
            Box::new(ScriptedInput::new()),
            GameRng::new(config.seed.unwrap_or(11)),
            config.start_year,
        );
        let scheduler = Scheduler::new();
        let director = Director::new(world, scheduler.spawner(), assets, config);
        Self {
            scheduler,
            director,
            grid,
        }
    }

    fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.scheduler.step().unwrap();
        }
    }
}

#[test]
fn debris_on_the_ship_ends_the_game() {
    let mut scene = Scene::new(21, 41, Config::default());
    scene.director.spawn_ship();
    scene.steps(1);

    scene
        .director
        .spawn_debris(Entity::new(Rc::new(Frame::glyph('#')), 20.0, 10.0));
    scene.steps(4);

    let (game_over, ships) = scene
        .director
        .with_world(|world| (world.game_over, world.scene.count(EntityKind::Ship)));
    assert!(game_over);
    assert_eq!(ships, 0);
    let names = scene.scheduler.task_names();
    assert!(names.contains(&"game_over"));
    assert!(!names.contains(&"ship"));
}

#[test]
fn projectile_shoots_down_debris() {
    let mut scene = Scene::new(30, 40, Config::default());
    let target = scene.director.with_world(|world| {
        world
            .scene
            .register(EntityKind::Debris, Entity::new(Rc::new(Frame::new("wall", "###")), 9.0, 5.0))
    });
    scene
        .director
        .spawn_projectile(10.0, 20.0, space_garbage::core::Velocity::new(0.0, -1.0));

    let mut passes = 0;
    while scene.director.with_world(|world| world.stats.debris_destroyed) == 0 {
        scene.steps(1);
        passes += 1;
        assert!(passes < 40, "projectile never hit");
    }

    scene.steps(1);
    assert!(scene.scheduler.task_names().contains(&"explosion"));
    scene.director.with_world(|world| {
        assert!(world.scene.entity(&target).is_none());
        assert_eq!(world.scene.count(EntityKind::Projectile), 0);
        assert!(world.scene.release(target).is_none());
    });
    assert_eq!(scene.grid.borrow().count('#'), 0);
}

#[test]
fn cadence_in_1970_tries_every_fourteen_ticks() {
    let config = Config {
        start_year: 1970,
        seed: Some(5),
        ..Config::default()
    };
    let mut scene = Scene::new(20, 200, config);
    scene.director.spawn_garbage_spawner();
    scene.steps(1400);

    let stats = scene.director.with_world(|world| world.stats);
    assert_eq!(stats.spawn_attempts, 100);
    assert_eq!(stats.debris_spawned + stats.spawn_rejected, 100);
    assert!(stats.debris_spawned > 0);
}

#[test]
fn every_cadence_bracket_sets_the_attempt_rate() {
    for (year, delay) in SPAWN_CADENCE {
        let config = Config {
            start_year: year,
            seed: Some(9),
            ..Config::default()
        };
        let mut scene = Scene::new(20, 200, config);
        scene.director.spawn_garbage_spawner();
        scene.steps(delay as usize * 10);

        let attempts = scene.director.with_world(|world| world.stats.spawn_attempts);
        assert_eq!(attempts, 10, "year {year}, delay {delay}");
    }
}

#[test]
fn spawning_starts_with_the_first_cadence_year() {
    let config = Config {
        start_year: 1960,
        ..Config::default()
    };
    let mut scene = Scene::new(20, 60, config);
    scene.director.spawn_garbage_spawner();
    scene.steps(100);
    assert_eq!(scene.director.with_world(|world| world.stats.spawn_attempts), 0);

    scene.director.with_world(|world| world.year = 1961);
    scene.steps(1);
    assert_eq!(scene.director.with_world(|world| world.stats.spawn_attempts), 1);
}

#[test]
fn year_clock_writes_the_status_line() {
    let config = Config {
        ticks_per_year: 3,
        ..Config::default()
    };
    let mut scene = Scene::new(12, 60, config);
    scene.director.spawn_year_clock();
    scene.steps(1);
    assert!(scene.grid.borrow().row_text(10).contains("Year 1957: First Sputnik"));

    scene.steps(12);
    assert_eq!(scene.director.with_world(|world| world.year), 1961);
    assert!(scene.grid.borrow().row_text(10).contains("Year 1961: Gagarin flew!"));
}

#[test]
fn populated_scene_runs_without_a_player() {
    let config = Config {
        seed: Some(2024),
        start_year: 2000,
        ..Config::default()
    };
    let mut scene = Scene::new(24, 80, config);
    scene.director.populate();
    scene.steps(600);

    let stats = scene.director.with_world(|world| world.stats);
    assert!(stats.spawn_attempts > 0);
    assert_eq!(stats.shots_fired, 0);
    assert!(scene.scheduler.task_names().contains(&"years"));
}

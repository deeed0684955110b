//! Launch options and config files as the binary loads them.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde_json::json;
use space_garbage::core::Config;
use space_garbage::LaunchOptions;

fn write_config(test: &str, value: serde_json::Value) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "space-garbage-{}-{test}.json",
        std::process::id()
    ));
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}

fn options(vars: HashMap<&'static str, String>) -> LaunchOptions {
    LaunchOptions::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn config_file_overrides_defaults() {
    let path = write_config(
        "override",
        json!({
            "tick_ms": 50,
            "start_year": 1990,
            "ship": { "controls_per_frame": 3 },
            "cadence": [
                { "from_year": 1960, "delay_ticks": 12 },
                { "from_year": 2000, "delay_ticks": 4 }
            ]
        }),
    );
    let options = options(HashMap::from([(
        "SPACE_GARBAGE_CONFIG",
        path.display().to_string(),
    )]));

    let config = options.load_config().unwrap();
    assert_eq!(config.tick_ms, 50);
    assert_eq!(config.start_year, 1990);
    assert_eq!(config.ship.controls_per_frame, 3);
    assert_eq!(config.ship.fading, Config::default().ship.fading);
    assert_eq!(config.cadence.delay_for(1995), Some(12));
    assert_eq!(config.cadence.delay_for(2001), Some(4));

    fs::remove_file(path).unwrap();
}

#[test]
fn seed_variable_beats_the_file() {
    let path = write_config("seed", json!({ "seed": 1 }));
    let options = options(HashMap::from([
        ("SPACE_GARBAGE_CONFIG", path.display().to_string()),
        ("SPACE_GARBAGE_SEED", "77".to_string()),
    ]));
    assert_eq!(options.load_config().unwrap().seed, Some(77));
    fs::remove_file(path).unwrap();
}

#[test]
fn invalid_file_reports_its_path() {
    let path = write_config("invalid", json!({ "star_density": -1.0 }));
    let options = options(HashMap::from([(
        "SPACE_GARBAGE_CONFIG",
        path.display().to_string(),
    )]));
    let err = options.load_config().unwrap_err();
    assert!(format!("{err:#}").contains("invalid config"));
    fs::remove_file(path).unwrap();
}

#[test]
fn unknown_keys_are_rejected() {
    let path = write_config("unknown", json!({ "gravity": 9.8 }));
    let options = options(HashMap::from([(
        "SPACE_GARBAGE_CONFIG",
        path.display().to_string(),
    )]));
    assert!(options.load_config().is_err());
    fs::remove_file(path).unwrap();
}

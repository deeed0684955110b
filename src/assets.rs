//! Asset loader: reads `<root>/<category>/<name>.txt` into an [`AssetTable`].
//!
//! Only the directory layout matters; which categories and names the scene
//! needs is checked afterwards by [`SceneAssets::from_table`].
//!
//! [`SceneAssets::from_table`]: space_garbage_core::SceneAssets::from_table

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use space_garbage_core::AssetTable;

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)
        .with_context(|| format!("failed to read asset directory {}", dir.display()))?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to list {}", dir.display()))?;
    paths.sort();
    Ok(paths)
}

pub fn load_dir(root: impl AsRef<Path>) -> Result<AssetTable> {
    let root = root.as_ref();
    let mut table = AssetTable::new();

    for category_dir in sorted_entries(root)? {
        if !category_dir.is_dir() {
            continue;
        }
        let Some(category) = category_dir.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        for path in sorted_entries(&category_dir)? {
            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read frame {}", path.display()))?;
            debug!(category, name, "frame loaded");
            table.insert(category, name, &text);
        }
    }

    Ok(table)
}

//! Asset table and the validated set of frames the scene needs.
//!
//! Assets arrive as `category -> name -> text` from whatever loader the
//! application uses. [`SceneAssets::from_table`] checks once at startup that
//! every frame the scene will ask for exists, so animation code never performs
//! a lookup that can miss.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::CoreError;
use crate::frame::Frame;

pub const SHIP_CATEGORY: &str = "ship";
pub const DEBRIS_CATEGORY: &str = "debris";
pub const EXPLOSION_CATEGORY: &str = "explosion";

/// Frames keyed by category, then by name. Both levels iterate in name order.
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    categories: BTreeMap<String, BTreeMap<String, Rc<Frame>>>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) one frame built from raw text.
    pub fn insert(&mut self, category: &str, name: &str, text: &str) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), Rc::new(Frame::new(name, text)));
    }

    pub fn get(&self, category: &str, name: &str) -> Option<&Rc<Frame>> {
        self.categories.get(category)?.get(name)
    }

    /// All frames of a category in name order (empty if the category is unknown).
    pub fn category(&self, category: &str) -> impl Iterator<Item = &Rc<Frame>> {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|frames| frames.values())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn require(&self, category: &str, name: &str) -> Result<Rc<Frame>, CoreError> {
        self.get(category, name)
            .cloned()
            .ok_or_else(|| CoreError::MissingAsset {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    fn require_category(&self, category: &str) -> Result<Vec<Rc<Frame>>, CoreError> {
        let frames: Vec<_> = self
            .category(category)
            .filter(|frame| !frame.is_empty())
            .cloned()
            .collect();
        if frames.is_empty() {
            return Err(CoreError::EmptyCategory(category.to_string()));
        }
        Ok(frames)
    }
}

/// The two frames the ship alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipFrame {
    Idle,
    Thrust,
}

impl ShipFrame {
    /// Animation order.
    pub const ALL: [ShipFrame; 2] = [ShipFrame::Idle, ShipFrame::Thrust];

    pub fn asset_name(&self) -> &'static str {
        match self {
            ShipFrame::Idle => "rocket_frame_1",
            ShipFrame::Thrust => "rocket_frame_2",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ShipFrame::Idle => ShipFrame::Thrust,
            ShipFrame::Thrust => ShipFrame::Idle,
        }
    }

    fn index(&self) -> usize {
        match self {
            ShipFrame::Idle => 0,
            ShipFrame::Thrust => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShipFrames {
    frames: [Rc<Frame>; 2],
}

impl ShipFrames {
    pub fn get(&self, phase: ShipFrame) -> &Rc<Frame> {
        &self.frames[phase.index()]
    }
}

/// Every frame the scene uses, validated.
#[derive(Debug, Clone)]
pub struct SceneAssets {
    pub ship: ShipFrames,
    /// Never empty.
    pub debris: Vec<Rc<Frame>>,
    /// Never empty; playback order.
    pub explosion: Vec<Rc<Frame>>,
}

impl SceneAssets {
    pub fn from_table(table: &AssetTable) -> Result<Self, CoreError> {
        let ship = ShipFrames {
            frames: [
                table.require(SHIP_CATEGORY, ShipFrame::Idle.asset_name())?,
                table.require(SHIP_CATEGORY, ShipFrame::Thrust.asset_name())?,
            ],
        };
        Ok(Self {
            ship,
            debris: table.require_category(DEBRIS_CATEGORY)?,
            explosion: table.require_category(EXPLOSION_CATEGORY)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_table() -> AssetTable {
        let mut table = AssetTable::new();
        table.insert(SHIP_CATEGORY, "rocket_frame_1", " ^\n|o|\n/ \\");
        table.insert(SHIP_CATEGORY, "rocket_frame_2", " ^\n|o|\n/*\\");
        table.insert(DEBRIS_CATEGORY, "lamp", "(_)");
        table.insert(EXPLOSION_CATEGORY, "2", "(*)");
        table.insert(EXPLOSION_CATEGORY, "1", " * ");
        table
    }

    #[test]
    fn validates_complete_table() {
        let assets = SceneAssets::from_table(&complete_table()).unwrap();
        assert_eq!(assets.ship.get(ShipFrame::Thrust).name(), "rocket_frame_2");
        assert_eq!(assets.debris.len(), 1);
        let order: Vec<_> = assets.explosion.iter().map(|f| f.name()).collect();
        assert_eq!(order, ["1", "2"]);
    }

    #[test]
    fn missing_ship_frame_is_fatal() {
        let mut table = AssetTable::new();
        table.insert(SHIP_CATEGORY, "rocket_frame_1", "^");
        table.insert(DEBRIS_CATEGORY, "lamp", "(_)");
        table.insert(EXPLOSION_CATEGORY, "1", "*");

        let err = SceneAssets::from_table(&table).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingAsset { ref category, ref name }
                if category == SHIP_CATEGORY && name == "rocket_frame_2"
        ));
    }

    #[test]
    fn empty_debris_category_is_fatal() {
        let mut table = complete_table();
        table.categories.remove(DEBRIS_CATEGORY);
        table.insert(DEBRIS_CATEGORY, "blank", "");

        let err = SceneAssets::from_table(&table).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCategory(ref c) if c == DEBRIS_CATEGORY));
    }

    #[test]
    fn ship_frames_alternate() {
        assert_eq!(ShipFrame::Idle.next(), ShipFrame::Thrust);
        assert_eq!(ShipFrame::Thrust.next(), ShipFrame::Idle);
    }
}

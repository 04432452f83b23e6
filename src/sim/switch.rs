//! Floor switches, the bridges they gate, and the tile folds they drive

use std::f32::consts::FRAC_PI_2;

use glam::{IVec3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::block::Orientation;
use super::board::Cell;
use crate::consts::*;

/// A rectangular range of block centres, inclusive on both ends.
///
/// An `orientation` restricts the range to blocks in that orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeRange {
    pub min_x: i32,
    pub max_x: i32,
    pub min_z: i32,
    pub max_z: i32,
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

impl BridgeRange {
    pub const fn new(min_x: i32, max_x: i32, min_z: i32, max_z: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
            orientation: None,
        }
    }

    pub const fn for_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn contains(&self, position: IVec3, orientation: Orientation) -> bool {
        if self.orientation.is_some_and(|o| o != orientation) {
            return false;
        }
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_z..=self.max_z).contains(&position.z)
    }
}

/// Which edge of a tile a fold hinges on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hinge {
    /// Edge facing -X, tile swings down clockwise about Z
    NegX,
    /// Edge facing +X, tile swings down anticlockwise about Z
    PosX,
}

/// A tile that swings down while its switch is inactive. Visual only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileFold {
    pub cell: Cell,
    pub hinge: Hinge,
}

impl TileFold {
    /// Transform applied on top of the tile's own placement
    pub fn transform(&self) -> Mat4 {
        let (edge_x, angle) = match self.hinge {
            Hinge::NegX => (self.cell.x - HALF_CELL, -FRAC_PI_2),
            Hinge::PosX => (self.cell.x + HALF_CELL, FRAC_PI_2),
        };
        let pivot = Vec3::new(edge_x as f32, -TILE_THICKNESS, 0.0);
        Mat4::from_translation(pivot) * Mat4::from_rotation_z(angle) * Mat4::from_translation(-pivot)
    }
}

/// Stable index of a switch within its level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SwitchId(pub u32);

/// A floor switch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub id: SwitchId,
    pub cell: Cell,
    pub active: bool,
    /// Block centres that lose support while this switch is inactive
    pub bridges: Vec<BridgeRange>,
    /// Tiles folded away while this switch is inactive
    pub folds: Vec<TileFold>,
}

impl Switch {
    /// Flip the switch; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// True if this switch currently withdraws support at the given centre
    pub fn blocks(&self, position: IVec3, orientation: Orientation) -> bool {
        !self.active && self.bridges.iter().any(|r| r.contains(position, orientation))
    }
}

/// The switches of one level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwitchSystem {
    switches: Vec<Switch>,
}

impl SwitchSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an inactive switch
    pub fn add(&mut self, cell: Cell, bridges: Vec<BridgeRange>, folds: Vec<TileFold>) -> SwitchId {
        let id = SwitchId(self.switches.len() as u32);
        self.switches.push(Switch {
            id,
            cell,
            active: false,
            bridges,
            folds,
        });
        id
    }

    pub fn switches(&self) -> &[Switch] {
        &self.switches
    }

    pub fn get(&self, id: SwitchId) -> Option<&Switch> {
        self.switches.get(id.0 as usize)
    }

    pub fn is_active(&self, id: SwitchId) -> bool {
        self.get(id).is_some_and(|s| s.active)
    }

    pub fn toggle(&mut self, id: SwitchId) -> Option<bool> {
        self.switches.get_mut(id.0 as usize).map(Switch::toggle)
    }

    /// Toggle every switch sitting exactly under an upright block.
    /// Returns the switches that flipped with their new state.
    pub fn press(&mut self, position: IVec3, orientation: Orientation) -> Vec<(SwitchId, bool)> {
        if orientation != Orientation::Upright {
            return Vec::new();
        }
        let cell = Cell::under(position);
        self.switches
            .iter_mut()
            .filter(|s| s.cell == cell)
            .map(|s| (s.id, s.toggle()))
            .collect()
    }

    /// True if an inactive switch withdraws support at this centre
    pub fn blocks(&self, position: IVec3, orientation: Orientation) -> bool {
        self.switches.iter().any(|s| s.blocks(position, orientation))
    }

    /// Fold transform currently applied to a tile, if any
    pub fn fold_for(&self, cell: Cell) -> Option<Mat4> {
        self.switches
            .iter()
            .filter(|s| !s.active)
            .flat_map(|s| s.folds.iter())
            .find(|f| f.cell == cell)
            .map(TileFold::transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> (SwitchSystem, SwitchId) {
        let mut switches = SwitchSystem::new();
        let id = switches.add(
            Cell::new(100, 240),
            vec![BridgeRange::new(-50, 70, 0, 0)],
            vec![TileFold {
                cell: Cell::new(-20, 0),
                hinge: Hinge::NegX,
            }],
        );
        (switches, id)
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let (mut switches, id) = system();
        let before = switches.is_active(id);
        switches.toggle(id);
        assert_ne!(switches.is_active(id), before);
        switches.toggle(id);
        assert_eq!(switches.is_active(id), before);
    }

    #[test]
    fn test_press_needs_upright_exact_match() {
        let (mut switches, id) = system();
        assert!(switches.press(IVec3::new(100, 30, 270), Orientation::LyingAlongZ).is_empty());
        assert!(switches.press(IVec3::new(160, 60, 240), Orientation::Upright).is_empty());
        assert_eq!(
            switches.press(IVec3::new(100, 60, 240), Orientation::Upright),
            vec![(id, true)]
        );
    }

    #[test]
    fn test_bridge_gating() {
        let (mut switches, id) = system();
        let on_bridge = IVec3::new(-20, 60, 0);
        assert!(switches.blocks(on_bridge, Orientation::Upright));
        assert!(!switches.blocks(IVec3::new(100, 60, 0), Orientation::Upright));
        switches.toggle(id);
        assert!(!switches.blocks(on_bridge, Orientation::Upright));
    }

    #[test]
    fn test_fold_only_while_inactive() {
        let (mut switches, id) = system();
        let fold = switches.fold_for(Cell::new(-20, 0)).unwrap();
        // The hinge edge stays put
        let hinge = Vec3::new(-50.0, -TILE_THICKNESS, 0.0);
        assert!(fold.transform_point3(hinge).abs_diff_eq(hinge, 1e-4));
        assert!(switches.fold_for(Cell::new(40, 0)).is_none());

        switches.toggle(id);
        assert!(switches.fold_for(Cell::new(-20, 0)).is_none());
    }

    #[test]
    fn test_orientation_restricted_range() {
        let span = BridgeRange::new(-440, -320, -120, -120).for_orientation(Orientation::LyingAlongX);
        assert!(span.contains(IVec3::new(-410, 30, -120), Orientation::LyingAlongX));
        assert!(!span.contains(IVec3::new(-410, 30, -120), Orientation::LyingAlongZ));
        assert!(!span.contains(IVec3::new(-290, 30, -120), Orientation::LyingAlongX));
    }
}

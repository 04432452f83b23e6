//! Support validation for a block that has just finished a roll
//!
//! A missing tile is never an error here: it simply means the block has
//! nothing under it and will fall.

use glam::IVec3;

use super::block::{Footprint, Orientation, footprint};
use super::board::{TileId, TileKind};
use super::level::Level;

/// Outcome of a support check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// Block rests on the board
    Supported,
    /// Nothing holds the block up
    Unsupported,
    /// Block stood on a fragile tile, which gives way under it
    GaveWay(TileId),
}

impl Support {
    pub fn is_supported(self) -> bool {
        self == Support::Supported
    }
}

/// Check whether a block centred at `position` is held up by the level.
///
/// Rules, in order:
/// - Upright: the cell needs a Normal tile; a Fragile tile gives way.
/// - Lying: both cells need a tile of any kind, unless the centre lies in
///   one of the level's always-on spans.
/// - A centre inside a bridge range gated by an inactive switch is
///   unsupported whatever tiles are underneath.
pub fn check_support(level: &Level, position: IVec3, orientation: Orientation) -> Support {
    let under = footprint(position, orientation);
    let base = match under {
        Footprint::Single(cell) => match level.board.tile_at(cell) {
            Some(tile) if tile.kind == TileKind::Fragile => Support::GaveWay(tile.id),
            Some(_) => Support::Supported,
            None => Support::Unsupported,
        },
        Footprint::Pair(..) => {
            let on_tiles = under.cells().iter().all(|c| level.board.has_tile(*c));
            if on_tiles || level.spanned(position, orientation) {
                Support::Supported
            } else {
                Support::Unsupported
            }
        }
    };

    match base {
        Support::Supported if level.switches.blocks(position, orientation) => Support::Unsupported,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::board::{Board, Cell};
    use crate::sim::level::{GOAL, LevelIndex};
    use crate::sim::switch::SwitchSystem;

    fn strip(kind: TileKind) -> Level {
        let board = Board::from_layout(&[
            (40, 0, TileKind::Normal),
            (100, 0, kind),
            (160, 0, TileKind::Normal),
        ]);
        Level::new(LevelIndex::Intro, board, SwitchSystem::new(), Cell::new(40, 0), GOAL)
    }

    #[test]
    fn test_upright_normal_supported() {
        let level = strip(TileKind::Normal);
        let support = check_support(&level, IVec3::new(100, 60, 0), Orientation::Upright);
        assert_eq!(support, Support::Supported);
    }

    #[test]
    fn test_upright_fragile_gives_way() {
        let level = strip(TileKind::Fragile);
        let support = check_support(&level, IVec3::new(100, 60, 0), Orientation::Upright);
        assert_eq!(support, Support::GaveWay(TileId(1)));
        assert!(!support.is_supported());
    }

    #[test]
    fn test_upright_on_hole() {
        let level = strip(TileKind::Normal);
        let support = check_support(&level, IVec3::new(220, 60, 0), Orientation::Upright);
        assert_eq!(support, Support::Unsupported);
    }

    #[test]
    fn test_lying_accepts_fragile() {
        let level = strip(TileKind::Fragile);
        let support = check_support(&level, IVec3::new(70, 30, 0), Orientation::LyingAlongX);
        assert_eq!(support, Support::Supported);
    }

    #[test]
    fn test_lying_half_off_edge() {
        let level = strip(TileKind::Normal);
        let support = check_support(&level, IVec3::new(190, 30, 0), Orientation::LyingAlongX);
        assert_eq!(support, Support::Unsupported);
        let support = check_support(&level, IVec3::new(40, 30, 30), Orientation::LyingAlongZ);
        assert_eq!(support, Support::Unsupported);
    }

    #[test]
    fn test_lying_across_goal_hole() {
        let level = Level::main();
        // Cells (-440, -120) and the goal hole
        let support = check_support(&level, IVec3::new(-410, 30, -120), Orientation::LyingAlongX);
        assert_eq!(support, Support::Supported);
        // Cells (-380, -180) and the goal hole
        let support = check_support(&level, IVec3::new(-380, 30, -150), Orientation::LyingAlongZ);
        assert_eq!(support, Support::Supported);
        // Standing in it drops through
        let support = check_support(&level, IVec3::new(-380, 60, -120), Orientation::Upright);
        assert_eq!(support, Support::Unsupported);
    }

    #[test]
    fn test_gated_bridge_overrides_tiles() {
        let mut level = Level::main();
        let bridge = IVec3::new(-20, 60, 0);
        assert!(level.board.has_tile(Cell::new(-20, 0)));
        assert_eq!(check_support(&level, bridge, Orientation::Upright), Support::Unsupported);

        let switch_b = level.switches.switches()[1].id;
        level.switches.toggle(switch_b);
        assert_eq!(check_support(&level, bridge, Orientation::Upright), Support::Supported);
    }
}

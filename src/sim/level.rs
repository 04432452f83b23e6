//! Level definitions
//!
//! Both boards are compiled-in tables. A `Level` bundles a board with its
//! switches, spawn point, goal cell and the always-on spans that let a lying
//! block bridge the goal hole.

use glam::IVec3;
use serde::{Deserialize, Serialize};

use super::block::{Block, Orientation};
use super::board::TileKind::{Fragile as F, Normal as N};
use super::board::{Board, Cell, TileKind};
use super::switch::{BridgeRange, Hinge, SwitchSystem, TileFold};

/// Which board is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelIndex {
    /// Tutorial board, plain tiles only
    #[default]
    Intro,
    /// Main board with fragile tiles and two switches
    Main,
}

impl LevelIndex {
    pub fn number(self) -> u32 {
        match self {
            LevelIndex::Intro => 0,
            LevelIndex::Main => 1,
        }
    }

    /// Level reached from this one's goal, if any
    pub fn next(self) -> Option<LevelIndex> {
        match self {
            LevelIndex::Intro => Some(LevelIndex::Main),
            LevelIndex::Main => None,
        }
    }
}

/// Goal cell shared by both boards. It has no tile: an upright block drops
/// through it.
pub const GOAL: Cell = Cell::new(-380, -120);

/// Spans around the goal hole where a lying block stays supported
const GOAL_SPANS: [BridgeRange; 2] = [
    BridgeRange::new(-440, -320, -120, -120).for_orientation(Orientation::LyingAlongX),
    BridgeRange::new(-380, -380, -180, -60).for_orientation(Orientation::LyingAlongZ),
];

const INTRO_SPAWN: Cell = Cell::new(160, 300);
const MAIN_SPAWN: Cell = Cell::new(-500, 60);

const INTRO_TILES: [(i32, i32, TileKind); 32] = [
    (100, 0, N), (160, 0, N), (220, 0, N),
    (100, -60, N), (160, -60, N), (220, -60, N),
    (220, 60, N), (220, 120, N), (220, 180, N),
    (160, 180, N), (160, 240, N), (160, 300, N), (220, 240, N),
    (100, -120, N), (160, -120, N), (100, -180, N), (160, -180, N),
    (40, -180, N), (-20, -180, N), (-80, -180, N), (-140, -180, N),
    (-200, -180, N), (-260, -180, N), (-260, -120, N),
    (-320, -180, N), (-320, -120, N), (-320, -60, N),
    (-380, -180, N), (-380, -60, N),
    (-440, -180, N), (-440, -120, N), (-440, -60, N),
];

const MAIN_TILES: [(i32, i32, TileKind); 79] = [
    // Start corridor and the switch-B bridge
    (-200, 0, F), (-140, 0, N), (-200, 60, N), (-80, 0, N),
    (-20, 0, N), (40, 0, N), (100, 0, N), (160, 0, N),
    (100, -60, N), (160, -60, N),
    // South-east loop around switch B
    (160, 240, N), (160, 300, N), (100, 240, N), (100, 300, N), (100, 360, N),
    (40, 300, N), (40, 360, N), (-20, 300, N), (-20, 360, N),
    (-80, 300, N), (-80, 360, N), (-140, 300, N), (-140, 360, N), (-140, 240, N),
    // Switch-A bridge
    (-80, 240, F), (-80, 180, N),
    // Fragile field
    (-200, 240, F), (-200, 300, F), (-260, 300, F), (-260, 240, F),
    (-320, 240, N), (-320, 300, F), (-380, 300, F), (-380, 240, F),
    (-440, 240, N), (-440, 300, F), (-500, 300, F), (-500, 240, F),
    (-560, 240, F), (-560, 300, F), (-620, 300, N), (-620, 240, F),
    (-560, 360, F), (-500, 360, N), (-440, 360, F), (-380, 360, F), (-320, 360, F),
    (-620, 180, F), (-560, 180, F), (-500, 180, F), (-440, 180, F),
    // Spawn pad and switch A
    (-560, 120, N), (-500, 120, N), (-440, 120, N), (-500, 60, N),
    (-200, 120, N), (-200, 180, F), (-140, 60, F), (-140, 120, F), (-140, 180, N),
    // Northern approach to the goal
    (100, -120, N), (160, -120, N), (100, -180, N), (160, -180, N),
    (40, -180, N), (-20, -180, N), (-80, -180, F), (-140, -180, F),
    (-200, -180, N), (-260, -180, N), (-260, -120, N),
    (-320, -180, N), (-320, -120, N), (-320, -60, N),
    (-380, -180, N), (-380, -60, N),
    (-440, -180, N), (-440, -120, N), (-440, -60, N),
];

/// A playable level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub index: LevelIndex,
    pub board: Board,
    pub switches: SwitchSystem,
    pub spawn: Cell,
    pub goal: Cell,
    /// Always-on ranges of block centres that count as supported
    pub spans: Vec<BridgeRange>,
}

impl Level {
    /// Assemble a level from parts
    pub fn new(index: LevelIndex, board: Board, switches: SwitchSystem, spawn: Cell, goal: Cell) -> Self {
        Self {
            index,
            board,
            switches,
            spawn,
            goal,
            spans: Vec::new(),
        }
    }

    pub fn with_spans(mut self, spans: &[BridgeRange]) -> Self {
        self.spans.extend_from_slice(spans);
        self
    }

    /// Build one of the compiled-in levels
    pub fn load(index: LevelIndex) -> Self {
        match index {
            LevelIndex::Intro => Self::intro(),
            LevelIndex::Main => Self::main(),
        }
    }

    pub fn intro() -> Self {
        Self::new(
            LevelIndex::Intro,
            Board::from_layout(&INTRO_TILES),
            SwitchSystem::new(),
            INTRO_SPAWN,
            GOAL,
        )
        .with_spans(&GOAL_SPANS)
    }

    pub fn main() -> Self {
        let mut switches = SwitchSystem::new();
        // Switch A raises the single tile north of the fragile corner
        switches.add(
            Cell::new(-560, 120),
            vec![BridgeRange::new(-80, -50, 180, 210)],
            vec![TileFold {
                cell: Cell::new(-80, 180),
                hinge: Hinge::NegX,
            }],
        );
        // Switch B raises the two-tile bridge on the start corridor
        switches.add(
            Cell::new(100, 240),
            vec![BridgeRange::new(-50, 70, 0, 0)],
            vec![
                TileFold {
                    cell: Cell::new(-20, 0),
                    hinge: Hinge::NegX,
                },
                TileFold {
                    cell: Cell::new(40, 0),
                    hinge: Hinge::PosX,
                },
            ],
        );

        Self::new(
            LevelIndex::Main,
            Board::from_layout(&MAIN_TILES),
            switches,
            MAIN_SPAWN,
            GOAL,
        )
        .with_spans(&GOAL_SPANS)
    }

    /// Fresh block at this level's spawn
    pub fn spawn_block(&self) -> Block {
        Block::upright_at(self.spawn)
    }

    /// True if an always-on span supports a block centred here
    pub fn spanned(&self, position: IVec3, orientation: Orientation) -> bool {
        self.spans.iter().any(|s| s.contains(position, orientation))
    }
}

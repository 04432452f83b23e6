//! The rolling block and its orientation state machine
//!
//! The block is 1 x 1 x 2 cells. It either stands on end (`Upright`) or lies
//! along one of the two board axes. Every roll is one row of a fixed
//! transition table; the render rotation is derived from the orientation,
//! never accumulated.

use std::f32::consts::FRAC_PI_2;

use glam::{IVec3, Mat4, Quat};
use serde::{Deserialize, Serialize};

use super::board::Cell;
use crate::consts::*;
use crate::to_world;

/// Block orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Standing on end, one cell footprint
    #[default]
    Upright,
    /// Lying with its long side along X, two cells
    LyingAlongX,
    /// Lying with its long side along Z, two cells
    LyingAlongZ,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Upright,
        Orientation::LyingAlongX,
        Orientation::LyingAlongZ,
    ];

    /// Centre height when resting on the board
    pub fn rest_y(self) -> i32 {
        match self {
            Orientation::Upright => UPRIGHT_Y,
            Orientation::LyingAlongX | Orientation::LyingAlongZ => LYING_Y,
        }
    }

    pub fn is_lying(self) -> bool {
        self != Orientation::Upright
    }

    /// Rotation from the upright mesh to this orientation
    pub fn rotation(self) -> Quat {
        match self {
            Orientation::Upright => Quat::IDENTITY,
            Orientation::LyingAlongX => Quat::from_rotation_z(FRAC_PI_2),
            Orientation::LyingAlongZ => Quat::from_rotation_x(FRAC_PI_2),
        }
    }
}

/// Board axis a roll travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Z,
}

/// Directional input. Up/Down roll along Z, Left/Right along X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards -Z
    Up,
    /// Towards +Z
    Down,
    /// Towards -X
    Left,
    /// Towards +X
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Z,
            Direction::Left | Direction::Right => Axis::X,
        }
    }

    /// +1 or -1 along the roll axis
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up | Direction::Left => -1,
            Direction::Down | Direction::Right => 1,
        }
    }
}

/// One row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    pub from: Orientation,
    pub to: Orientation,
    pub direction: Direction,
    /// Signed centre displacement along the roll axis
    pub shift: i32,
    /// Change of centre height
    pub rise: i32,
}

impl Roll {
    /// Position delta this roll applies
    pub fn delta(&self) -> IVec3 {
        match self.direction.axis() {
            Axis::X => IVec3::new(self.shift, self.rise, 0),
            Axis::Z => IVec3::new(0, self.rise, self.shift),
        }
    }
}

/// The transition table. Defined for every (orientation, direction) pair.
///
/// Only Z rolls enter or leave `LyingAlongZ` and only X rolls enter or leave
/// `LyingAlongX`; rolling a lying block across its long axis slides it one
/// cell without changing orientation.
pub fn transition(from: Orientation, direction: Direction) -> Roll {
    use Orientation::*;

    let (to, distance) = match (from, direction.axis()) {
        (Upright, Axis::Z) => (LyingAlongZ, TIP_DISTANCE),
        (Upright, Axis::X) => (LyingAlongX, TIP_DISTANCE),
        (LyingAlongZ, Axis::Z) => (Upright, TIP_DISTANCE),
        (LyingAlongX, Axis::X) => (Upright, TIP_DISTANCE),
        (LyingAlongX, Axis::Z) => (LyingAlongX, SLIDE_DISTANCE),
        (LyingAlongZ, Axis::X) => (LyingAlongZ, SLIDE_DISTANCE),
    };

    Roll {
        from,
        to,
        direction,
        shift: direction.sign() * distance,
        rise: to.rest_y() - from.rest_y(),
    }
}

/// Cells covered by the block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Footprint {
    Single(Cell),
    Pair(Cell, Cell),
}

impl Footprint {
    pub fn cells(&self) -> Vec<Cell> {
        match *self {
            Footprint::Single(c) => vec![c],
            Footprint::Pair(a, b) => vec![a, b],
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        match *self {
            Footprint::Single(c) => c == cell,
            Footprint::Pair(a, b) => a == cell || b == cell,
        }
    }
}

/// Cells under a block with the given centre and orientation
pub fn footprint(position: IVec3, orientation: Orientation) -> Footprint {
    let (x, z) = (position.x, position.z);
    match orientation {
        Orientation::Upright => Footprint::Single(Cell::new(x, z)),
        Orientation::LyingAlongX => {
            Footprint::Pair(Cell::new(x - HALF_CELL, z), Cell::new(x + HALF_CELL, z))
        }
        Orientation::LyingAlongZ => {
            Footprint::Pair(Cell::new(x, z - HALF_CELL), Cell::new(x, z + HALF_CELL))
        }
    }
}

/// The player's block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Centre of the block when resting
    pub position: IVec3,
    pub orientation: Orientation,
}

impl Block {
    /// Stand a block upright over the given cell
    pub fn upright_at(cell: Cell) -> Self {
        Self {
            position: IVec3::new(cell.x, UPRIGHT_Y, cell.z),
            orientation: Orientation::Upright,
        }
    }

    /// Apply one roll and return the table row that was used
    pub fn roll(&mut self, direction: Direction) -> Roll {
        let roll = transition(self.orientation, direction);
        self.position += roll.delta();
        self.orientation = roll.to;
        roll
    }

    pub fn footprint(&self) -> Footprint {
        footprint(self.position, self.orientation)
    }

    pub fn cell(&self) -> Cell {
        Cell::under(self.position)
    }

    pub fn is_upright(&self) -> bool {
        self.orientation == Orientation::Upright
    }

    /// Model matrix for a block dropped `fall` units below its rest height
    pub fn model(&self, fall: i32) -> Mat4 {
        let pos = to_world(self.position - IVec3::new(0, fall, 0));
        Mat4::from_rotation_translation(self.orientation.rotation(), pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_total() {
        for from in Orientation::ALL {
            for dir in Direction::ALL {
                let roll = transition(from, dir);
                assert_eq!(roll.from, from);
                assert_eq!(roll.rise, roll.to.rest_y() - from.rest_y());
                assert!(roll.shift.abs() == TIP_DISTANCE || roll.shift.abs() == SLIDE_DISTANCE);
            }
        }
    }

    #[test]
    fn test_lying_state_only_touched_by_own_axis() {
        for dir in Direction::ALL {
            let from_x = transition(Orientation::LyingAlongX, dir).to;
            let from_z = transition(Orientation::LyingAlongZ, dir).to;
            assert_ne!(from_x, Orientation::LyingAlongZ);
            assert_ne!(from_z, Orientation::LyingAlongX);
        }
        assert_eq!(
            transition(Orientation::LyingAlongX, Direction::Up).to,
            Orientation::LyingAlongX
        );
        assert_eq!(
            transition(Orientation::LyingAlongZ, Direction::Right).to,
            Orientation::LyingAlongZ
        );
    }

    #[test]
    fn test_two_rolls_stand_back_up() {
        let mut block = Block::upright_at(Cell::new(40, 0));
        let first = block.roll(Direction::Down);
        assert_eq!(first.to, Orientation::LyingAlongZ);
        assert_eq!(block.position, IVec3::new(40, LYING_Y, 90));

        block.roll(Direction::Down);
        assert!(block.is_upright());
        assert_eq!(block.position, IVec3::new(40, UPRIGHT_Y, 180));
    }

    #[test]
    fn test_sideways_slide() {
        let mut block = Block::upright_at(Cell::new(40, 0));
        block.roll(Direction::Left);
        assert_eq!(block.orientation, Orientation::LyingAlongX);
        assert_eq!(block.position, IVec3::new(-50, LYING_Y, 0));

        block.roll(Direction::Up);
        assert_eq!(block.orientation, Orientation::LyingAlongX);
        assert_eq!(block.position, IVec3::new(-50, LYING_Y, -60));
    }

    #[test]
    fn test_footprint_cells() {
        let upright = footprint(IVec3::new(40, 60, 0), Orientation::Upright);
        assert_eq!(upright, Footprint::Single(Cell::new(40, 0)));

        let along_x = footprint(IVec3::new(70, 30, 0), Orientation::LyingAlongX);
        assert_eq!(along_x.cells(), vec![Cell::new(40, 0), Cell::new(100, 0)]);

        let along_z = footprint(IVec3::new(40, 30, 30), Orientation::LyingAlongZ);
        assert!(along_z.contains(Cell::new(40, 0)));
        assert!(along_z.contains(Cell::new(40, 60)));
    }

    #[test]
    fn test_rotation_is_derived_not_accumulated() {
        let mut block = Block::upright_at(Cell::new(40, 0));
        for _ in 0..400 {
            block.roll(Direction::Right);
        }
        // 400 rolls: an even number, so the block is standing again
        assert!(block.is_upright());
        assert_eq!(block.orientation.rotation(), Quat::IDENTITY);
        assert_eq!(block.position.x, 40 + 200 * 180);
    }
}

//! Board tiles and coordinate lookup
//!
//! Tiles live in a per-level arena addressed by `TileId`, with a cell -> id
//! index for support queries.

use std::collections::HashMap;

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// A board cell, addressed by the world coordinates of its centre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Cell directly under a position (ignores height)
    pub fn under(pos: IVec3) -> Self {
        Self::new(pos.x, pos.z)
    }
}

/// Stable index of a tile within its board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

/// Tile types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Normal,
    /// Looks like a tile, but gives way under a block standing on end
    Fragile,
}

/// A board tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub cell: Cell,
    pub kind: TileKind,
    /// Set when a block stood on this fragile tile; visual only
    #[serde(default)]
    pub sinking: bool,
    /// How far the tile has dropped while sinking
    #[serde(default)]
    pub sink_depth: i32,
}

/// The tiles of one level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Board {
    tiles: Vec<Tile>,
    by_cell: HashMap<Cell, TileId>,
}

impl Board {
    /// Build a board from `(x, z, kind)` entries, assigning ids in order.
    /// A later entry for an occupied cell is ignored.
    pub fn from_layout(layout: &[(i32, i32, TileKind)]) -> Self {
        let mut board = Self::default();
        for &(x, z, kind) in layout {
            board.insert(Cell::new(x, z), kind);
        }
        board
    }

    /// Add a tile. Returns `None` if the cell is already taken.
    pub fn insert(&mut self, cell: Cell, kind: TileKind) -> Option<TileId> {
        if self.by_cell.contains_key(&cell) {
            log::warn!("Duplicate tile at ({}, {}) ignored", cell.x, cell.z);
            return None;
        }
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(Tile {
            id,
            cell,
            kind,
            sinking: false,
            sink_depth: 0,
        });
        self.by_cell.insert(cell, id);
        Some(id)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in id order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0 as usize)
    }

    /// Tile covering a cell. A miss is not an error - it is a hole.
    pub fn tile_at(&self, cell: Cell) -> Option<&Tile> {
        self.by_cell.get(&cell).and_then(|id| self.tile(*id))
    }

    pub fn has_tile(&self, cell: Cell) -> bool {
        self.by_cell.contains_key(&cell)
    }

    /// Mark a fragile tile as giving way
    pub fn start_sinking(&mut self, id: TileId) {
        if let Some(tile) = self.tiles.get_mut(id.0 as usize) {
            if tile.kind == TileKind::Fragile {
                tile.sinking = true;
            }
        }
    }

    /// Drop every sinking tile a little further
    pub fn advance_sinking(&mut self, step: i32) {
        for tile in self.tiles.iter_mut().filter(|t| t.sinking) {
            tile.sink_depth += step;
        }
    }

    /// Restore all tiles to their resting place
    pub fn clear_sinking(&mut self) {
        for tile in &mut self.tiles {
            tile.sinking = false;
            tile.sink_depth = 0;
        }
    }

    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }
}

impl From<Vec<Tile>> for Board {
    fn from(tiles: Vec<Tile>) -> Self {
        let by_cell = tiles.iter().map(|t| (t.cell, t.id)).collect();
        Self { tiles, by_cell }
    }
}

impl From<Board> for Vec<Tile> {
    fn from(board: Board) -> Self {
        board.tiles
    }
}

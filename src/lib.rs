//! Block Roll - a rolling-block tile puzzle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (block state machine, board support, switches, levels)
//! - `renderer`: Per-tick frame data handed to the rendering shell
//! - `settings`: Player-facing configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::{IVec3, Vec3};

/// Game configuration constants
///
/// All lengths are world units. The board is a grid with a 60-unit pitch.
pub mod consts {
    /// Edge length of one board cell
    pub const CELL_SIZE: i32 = 60;
    /// Half a cell; a lying block's centre sits on a cell boundary
    pub const HALF_CELL: i32 = CELL_SIZE / 2;

    /// Block centre height when standing on end (block is 60 x 120 x 60)
    pub const UPRIGHT_Y: i32 = 60;
    /// Block centre height when lying on its side
    pub const LYING_Y: i32 = 30;

    /// Centre distance covered when tipping over or standing back up
    pub const TIP_DISTANCE: i32 = 90;
    /// Centre distance covered when a lying block rolls sideways
    pub const SLIDE_DISTANCE: i32 = CELL_SIZE;

    /// Vertical drop per tick while the block is falling
    pub const FALL_STEP: i32 = 3;
    /// Block height at which a fall ends and the block respawns
    pub const FALL_FLOOR_Y: i32 = -200;
    /// Vertical drop per tick of a fragile tile giving way
    pub const SINK_STEP: i32 = 5;

    /// Tile slab thickness and centre height
    pub const TILE_THICKNESS: f32 = 12.0;
    pub const TILE_CENTER_Y: f32 = -TILE_THICKNESS / 2.0;

    /// Radius of a floor switch disc
    pub const SWITCH_RADIUS: f32 = 25.0;

    /// Wall-clock seconds between counter increments
    pub const SECOND: f64 = 1.0;
}

/// Convert a canonical integer position to render space
#[inline]
pub fn to_world(pos: IVec3) -> Vec3 {
    pos.as_vec3()
}

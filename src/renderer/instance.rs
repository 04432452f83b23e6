//! Per-instance data for the board, block, switch and HUD draws

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// One tile slab
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TileInstance {
    pub model: [[f32; 4]; 4],
    /// Top face
    pub color: [f32; 4],
    /// Side faces
    pub edge_color: [f32; 4],
}

impl TileInstance {
    pub fn new(model: Mat4, color: [f32; 4], edge_color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
            edge_color,
        }
    }
}

/// The player's block
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BlockInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl BlockInstance {
    pub fn new(model: Mat4, color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
        }
    }
}

/// A floor switch disc, unit radius before `model` scaling
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SwitchInstance {
    pub model: [[f32; 4]; 4],
    pub ring_color: [f32; 4],
    pub core_color: [f32; 4],
}

impl SwitchInstance {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            ring_color: colors::SWITCH_RING,
            core_color: colors::SWITCH_CORE,
        }
    }
}

/// One lit HUD segment as a screen-space rectangle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SegmentInstance {
    /// x, y, width, height in HUD pixels, origin top-left
    pub rect: [f32; 4],
    pub color: [f32; 4],
}

/// HUD digit geometry
pub mod hud_layout {
    use crate::sim::segment::Segments;

    pub const DIGIT_WIDTH: f32 = 16.0;
    pub const DIGIT_HEIGHT: f32 = 28.0;
    pub const STROKE: f32 = 3.0;
    pub const DIGIT_PITCH: f32 = 22.0;

    /// Digit slots: moves 0-2, minutes 4-5, seconds 7-8
    pub const MOVES_SLOT: usize = 0;
    pub const MINUTES_SLOT: usize = 4;
    pub const SECONDS_SLOT: usize = 7;

    /// Rectangle of one segment of the digit in `slot`
    pub fn segment_rect(slot: usize, segment: usize) -> [f32; 4] {
        let x = slot as f32 * DIGIT_PITCH;
        let (w, h, t) = (DIGIT_WIDTH, DIGIT_HEIGHT, STROKE);
        let half = h / 2.0;
        match segment {
            Segments::TOP => [x, 0.0, w, t],
            Segments::UPPER_RIGHT => [x + w - t, 0.0, t, half],
            Segments::LOWER_RIGHT => [x + w - t, half, t, half],
            Segments::BOTTOM => [x, h - t, w, t],
            Segments::LOWER_LEFT => [x, half, t, half],
            Segments::UPPER_LEFT => [x, 0.0, t, half],
            _ => [x, half - t / 2.0, w, t],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BLOCK: [f32; 4] = [46.0 / 255.0, 199.0 / 255.0, 0.0, 1.0];
    pub const TILE: [f32; 4] = [0.0, 0.0, 127.0 / 255.0, 1.0];
    pub const TILE_EDGE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const FRAGILE: [f32; 4] = [1.0, 61.0 / 255.0, 0.0, 1.0];
    pub const FRAGILE_EDGE: [f32; 4] = [1.0, 2.0 / 255.0, 0.0, 1.0];
    pub const SWITCH_RING: [f32; 4] = [1.0, 223.0 / 255.0, 0.0, 1.0]; // Coin gold
    pub const SWITCH_CORE: [f32; 4] = [204.0 / 255.0, 1.0 / 255.0, 0.0, 1.0];
    pub const SEGMENT_LIT: [f32; 4] = [117.0 / 255.0, 78.0 / 255.0, 40.0 / 255.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
}

//! Per-tick render snapshot
//!
//! Everything here is derived from `GameState`; nothing is written back.

use glam::{Mat4, Quat, Vec3};

use super::instance::{
    BlockInstance, SegmentInstance, SwitchInstance, TileInstance, colors, hud_layout,
};
use crate::consts::*;
use crate::sim::board::{TileId, TileKind};
use crate::sim::camera::Camera;
use crate::sim::segment::{Hud, SEGMENT_COUNT, Segments};
use crate::sim::state::GameState;
use crate::sim::switch::SwitchId;
use crate::to_world;

/// Block placement as drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPose {
    /// Centre, fall included
    pub position: Vec3,
    pub rotation: Quat,
    pub model: Mat4,
}

/// Tile placement as drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePose {
    pub id: TileId,
    pub kind: TileKind,
    /// Slab centre before any fold
    pub position: Vec3,
    /// How far a fragile tile has sunk
    pub sink_offset: f32,
    /// Hinge rotation while the bridge is down
    pub fold: Option<Mat4>,
    pub model: Mat4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchPose {
    pub id: SwitchId,
    pub position: Vec3,
    pub active: bool,
}

/// What the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub block: BlockPose,
    pub tiles: Vec<TilePose>,
    pub switches: Vec<SwitchPose>,
    /// Digits to draw; groups hidden by the player are blank
    pub hud: Hud,
    pub camera: Camera,
    pub view: Mat4,
    pub clear_color: [f32; 4],
}

impl RenderFrame {
    pub fn capture(state: &GameState) -> Self {
        let block = BlockPose {
            position: to_world(state.render_position()),
            rotation: state.block.orientation.rotation(),
            model: state.block.model(state.fall_progress()),
        };

        let tiles = state
            .level
            .board
            .tiles()
            .iter()
            .map(|tile| {
                let sink_offset = tile.sink_depth as f32;
                let position = Vec3::new(tile.cell.x as f32, TILE_CENTER_Y, tile.cell.z as f32);
                let fold = state.level.switches.fold_for(tile.cell);
                let placed = Mat4::from_translation(position - Vec3::Y * sink_offset);
                TilePose {
                    id: tile.id,
                    kind: tile.kind,
                    position,
                    sink_offset,
                    fold,
                    model: fold.map_or(placed, |f| f * placed),
                }
            })
            .collect();

        let switches = state
            .level
            .switches
            .switches()
            .iter()
            .map(|s| SwitchPose {
                id: s.id,
                position: Vec3::new(s.cell.x as f32, 0.0, s.cell.z as f32),
                active: s.active,
            })
            .collect();

        let camera = state.camera_view();

        Self {
            block,
            tiles,
            switches,
            hud: state.visible_hud(),
            camera,
            view: camera.view_matrix(),
            clear_color: colors::BACKGROUND,
        }
    }

    pub fn block_instance(&self) -> BlockInstance {
        BlockInstance::new(self.block.model, colors::BLOCK)
    }

    pub fn tile_instances(&self) -> Vec<TileInstance> {
        self.tiles
            .iter()
            .map(|t| match t.kind {
                TileKind::Normal => TileInstance::new(t.model, colors::TILE, colors::TILE_EDGE),
                TileKind::Fragile => {
                    TileInstance::new(t.model, colors::FRAGILE, colors::FRAGILE_EDGE)
                }
            })
            .collect()
    }

    pub fn switch_instances(&self) -> Vec<SwitchInstance> {
        self.switches
            .iter()
            .map(|s| {
                let model = Mat4::from_scale_rotation_translation(
                    Vec3::splat(SWITCH_RADIUS),
                    Quat::IDENTITY,
                    s.position,
                );
                SwitchInstance::new(model)
            })
            .collect()
    }

    /// One rectangle per lit HUD segment
    pub fn segment_instances(&self) -> Vec<SegmentInstance> {
        let groups: [(&[Segments], usize); 3] = [
            (self.hud.moves.as_slice(), hud_layout::MOVES_SLOT),
            (self.hud.minutes.as_slice(), hud_layout::MINUTES_SLOT),
            (self.hud.seconds.as_slice(), hud_layout::SECONDS_SLOT),
        ];

        let mut out = Vec::new();
        for (digits, first_slot) in groups {
            for (i, digit) in digits.iter().enumerate() {
                for segment in (0..SEGMENT_COUNT).filter(|s| digit.is_lit(*s)) {
                    out.push(SegmentInstance {
                        rect: hud_layout::segment_rect(first_slot + i, segment),
                        color: colors::SEGMENT_LIT,
                    });
                }
            }
        }
        out
    }
}

//! Rendering data module
//!
//! Builds the per-frame snapshot and GPU-ready instance data. Drawing itself
//! lives in the platform shell.

pub mod frame;
pub mod instance;

pub use frame::{BlockPose, RenderFrame, SwitchPose, TilePose};
pub use instance::{
    BlockInstance, SegmentInstance, SwitchInstance, TileInstance, colors, hud_layout,
};

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer board coordinates only
//! - One roll per tick, in a fixed update order
//! - Wall-clock time only feeds the seconds counter
//! - No rendering or platform dependencies

pub mod block;
pub mod board;
pub mod camera;
pub mod input;
pub mod level;
pub mod segment;
pub mod state;
pub mod support;
pub mod switch;
pub mod tick;

pub use block::{Block, Direction, Footprint, Orientation, Roll, footprint, transition};
pub use board::{Board, Cell, Tile, TileId, TileKind};
pub use camera::{Camera, CameraMode};
pub use input::{FrameInput, InputEvent, InputQueue};
pub use level::{GOAL, Level, LevelIndex};
pub use segment::{Hud, Segments, encode, encode_number};
pub use state::{Counters, GameEvent, GameState, Lifecycle};
pub use support::{Support, check_support};
pub use switch::{BridgeRange, Hinge, Switch, SwitchId, SwitchSystem, TileFold};
pub use tick::{TickOutcome, tick};

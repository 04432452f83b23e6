//! Game state and core simulation types
//!
//! Everything the tick mutates lives in `GameState`. It serializes cleanly so a
//! snapshot can be dumped for debugging.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use super::block::{Block, Direction, Orientation};
use super::board::TileId;
use super::camera::{Camera, CameraMode};
use super::level::{Level, LevelIndex};
use super::segment::{Hud, HudVisibility};
use super::switch::SwitchId;
use crate::consts::*;
use crate::settings::Settings;
use crate::to_world;

/// Whether the block is on the board or dropping off it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    /// On the board, accepting rolls
    #[default]
    Resting,
    /// Dropping; `progress` is how far below rest height the block is
    Falling { progress: i32 },
}

/// Player-visible counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Counters {
    /// Accepted directional inputs
    pub moves: u32,
    /// Whole wall-clock seconds on this level
    pub seconds: u32,
}

/// Coarse wall-clock seconds counter.
///
/// The first observation only sets the mark. After that, every call at least
/// `SECOND` past the mark counts one second and moves the mark to `now`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SecondClock {
    last_mark: Option<f64>,
}

impl SecondClock {
    /// Returns true if a second elapsed
    pub fn advance(&mut self, now: f64) -> bool {
        match self.last_mark {
            None => {
                self.last_mark = Some(now);
                false
            }
            Some(last) if now - last >= SECOND => {
                self.last_mark = Some(now);
                true
            }
            Some(_) => false,
        }
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Rolled {
        direction: Direction,
        orientation: Orientation,
    },
    SwitchToggled {
        id: SwitchId,
        active: bool,
    },
    /// Directional input thrown away because the block was falling
    InputDiscarded,
    StartedFalling,
    TileGaveWay(TileId),
    Respawned,
    LevelAdvanced(LevelIndex),
    /// Goal reached on the last level; counters restart
    Checkpoint,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub level: Level,
    pub block: Block,
    pub lifecycle: Lifecycle,
    pub counters: Counters,
    pub clock: SecondClock,
    pub camera: CameraMode,
    /// Camera mode restored on every level change
    pub default_camera: CameraMode,
    /// HUD groups the player chose to show
    pub hud_visibility: HudVisibility,
    /// Digit patterns for the current counters
    pub hud: Hud,
    /// Counters `hud` was last built from
    hud_source: Counters,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start on one of the compiled-in levels
    pub fn new(start: LevelIndex) -> Self {
        Self::with_level(Level::load(start))
    }

    /// Start from the player's settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut state = Self::new(settings.start_level);
        state.camera = settings.default_camera;
        state.default_camera = settings.default_camera;
        state.hud_visibility = settings.hud_visibility();
        state
    }

    /// Start on an arbitrary level, block upright at its spawn
    pub fn with_level(level: Level) -> Self {
        let block = level.spawn_block();
        Self {
            level,
            block,
            lifecycle: Lifecycle::Resting,
            counters: Counters::default(),
            clock: SecondClock::default(),
            camera: CameraMode::default(),
            default_camera: CameraMode::default(),
            hud_visibility: HudVisibility::default(),
            hud: Hud::default(),
            hud_source: Counters::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Falling { .. })
    }

    /// Distance the block has dropped below its rest height
    pub fn fall_progress(&self) -> i32 {
        match self.lifecycle {
            Lifecycle::Resting => 0,
            Lifecycle::Falling { progress } => progress,
        }
    }

    /// Block centre as drawn, including any fall
    pub fn render_position(&self) -> IVec3 {
        self.block.position - IVec3::new(0, self.fall_progress(), 0)
    }

    /// Camera for the current mode, tracking the drawn block
    pub fn camera_view(&self) -> Camera {
        let block: Vec3 = to_world(self.render_position());
        self.camera.view(block)
    }

    pub fn start_falling(&mut self) {
        if !self.is_falling() {
            self.lifecycle = Lifecycle::Falling { progress: 0 };
            self.events.push(GameEvent::StartedFalling);
        }
    }

    /// Put the block back at spawn. Switch states are left alone.
    pub fn respawn(&mut self) {
        self.block = self.level.spawn_block();
        self.lifecycle = Lifecycle::Resting;
        self.level.board.clear_sinking();
        self.events.push(GameEvent::Respawned);
    }

    /// Load another level and start over on it
    pub fn advance_level(&mut self, next: LevelIndex) {
        self.level = Level::load(next);
        self.block = self.level.spawn_block();
        self.lifecycle = Lifecycle::Resting;
        self.camera = self.default_camera;
        self.reset_counters();
        self.events.push(GameEvent::LevelAdvanced(next));
    }

    pub fn reset_counters(&mut self) {
        self.counters = Counters::default();
    }

    /// Rebuild the HUD if the counters moved since the last build
    pub fn refresh_hud(&mut self) -> bool {
        if self.counters == self.hud_source {
            return false;
        }
        self.hud = Hud::new(self.counters.moves, self.counters.seconds);
        self.hud_source = self.counters;
        true
    }

    /// HUD with hidden groups blanked
    pub fn visible_hud(&self) -> Hud {
        self.hud.masked(self.hud_visibility)
    }
}

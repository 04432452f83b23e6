//! Edge-triggered input events
//!
//! The platform layer pushes one event per key release. The simulation
//! drains the queue exactly once per tick, so a held key never produces more
//! than one roll.

use serde::{Deserialize, Serialize};

use super::block::Direction;
use super::camera::CameraMode;

/// Release-edge events delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    CameraTop,
    CameraFollow,
    CameraBehind,
    CameraReset,
    Quit,
}

/// Order in which simultaneous directional events are considered
pub const DIRECTION_PRECEDENCE: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Right,
    Direction::Left,
];

impl InputEvent {
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputEvent::Up => Some(Direction::Up),
            InputEvent::Down => Some(Direction::Down),
            InputEvent::Left => Some(Direction::Left),
            InputEvent::Right => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn camera(self) -> Option<CameraMode> {
        match self {
            InputEvent::CameraTop => Some(CameraMode::Top),
            InputEvent::CameraFollow => Some(CameraMode::Follow),
            InputEvent::CameraBehind => Some(CameraMode::Behind),
            InputEvent::CameraReset => Some(CameraMode::Home),
            _ => None,
        }
    }
}

impl From<Direction> for InputEvent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => InputEvent::Up,
            Direction::Down => InputEvent::Down,
            Direction::Left => InputEvent::Left,
            Direction::Right => InputEvent::Right,
        }
    }
}

/// Everything one tick acts on, resolved from the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// At most one roll per tick
    pub direction: Option<Direction>,
    /// Latest camera request, if any
    pub camera: Option<CameraMode>,
    pub quit: bool,
    /// Directional events discarded by precedence
    pub dropped: usize,
}

/// Consumed-once event queue
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Empty the queue and resolve it into this tick's input.
    ///
    /// If several directional events arrived, the first by
    /// `DIRECTION_PRECEDENCE` wins and the rest are dropped.
    pub fn drain(&mut self) -> FrameInput {
        let mut frame = FrameInput::default();
        let mut directions = 0usize;

        for event in self.pending.drain(..) {
            if event == InputEvent::Quit {
                frame.quit = true;
            } else if let Some(mode) = event.camera() {
                frame.camera = Some(mode);
            } else if let Some(dir) = event.direction() {
                directions += 1;
                let rank = |d: Direction| DIRECTION_PRECEDENCE.iter().position(|p| *p == d);
                let better = match frame.direction {
                    Some(current) => rank(dir) < rank(current),
                    None => true,
                };
                if better {
                    frame.direction = Some(dir);
                }
            }
        }

        frame.dropped = directions.saturating_sub(1);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_consumes() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Left);
        assert_eq!(queue.drain().direction, Some(Direction::Left));
        assert!(queue.is_empty());
        assert_eq!(queue.drain(), FrameInput::default());
    }

    #[test]
    fn test_direction_precedence() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Left);
        queue.push(InputEvent::Right);
        queue.push(InputEvent::Down);
        let frame = queue.drain();
        assert_eq!(frame.direction, Some(Direction::Down));
        assert_eq!(frame.dropped, 2);

        queue.push(InputEvent::Right);
        queue.push(InputEvent::Up);
        assert_eq!(queue.drain().direction, Some(Direction::Up));
    }

    #[test]
    fn test_camera_and_quit() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::CameraTop);
        queue.push(InputEvent::CameraReset);
        queue.push(InputEvent::Quit);
        let frame = queue.drain();
        assert_eq!(frame.camera, Some(CameraMode::Home));
        assert!(frame.quit);
        assert_eq!(frame.direction, None);
    }
}

//! Camera modes
//!
//! The camera never feeds back into the simulation. Eye and target are
//! recomputed from the block's current pose every frame.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Camera placement relative to the board or the block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Fixed overview of the whole board
    #[default]
    Home,
    /// Straight down onto the block
    Top,
    /// Above and behind the block, looking at it
    Follow,
    /// Over the block's shoulder, looking ahead (-Z)
    Behind,
}

impl CameraMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraMode::Home => "Home",
            CameraMode::Top => "Top",
            CameraMode::Follow => "Follow",
            CameraMode::Behind => "Behind",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" | "reset" => Some(CameraMode::Home),
            "top" => Some(CameraMode::Top),
            "follow" => Some(CameraMode::Follow),
            "behind" => Some(CameraMode::Behind),
            _ => None,
        }
    }

    /// Eye and target for a block at `block` (render position, fall included)
    pub fn view(self, block: Vec3) -> Camera {
        match self {
            CameraMode::Home => Camera {
                eye: Vec3::new(-300.0, 1000.0, 600.0),
                target: Vec3::new(-200.0, -100.0, 0.0),
            },
            CameraMode::Top => Camera {
                eye: Vec3::new(block.x, 1300.0, block.z),
                target: Vec3::new(block.x, 0.0, block.z - 10.0),
            },
            CameraMode::Follow => Camera {
                eye: block + Vec3::new(0.0, 300.0, 300.0),
                target: block,
            },
            CameraMode::Behind => Camera {
                eye: block + Vec3::new(0.0, 300.0, 50.0),
                target: block + Vec3::new(0.0, 0.0, -200.0),
            },
        }
    }
}

/// A resolved camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_ignores_block() {
        let a = CameraMode::Home.view(Vec3::ZERO);
        let b = CameraMode::Home.view(Vec3::new(500.0, 60.0, -300.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_follow_tracks_block() {
        let block = Vec3::new(-500.0, 60.0, 60.0);
        let cam = CameraMode::Follow.view(block);
        assert_eq!(cam.target, block);
        assert_eq!(cam.eye, Vec3::new(-500.0, 360.0, 360.0));
    }

    #[test]
    fn test_top_looks_down() {
        let cam = CameraMode::Top.view(Vec3::new(40.0, 60.0, 0.0));
        assert!(cam.eye.y > cam.target.y);
        assert_eq!(cam.eye.x, cam.target.x);
        assert!(cam.view_matrix().is_finite());
    }

    #[test]
    fn test_parse() {
        assert_eq!(CameraMode::from_str("Behind"), Some(CameraMode::Behind));
        assert_eq!(CameraMode::from_str("reset"), Some(CameraMode::Home));
        assert_eq!(CameraMode::from_str("sideways"), None);
    }
}

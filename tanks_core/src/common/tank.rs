//! The enemy Tank entity

use serde::{Deserialize, Serialize};

use crate::utils::Vector2;

use super::constants::{HULL_WIDTH, SPRITE_WIDTH, TREAD_HEIGHT, TREAD_SEGMENTS};

/// Discriminator among the enemy types a host may manage
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Tank,
}

/// Data tracked for a single enemy Tank
///
/// Created by the Spawner, animated by the Animator and read by the Renderer.
/// Position is owned by the host's movement logic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tank {
    pub position: Vector2,
    pub scale: f64,
    /// Angle the gun is currently drawn at, in (-PI, PI]
    pub current_barrel_angle: f64,
    /// Angle the gun is turning towards, in (-PI, PI]
    pub target_barrel_angle: f64,
    pub barrel_turn_speed: f64,
    /// Frames since the last retarget
    pub barrel_move_timer: u32,
    pub barrel_move_interval: u32,
    /// Scroll phase of the treads, in [0, segment_height)
    pub tread_offset: f64,
    /// Tread scroll per frame at full speed
    pub tread_speed: f64,
    /// Movement speed, consumed by the host
    pub speed: f64,
    /// Collision radius, consumed by the host
    pub radius: f64,
    pub kind: EnemyKind,
}

impl Tank {
    /// Height of a single tread segment, which is also the tread animation period
    pub fn segment_height(&self) -> f64 {
        TREAD_HEIGHT * self.scale / TREAD_SEGMENTS as f64
    }

    /// Approximate drawn width, used to place the Tank off screen
    pub fn sprite_width(&self) -> f64 {
        SPRITE_WIDTH * self.scale
    }

    /// Collision radius derived from the hull width
    pub fn radius_for_scale(scale: f64) -> f64 {
        HULL_WIDTH * scale / 2.0
    }
}

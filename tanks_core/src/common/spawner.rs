//! Creation of new Tanks with randomized starting state

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::utils::Vector2;

use super::{
    config::TankConfig,
    constants::{SPRITE_WIDTH, TANK_INITIAL_BARREL_ANGLE},
    tank::{EnemyKind, Tank},
};

/// Produces Tanks just outside the left or right edge of the canvas
pub struct Spawner<R = ChaCha8Rng> {
    config: TankConfig,
    rng: R,
}

impl Spawner<ChaCha8Rng> {
    pub fn from_seed(config: TankConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Spawner<R> {
    pub fn new(config: TankConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &TankConfig {
        &self.config
    }

    /// Create a Tank for a canvas of the given size
    ///
    /// The Tank starts one sprite width beyond a randomly chosen side, within
    /// the middle band of the canvas height.
    pub fn spawn(&mut self, canvas_width: f64, canvas_height: f64) -> Tank {
        let TankConfig {
            scale,
            barrel_turn_speed,
            barrel_move_interval,
            tread_speed,
            min_speed,
            speed_range,
            spawn_band,
            ..
        } = self.config;

        let sprite_width = SPRITE_WIDTH * scale;
        let from_left = self.rng.gen_bool(0.5);
        let x = match from_left {
            true => -sprite_width,
            false => canvas_width + sprite_width,
        };

        // gen::<f64>() is [0, 1) so an empty band never panics
        let band_top = canvas_height * (1.0 - spawn_band) / 2.0;
        let y = band_top + self.rng.gen::<f64>() * canvas_height * spawn_band;

        // gen_range keeps the upper bound exclusive, plain scaling can round onto it
        let top_speed = min_speed + speed_range;
        let speed = match top_speed > min_speed {
            true => self.rng.gen_range(min_speed..top_speed),
            false => min_speed,
        };
        // stagger retargets so Tanks spawned together don't aim in lockstep
        let barrel_move_timer = self.rng.gen_range(0..barrel_move_interval.max(1));

        log::debug!(
            "spawning tank on the {} side at ({:.1}, {:.1}) with speed {:.2}",
            if from_left { "left" } else { "right" },
            x,
            y,
            speed
        );

        Tank {
            position: Vector2::new(x, y),
            scale,
            current_barrel_angle: TANK_INITIAL_BARREL_ANGLE,
            target_barrel_angle: TANK_INITIAL_BARREL_ANGLE,
            barrel_turn_speed,
            barrel_move_timer,
            barrel_move_interval,
            tread_offset: 0.0,
            tread_speed,
            speed,
            radius: Tank::radius_for_scale(scale),
            kind: EnemyKind::Tank,
        }
    }
}

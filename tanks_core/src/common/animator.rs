//! Per frame animation of the barrel aim and tread scroll

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::utils::normalize_angle;

use super::{
    config::TankConfig,
    constants::{TANK_BARREL_BASE_ANGLE, TANK_BARREL_SWEEP},
    tank::Tank,
};

/// Advances the internal animation state of Tanks by one frame
///
/// Movement is left to the host; only the barrel and the treads change here.
/// Turn speed, retarget interval and tread speed are read from the Tank, as
/// fixed when it was spawned. The config only supplies the slow motion
/// multiplier.
pub struct Animator<R = ChaCha8Rng> {
    config: TankConfig,
    rng: R,
}

impl Animator<ChaCha8Rng> {
    pub fn from_seed(config: TankConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Animator<R> {
    pub fn new(config: TankConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &TankConfig {
        &self.config
    }

    pub fn advance(&mut self, tank: &mut Tank, slow_motion: bool) {
        let multiplier = self.config.speed_multiplier(slow_motion);
        self.update_barrel(tank, multiplier);
        Self::update_treads(tank, multiplier);
    }

    fn update_barrel(&mut self, tank: &mut Tank, multiplier: f64) {
        tank.barrel_move_timer += 1;
        if tank.barrel_move_timer >= tank.barrel_move_interval {
            tank.barrel_move_timer = 0;
            let sweep = self.rng.gen_range(-TANK_BARREL_SWEEP..TANK_BARREL_SWEEP);
            tank.target_barrel_angle = normalize_angle(TANK_BARREL_BASE_ANGLE + sweep);
            log::trace!("tank barrel retargeted to {:.3}", tank.target_barrel_angle);
        }

        // snapshots restored by a host may carry unwrapped targets
        tank.target_barrel_angle = normalize_angle(tank.target_barrel_angle);

        // shortest way around
        let angle_diff = normalize_angle(tank.target_barrel_angle - tank.current_barrel_angle);
        let step = tank.barrel_turn_speed * multiplier;

        if angle_diff.abs() > step {
            tank.current_barrel_angle += angle_diff.signum() * step;
        } else {
            tank.current_barrel_angle = tank.target_barrel_angle;
        }
        tank.current_barrel_angle = normalize_angle(tank.current_barrel_angle);
    }

    fn update_treads(tank: &mut Tank, multiplier: f64) {
        let period = tank.segment_height();
        tank.tread_offset =
            (tank.tread_offset + tank.tread_speed * multiplier).rem_euclid(period);
        // rem_euclid can round up to the period itself for values just below it
        if tank.tread_offset >= period {
            tank.tread_offset = 0.0;
        }
    }
}

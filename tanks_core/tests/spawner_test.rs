use std::f64::consts::PI;

use approx::assert_relative_eq;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tanks_core::{EnemyKind, Spawner, TankConfig};
use test_log::test;

#[test]
fn test_spawn_bounds() {
    let mut spawner = Spawner::from_seed(TankConfig::default(), 1);
    let half_width = 160.0 * 0.35 / 2.0;
    let (mut left, mut right) = (0, 0);

    for _ in 0..500 {
        let tank = spawner.spawn(800.0, 600.0);

        if tank.position.x <= -half_width {
            left += 1;
        } else if tank.position.x >= 800.0 + half_width {
            right += 1;
        } else {
            panic!("tank spawned on screen at x = {}", tank.position.x);
        }

        assert!((90.0..=510.0).contains(&tank.position.y));
        assert!(tank.speed >= 0.6 && tank.speed < 1.0);
        assert_eq!(tank.tread_offset, 0.0);
        assert!(tank.barrel_move_timer < 100);
    }

    assert!(left > 0, "no tanks spawned on the left");
    assert!(right > 0, "no tanks spawned on the right");
}

#[test]
fn test_spawn_one_sprite_width_off_screen() {
    let mut spawner = Spawner::from_seed(TankConfig::default(), 2);

    for _ in 0..50 {
        let tank = spawner.spawn(800.0, 600.0);
        let expected = match tank.position.x < 0.0 {
            true => -tank.sprite_width(),
            false => 800.0 + tank.sprite_width(),
        };
        assert_relative_eq!(tank.position.x, expected, epsilon = 1e-9);
    }
}

#[test]
fn test_spawn_initial_state() {
    let tank = Spawner::from_seed(TankConfig::default(), 3).spawn(1024.0, 768.0);

    let default_aim = -PI / 2.0 - PI / 20.0;
    assert_eq!(tank.current_barrel_angle, default_aim);
    assert_eq!(tank.target_barrel_angle, default_aim);
    assert_eq!(tank.scale, 0.35);
    assert_eq!(tank.barrel_turn_speed, 0.025);
    assert_eq!(tank.barrel_move_interval, 100);
    assert_relative_eq!(tank.radius, 24.5, epsilon = 1e-9);
    assert_eq!(tank.kind, EnemyKind::Tank);
}

#[test]
fn test_spawn_staggers_barrel_timers() {
    let mut spawner = Spawner::from_seed(TankConfig::default(), 4);
    let first = spawner.spawn(800.0, 600.0).barrel_move_timer;

    let staggered = (0..20).any(|_| spawner.spawn(800.0, 600.0).barrel_move_timer != first);
    assert!(staggered);
}

#[test]
fn test_spawn_uses_config() {
    let config = TankConfig {
        scale: 0.5,
        barrel_move_interval: 10,
        min_speed: 2.0,
        speed_range: 0.0,
        tread_speed: 2.5,
        ..Default::default()
    };
    let mut spawner = Spawner::new(config, ChaCha8Rng::seed_from_u64(5));

    for _ in 0..20 {
        let tank = spawner.spawn(400.0, 300.0);
        assert_eq!(tank.scale, 0.5);
        assert_eq!(tank.speed, 2.0);
        assert_eq!(tank.tread_speed, 2.5);
        assert!(tank.barrel_move_timer < 10);
        assert_relative_eq!(tank.radius, 35.0, epsilon = 1e-9);
    }
}

#[test]
fn test_same_seed_same_tanks() {
    let mut first = Spawner::from_seed(TankConfig::default(), 9);
    let mut second = Spawner::from_seed(TankConfig::default(), 9);

    for _ in 0..10 {
        assert_eq!(first.spawn(800.0, 600.0), second.spawn(800.0, 600.0));
    }
}

#[test]
fn test_degenerate_canvas_does_not_panic() {
    let tank = Spawner::from_seed(TankConfig::default(), 6).spawn(0.0, 0.0);
    assert_eq!(tank.position.y, 0.0);
}

/// Always yields the largest u64 and the smallest u32 sample
struct ExtremeRng;

impl RngCore for ExtremeRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0xff);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[test]
fn test_top_speed_is_exclusive() {
    let tank = Spawner::new(TankConfig::default(), ExtremeRng).spawn(800.0, 600.0);

    assert!(tank.speed >= 0.6, "speed {}", tank.speed);
    assert!(tank.speed < 1.0, "speed {}", tank.speed);
    assert!(tank.position.y < 600.0 * 0.85);
}

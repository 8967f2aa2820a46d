//! Up front configuration values

use std::f64::consts::PI;

/// Default scale for every spawned Tank
pub const TANK_SCALE_FACTOR: f64 = 0.35;

/// Default aim of the gun, slightly forward from straight up
pub const TANK_INITIAL_BARREL_ANGLE: f64 = -PI / 2.0 - PI / 20.0;
/// The direction the gun sweeps around when picking a new target
pub const TANK_BARREL_BASE_ANGLE: f64 = -PI / 2.0;
/// Maximum deviation from the base angle on a retarget (60 degrees each way)
pub const TANK_BARREL_SWEEP: f64 = PI / 3.0;
/// Radians per frame for barrel rotation
pub const TANK_BARREL_TURN_SPEED: f64 = 0.025;
/// Frames before picking a new random target angle
pub const TANK_BARREL_MOVE_INTERVAL: u32 = 100;
/// Visual speed of the treads scrolling
pub const TANK_TREAD_ANIMATION_SPEED: f64 = 1.1;

/// Multiplier applied to every animation delta while the game is in slow motion
pub const SLOW_MOTION_MULTIPLIER: f64 = 0.4;

/// Slowest a Tank may spawn with
pub const TANK_MIN_SPEED: f64 = 0.6;
/// Width of the random band added on top of [`TANK_MIN_SPEED`]
pub const TANK_SPEED_RANGE: f64 = 0.4;
/// Fraction of the canvas height (centered) that Tanks spawn within
pub const TANK_SPAWN_BAND: f64 = 0.7;

// Unscaled sprite geometry. Multiply by the Tank scale before drawing.

/// Overall width including the outline
pub const SPRITE_WIDTH: f64 = 160.0;
/// Overall height including the outline
pub const SPRITE_HEIGHT: f64 = 220.0;
/// Width of the main hull, also used for the collision radius
pub const HULL_WIDTH: f64 = 140.0;
/// Height of the main hull
pub const HULL_HEIGHT: f64 = 190.0;
/// Total height of the tread area
pub const TREAD_HEIGHT: f64 = 200.0;
/// Number of visible tread segments per track
pub const TREAD_SEGMENTS: usize = 10;
/// How far the turret center sits forward of the Tank center
pub const TURRET_OFFSET_Y: f64 = -15.0;
/// Additional forward offset of the gun pivot from the turret center
pub const GUN_PIVOT_OFFSET_Y: f64 = -5.0;

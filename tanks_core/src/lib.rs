//! Enemy Tank spawning, animation and drawing for the browser game
//!
//! A host owns the Tanks and, once per frame, calls [`Animator::advance`],
//! moves each Tank, then paints it with [`TankRenderer::draw`].

pub mod common;
pub mod render;
pub mod utils;

pub use common::{
    animator::Animator,
    config::{ConfigError, TankConfig, TankPalette},
    spawner::Spawner,
    tank::{EnemyKind, Tank},
};
pub use render::{DrawSurface, TankRenderer};

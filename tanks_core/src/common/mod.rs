pub mod animator;
pub mod config;
pub mod constants;
pub mod spawner;
pub mod tank;

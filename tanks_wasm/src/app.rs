use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tanks_core::{utils::Vector2, Animator, Spawner, Tank, TankConfig, TankPalette, TankRenderer};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::CanvasSurface;

/// Frames between new Tanks entering the screen
const SPAWN_INTERVAL: u32 = 150;
/// Most Tanks on screen at once
const MAX_TANKS: usize = 8;

/// A Tank driving across the screen
pub struct Enemy {
    pub tank: Tank,
    /// +1 when driving right, -1 when driving left
    heading: f64,
}

pub struct GameState {
    pub enemies: Vec<Enemy>,
    /// Whether the game is currently running in slow motion
    pub slow_motion: bool,
    spawner: Spawner,
    animator: Animator,
    renderer: TankRenderer,
    frames_until_spawn: u32,
}

impl GameState {
    pub fn new(config: TankConfig, palette: TankPalette) -> Self {
        Self::with_parts(
            Spawner::new(config, ChaCha8Rng::from_entropy()),
            Animator::new(config, ChaCha8Rng::from_entropy()),
            palette,
        )
    }

    /// Reproducible game state, spawns and retargets depend only on the seed
    pub fn with_seed(config: TankConfig, palette: TankPalette, seed: u64) -> Self {
        Self::with_parts(
            Spawner::from_seed(config, seed),
            Animator::from_seed(config, seed.wrapping_add(1)),
            palette,
        )
    }

    fn with_parts(spawner: Spawner, animator: Animator, palette: TankPalette) -> Self {
        Self {
            enemies: Vec::new(),
            slow_motion: false,
            spawner,
            animator,
            renderer: TankRenderer::new(palette),
            frames_until_spawn: 0,
        }
    }

    pub fn toggle_slow_motion(&mut self) {
        self.slow_motion = !self.slow_motion;
        log::info!("slow motion {}", if self.slow_motion { "on" } else { "off" });
    }

    /// Advance every Tank by one frame within a canvas of the given size
    pub fn update(&mut self, bounds: Vector2) {
        if self.frames_until_spawn == 0 {
            if self.enemies.len() < MAX_TANKS {
                let tank = self.spawner.spawn(bounds.x, bounds.y);
                // drive towards the opposite edge
                let heading = if tank.position.x < 0.0 { 1.0 } else { -1.0 };
                self.enemies.push(Enemy { tank, heading });
            }
            self.frames_until_spawn = SPAWN_INTERVAL;
        } else {
            self.frames_until_spawn -= 1;
        }

        let multiplier = self.animator.config().speed_multiplier(self.slow_motion);
        for enemy in &mut self.enemies {
            self.animator.advance(&mut enemy.tank, self.slow_motion);

            let step = Vector2::new(enemy.heading, 0.0).scale(enemy.tank.speed * multiplier);
            enemy.tank.position = enemy.tank.position.plus(&step);
        }

        let before = self.enemies.len();
        self.enemies.retain(|enemy| {
            let margin = 2.0 * enemy.tank.sprite_width();
            let x = enemy.tank.position.x;
            x > -margin && x < bounds.x + margin
        });
        if self.enemies.len() < before {
            log::debug!("{} tank(s) left the screen", before - self.enemies.len());
        }
    }
}

pub fn render(element: &HtmlCanvasElement, context: &CanvasRenderingContext2d, state: &GameState) {
    context.set_fill_style(&"#222".into());
    context.fill_rect(0.0, 0.0, element.width().into(), element.height().into());

    let mut surface = CanvasSurface(context);
    for enemy in &state.enemies {
        if let Err(e) = state.renderer.draw(&mut surface, &enemy.tank) {
            log::warn!("tank could not be drawn :: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Vector2 {
        Vector2::new(800.0, 600.0)
    }

    fn state() -> GameState {
        GameState::with_seed(TankConfig::default(), TankPalette::default(), 7)
    }

    #[test]
    fn first_frame_spawns_a_tank() {
        let mut state = state();
        state.update(bounds());
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn tanks_drive_onto_the_screen() {
        let mut state = state();
        state.update(bounds());
        let start = state.enemies[0].tank.position.x;

        for _ in 0..10 {
            state.update(bounds());
        }

        let now = state.enemies[0].tank.position.x;
        match start < 0.0 {
            true => assert!(now > start),
            false => assert!(now < start),
        }
    }

    #[test]
    fn slow_motion_slows_movement() {
        let mut state = state();
        state.update(bounds());
        let tank = &state.enemies[0].tank;
        let (start, speed) = (tank.position.x, tank.speed);

        state.toggle_slow_motion();
        state.update(bounds());

        let moved = (state.enemies[0].tank.position.x - start).abs();
        assert!((moved - 0.4 * speed).abs() < 1e-9);
    }

    #[test]
    fn tanks_past_the_far_edge_are_removed() {
        let mut state = state();
        state.update(bounds());
        state.enemies[0].tank.position.x = match state.enemies[0].heading > 0.0 {
            true => 2000.0,
            false => -2000.0,
        };

        state.update(bounds());

        assert!(state.enemies.is_empty());
    }

    #[test]
    fn spawning_is_capped() {
        let mut state = state();
        // a wide canvas keeps every tank on screen for the whole run
        let wide = Vector2::new(1.0e6, 600.0);

        for _ in 0..(SPAWN_INTERVAL as usize + 1) * (MAX_TANKS + 2) {
            state.update(wide);
        }

        assert_eq!(state.enemies.len(), MAX_TANKS);
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let mut first = state();
        let mut second = state();

        for _ in 0..(SPAWN_INTERVAL as usize * 3) {
            first.update(bounds());
            second.update(bounds());
        }

        assert_eq!(first.enemies.len(), second.enemies.len());
        for (a, b) in first.enemies.iter().zip(&second.enemies) {
            assert_eq!(a.tank, b.tank);
        }
    }
}

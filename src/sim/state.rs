//! Game state and core simulation types
//!
//! Everything the per-frame update reads or writes lives in [`GameState`].
//! Randomness is never stored here; callers pass their generator in.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::trail::Trail;
use crate::random_point_in;
use crate::tuning::Tuning;

/// Draws before `spawn_fruit` accepts a repeat of the previous position
const MAX_SPAWN_ATTEMPTS: usize = 16;

/// Whether the run is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Motion and collisions update every frame
    Running,
    /// Health ran out; the last frame stays frozen until reset
    Over,
}

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Axis of a bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Something noteworthy that happened during a tick (for sound, HUD, logs)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PaddleBounce { side: Side, axis: Axis },
    /// Head bounced off the top or bottom wall
    WallBounce,
    /// Head got past a paddle and hit a side wall
    PaddleMiss { side: Side },
    GreenFruitEaten { pos: Vec2 },
    RedFruitSpawned { pos: Vec2 },
    RedFruitEaten { pos: Vec2 },
    SelfCollision,
    GameOver,
}

/// A paddle; only `pos.y` is player controlled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
}

impl Paddle {
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
        }
    }

    /// Keep the whole paddle inside the court
    pub fn clamp(&mut self, limit: f32) {
        self.pos.y = self.pos.y.clamp(-limit, limit);
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: RunState,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    /// Snake body, head first
    pub trail: Trail,
    pub velocity: Vec2,
    /// Length the trail is trimmed toward
    pub target_length: f32,
    /// Growth not yet walked off; trimming pauses while it lasts
    pub length_update_buffer: f32,
    pub green_fruit: Vec2,
    pub red_fruit: Option<Vec2>,
    pub health: i32,
    /// Self collision seen on the previous frame
    pub last_collided: bool,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a running game with the given tuning
    pub fn new<R: Rng>(tuning: Tuning, rng: &mut R) -> Self {
        let initial_length = tuning.initial_snake_length;
        let mut state = Self {
            left_paddle: Paddle::new(-tuning.court_size.x + tuning.paddle_inset),
            right_paddle: Paddle::new(tuning.court_size.x - tuning.paddle_inset),
            trail: Trail::new(Vec2::ZERO, Vec2::new(initial_length, 0.0)),
            velocity: tuning.initial_velocity,
            target_length: initial_length,
            length_update_buffer: 0.0,
            green_fruit: Vec2::ZERO,
            red_fruit: None,
            health: tuning.initial_health,
            last_collided: false,
            phase: RunState::Running,
            events: Vec::new(),
            tuning,
        };
        state.reset(rng);
        state
    }

    /// Back to the initial state of a run
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let t = &self.tuning;
        let initial_length = t.initial_snake_length;

        self.trail = Trail::new(Vec2::ZERO, Vec2::new(initial_length, 0.0));
        self.velocity = t.initial_velocity;
        self.target_length = initial_length;
        self.length_update_buffer = 0.0;

        self.left_paddle = Paddle::new(-t.court_size.x + t.paddle_inset);
        self.right_paddle = Paddle::new(t.court_size.x - t.paddle_inset);

        self.green_fruit = random_point_in(rng, t.court_size, t.fruit_spawn_extent);
        self.red_fruit = None;

        self.health = t.initial_health;
        self.last_collided = false;
        self.phase = RunState::Running;
        self.events.clear();

        log::info!("New run: health {}, length {}", self.health, self.target_length);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == RunState::Running
    }

    /// Subtract health (negative damage heals); ends the run at zero or below
    pub fn apply_damage(&mut self, damage: i32) {
        self.health -= damage;
        log::debug!("Health {} ({:+})", self.health, -damage);

        if self.health <= 0 && self.phase == RunState::Running {
            self.phase = RunState::Over;
            self.events.push(GameEvent::GameOver);
            log::info!("Game over (length {:.1})", self.target_length);
        }
    }

    /// Pick a fruit position different from `previous`.
    ///
    /// Gives up after a few draws and keeps the last one, so a degenerate
    /// spawn area (zero extent or court) still returns.
    pub fn spawn_fruit<R: Rng>(&self, rng: &mut R, previous: Option<Vec2>) -> Vec2 {
        let t = &self.tuning;
        let mut pos = random_point_in(rng, t.court_size, t.fruit_spawn_extent);
        for _ in 1..MAX_SPAWN_ATTEMPTS {
            if Some(pos) != previous {
                break;
            }
            pos = random_point_in(rng, t.court_size, t.fruit_spawn_extent);
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_state() {
        let mut rng = Pcg32::seed_from_u64(7);
        let state = GameState::new(Tuning::default(), &mut rng);

        assert_eq!(state.phase, RunState::Running);
        assert_eq!(state.trail.len(), 2);
        assert!((state.trail.length() - 10.5).abs() < 1e-6);
        assert_eq!(state.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(state.health, 5);
        assert!(state.red_fruit.is_none());
        assert!((state.left_paddle.pos.x + 9.1).abs() < 1e-6);
        assert!((state.right_paddle.pos.x - 9.1).abs() < 1e-6);
    }

    #[test]
    fn test_green_fruit_spawns_inside_court() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new(Tuning::default(), &mut rng);
        for _ in 0..200 {
            state.reset(&mut rng);
            assert!(state.green_fruit.x.abs() <= 9.6 * 0.8 + 1e-4);
            assert!(state.green_fruit.y.abs() <= 6.0 * 0.8 + 1e-4);
        }
    }

    #[test]
    fn test_damage_to_zero_ends_run() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = GameState::new(Tuning::default(), &mut rng);

        state.apply_damage(4);
        assert_eq!(state.health, 1);
        assert!(state.is_running());

        state.apply_damage(1);
        assert_eq!(state.health, 0);
        assert_eq!(state.phase, RunState::Over);
        assert_eq!(state.events, vec![GameEvent::GameOver]);
    }

    #[test]
    fn test_heal_has_no_cap() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = GameState::new(Tuning::default(), &mut rng);
        state.apply_damage(-3);
        assert_eq!(state.health, 8);
    }

    #[test]
    fn test_reset_restores_initial_run() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut state = GameState::new(Tuning::default(), &mut rng);

        state.trail.insert_kink(Vec2::new(1.0, 1.0));
        state.target_length = 20.0;
        state.length_update_buffer = 3.0;
        state.red_fruit = Some(Vec2::ONE);
        state.last_collided = true;
        state.left_paddle.pos.y = 4.0;
        state.apply_damage(10);
        assert_eq!(state.phase, RunState::Over);

        state.reset(&mut rng);
        assert_eq!(state.phase, RunState::Running);
        assert_eq!(state.trail.len(), 2);
        assert!((state.trail.length() - state.tuning.initial_snake_length).abs() < 1e-6);
        assert_eq!(state.target_length, state.tuning.initial_snake_length);
        assert_eq!(state.length_update_buffer, 0.0);
        assert_eq!(state.health, state.tuning.initial_health);
        assert!(state.red_fruit.is_none());
        assert!(!state.last_collided);
        assert_eq!(state.left_paddle.pos.y, 0.0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_spawn_fruit_moves() {
        let mut rng = Pcg32::seed_from_u64(5);
        let state = GameState::new(Tuning::default(), &mut rng);
        let before = state.green_fruit;
        let after = state.spawn_fruit(&mut rng, Some(before));
        assert_ne!(before, after);
    }

    #[test]
    fn test_spawn_fruit_with_zero_extent_returns() {
        let tuning = Tuning {
            fruit_spawn_extent: 0.0,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(6);
        let state = GameState::new(tuning, &mut rng);
        assert_eq!(state.green_fruit, Vec2::ZERO);

        let pos = state.spawn_fruit(&mut rng, Some(state.green_fruit));
        assert_eq!(pos, Vec2::ZERO);
    }

    #[test]
    fn test_paddle_clamp() {
        let mut paddle = Paddle::new(9.1);
        paddle.pos.y = 7.0;
        paddle.clamp(5.0);
        assert_eq!(paddle.pos.y, 5.0);
        paddle.pos.y = -7.0;
        paddle.clamp(5.0);
        assert_eq!(paddle.pos.y, -5.0);
    }
}

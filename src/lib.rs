//! Snake Pong - Pong where the ball is a growing snake
//!
//! Core modules:
//! - `sim`: Frame simulation (motion, trail, collisions, lifecycle)
//! - `tuning`: Game balance values
//! - `input`: Discrete input events from the host
//! - `view`: Read-only snapshot and court-to-clip transform
//! - `renderer`: Colored triangle list for the host renderer
//! - `game`: Host-facing facade tying the above together

pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod view;

pub use game::Game;
pub use input::{InputEvent, Key};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Court half-extents
    pub const COURT_HALF_WIDTH: f32 = 9.6;
    pub const COURT_HALF_HEIGHT: f32 = 6.0;

    /// Paddle half-size
    pub const PADDLE_HALF_WIDTH: f32 = 0.2;
    pub const PADDLE_HALF_HEIGHT: f32 = 1.0;
    /// Distance from the side wall to the paddle center
    pub const PADDLE_INSET: f32 = 0.5;
    /// Left paddle movement per frame while W/S is held
    pub const PADDLE_KEY_STEP: f32 = 0.2;

    /// Snake body half-thickness
    pub const SNAKE_RADIUS: f32 = 0.2;
    pub const INITIAL_SNAKE_LENGTH: f32 = 10.5;

    /// Speed multiplier = BASE + GROWTH * target_length, capped
    pub const SPEED_BASE: f32 = 2.0;
    pub const SPEED_PER_LENGTH: f32 = 0.5;
    pub const SPEED_CAP: f32 = 7.5;

    /// Share of velocity.y replaced by the paddle offset on a side bounce
    pub const PADDLE_SPIN_BLEND: f32 = 0.75;

    pub const FRUIT_RADIUS: f32 = 0.3;
    pub const GREEN_FRUIT_LENGTH_INCREASE: f32 = 0.5;
    /// Per-frame chance of spawning a red fruit while none exists
    pub const RED_FRUIT_CHANCE: f32 = 0.101;
    pub const RED_FRUIT_HEAL: i32 = 1;
    /// Fruits spawn within this fraction of the court extents
    pub const FRUIT_SPAWN_EXTENT: f32 = 0.8;

    pub const INITIAL_HEALTH: i32 = 5;
    pub const COLLISION_DAMAGE: i32 = 2;
    pub const PADDLE_MISS_DAMAGE: i32 = 1;
}

/// Per-axis proximity test (a square, not a circle)
#[inline]
pub fn within_box(a: Vec2, b: Vec2, reach: f32) -> bool {
    (a.x - b.x).abs() < reach && (a.y - b.y).abs() < reach
}

/// Sample a point uniformly inside `extent` scaled by `fraction` on each axis
#[inline]
pub fn random_point_in<R: rand::Rng>(rng: &mut R, extent: Vec2, fraction: f32) -> Vec2 {
    let x = rng.random_range(-1.0..=1.0f32);
    let y = rng.random_range(-1.0..=1.0f32);
    Vec2::new(x, y) * extent * fraction
}

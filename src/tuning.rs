//! Game balance values
//!
//! Everything the simulation treats as a magic number lives here so the
//! collision code reads as geometry, not tuning. Defaults come from
//! [`crate::consts`]; tests build variants with struct update syntax.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Court half-extents
    pub court_size: Vec2,
    /// Paddle half-size
    pub paddle_size: Vec2,
    /// Paddle center distance from its side wall
    pub paddle_inset: f32,
    /// Left paddle step per frame
    pub paddle_key_step: f32,

    pub snake_radius: f32,
    pub initial_snake_length: f32,
    pub initial_velocity: Vec2,

    pub speed_base: f32,
    pub speed_per_length: f32,
    pub speed_cap: f32,
    pub paddle_spin_blend: f32,

    pub fruit_radius: f32,
    pub green_fruit_length_increase: f32,
    pub red_fruit_chance: f32,
    pub red_fruit_heal: i32,
    pub fruit_spawn_extent: f32,

    pub initial_health: i32,
    pub collision_damage: i32,
    pub paddle_miss_damage: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            court_size: Vec2::new(COURT_HALF_WIDTH, COURT_HALF_HEIGHT),
            paddle_size: Vec2::new(PADDLE_HALF_WIDTH, PADDLE_HALF_HEIGHT),
            paddle_inset: PADDLE_INSET,
            paddle_key_step: PADDLE_KEY_STEP,

            snake_radius: SNAKE_RADIUS,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            initial_velocity: Vec2::new(-1.0, 0.0),

            speed_base: SPEED_BASE,
            speed_per_length: SPEED_PER_LENGTH,
            speed_cap: SPEED_CAP,
            paddle_spin_blend: PADDLE_SPIN_BLEND,

            fruit_radius: FRUIT_RADIUS,
            green_fruit_length_increase: GREEN_FRUIT_LENGTH_INCREASE,
            red_fruit_chance: RED_FRUIT_CHANCE,
            red_fruit_heal: RED_FRUIT_HEAL,
            fruit_spawn_extent: FRUIT_SPAWN_EXTENT,

            initial_health: INITIAL_HEALTH,
            collision_damage: COLLISION_DAMAGE,
            paddle_miss_damage: PADDLE_MISS_DAMAGE,
        }
    }
}

impl Tuning {
    /// Snake head half-extent as a box
    #[inline]
    pub fn snake_size(&self) -> Vec2 {
        Vec2::splat(self.snake_radius)
    }

    /// Furthest the head center may travel from the court center on each axis
    #[inline]
    pub fn head_limit(&self) -> Vec2 {
        self.court_size - self.snake_size()
    }

    /// Largest |y| a paddle center may take
    #[inline]
    pub fn paddle_limit(&self) -> f32 {
        self.court_size.y - self.paddle_size.y
    }

    /// Head speed multiplier for a given target length
    pub fn speed_for_length(&self, target_length: f32) -> f32 {
        (self.speed_base + self.speed_per_length * target_length).clamp(0.0, self.speed_cap)
    }

    /// Reach of the fruit pickup test on each axis
    #[inline]
    pub fn pickup_reach(&self) -> f32 {
        self.snake_radius + self.fruit_radius
    }
}

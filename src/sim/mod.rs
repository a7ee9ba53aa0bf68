//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - Elapsed time comes in as a plain `f32`
//! - Randomness comes in as a caller-owned `rand::Rng`
//! - Collision checks run in one fixed order per frame

pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;
pub mod trail;

pub use collision::{box_overlap, point_line_distance, resolve};
pub use motion::advance;
pub use state::{Axis, GameEvent, GameState, Paddle, RunState, Side};
pub use tick::{TickInput, move_paddles, tick};
pub use trail::Trail;

//! Triangle list for the host renderer
//!
//! Builds court-space colored triangles from a [`Snapshot`]. The host pairs
//! them with [`crate::view::CourtTransform::court_to_clip`] and draws.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Vertex, colors};

use crate::view::{Snapshot, WALL_RADIUS};

/// Drop shadow offset (straight down)
const SHADOW_OFFSET: Vec2 = Vec2::new(0.0, -0.07);

/// Build all triangles for one frame, back to front
pub fn build_vertices(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(256 + snapshot.trail.len() * 6);
    let court = snapshot.court_size;

    // Shadows for walls and paddles
    for (center, half) in walls(court) {
        shapes::rectangle(&mut out, center + SHADOW_OFFSET, half, colors::SHADOW);
    }
    for paddle in [snapshot.left_paddle, snapshot.right_paddle] {
        shapes::rectangle(&mut out, paddle + SHADOW_OFFSET, snapshot.paddle_size, colors::SHADOW);
    }

    shapes::polyline(&mut out, &snapshot.trail, snapshot.snake_radius, colors::SNAKE);

    for (center, half) in walls(court) {
        shapes::rectangle(&mut out, center, half, colors::WALL);
    }
    for paddle in [snapshot.left_paddle, snapshot.right_paddle] {
        shapes::rectangle(&mut out, paddle, snapshot.paddle_size, colors::PADDLE);
    }

    let fruit_size = Vec2::splat(snapshot.fruit_radius);
    shapes::rectangle(&mut out, snapshot.green_fruit, fruit_size, colors::GREEN_FRUIT);
    if let Some(red) = snapshot.red_fruit {
        shapes::rectangle(&mut out, red, fruit_size, colors::RED_FRUIT);
    }

    // One heart per remaining life, in the strip above the court
    for i in 0..snapshot.health.max(0) {
        let pos = Vec2::new(
            -court.x + 0.5 + i as f32,
            court.y + 0.3 + 2.0 * WALL_RADIUS,
        );
        shapes::heart(&mut out, pos, colors::LIFE);
    }

    out
}

/// Center and half-size of the four court walls
fn walls(court: Vec2) -> [(Vec2, Vec2); 4] {
    let side = Vec2::new(WALL_RADIUS, court.y + 2.0 * WALL_RADIUS);
    let cap = Vec2::new(court.x, WALL_RADIUS);
    [
        (Vec2::new(-court.x - WALL_RADIUS, 0.0), side),
        (Vec2::new(court.x + WALL_RADIUS, 0.0), side),
        (Vec2::new(0.0, -court.y - WALL_RADIUS), cap),
        (Vec2::new(0.0, court.y + WALL_RADIUS), cap),
    ]
}

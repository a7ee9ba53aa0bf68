//! What the host renderer gets each frame
//!
//! A read-only [`Snapshot`] of the entities plus a [`CourtTransform`] that
//! fits the court (walls, padding and the lives strip) into clip space.

use glam::{Affine2, Mat4, UVec2, Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::sim::{GameState, RunState};

/// Half-thickness of the court walls
pub const WALL_RADIUS: f32 = 0.05;
/// Gap between the walls and the edge of the output surface
pub const PADDING: f32 = 0.14;
/// Extra room above the court for the lives display
pub const HUD_HEIGHT: f32 = 3.0;

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Trail points, head first
    pub trail: Vec<Vec2>,
    pub snake_radius: f32,
    pub court_size: Vec2,
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    pub paddle_size: Vec2,
    pub green_fruit: Vec2,
    pub red_fruit: Option<Vec2>,
    pub fruit_radius: f32,
    pub health: i32,
    pub phase: RunState,
}

impl Snapshot {
    pub fn of(state: &GameState) -> Self {
        let t = &state.tuning;
        Self {
            trail: state.trail.points().collect(),
            snake_radius: t.snake_radius,
            court_size: t.court_size,
            left_paddle: state.left_paddle.pos,
            right_paddle: state.right_paddle.pos,
            paddle_size: t.paddle_size,
            green_fruit: state.green_fruit,
            red_fruit: state.red_fruit,
            fruit_radius: t.fruit_radius,
            health: state.health,
            phase: state.phase,
        }
    }
}

/// Court space <-> clip space ([-1, 1] on both axes, +y up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtTransform {
    pub court_to_clip: Mat4,
    pub clip_to_court: Affine2,
}

impl CourtTransform {
    /// Fit the court into a drawable surface of `drawable_size` pixels,
    /// keeping units square.
    pub fn new(court_size: Vec2, drawable_size: UVec2) -> Self {
        let border = 2.0 * WALL_RADIUS + PADDING;
        let scene_min = -court_size - Vec2::splat(border);
        let scene_max = court_size + Vec2::new(border, border + HUD_HEIGHT);

        let aspect = drawable_size.x.max(1) as f32 / drawable_size.y.max(1) as f32;
        let extent = scene_max - scene_min;
        // x must fit in [-aspect, aspect], y in [-1, 1]
        let scale = (2.0 * aspect / extent.x).min(2.0 / extent.y);
        let center = 0.5 * (scene_max + scene_min);

        let court_to_clip = Mat4::from_cols(
            Vec4::new(scale / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(-center.x * (scale / aspect), -center.y * scale, 0.0, 1.0),
        );
        let clip_to_court = Affine2::from_cols(
            Vec2::new(aspect / scale, 0.0),
            Vec2::new(0.0, 1.0 / scale),
            center,
        );

        Self {
            court_to_clip,
            clip_to_court,
        }
    }

    #[inline]
    pub fn to_clip(&self, court: Vec2) -> Vec2 {
        self.court_to_clip.transform_point3(court.extend(0.0)).truncate()
    }

    #[inline]
    pub fn to_court(&self, clip: Vec2) -> Vec2 {
        self.clip_to_court.transform_point2(clip)
    }
}

//! Discrete input events from the host
//!
//! The host owns polling and window events; it hands over only what the
//! game reacts to. Pointer positions arrive in clip space.

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    /// Anything else (still restarts a finished run)
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer moved; clip-space position ([-1, 1], +y up)
    PointerMoved { clip: Vec2 },
    KeyDown(Key),
    KeyUp(Key),
}

/// Window pixel (top-left origin, +y down) to clip space, sampling the
/// pixel center
pub fn window_to_clip(pixel: Vec2, window_size: UVec2) -> Vec2 {
    let size = window_size.max(UVec2::ONE).as_vec2();
    Vec2::new(
        (pixel.x + 0.5) / size.x * 2.0 - 1.0,
        (pixel.y + 0.5) / size.y * -2.0 + 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_to_clip_corners() {
        let size = UVec2::new(800, 600);
        let top_left = window_to_clip(Vec2::ZERO, size);
        assert!(top_left.x < -0.99 && top_left.y > 0.99);

        let bottom_right = window_to_clip(Vec2::new(799.0, 599.0), size);
        assert!(bottom_right.x > 0.99 && bottom_right.y < -0.99);

        let center = window_to_clip(Vec2::new(399.5, 299.5), size);
        assert!(center.abs_diff_eq(Vec2::ZERO, 1e-6));
    }
}

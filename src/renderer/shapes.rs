//! Shape generation for 2D primitives
//!
//! Every shape is emitted as counter-clockwise triangles appended to a
//! caller-owned vertex list.

use glam::Vec2;

use super::vertex::Vertex;

fn quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: [u8; 4]) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, a, c, d] {
        out.push(Vertex::new(p.x, p.y, color));
    }
}

/// Axis-aligned rectangle from center and half-size
pub fn rectangle(out: &mut Vec<Vertex>, center: Vec2, half_size: Vec2, color: [u8; 4]) {
    quad(
        out,
        [
            center - half_size,
            center + Vec2::new(half_size.x, -half_size.y),
            center + half_size,
            center + Vec2::new(-half_size.x, half_size.y),
        ],
        color,
    );
}

/// Rectangle running from `a` to `b`.
///
/// `half_size.x` extends past both ends along the segment and `half_size.y`
/// is the half-thickness across it. Zero-length segments lie along +x.
pub fn segment(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, half_size: Vec2, color: [u8; 4]) {
    let dir = (b - a).try_normalize().unwrap_or(Vec2::X);
    let along = dir * half_size.x;
    let across = dir.perp() * half_size.y;
    quad(
        out,
        [
            a - along - across,
            b + along - across,
            b + along + across,
            a - along + across,
        ],
        color,
    );
}

/// Chain of segments through `points`, one per consecutive pair
pub fn polyline(out: &mut Vec<Vertex>, points: &[Vec2], radius: f32, color: [u8; 4]) {
    for pair in points.windows(2) {
        segment(out, pair[1], pair[0], Vec2::splat(radius), color);
    }
}

/// A small "V" heart whose point sits at `pos`
pub fn heart(out: &mut Vec<Vertex>, pos: Vec2, color: [u8; 4]) {
    let arm = Vec2::splat(0.2);
    segment(out, pos + Vec2::new(-0.2, 0.2), pos, arm, color);
    segment(out, pos + Vec2::new(0.2, 0.2), pos, arm, color);
}

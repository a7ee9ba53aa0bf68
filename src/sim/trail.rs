//! Snake body polyline
//!
//! The head is point 0 and the tail is the last point. The trail never holds
//! fewer than two points, so there is always at least one body segment.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Serialized as a plain point list; loading rejects fewer than two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct Trail {
    points: VecDeque<Vec2>,
}

impl TryFrom<Vec<Vec2>> for Trail {
    type Error = &'static str;

    fn try_from(points: Vec<Vec2>) -> Result<Self, Self::Error> {
        Self::from_points(points).ok_or("a trail needs at least two points")
    }
}

impl From<Trail> for Vec<Vec2> {
    fn from(trail: Trail) -> Self {
        trail.points.into()
    }
}

impl Trail {
    /// A straight two-point trail from `head` to `tail`
    pub fn new(head: Vec2, tail: Vec2) -> Self {
        let mut points = VecDeque::with_capacity(32);
        points.push_back(head);
        points.push_back(tail);
        Self { points }
    }

    /// Build a trail from an explicit point list (head first).
    ///
    /// Returns `None` when fewer than two points are given.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let points: VecDeque<Vec2> = points.into_iter().collect();
        if points.len() < 2 {
            return None;
        }
        Some(Self { points })
    }

    #[inline]
    pub fn head(&self) -> Vec2 {
        self.points[0]
    }

    #[inline]
    pub fn set_head(&mut self, head: Vec2) {
        self.points[0] = head;
    }

    #[inline]
    pub fn tail(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for the `len` convention
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Points from head to tail
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Consecutive point pairs from head to tail
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.iter().zip(self.points.iter().skip(1)).map(|(a, b)| (*a, *b))
    }

    /// Total polyline length head to tail
    pub fn length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Place a corner vertex directly behind the head.
    ///
    /// Used on bounces: the head keeps moving from `point` in its new
    /// direction, so the body shows a sharp corner there.
    pub fn insert_kink(&mut self, point: Vec2) {
        self.points.insert(1, point);
    }

    /// Fold the front of the trail back across a wall.
    ///
    /// Every leading point past `boundary` on `axis` is mirrored across it,
    /// and a corner goes where the body crossed. Path length is unchanged.
    /// Returns the corner.
    pub fn reflect_front(&mut self, axis: usize, boundary: f32) -> Vec2 {
        let side = if boundary < 0.0 { -1.0 } else { 1.0 };
        let n = self.points.len();
        let crossed = self
            .points
            .iter()
            .take_while(|p| (p[axis] - boundary) * side > 0.0)
            .count()
            .clamp(1, n - 1);

        let corner = crossing(self.points[crossed], self.points[crossed - 1], axis, boundary);
        for p in self.points.range_mut(..crossed) {
            p[axis] = 2.0 * boundary - p[axis];
        }
        self.points.insert(crossed, corner);
        corner
    }

    /// Shorten the trail by `distance` of path length, eating from the tail.
    ///
    /// Whole tail segments are dropped while they are shorter than what is
    /// left to remove; the last one is cut at the exact remaining distance.
    /// Stops at two points.
    pub fn trim(&mut self, mut distance: f32) {
        while distance > 0.0 {
            let n = self.points.len();
            let end = self.points[n - 1];
            let penult = self.points[n - 2];
            let segment = end.distance(penult);

            if distance > segment && n > 2 {
                distance -= segment;
                self.points.pop_back();
            } else {
                let t = if segment > 0.0 {
                    (distance / segment).min(1.0)
                } else {
                    0.0
                };
                self.points[n - 1] = end.lerp(penult, t);
                break;
            }
        }
    }
}

/// Where the segment `from`-`to` meets `boundary` on `axis`
fn crossing(from: Vec2, to: Vec2, axis: usize, boundary: f32) -> Vec2 {
    let travel = to[axis] - from[axis];
    let mut point = if travel.abs() > f32::EPSILON {
        let t = ((boundary - from[axis]) / travel).clamp(0.0, 1.0);
        from.lerp(to, t)
    } else {
        to
    };
    point[axis] = boundary;
    point
}

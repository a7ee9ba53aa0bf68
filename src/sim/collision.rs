//! Collision detection and response for the snake head
//!
//! Checks run once per frame in a fixed order: paddles, walls, green fruit,
//! red fruit, then the snake's own body. Later checks see the head position
//! produced by earlier ones.

use glam::Vec2;
use rand::Rng;

use super::state::{Axis, GameEvent, GameState, Side};
use crate::within_box;

/// Run every head collision check for this frame
pub fn resolve<R: Rng>(state: &mut GameState, rng: &mut R) {
    paddle_vs_head(state, Side::Left);
    paddle_vs_head(state, Side::Right);
    walls_vs_head(state);
    green_fruit_vs_head(state, rng);
    red_fruit_vs_head(state, rng);
    self_vs_head(state);
}

/// Size of the overlap between two boxes given as center and half-size.
///
/// Touching edges count as a zero-width overlap.
pub fn box_overlap(a: Vec2, a_half: Vec2, b: Vec2, b_half: Vec2) -> Option<Vec2> {
    let min = (a - a_half).max(b - b_half);
    let max = (a + a_half).min(b + b_half);
    if min.x > max.x || min.y > max.y {
        return None;
    }
    Some(max - min)
}

/// Distance from `p` to the infinite line through `a` and `b`.
///
/// `None` for a degenerate (zero-length) segment.
pub fn point_line_distance(p: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let ab = b - a;
    let len = ab.length();
    if len <= f32::EPSILON {
        return None;
    }
    Some(ab.perp_dot(p - a).abs() / len)
}

/// Bounce the head off a paddle, pushing it out along the shallower axis
pub fn paddle_vs_head(state: &mut GameState, side: Side) {
    let paddle = match side {
        Side::Left => state.left_paddle.pos,
        Side::Right => state.right_paddle.pos,
    };
    let paddle_size = state.tuning.paddle_size;
    let snake_size = state.tuning.snake_size();
    let mut head = state.trail.head();

    let Some(overlap) = box_overlap(paddle, paddle_size, head, snake_size) else {
        return;
    };

    let axis = if overlap.x > overlap.y {
        // Wider overlap in x: came in over the top or bottom edge
        if head.y > paddle.y {
            head.y = paddle.y + paddle_size.y + snake_size.y;
            state.velocity.y = state.velocity.y.abs();
        } else {
            head.y = paddle.y - paddle_size.y - snake_size.y;
            state.velocity.y = -state.velocity.y.abs();
        }
        Axis::Y
    } else {
        if head.x > paddle.x {
            head.x = paddle.x + paddle_size.x + snake_size.x;
            state.velocity.x = state.velocity.x.abs();
        } else {
            head.x = paddle.x - paddle_size.x - snake_size.x;
            state.velocity.x = -state.velocity.x.abs();
        }

        // Spin: off-center hits steer the snake
        let offset = (head.y - paddle.y) / (paddle_size.y + snake_size.y);
        let blend = state.tuning.paddle_spin_blend;
        state.velocity.y += (offset - state.velocity.y) * blend;
        Axis::X
    };

    state.trail.set_head(head);
    state.trail.insert_kink(head);
    state.events.push(GameEvent::PaddleBounce { side, axis });
    log::trace!("{:?} paddle bounce on {:?}, velocity {}", side, axis, state.velocity);
}

/// Fold the head back inside the court on one axis.
///
/// Returns the boundary that was crossed, if any.
fn reflect_off_wall(state: &mut GameState, axis: usize) -> Option<f32> {
    let limit = state.tuning.head_limit()[axis];
    let head = state.trail.head();

    let boundary = if head[axis] > limit {
        limit
    } else if head[axis] < -limit {
        -limit
    } else {
        return None;
    };

    state.trail.reflect_front(axis, boundary);

    // Only flip when still heading out
    if state.velocity[axis] * boundary > 0.0 {
        state.velocity[axis] = -state.velocity[axis];
    }

    Some(boundary)
}

/// Top/bottom walls bounce; side walls bounce and hurt
pub fn walls_vs_head(state: &mut GameState) {
    if reflect_off_wall(state, 1).is_some() {
        state.events.push(GameEvent::WallBounce);
        log::trace!("Wall bounce at {}", state.trail.head());
    }

    if let Some(boundary) = reflect_off_wall(state, 0) {
        let side = if boundary > 0.0 { Side::Right } else { Side::Left };
        state.events.push(GameEvent::PaddleMiss { side });
        log::debug!("Missed with the {:?} paddle", side);
        state.apply_damage(state.tuning.paddle_miss_damage);
    }
}

/// Eat the green fruit: respawn it and bank growth
pub fn green_fruit_vs_head<R: Rng>(state: &mut GameState, rng: &mut R) {
    let head = state.trail.head();
    if !within_box(head, state.green_fruit, state.tuning.pickup_reach()) {
        return;
    }

    let eaten = state.green_fruit;
    state.green_fruit = state.spawn_fruit(rng, Some(eaten));

    let growth = state.tuning.green_fruit_length_increase;
    state.target_length += growth;
    state.length_update_buffer += growth;

    state.events.push(GameEvent::GreenFruitEaten { pos: eaten });
    log::debug!("Green fruit eaten, length now {:.1}", state.target_length);
}

/// Eat the red fruit if there is one, otherwise maybe spawn one
pub fn red_fruit_vs_head<R: Rng>(state: &mut GameState, rng: &mut R) {
    match state.red_fruit {
        Some(pos) => {
            if within_box(state.trail.head(), pos, state.tuning.pickup_reach()) {
                state.red_fruit = None;
                state.events.push(GameEvent::RedFruitEaten { pos });
                log::debug!("Red fruit eaten");
                state.apply_damage(-state.tuning.red_fruit_heal);
            }
        }
        None => {
            if rng.random::<f32>() < state.tuning.red_fruit_chance {
                let pos = state.spawn_fruit(rng, None);
                state.red_fruit = Some(pos);
                state.events.push(GameEvent::RedFruitSpawned { pos });
                log::debug!("Red fruit spawned at {}", pos);
            }
        }
    }
}

/// Head against its own body.
///
/// The segment right behind the head is never tested. Distance is measured
/// to the infinite line through each segment, not the segment itself.
/// Damage lands only on the first frame of contact.
pub fn self_vs_head(state: &mut GameState) {
    if state.trail.len() <= 3 {
        state.last_collided = false;
        return;
    }

    let head = state.trail.head();
    let reach = 2.0 * state.tuning.snake_radius;
    let hit = state
        .trail
        .segments()
        .skip(2)
        .any(|(a, b)| point_line_distance(head, a, b).is_some_and(|d| d < reach));

    if hit && !state.last_collided {
        state.events.push(GameEvent::SelfCollision);
        log::debug!("Self collision");
        state.apply_damage(state.tuning.collision_damage);
    }
    state.last_collided = hit;
}

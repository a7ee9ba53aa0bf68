//! Head motion and trail length upkeep
//!
//! The head moves along the raw velocity scaled by a length-dependent speed.
//! The tail is then trimmed by the same distance unless banked growth
//! (`length_update_buffer`) still covers it, which is how pickups lengthen
//! the snake without touching the body geometry.

use super::state::GameState;

/// Advance the head by `elapsed` seconds and keep the trail at target length
pub fn advance(state: &mut GameState, elapsed: f32) {
    let speed = state.tuning.speed_for_length(state.target_length);
    let movement = elapsed * speed * state.velocity;

    let head = state.trail.head() + movement;
    state.trail.set_head(head);

    let move_length = movement.length();
    if move_length > state.length_update_buffer {
        let trim = move_length - state.length_update_buffer;
        state.length_update_buffer = 0.0;
        state.trail.trim(trim);
    } else {
        state.length_update_buffer -= move_length;
    }
}

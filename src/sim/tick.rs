//! Per-frame simulation step
//!
//! Paddles, then motion, then collisions. Nothing moves once the run is over.

use rand::Rng;

use super::collision::resolve;
use super::motion::advance;
use super::state::GameState;

/// Held controls for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// W held: left paddle up
    pub move_up: bool,
    /// S held: left paddle down
    pub move_down: bool,
    /// Court-space y the right paddle follows (from the pointer)
    pub pointer_y: Option<f32>,
}

/// Advance the game state by `elapsed` seconds
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, elapsed: f32, rng: &mut R) {
    state.events.clear();

    if !state.is_running() {
        return;
    }

    move_paddles(state, input);
    advance(state, elapsed);
    resolve(state, rng);
}

/// Apply held keys and pointer, then keep both paddles inside the court
pub fn move_paddles(state: &mut GameState, input: &TickInput) {
    let step = state.tuning.paddle_key_step;
    if input.move_up {
        state.left_paddle.pos.y += step;
    } else if input.move_down {
        state.left_paddle.pos.y -= step;
    }

    if let Some(y) = input.pointer_y {
        state.right_paddle.pos.y = y;
    }

    let limit = state.tuning.paddle_limit();
    state.left_paddle.clamp(limit);
    state.right_paddle.clamp(limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameEvent, RunState};
    use crate::sim::Trail;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 60.0;

    fn new_game(seed: u64) -> (GameState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(Tuning::default(), &mut rng);
        (state, rng)
    }

    #[test]
    fn test_left_paddle_keys() {
        let (mut state, mut rng) = new_game(1);
        let up = TickInput {
            move_up: true,
            ..Default::default()
        };
        tick(&mut state, &up, DT, &mut rng);
        assert!((state.left_paddle.pos.y - 0.2).abs() < 1e-6);

        let down = TickInput {
            move_down: true,
            ..Default::default()
        };
        tick(&mut state, &down, DT, &mut rng);
        tick(&mut state, &down, DT, &mut rng);
        assert!((state.left_paddle.pos.y + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_paddle_is_clamped() {
        let (mut state, mut rng) = new_game(2);
        let input = TickInput {
            pointer_y: Some(100.0),
            ..Default::default()
        };
        tick(&mut state, &input, DT, &mut rng);
        assert_eq!(state.right_paddle.pos.y, 5.0);
    }

    #[test]
    fn test_over_freezes_everything() {
        let (mut state, mut rng) = new_game(3);
        state.apply_damage(state.health);
        assert_eq!(state.phase, RunState::Over);

        let frozen = state.trail.clone();
        let input = TickInput {
            move_up: true,
            pointer_y: Some(3.0),
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &input, DT, &mut rng);
        }
        assert_eq!(state.trail, frozen);
        assert_eq!(state.left_paddle.pos.y, 0.0);
        assert_eq!(state.right_paddle.pos.y, 0.0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_repeated_misses_end_run_then_stop() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut state = GameState::new(
            Tuning {
                red_fruit_chance: 0.0,
                ..Default::default()
            },
            &mut rng,
        );
        state.green_fruit = Vec2::new(0.0, 4.5);

        // Run straight at the right wall, low on the court, paddles out of the way
        state.trail = Trail::new(Vec2::new(0.0, -4.5), Vec2::new(-10.5, -4.5));
        state.velocity = Vec2::new(1.0, 0.0);
        let input = TickInput {
            pointer_y: Some(5.0),
            ..Default::default()
        };

        let mut frames = 0;
        let mut saw_game_over = false;
        while state.is_running() && frames < 10_000 {
            tick(&mut state, &input, DT, &mut rng);
            saw_game_over |= state.events.contains(&GameEvent::GameOver);
            frames += 1;
        }

        assert_eq!(state.phase, RunState::Over);
        assert!(saw_game_over);
        assert!(state.health <= 0);

        let frozen = state.trail.clone();
        tick(&mut state, &input, DT, &mut rng);
        assert_eq!(state.trail, frozen);
    }

    #[test]
    fn test_determinism() {
        let (mut a, mut rng_a) = new_game(99);
        let (mut b, mut rng_b) = new_game(99);

        let inputs = [
            TickInput {
                move_up: true,
                ..Default::default()
            },
            TickInput {
                pointer_y: Some(-2.0),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input, DT, &mut rng_a);
            tick(&mut b, input, DT, &mut rng_b);
        }

        assert_eq!(a.trail, b.trail);
        assert_eq!(a.green_fruit, b.green_fruit);
        assert_eq!(a.red_fruit, b.red_fruit);
        assert_eq!(a.health, b.health);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sim::motion::advance;
    use crate::tuning::Tuning;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    proptest! {
        #[test]
        fn prop_paddles_stay_in_court(
            seed in any::<u64>(),
            frames in prop::collection::vec(
                (any::<bool>(), any::<bool>(), prop::option::of(-20.0f32..20.0), 0.0f32..0.05),
                1..300,
            )
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = GameState::new(Tuning::default(), &mut rng);
            let limit = state.tuning.paddle_limit();

            for (move_up, move_down, pointer_y, dt) in frames {
                let input = TickInput { move_up, move_down, pointer_y };
                tick(&mut state, &input, dt, &mut rng);
                prop_assert!(state.left_paddle.pos.y.abs() <= limit);
                prop_assert!(state.right_paddle.pos.y.abs() <= limit);
            }
        }

        #[test]
        fn prop_trail_length_is_conserved(
            seed in any::<u64>(),
            steps in prop::collection::vec((0.0f32..0.05, any::<bool>()), 1..200)
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = GameState::new(Tuning::default(), &mut rng);
            let growth = state.tuning.green_fruit_length_increase;

            for (dt, grow) in steps {
                if grow {
                    state.target_length += growth;
                    state.length_update_buffer += growth;
                }
                advance(&mut state, dt);
                let total = state.trail.length() + state.length_update_buffer;
                let tolerance = 1e-3 * state.target_length.max(10.0);
                prop_assert!(
                    (total - state.target_length).abs() < tolerance,
                    "trail {} + buffer {} != target {}",
                    state.trail.length(),
                    state.length_update_buffer,
                    state.target_length
                );
                prop_assert!(state.trail.len() >= 2);
            }
        }

        #[test]
        fn prop_trail_length_survives_wall_bounces(
            seed in any::<u64>(),
            angle in 0.0f32..std::f32::consts::TAU,
            steps in prop::collection::vec(0.0f32..0.05, 1..400)
        ) {
            // Paddles parked outside the court so only walls bend the trail
            let tuning = Tuning {
                paddle_inset: -5.0,
                initial_health: 1_000_000,
                ..Tuning::default()
            };
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = GameState::new(tuning, &mut rng);
            state.velocity = glam::Vec2::from_angle(angle);
            let limit = state.tuning.head_limit();

            for dt in steps {
                tick(&mut state, &TickInput::default(), dt, &mut rng);

                let total = state.trail.length() + state.length_update_buffer;
                let tolerance = 1e-3 * state.target_length.max(10.0);
                prop_assert!(
                    (total - state.target_length).abs() < tolerance,
                    "trail {} + buffer {} != target {}",
                    state.trail.length(),
                    state.length_update_buffer,
                    state.target_length
                );
                let head = state.trail.head();
                prop_assert!(head.x.abs() <= limit.x + 1e-4 && head.y.abs() <= limit.y + 1e-4);
            }
        }
    }
}

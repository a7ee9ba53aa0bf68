//! Snake Pong headless driver
//!
//! Plays a run with a simple autopilot at a fixed 60 Hz and prints the last
//! frame's snapshot as JSON. Useful for smoke-testing the simulation without
//! a window: `RUST_LOG=debug cargo run -- <seed> <frames>`.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::{UVec2, Vec2};
use snake_pong::sim::{GameEvent, RunState};
use snake_pong::{Game, InputEvent, Key};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u32 = 60 * 60;
const DRAWABLE: UVec2 = UVec2::new(1280, 720);

/// Steer both paddles toward the snake head
fn autopilot(game: &mut Game, clip_head: Vec2) {
    let head = game.state().trail.head();
    let left_y = game.state().left_paddle.pos.y;
    let held = game.input().clone();

    let dead_zone = game.state().tuning.paddle_key_step;
    if head.y > left_y + dead_zone && !held.move_up {
        game.handle_event(InputEvent::KeyDown(Key::W));
    } else if head.y < left_y - dead_zone && !held.move_down {
        game.handle_event(InputEvent::KeyDown(Key::S));
    } else if (head.y - left_y).abs() <= dead_zone {
        game.handle_event(InputEvent::KeyUp(Key::W));
        game.handle_event(InputEvent::KeyUp(Key::S));
    }

    game.handle_event(InputEvent::PointerMoved { clip: clip_head });
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    log::info!("Snake Pong (headless) starting: seed {}, {} frames", seed, frames);

    let mut game = Game::new(seed);
    let mut frame = game.frame(DRAWABLE);
    let mut fruits = 0u32;
    let mut misses = 0u32;

    for n in 0..frames {
        let clip_head = frame.transform.to_clip(game.state().trail.head());
        autopilot(&mut game, clip_head);
        game.update(FRAME_DT);

        for event in &game.state().events {
            match event {
                GameEvent::GreenFruitEaten { .. } => fruits += 1,
                GameEvent::PaddleMiss { .. } => misses += 1,
                GameEvent::GameOver => log::info!("Run ended on frame {}", n),
                _ => {}
            }
        }

        frame = game.frame(DRAWABLE);
        if game.state().phase == RunState::Over {
            break;
        }
    }

    log::info!(
        "Done: health {}, length {:.1}, {} fruit, {} misses, {} triangles",
        game.state().health,
        game.state().target_length,
        fruits,
        misses,
        frame.vertices.len() / 3
    );

    match serde_json::to_string_pretty(&frame.snapshot) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}

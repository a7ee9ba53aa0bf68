//! Host-facing game object
//!
//! Owns the simulation state, the random generator, the held controls and
//! the last view transform. The host calls [`Game::handle_event`] for each
//! input event, [`Game::update`] once per frame, then [`Game::frame`] to
//! get something to draw.

use glam::UVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::input::{InputEvent, Key};
use crate::renderer::{Vertex, build_vertices};
use crate::sim::{GameState, TickInput, tick};
use crate::tuning::Tuning;
use crate::view::{CourtTransform, Snapshot};

/// Drawable size assumed until the host asks for its first frame
const DEFAULT_DRAWABLE: UVec2 = UVec2::new(1280, 720);

/// Everything the host renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub snapshot: Snapshot,
    pub transform: CourtTransform,
    /// Court-space triangles; draw with `transform.court_to_clip`
    pub vertices: Vec<Vertex>,
}

pub struct Game {
    state: GameState,
    rng: Pcg32,
    input: TickInput,
    view: CourtTransform,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let view = CourtTransform::new(tuning.court_size, DEFAULT_DRAWABLE);
        let state = GameState::new(tuning, &mut rng);
        log::info!("Game created with seed {}", seed);
        Self {
            state,
            rng,
            input: TickInput::default(),
            view,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted setups and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn input(&self) -> &TickInput {
        &self.input
    }

    /// Apply one input event. Returns true if the game reacted to it.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if !self.state.is_running() {
            return match event {
                InputEvent::KeyDown(_) => {
                    self.restart();
                    true
                }
                _ => false,
            };
        }

        match event {
            InputEvent::PointerMoved { clip } => {
                self.input.pointer_y = Some(self.view.to_court(clip).y);
            }
            InputEvent::KeyDown(Key::W) => {
                self.input.move_up = true;
                self.input.move_down = false;
            }
            InputEvent::KeyUp(Key::W) => self.input.move_up = false,
            InputEvent::KeyDown(Key::S) => {
                self.input.move_down = true;
                self.input.move_up = false;
            }
            InputEvent::KeyUp(Key::S) => self.input.move_down = false,
            InputEvent::KeyDown(Key::Other) | InputEvent::KeyUp(Key::Other) => return false,
        }
        true
    }

    /// Advance the simulation by `elapsed` seconds
    pub fn update(&mut self, elapsed: f32) {
        tick(&mut self.state, &self.input, elapsed, &mut self.rng);
        for event in &self.state.events {
            log::trace!("{:?}", event);
        }
    }

    /// Snapshot, transform and triangles for a surface of `drawable_size`.
    ///
    /// The transform is kept for mapping later pointer events.
    pub fn frame(&mut self, drawable_size: UVec2) -> Frame {
        self.view = CourtTransform::new(self.state.tuning.court_size, drawable_size);
        let snapshot = Snapshot::of(&self.state);
        let vertices = build_vertices(&snapshot);
        Frame {
            snapshot,
            transform: self.view,
            vertices,
        }
    }

    /// Start a fresh run
    pub fn restart(&mut self) {
        self.state.reset(&mut self.rng);
        self.input = TickInput::default();
    }
}

//! Frame driver
//!
//! One `step` is one frame: poll input, advance the simulation, render,
//! then settle the round. `run` repeats that until quit.

use rand_pcg::Pcg32;

use crate::platform::{FrameClock, InputSource};
use crate::renderer::{Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{Arena, FrameOutcome, GameEvent, GamePhase, GameState, check_round_over, tick};

/// Totals reported when `run` returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub rounds_lost: u32,
    pub paddle_hits: u64,
    /// Stopped on a quit signal rather than the frame limit
    pub quit: bool,
}

/// Owns the game state and drives it frame by frame
#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Build from settings; a missing seed is taken from the system clock
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        log::info!("Game initialized with seed: {}", seed);
        Self::from_state(GameState::new(Arena::from_settings(settings), seed))
    }

    /// Build with an explicit serve RNG
    pub fn with_rng(settings: &Settings, rng: Pcg32) -> Self {
        Self::from_state(GameState::with_rng(Arena::from_settings(settings), rng))
    }

    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scenario setup
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Run a single frame
    pub fn step(
        &mut self,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
    ) -> FrameOutcome {
        let frame_input = input.poll(&self.state);
        let mut outcome = tick(&mut self.state, &frame_input);
        if outcome.quit {
            return outcome;
        }

        draw_frame(&self.state, renderer);

        if let Some(event) = check_round_over(&mut self.state) {
            outcome.events.push(event);
        }
        outcome
    }

    /// Run frames until quit, or until `max_frames` when non-zero.
    ///
    /// With a clock, each frame is paced to the clock's rate and the
    /// measured rate is sent to the renderer as the caption.
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
        mut clock: Option<&mut FrameClock>,
        max_frames: u64,
    ) -> RunSummary {
        let mut summary = RunSummary::default();

        while max_frames == 0 || summary.frames < max_frames {
            let outcome = self.step(input, renderer);
            if outcome.quit {
                summary.quit = true;
                break;
            }
            summary.frames += 1;
            for event in &outcome.events {
                match event {
                    GameEvent::PaddleHit(_) => summary.paddle_hits += 1,
                    GameEvent::RoundLost { .. } => summary.rounds_lost += 1,
                    _ => {}
                }
            }

            if let Some(clock) = clock.as_deref_mut() {
                clock.tick();
                renderer.caption(&clock.caption());
            }
        }

        log::info!(
            "Stopped after {} frames: {} rounds lost, {} paddle hits",
            summary.frames,
            summary.rounds_lost,
            summary.paddle_hits
        );
        summary
    }
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

//! Input sources that need no window

use std::collections::VecDeque;

use super::InputSource;
use crate::sim::{FrameInput, GamePhase, GameState};

/// Replays a fixed list of frame inputs, then reports neutral input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn push(&mut self, input: FrameInput) {
        self.frames.push_back(input);
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> FrameInput {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Demo mode: serves after a short pause and steers the player paddle
/// toward the ball, with a slow wobble so rounds eventually end.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Idle frames to wait before pressing start
    pub serve_delay: u32,
    idle_frames: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(30)
    }
}

impl Autopilot {
    pub fn new(serve_delay: u32) -> Self {
        Self {
            serve_delay,
            idle_frames: 0,
        }
    }

    /// Vertical aim point for the paddle center
    fn aim(state: &GameState) -> f32 {
        let t = state.frame as f32 * 0.01;
        let wobble = t.sin() * 0.3 + (t * 0.7).sin() * 0.25;
        state.ball.rect.center_y() + wobble * state.player.rect.height
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> FrameInput {
        match state.phase {
            GamePhase::Idle => {
                self.idle_frames += 1;
                if self.idle_frames > self.serve_delay {
                    self.idle_frames = 0;
                    FrameInput {
                        confirm: true,
                        ..Default::default()
                    }
                } else {
                    FrameInput::default()
                }
            }
            GamePhase::Running => {
                let offset = Self::aim(state) - state.player.rect.center_y();
                let deadzone = state.player.speed;
                FrameInput {
                    up: offset < -deadzone,
                    down: offset > deadzone,
                    ..Default::default()
                }
            }
        }
    }
}

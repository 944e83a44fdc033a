//! Platform abstraction layer
//!
//! Handles the pieces the simulation treats as external:
//! - Input events (`InputSource`)
//! - Frame pacing and FPS measurement (`FrameClock`)

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{Autopilot, ScriptedInput};

use crate::sim::{FrameInput, GameState};

/// Something that can be polled once per frame for input signals.
///
/// Sources may look at the game state; a keyboard ignores it, the demo
/// autopilot uses it to chase the ball.
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> FrameInput;
}

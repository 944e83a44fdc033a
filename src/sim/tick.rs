//! One simulation frame
//!
//! Advances the phase machine and, while running, every entity in a fixed
//! order. Called once per rendered frame; never blocks.

use super::entity::EntityKind;
use super::policy::{Steer, reflect_if_colliding, update_ball, update_enemy, update_player};
use super::state::{GamePhase, GameState};

/// Input signals for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Up key held
    pub up: bool,
    /// Down key held
    pub down: bool,
    /// Start pressed this frame (edge)
    pub confirm: bool,
    /// Back-to-idle pressed this frame (edge)
    pub cancel: bool,
    /// Window closed / quit requested
    pub quit: bool,
}

impl FrameInput {
    pub fn steer(&self) -> Steer {
        Steer::from_held(self.up, self.down)
    }
}

/// Things that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Idle -> Running
    Started,
    /// Running -> Idle on the cancel signal
    Cancelled,
    /// Ball reflected off a paddle
    PaddleHit(EntityKind),
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball got past the player; back to idle
    RoundLost { rally: u32, rounds_lost: u32 },
}

/// Result of a frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub events: Vec<GameEvent>,
    /// The driver should stop
    pub quit: bool,
}

/// Advance the game state by one frame.
///
/// Handles the phase signals and, when running, the entity updates. The
/// round-loss check is separate (`check_round_over`) so the driver can
/// render the frame in between.
pub fn tick(state: &mut GameState, input: &FrameInput) -> FrameOutcome {
    let mut outcome = FrameOutcome::default();

    if input.quit {
        log::info!("Quit requested");
        outcome.quit = true;
        return outcome;
    }

    match state.phase {
        GamePhase::Idle => {
            if input.confirm {
                state.phase = GamePhase::Running;
                outcome.events.push(GameEvent::Started);
                log::info!(
                    "Round {} started, serve {:?}",
                    state.rounds_lost + 1,
                    state.ball.direction
                );
            }
        }

        GamePhase::Running => {
            if input.cancel {
                state.enter_idle();
                outcome.events.push(GameEvent::Cancelled);
                log::info!("Round cancelled");
                return outcome;
            }

            state.frame += 1;
            let arena = state.arena;

            update_player(&mut state.player, input.steer(), &arena);

            if update_ball(&mut state.ball, &arena) {
                outcome.events.push(GameEvent::WallBounce);
                log::debug!("Wall bounce at {:?}", state.ball.rect.center());
            }

            for paddle in [&state.player, &state.enemy] {
                if reflect_if_colliding(&mut state.ball, paddle) {
                    state.rally += 1;
                    outcome.events.push(GameEvent::PaddleHit(paddle.kind));
                    log::debug!("{:?} hit, rally {}", paddle.kind, state.rally);
                }
            }

            update_enemy(&mut state.enemy, &state.ball.rect, &arena);
        }
    }

    outcome
}

/// End-of-frame check: a ball left of the player ends the round.
///
/// Returns the loss event after resetting to idle.
pub fn check_round_over(state: &mut GameState) -> Option<GameEvent> {
    if state.phase != GamePhase::Running || !state.round_lost() {
        return None;
    }

    state.rounds_lost += 1;
    let event = GameEvent::RoundLost {
        rally: state.rally,
        rounds_lost: state.rounds_lost,
    };
    log::info!(
        "Round lost after {} paddle hits ({} total)",
        state.rally,
        state.rounds_lost
    );
    state.enter_idle();
    Some(event)
}

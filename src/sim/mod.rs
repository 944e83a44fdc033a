//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, speeds in pixels per frame
//! - Seeded RNG only
//! - Fixed update order (player, ball, reflections, enemy)
//! - No rendering or platform dependencies

pub mod entity;
pub mod policy;
pub mod rect;
pub mod state;
pub mod tick;

pub use entity::{Entity, EntityKind};
pub use policy::{Steer, reflect_if_colliding, update_ball, update_enemy, update_player};
pub use rect::Rect;
pub use state::{Arena, GamePhase, GameState, serve_direction};
pub use tick::{FrameInput, FrameOutcome, GameEvent, check_round_over, tick};

//! Per-kind update policies
//!
//! Each policy mutates one entity and only ever reads the others.

use super::entity::Entity;
use super::rect::Rect;
use super::state::Arena;

/// Vertical steering requested by the human player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Steer {
    /// Resolve held keys. Up wins when both are held.
    pub fn from_held(up: bool, down: bool) -> Self {
        if up {
            Steer::Up
        } else if down {
            Steer::Down
        } else {
            Steer::Neutral
        }
    }

    #[inline]
    pub fn dy(self) -> f32 {
        match self {
            Steer::Up => -1.0,
            Steer::Down => 1.0,
            Steer::Neutral => 0.0,
        }
    }
}

/// Player: steer, move, stay on screen
pub fn update_player(player: &mut Entity, steer: Steer, arena: &Arena) {
    player.direction.x = 0.0;
    player.direction.y = steer.dy();
    player.advance();
    player.lock_in_screen_bounds(arena);
}

/// Enemy: proportional tracking of the target's vertical center.
///
/// The raw term is unbounded; `advance` saturates it to unit length, so the
/// enemy moves at full speed until it is within one `speed` of alignment.
pub fn update_enemy(enemy: &mut Entity, target: &Rect, arena: &Arena) {
    enemy.direction.x = 0.0;
    enemy.direction.y = (target.center_y() - enemy.rect.center_y()) / enemy.speed;
    enemy.advance();
    enemy.lock_in_screen_bounds(arena);
}

/// Ball: move, then bounce off the top and bottom walls.
///
/// Both wall checks use the top edge, so the ball sinks up to its own
/// height past the bottom wall before turning around.
///
/// Returns true if a wall bounce happened this frame.
pub fn update_ball(ball: &mut Entity, arena: &Arena) -> bool {
    ball.advance();

    let y = ball.rect.y();
    if y <= 0.0 {
        ball.rect.set_y(y.abs());
        ball.direction.y = -ball.direction.y;
        true
    } else if y >= arena.height {
        ball.rect.set_y(y - (y - arena.height));
        ball.direction.y = -ball.direction.y;
        true
    } else {
        false
    }
}

/// Reverse the ball's horizontal travel if it overlaps `other`.
///
/// The ball is stepped back by one frame of horizontal motion before the
/// x-direction flips. Vertical direction is left alone. Nothing happens when
/// both rects share the same x, even if they overlap.
pub fn reflect_if_colliding(ball: &mut Entity, other: &Entity) -> bool {
    if !ball.is_colliding_with(&other.rect) || ball.rect.x() == other.rect.x() {
        return false;
    }
    let x = ball.rect.x() - ball.direction.x * ball.speed;
    ball.rect.set_x(x);
    ball.direction.x = -ball.direction.x;
    true
}

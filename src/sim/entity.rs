//! Shared shape of every moving thing in the arena
//!
//! Player, enemy and ball are the same data (rect + steering direction +
//! speed); they differ only in the update policy applied to them each frame
//! (see `policy`). `kind` selects that policy and how the entity is drawn.

use glam::Vec2;

use super::rect::Rect;
use super::state::Arena;

/// Which update policy drives an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Human paddle, steered by held keys
    Player,
    /// Computer paddle, tracks the ball vertically
    Enemy,
    /// The ball: wall bounces and paddle reflections
    Ball,
}

/// A moving rect
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub rect: Rect,
    /// Steering vector; only normalized by `advance` when longer than 1
    pub direction: Vec2,
    /// Pixels per frame
    pub speed: f32,
}

impl Entity {
    pub fn new(kind: EntityKind, rect: Rect, direction: Vec2, speed: f32) -> Self {
        Self {
            kind,
            rect,
            direction,
            speed,
        }
    }

    /// Integrate one frame of motion.
    ///
    /// Directions longer than 1 are normalized first. Shorter ones (including
    /// zero) are used as-is, so a zero direction never reaches `normalize`.
    pub fn advance(&mut self) {
        if self.direction.length() > 1.0 {
            self.direction = self.direction.normalize();
        }
        self.rect
            .set_center(self.rect.center() + self.direction * self.speed);
    }

    pub fn is_colliding_with(&self, other: &Rect) -> bool {
        self.rect.overlaps(other)
    }

    /// Keep the rect vertically inside the arena. The x-axis is never touched.
    pub fn lock_in_screen_bounds(&mut self, arena: &Arena) {
        self.rect.top = self.rect.top.max(0.0);
        if self.rect.bottom() > arena.height {
            self.rect.set_bottom(arena.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paddle(top: f32) -> Entity {
        Entity::new(
            EntityKind::Player,
            Rect::new(10.0, top, 10.0, 160.0),
            Vec2::ZERO,
            10.0,
        )
    }

    #[test]
    fn test_advance_moves_by_direction_times_speed() {
        let mut entity = paddle(100.0);
        entity.direction = Vec2::new(0.0, 1.0);
        entity.advance();
        assert_eq!(entity.rect.top, 110.0);
        assert_eq!(entity.rect.left, 10.0);
    }

    #[test]
    fn test_advance_with_zero_direction_stays_put() {
        let mut entity = paddle(100.0);
        entity.advance();
        assert_eq!(entity.direction, Vec2::ZERO);
        assert_eq!(entity.rect, Rect::new(10.0, 100.0, 10.0, 160.0));
    }

    #[test]
    fn test_advance_normalizes_long_direction() {
        let mut entity = paddle(100.0);
        entity.direction = Vec2::new(0.0, 5.0);
        entity.advance();
        assert_eq!(entity.direction, Vec2::new(0.0, 1.0));
        assert_eq!(entity.rect.top, 110.0);
    }

    #[test]
    fn test_lock_clamps_top_and_bottom() {
        let arena = Arena::default();

        let mut above = paddle(-30.0);
        above.lock_in_screen_bounds(&arena);
        assert_eq!(above.rect.top, 0.0);

        let mut below = paddle(500.0);
        below.lock_in_screen_bounds(&arena);
        assert_eq!(below.rect.bottom(), arena.height);
    }

    #[test]
    fn test_is_colliding_with() {
        let entity = paddle(100.0);
        assert!(entity.is_colliding_with(&Rect::new(15.0, 150.0, 20.0, 20.0)));
        assert!(!entity.is_colliding_with(&Rect::new(40.0, 150.0, 20.0, 20.0)));
    }

    proptest! {
        #[test]
        fn prop_short_directions_untouched(x in -0.7f32..0.7, y in -0.7f32..0.7) {
            let mut entity = paddle(200.0);
            entity.direction = Vec2::new(x, y);
            entity.advance();
            prop_assert_eq!(entity.direction, Vec2::new(x, y));
        }

        #[test]
        fn prop_long_directions_become_unit(x in -50.0f32..50.0, y in -50.0f32..50.0) {
            prop_assume!(Vec2::new(x, y).length() > 1.0);
            let mut entity = paddle(200.0);
            entity.direction = Vec2::new(x, y);
            entity.advance();
            prop_assert!((entity.direction.length() - 1.0).abs() < 1e-5);
        }

        #[test]
        fn prop_lock_is_idempotent(left in -900.0f32..900.0, top in -900.0f32..900.0) {
            let arena = Arena::default();
            let mut entity = paddle(top);
            entity.rect.left = left;
            entity.lock_in_screen_bounds(&arena);
            let once = entity.rect;
            entity.lock_in_screen_bounds(&arena);
            prop_assert_eq!(entity.rect, once);
        }

        #[test]
        fn prop_lock_never_touches_x(left in -900.0f32..1700.0, top in -900.0f32..900.0) {
            let arena = Arena::default();
            let mut entity = paddle(top);
            entity.rect.left = left;
            entity.lock_in_screen_bounds(&arena);
            prop_assert_eq!(entity.rect.left, left);
            prop_assert_eq!(entity.rect.width, 10.0);
        }
    }
}

//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityKind};
use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Entities at their start positions, waiting for the start signal
    #[default]
    Idle,
    /// Active gameplay
    Running,
}

/// Playfield dimensions and entity sizing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_length: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: SCREEN_W,
            height: SCREEN_H,
            paddle_width: PADDLE_WIDTH,
            paddle_length: PLAYER_SIZE,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
        }
    }
}

impl Arena {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            width: settings.arena_width,
            height: settings.arena_height,
            paddle_width: settings.paddle_width,
            // Paddle length always tracks arena width
            paddle_length: settings.arena_width * 0.2,
            paddle_margin: settings.paddle_margin,
            paddle_speed: settings.paddle_speed,
            ball_size: settings.ball_size,
            ball_speed: settings.ball_speed,
        }
    }

    /// Paddle top edge when vertically centered
    fn paddle_top(&self) -> f32 {
        self.height / 2.0 - self.paddle_length / 2.0
    }

    /// Player paddle at the left wall
    pub fn player_start(&self) -> Rect {
        Rect::new(
            self.paddle_margin,
            self.paddle_top(),
            self.paddle_width,
            self.paddle_length,
        )
    }

    /// Enemy paddle at the right wall
    pub fn enemy_start(&self) -> Rect {
        Rect::new(
            self.width - self.paddle_margin - self.paddle_width,
            self.paddle_top(),
            self.paddle_width,
            self.paddle_length,
        )
    }

    /// Ball serve spot: top-left corner on the arena center
    pub fn ball_start(&self) -> Rect {
        Rect::new(
            self.width / 2.0,
            self.height / 2.0,
            self.ball_size,
            self.ball_size,
        )
    }
}

/// Pick a diagonal serve: each axis independently -1 or +1
pub fn serve_direction<R: Rng>(rng: &mut R) -> Vec2 {
    let x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let y = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    Vec2::new(x, y)
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub phase: GamePhase,
    pub player: Entity,
    pub enemy: Entity,
    pub ball: Entity,
    /// Rounds lost since startup
    pub rounds_lost: u32,
    /// Paddle hits in the current round
    pub rally: u32,
    /// Frames simulated while running
    pub frame: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed, in the idle phase
    pub fn new(arena: Arena, seed: u64) -> Self {
        Self::with_rng(arena, Pcg32::seed_from_u64(seed))
    }

    /// Create a new game state drawing serves from `rng`
    pub fn with_rng(arena: Arena, mut rng: Pcg32) -> Self {
        let ball = Self::spawn_ball(&arena, &mut rng);
        Self {
            arena,
            phase: GamePhase::Idle,
            player: Entity::new(
                EntityKind::Player,
                arena.player_start(),
                Vec2::ZERO,
                arena.paddle_speed,
            ),
            enemy: Entity::new(
                EntityKind::Enemy,
                arena.enemy_start(),
                Vec2::ZERO,
                arena.paddle_speed,
            ),
            ball,
            rounds_lost: 0,
            rally: 0,
            frame: 0,
            rng,
        }
    }

    fn spawn_ball(arena: &Arena, rng: &mut Pcg32) -> Entity {
        Entity::new(
            EntityKind::Ball,
            arena.ball_start(),
            serve_direction(rng),
            arena.ball_speed,
        )
    }

    /// Recreate every entity at its start position with a fresh serve
    pub fn initialize(&mut self) {
        self.ball = Self::spawn_ball(&self.arena, &mut self.rng);
        self.player = Entity::new(
            EntityKind::Player,
            self.arena.player_start(),
            Vec2::ZERO,
            self.arena.paddle_speed,
        );
        self.enemy = Entity::new(
            EntityKind::Enemy,
            self.arena.enemy_start(),
            Vec2::ZERO,
            self.arena.paddle_speed,
        );
        self.rally = 0;
    }

    /// Enter the idle phase. Entering idle always resets the entities.
    pub fn enter_idle(&mut self) {
        self.initialize();
        self.phase = GamePhase::Idle;
    }

    /// The ball has slipped past the player's edge
    pub fn round_lost(&self) -> bool {
        self.ball.rect.x() < self.player.rect.x()
    }

    pub fn entities(&self) -> [&Entity; 3] {
        [&self.player, &self.enemy, &self.ball]
    }
}

//! Paddle Duel - a single-player Pong against a tracking computer paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, phase machine)
//! - `controller`: Per-frame driver that wires input, simulation and rendering
//! - `renderer`: Render collaborator contract and frame composition
//! - `platform`: Input sources and frame pacing
//! - `settings`: Data-driven arena and speed configuration

pub mod controller;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::GameController;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use crate::renderer::Color;

    /// Arena dimensions (pixels)
    pub const SCREEN_W: f32 = 800.0;
    pub const SCREEN_H: f32 = 600.0;

    /// Paddle length, derived from arena width
    pub const PLAYER_SIZE: f32 = SCREEN_W * 0.2;
    /// Paddle thickness
    pub const PADDLE_WIDTH: f32 = 10.0;
    /// Gap between a paddle and its wall
    pub const PADDLE_MARGIN: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults (the ball is a square rect drawn as an ellipse)
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 10.0;

    /// Target frame rate; all speeds are pixels per frame
    pub const FRAME_RATE: u32 = 60;

    pub const BACKGROUND_COLOR: Color = Color::rgb(50, 50, 50);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Debug overlay anchor
    pub const DEBUG_TEXT_X: f32 = 10.0;
    pub const DEBUG_TEXT_Y: f32 = 10.0;
}

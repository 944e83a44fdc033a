//! Rendering contract
//!
//! The core never owns a window. It describes each frame as a handful of
//! primitive draw calls against a `Renderer` supplied by the platform.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

use crate::consts::{BACKGROUND_COLOR, DEBUG_TEXT_X, DEBUG_TEXT_Y, WHITE, YELLOW};
use crate::sim::{Entity, EntityKind, GameState, Rect};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Primitive drawing surface
pub trait Renderer {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);
    fn rect(&mut self, rect: Rect, color: Color);
    /// Ellipse inscribed in `bounds`
    fn ellipse(&mut self, bounds: Rect, color: Color);
    fn text(&mut self, text: &str, color: Color, pos: Vec2);
    /// Flip the finished frame to the screen
    fn present(&mut self);
    /// Window title, e.g. the measured frame rate
    fn caption(&mut self, _text: &str) {}
}

/// One-line ball readout for the debug overlay
pub fn debug_line(ball: &Entity) -> String {
    let center = ball.rect.center();
    format!(
        "Ball[dir [{:.3}, {:.3}], pos ({:.0}, {:.0})]",
        ball.direction.x, ball.direction.y, center.x, center.y
    )
}

fn draw_entity(entity: &Entity, renderer: &mut impl Renderer) {
    match entity.kind {
        EntityKind::Player | EntityKind::Enemy => renderer.rect(entity.rect, WHITE),
        EntityKind::Ball => renderer.ellipse(entity.rect, WHITE),
    }
}

/// Compose a full frame: background, paddles, ball, debug overlay
pub fn draw_frame(state: &GameState, renderer: &mut impl Renderer) {
    renderer.clear(BACKGROUND_COLOR);
    for entity in state.entities() {
        draw_entity(entity, renderer);
    }
    renderer.text(
        &debug_line(&state.ball),
        YELLOW,
        Vec2::new(DEBUG_TEXT_X, DEBUG_TEXT_Y),
    );
    renderer.present();
}

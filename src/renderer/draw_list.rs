//! Recording renderer
//!
//! Keeps the draw calls of the most recent frame instead of rasterizing
//! them. Used by the headless driver and by tests.

use glam::Vec2;

use super::{Color, Renderer};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect(Rect, Color),
    Ellipse(Rect, Color),
    Text {
        text: String,
        color: Color,
        pos: Vec2,
    },
    Present,
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    /// Frames presented so far
    frames: u64,
}

impl DrawList {
    /// Draw calls since the last `clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Text of the first overlay line in the current frame
    pub fn overlay(&self) -> Option<&str> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn ellipse(&mut self, bounds: Rect, color: Color) {
        self.commands.push(DrawCommand::Ellipse(bounds, color));
    }

    fn text(&mut self, text: &str, color: Color, pos: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            color,
            pos,
        });
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.frames += 1;
    }
}

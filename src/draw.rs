//! Backend-agnostic drawing surface
//!
//! All coordinates are screen pixels. The composer only ever talks to a
//! `Canvas`; backends decide how outlines, polygons and text become pixels.

use glam::Vec2;

use crate::color::Color;
use crate::sim::Rect;
use crate::text::FontSize;

pub trait Canvas {
    /// One-pixel outline of `rect`
    fn draw_rect_outline(&mut self, rect: Rect, color: Color);

    /// Filled closed polygon; must be star-shaped about its centroid
    fn draw_polygon(&mut self, points: &[Vec2], color: Color);

    /// `text` with its top-left at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, font: FontSize, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RectOutline {
        rect: Rect,
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        font: FontSize,
        color: Color,
    },
}

/// Records draw calls in order; the headless runner and tests draw here
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn draw_rect_outline(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::RectOutline { rect, color });
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font: FontSize, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font,
            color,
        });
    }
}

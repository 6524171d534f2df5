//! `Canvas` that turns draw calls into a triangle list
//!
//! Text has no glyph atlas on the GPU side; labels are collected so the
//! platform layer can place them (DOM elements on the web).

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use crate::color::Color;
use crate::draw::Canvas;
use crate::sim::Rect;
use crate::text::FontSize;

/// Outline stroke width in pixels
const OUTLINE_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub font: FontSize,
    pub color: Color,
}

#[derive(Debug, Default)]
pub struct Tessellator {
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
}

impl Tessellator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame, keeping allocations
    pub fn begin_frame(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }
}

impl Canvas for Tessellator {
    fn draw_rect_outline(&mut self, rect: Rect, color: Color) {
        self.vertices.extend(shapes::rect_outline(
            Vec2::new(rect.left, rect.top),
            Vec2::new(rect.right, rect.bottom),
            OUTLINE_WIDTH,
            color.to_rgba(),
        ));
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color) {
        self.vertices
            .extend(shapes::polygon_fan(points, color.to_rgba()));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font: FontSize, color: Color) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            pos,
            font,
            color,
        });
    }
}

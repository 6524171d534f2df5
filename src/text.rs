//! Fixed-cell bitmap font metrics
//!
//! Every glyph occupies the same cell, so layout is just counting columns
//! and lines.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Available font sizes, named by their glyph cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontSize {
    /// 8x14
    Xs,
    /// 12x21
    Sm,
    /// 16x28
    #[default]
    Base,
    /// 18x32
    Lg,
    /// 20x35
    Xl,
    /// 24x42
    Xxl,
    /// 32x56
    Xxxl,
}

impl FontSize {
    pub const ALL: [FontSize; 7] = [
        FontSize::Xs,
        FontSize::Sm,
        FontSize::Base,
        FontSize::Lg,
        FontSize::Xl,
        FontSize::Xxl,
        FontSize::Xxxl,
    ];

    /// Glyph cell (width, height) in pixels
    pub fn glyph_size(&self) -> (u32, u32) {
        match self {
            FontSize::Xs => (8, 14),
            FontSize::Sm => (12, 21),
            FontSize::Base => (16, 28),
            FontSize::Lg => (18, 32),
            FontSize::Xl => (20, 35),
            FontSize::Xxl => (24, 42),
            FontSize::Xxxl => (32, 56),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Xs => "xs",
            FontSize::Sm => "sm",
            FontSize::Base => "base",
            FontSize::Lg => "lg",
            FontSize::Xl => "xl",
            FontSize::Xxl => "2xl",
            FontSize::Xxxl => "3xl",
        }
    }

    /// Pixel size of `text`; `\n` starts a new line
    pub fn text_size(&self, text: &str) -> Vec2 {
        let (gw, gh) = self.glyph_size();
        let lines = text.split('\n');
        let (count, longest) = lines.fold((0u32, 0u32), |(n, widest), line| {
            (n + 1, widest.max(line.chars().count() as u32))
        });
        Vec2::new((longest * gw) as f32, (count * gh) as f32)
    }

    /// Rectangle `text` covers when drawn with its top-left at `pos`
    pub fn text_rect(&self, text: &str, pos: Vec2) -> Rect {
        let size = self.text_size(text);
        Rect::from_pos_size(pos, size.x, size.y)
    }
}

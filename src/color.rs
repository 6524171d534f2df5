//! 8-bit RGB colors and the star palette

use serde::{Deserialize, Serialize};

/// An opaque 8-bit-per-channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Add `offset` to every channel, saturating at 255
    pub fn brightened(self, offset: i32) -> Self {
        let add = |c: u8| (c as i32 + offset).clamp(0, 255) as u8;
        Self::rgb(add(self.r), add(self.g), add(self.b))
    }

    /// Normalized RGBA for vertex data
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// CSS `rgb(...)` string for DOM labels
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    /// Base colors a star may be spawned with
    pub const STAR_COLORS: [Color; 6] = [RED, GREEN, BLUE, CYAN, YELLOW, MAGENTA];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightened_saturates() {
        let c = palette::RED.brightened(200);
        assert_eq!(c, Color::rgb(255, 200, 200));
        assert_eq!(palette::WHITE.brightened(1), palette::WHITE);
    }

    #[test]
    fn test_to_rgba() {
        assert_eq!(palette::CYAN.to_rgba(), [0.0, 1.0, 1.0, 1.0]);
    }
}

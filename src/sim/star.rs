//! Star entity: a flared polygon whose radius and color pulse over time

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::rect::Rect;
use crate::color::Color;
use crate::polar_to_cartesian;

/// A decorative star. Only `time` changes after spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Outer radius at rest
    pub radius: f32,
    /// Inner (valley) radius as a fraction of the outer radius
    pub inner_ratio: f32,
    pub flares: u32,
    pub base_color: Color,
    /// Color oscillation frequency (Hz)
    pub color_freq: f32,
    pub color_phase: f32,
    /// Relative radius oscillation (0.5 swings between 0.5x and 1.5x)
    pub radius_amplitude: f32,
    /// Radius oscillation frequency (Hz)
    pub radius_freq: f32,
    pub radius_phase: f32,
    /// Seconds simulated since spawn
    pub time: f32,
}

impl Star {
    /// Largest radius this star reaches at any point of its pulse
    #[inline]
    pub fn max_radius(&self) -> f32 {
        max_radius(self.radius, self.radius_amplitude)
    }

    /// Square around the star that holds it at full pulse
    pub fn bounding_rect(&self) -> Rect {
        let r = self.max_radius();
        Rect::from_center(self.pos, r, r)
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Current radius multiplier
    pub fn scale(&self) -> f32 {
        1.0 + self.radius_amplitude * (TAU * self.radius_freq * self.time + self.radius_phase).sin()
    }

    /// Base color lifted by a sinusoidal offset in [1, 255]
    pub fn color(&self) -> Color {
        let wave = (TAU * self.color_freq * self.time + self.color_phase).sin();
        let offset = (127.0 * wave) as i32 + 128;
        self.base_color.brightened(offset)
    }

    /// Unscaled outline around the origin
    pub fn model(&self) -> Vec<Vec2> {
        star_outline(self.radius, self.radius * self.inner_ratio, self.flares)
    }

    /// Outline in world space at the current pulse
    pub fn outline(&self) -> Vec<Vec2> {
        let scale = self.scale();
        self.model()
            .into_iter()
            .map(|v| self.pos + v * scale)
            .collect()
    }
}

/// Maximum pulse radius for a base radius and amplitude
#[inline]
pub fn max_radius(radius: f32, amplitude: f32) -> f32 {
    radius * (1.0 + amplitude)
}

/// Vertices alternating between outer and inner radius, `2 * flares` in all
pub fn star_outline(outer_radius: f32, inner_radius: f32, flares: u32) -> Vec<Vec2> {
    let count = flares * 2;
    let d_theta = PI / flares as f32;
    (0..count)
        .map(|i| {
            let r = if i % 2 == 0 { outer_radius } else { inner_radius };
            polar_to_cartesian(r, i as f32 * d_theta)
        })
        .collect()
}

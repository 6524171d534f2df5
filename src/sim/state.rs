//! Simulation state and the scene it is built from

use glam::Vec2;
use rand::Rng;

use super::bounce::BouncingBox;
use super::field::{SpawnError, StarField, StarFieldParams};
use super::rect::Rect;

/// Everything the simulation mutates
#[derive(Debug, Clone)]
pub struct DemoState {
    pub stars: StarField,
    pub text_box: BouncingBox,
    /// Screen-space bounds the box reflects off
    pub walls: Rect,
    /// Seconds simulated so far
    pub elapsed: f64,
    /// Sub-steps taken so far
    pub steps: u64,
}

impl DemoState {
    /// Spawn the star field and center the text box on screen
    pub fn new<R: Rng + ?Sized>(
        params: &StarFieldParams,
        walls: Rect,
        box_size: Vec2,
        box_speed: f32,
        rng: &mut R,
    ) -> Result<Self, SpawnError> {
        let stars = StarField::generate(params, rng)?;
        Ok(Self::with_stars(stars, walls, box_size, box_speed))
    }

    pub fn with_stars(stars: StarField, walls: Rect, box_size: Vec2, box_speed: f32) -> Self {
        Self {
            stars,
            text_box: BouncingBox::new(walls.center(), box_size, box_speed),
            walls,
            elapsed: 0.0,
            steps: 0,
        }
    }
}

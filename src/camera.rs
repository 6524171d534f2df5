//! World-space camera and its mouse controller
//!
//! World space is y-up with the origin at the center of the star field.
//! Screen space is y-down in pixels with the origin at the top-left.

use glam::Vec2;

use crate::consts::{MAX_CAMERA_SCALE, MIN_CAMERA_SCALE, ZOOM_FACTOR};
use crate::input::{MouseButton, MouseEvent};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// World point shown at the screen center
    pub pos: Vec2,
    /// Screen pixels per world unit
    scale: f32,
    screen: Vec2,
}

impl Camera {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            scale: 1.0,
            screen: Vec2::new(screen_width, screen_height),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_CAMERA_SCALE, MAX_CAMERA_SCALE);
    }

    pub fn move_by(&mut self, offset: Vec2) {
        self.pos += offset;
    }

    pub fn resize(&mut self, screen_width: f32, screen_height: f32) {
        self.screen = Vec2::new(screen_width, screen_height);
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    /// Region of the world currently on screen
    pub fn viewport_rect(&self) -> Rect {
        let half = self.screen / (2.0 * self.scale);
        Rect::from_center(self.pos, half.x, half.y)
    }

    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        let rel = (p - self.pos) * self.scale;
        Vec2::new(rel.x, -rel.y) + self.screen / 2.0
    }

    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        let rel = p - self.screen / 2.0;
        Vec2::new(rel.x, -rel.y) / self.scale + self.pos
    }
}

/// Left-drag pans, the wheel zooms
#[derive(Debug, Clone)]
pub struct CameraController {
    engaged: bool,
    last_pos: Vec2,
    zoom_factor: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(ZOOM_FACTOR)
    }
}

impl CameraController {
    pub fn new(zoom_factor: f32) -> Self {
        Self {
            engaged: false,
            last_pos: Vec2::ZERO,
            zoom_factor,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.engaged
    }

    pub fn handle(&mut self, event: &MouseEvent, camera: &mut Camera) {
        match *event {
            MouseEvent::Press {
                button: MouseButton::Left,
                pos,
            } => {
                self.engaged = true;
                self.last_pos = pos;
            }
            MouseEvent::Release {
                button: MouseButton::Left,
                ..
            } => {
                self.engaged = false;
            }
            MouseEvent::Move { pos } if self.engaged => {
                let delta = pos - self.last_pos;
                // Screen y grows downward, world y upward: only x flips sign
                camera.move_by(Vec2::new(-delta.x, delta.y) / camera.scale());
                self.last_pos = pos;
            }
            MouseEvent::WheelUp { .. } => camera.set_scale(camera.scale() * self.zoom_factor),
            MouseEvent::WheelDown { .. } => camera.set_scale(camera.scale() / self.zoom_factor),
            _ => {}
        }
    }
}

//! Starfield - a pannable field of pulsing procedural stars
//!
//! Core modules:
//! - `sim`: Star field generation and the fixed-step simulation
//! - `camera`: Viewport camera and mouse pan/zoom controller
//! - `input`: Queued keyboard/character/mouse events
//! - `frame`: Frame timer and FPS counter
//! - `text`: Fixed-cell bitmap font metrics
//! - `draw`: Backend-agnostic drawing surface
//! - `game`: Per-frame input → simulate → compose loop
//! - `renderer`: WebGPU tessellation and pipeline

pub mod camera;
pub mod color;
pub mod draw;
pub mod frame;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod text;

pub use color::Color;
pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Demo configuration constants
pub mod consts {
    /// Largest simulation sub-step in seconds
    pub const PRECISION: f32 = 0.0025;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// World dimensions, centered on the origin
    pub const WORLD_WIDTH: f32 = 10_000.0;
    pub const WORLD_HEIGHT: f32 = 6_000.0;

    /// Number of stars spawned at startup
    pub const STAR_COUNT: usize = 1100;

    /// Bouncing box speed along each axis (pixels/s)
    pub const BOX_SPEED: f32 = 200.0;
    /// Padding between the box text and its outline
    pub const BOX_PADDING: f32 = 5.0;

    /// Camera zoom multiplier per wheel notch
    pub const ZOOM_FACTOR: f32 = 1.05;
    pub const MIN_CAMERA_SCALE: f32 = 0.01;
    pub const MAX_CAMERA_SCALE: f32 = 100.0;

    /// Where the FPS label sits on screen
    pub const FPS_LABEL_POS: (f32, f32) = (10.0, 10.0);
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> glam::Vec2 {
    glam::Vec2::new(r * theta.cos(), r * theta.sin())
}

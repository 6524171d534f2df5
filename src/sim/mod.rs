//! Simulation module
//!
//! Everything that advances between frames lives here:
//! - Star field generation (seeded RNG only)
//! - Fixed sub-step integration
//! - No rendering or platform dependencies

pub mod bounce;
pub mod field;
pub mod rect;
pub mod star;
pub mod state;
pub mod tick;

pub use bounce::BouncingBox;
pub use field::{ClampedNormal, SpawnError, StarField, StarFieldParams};
pub use rect::Rect;
pub use star::{Star, star_outline};
pub use state::DemoState;
pub use tick::{advance, tick};

//! WebGPU rendering module
//!
//! The composer draws into a `Tessellator`; `RenderState` uploads the
//! resulting triangle list and presents it.

pub mod pipeline;
pub mod shapes;
pub mod tessellator;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use tessellator::{Tessellator, TextLabel};
pub use vertex::Vertex;

//! The pointer-to-stroke pipeline.
//!
//! Raw samples are normalized into surface-local points, gated by a press/release state machine per
//! input channel, and turned into anchor and segment paint commands.

/// A position in surface-local pixels, with the origin at the surface's top-left corner.
pub type Point = glam::DVec2;

mod style;
pub use style::*;

mod sample;
pub use sample::*;

mod stroke;
pub use stroke::*;

mod gate;
pub use gate::*;

mod pipeline;
pub use pipeline::*;

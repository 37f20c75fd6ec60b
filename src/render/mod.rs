mod canvas;
pub use canvas::*;

use crate::engine::{Point, StrokeStyle};

/// An immediate-mode line renderer.
pub trait Renderer {
	/// Sets the join, cap, width and color used by subsequent strokes.
	fn apply_style(&mut self, style: &StrokeStyle);

	fn begin_path(&mut self);

	fn move_to(&mut self, point: Point);

	fn line_to(&mut self, point: Point);

	/// Strokes the current path with the applied style.
	fn stroke(&mut self);
}

use super::{Point, StrokeStyle};
use crate::render::Renderer;

/// A single drawing command produced from one forwarded sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
	/// Begins a path at the point without drawing anything visible.
	Anchor(Point),
	/// A straight line between consecutive samples of the same stroke.
	Segment { from: Point, to: Point },
}

impl Paint {
	pub fn render(&self, style: &StrokeStyle, renderer: &mut impl Renderer) {
		renderer.apply_style(style);
		renderer.begin_path();
		match *self {
			Paint::Anchor(at) => renderer.move_to(at),
			Paint::Segment { from, to } => {
				renderer.move_to(from);
				renderer.line_to(to);
				renderer.stroke();
			}
		}
	}
}

/// The stroke of an active gesture. Only the last painted point is retained.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ActiveStroke {
	last: Option<Point>,
	max_segment_length: Option<f64>,
}

impl ActiveStroke {
	/// `max_segment_length` comes from a validated `PipelineConfig`.
	pub(crate) fn new(max_segment_length: Option<f64>) -> Self {
		Self {
			last: None,
			max_segment_length,
		}
	}

	pub fn last_point(&self) -> Option<Point> {
		self.last
	}

	pub fn add_point(&mut self, point: Point) -> Paint {
		let paint = match self.last {
			Some(from) if !self.is_jump(from, point) => Paint::Segment { from, to: point },
			_ => Paint::Anchor(point),
		};
		self.last = Some(point);
		paint
	}

	fn is_jump(&self, from: Point, to: Point) -> bool {
		self
			.max_segment_length
			.is_some_and(|max| from.distance(to) > max)
	}
}

use super::Point;
use crate::geom::SurfaceGeometry;
use glam::DVec2;

/// A raw position reported by an input device, before conversion to surface-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSample {
	/// Already relative to the surface, e.g. a mouse event's `offsetX`/`offsetY`.
	Local(DVec2),
	/// Relative to the viewport, e.g. `clientX`/`clientY`.
	Client(DVec2),
	/// Viewport-relative positions of the active touch points. Only the first is used.
	Touches(Vec<DVec2>),
}

impl PointerSample {
	/// Returns the sample in surface-local coordinates, or `None` for a touch sample without touches.
	pub fn normalize(&self, geometry: &SurfaceGeometry) -> Option<Point> {
		match self {
			PointerSample::Local(local) => Some(*local),
			PointerSample::Client(client) => Some(geometry.to_local(*client)),
			PointerSample::Touches(touches) => {
				let Some(first) = touches.first() else {
					tracing::warn!("touch sample without active touches");
					return None;
				};
				Some(geometry.to_local(*first))
			}
		}
	}
}

use glam::DVec2;

/// Where the drawing surface sits in the viewport and how large it is, in CSS pixels.
///
/// Established once before input is handled; resizing afterwards is not tracked.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
	origin: DVec2,
	size: DVec2,
}

impl SurfaceGeometry {
	pub fn new(origin: DVec2, size: DVec2) -> Self {
		Self { origin, size }
	}

	pub fn origin(&self) -> DVec2 {
		self.origin
	}

	pub fn size(&self) -> DVec2 {
		self.size
	}

	/// Converts a viewport-relative position into surface-local coordinates.
	pub fn to_local(&self, client: DVec2) -> DVec2 {
		client - self.origin
	}
}

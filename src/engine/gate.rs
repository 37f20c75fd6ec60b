use super::{ActiveStroke, Paint, PipelineConfig, Point};

/// An input modality. Each one is gated independently.
#[derive(derive_more::Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
	#[display("mouse")]
	Mouse,
	#[display("touch")]
	Touch,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum GestureState {
	#[default]
	Idle,
	Active(ActiveStroke),
}

/// Forwards samples to the current stroke between a press and the matching release.
#[derive(Debug, Clone)]
pub struct GestureGate {
	channel: Channel,
	max_segment_length: Option<f64>,
	state: GestureState,
}

impl GestureGate {
	pub fn new(channel: Channel) -> Self {
		Self::with_config(channel, PipelineConfig::default())
	}

	pub fn with_config(channel: Channel, config: PipelineConfig) -> Self {
		Self {
			channel,
			max_segment_length: config.max_segment_length(),
			state: GestureState::Idle,
		}
	}

	pub fn channel(&self) -> Channel {
		self.channel
	}

	pub fn state(&self) -> &GestureState {
		&self.state
	}

	pub fn is_active(&self) -> bool {
		matches!(self.state, GestureState::Active(_))
	}

	pub fn last_point(&self) -> Option<Point> {
		match &self.state {
			GestureState::Idle => None,
			GestureState::Active(stroke) => stroke.last_point(),
		}
	}

	/// Starts a new stroke. A press while already active also starts over, so a release that was
	/// never delivered cannot join two gestures.
	pub fn press(&mut self) {
		if self.is_active() {
			tracing::debug!(channel = %self.channel, "press while active, restarting stroke");
		} else {
			tracing::debug!(channel = %self.channel, "gesture started");
		}
		self.state = GestureState::Active(ActiveStroke::new(self.max_segment_length));
	}

	pub fn release(&mut self) {
		if self.is_active() {
			tracing::debug!(channel = %self.channel, "gesture ended");
		}
		self.state = GestureState::Idle;
	}

	/// Returns the paint command for the point, or `None` when no gesture is active.
	pub fn forward(&mut self, point: Point) -> Option<Paint> {
		match &mut self.state {
			GestureState::Idle => None,
			GestureState::Active(stroke) => {
				let paint = stroke.add_point(point);
				tracing::trace!(channel = %self.channel, ?paint);
				Some(paint)
			}
		}
	}
}

use super::{Channel, GestureGate, Paint, PointerSample, StrokeStyle};
use crate::geom::SurfaceGeometry;
use crate::render::Renderer;
use bon::bon;

#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
	Press,
	Move(PointerSample),
	Release,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
	pub channel: Channel,
	pub kind: InputKind,
}

impl InputEvent {
	pub fn new(channel: Channel, kind: InputKind) -> Self {
		Self { channel, kind }
	}

	pub fn press(channel: Channel) -> Self {
		Self::new(channel, InputKind::Press)
	}

	pub fn moved(channel: Channel, sample: PointerSample) -> Self {
		Self::new(channel, InputKind::Move(sample))
	}

	pub fn release(channel: Channel) -> Self {
		Self::new(channel, InputKind::Release)
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	#[error("max segment length must be positive and finite, got {0}")]
	InvalidMaxSegmentLength(f64),
}

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
	max_segment_length: Option<f64>,
}

#[bon]
impl PipelineConfig {
	/// `max_segment_length`: samples farther than this from the last painted point begin a new
	/// path instead of connecting to it. Unset always connects.
	#[builder]
	pub fn new(max_segment_length: Option<f64>) -> Result<Self, ConfigError> {
		if let Some(max) = max_segment_length {
			if !(max > 0.0 && max.is_finite()) {
				return Err(ConfigError::InvalidMaxSegmentLength(max));
			}
		}
		Ok(Self { max_segment_length })
	}

	pub fn max_segment_length(&self) -> Option<f64> {
		self.max_segment_length
	}
}

/// Turns input events from every channel into paint commands on a single renderer.
#[derive(Debug)]
pub struct StrokePipeline<R> {
	renderer: R,
	style: StrokeStyle,
	geometry: SurfaceGeometry,
	mouse: GestureGate,
	touch: GestureGate,
}

impl<R: Renderer> StrokePipeline<R> {
	pub fn new(renderer: R, style: StrokeStyle, geometry: SurfaceGeometry) -> Self {
		Self::with_config(renderer, style, geometry, PipelineConfig::default())
	}

	pub fn with_config(
		renderer: R,
		style: StrokeStyle,
		geometry: SurfaceGeometry,
		config: PipelineConfig,
	) -> Self {
		Self {
			renderer,
			style,
			geometry,
			mouse: GestureGate::with_config(Channel::Mouse, config),
			touch: GestureGate::with_config(Channel::Touch, config),
		}
	}

	/// Applies the event and renders its paint command, if any, before returning it.
	pub fn handle(&mut self, event: InputEvent) -> Option<Paint> {
		let gate = match event.channel {
			Channel::Mouse => &mut self.mouse,
			Channel::Touch => &mut self.touch,
		};
		match event.kind {
			InputKind::Press => {
				gate.press();
				None
			}
			InputKind::Release => {
				gate.release();
				None
			}
			InputKind::Move(sample) => {
				if !gate.is_active() {
					return None;
				}
				let point = sample.normalize(&self.geometry)?;
				let paint = gate.forward(point)?;
				paint.render(&self.style, &mut self.renderer);
				Some(paint)
			}
		}
	}

	/// Replaces the style used for subsequent paint commands. Strokes already drawn are unaffected.
	pub fn set_style(&mut self, style: StrokeStyle) {
		tracing::debug!(?style, "stroke style changed");
		self.style = style;
	}

	pub fn style(&self) -> &StrokeStyle {
		&self.style
	}

	pub fn geometry(&self) -> &SurfaceGeometry {
		&self.geometry
	}

	pub fn gate(&self, channel: Channel) -> &GestureGate {
		match channel {
			Channel::Mouse => &self.mouse,
			Channel::Touch => &self.touch,
		}
	}

	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	pub fn into_renderer(self) -> R {
		self.renderer
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::LineJoin;
	use crate::test::{Call, RecordingRenderer};
	use glam::DVec2;

	fn pipeline() -> StrokePipeline<RecordingRenderer> {
		StrokePipeline::new(
			RecordingRenderer::default(),
			StrokeStyle::default(),
			SurfaceGeometry::new(DVec2::new(20.0, 20.0), DVec2::new(800.0, 600.0)),
		)
	}

	fn mouse_to(x: f64, y: f64) -> InputEvent {
		InputEvent::moved(Channel::Mouse, PointerSample::Local(DVec2::new(x, y)))
	}

	fn touch_to(x: f64, y: f64) -> InputEvent {
		InputEvent::moved(
			Channel::Touch,
			PointerSample::Touches(vec![DVec2::new(x, y)]),
		)
	}

	#[test]
	fn test_scenario() {
		let mut pipeline = pipeline();
		pipeline.handle(InputEvent::press(Channel::Mouse));
		pipeline.handle(mouse_to(10.0, 10.0));
		pipeline.handle(mouse_to(20.0, 10.0));
		pipeline.handle(mouse_to(20.0, 30.0));
		pipeline.handle(InputEvent::release(Channel::Mouse));

		assert_eq!(
			pipeline.renderer().paints(),
			[
				Paint::Anchor(DVec2::new(10.0, 10.0)),
				Paint::Segment {
					from: DVec2::new(10.0, 10.0),
					to: DVec2::new(20.0, 10.0),
				},
				Paint::Segment {
					from: DVec2::new(20.0, 10.0),
					to: DVec2::new(20.0, 30.0),
				},
			]
		);
		assert_eq!(pipeline.gate(Channel::Mouse).last_point(), None);
		assert!(!pipeline.gate(Channel::Mouse).is_active());
	}

	#[test]
	fn test_no_cross_gesture_connection() {
		let mut pipeline = pipeline();
		pipeline.handle(InputEvent::press(Channel::Mouse));
		pipeline.handle(mouse_to(5.0, 5.0));
		pipeline.handle(InputEvent::release(Channel::Mouse));
		pipeline.handle(InputEvent::press(Channel::Mouse));
		let paint = pipeline.handle(mouse_to(300.0, 200.0));
		assert_eq!(paint, Some(Paint::Anchor(DVec2::new(300.0, 200.0))));
		assert!(!pipeline
			.renderer()
			.calls()
			.contains(&Call::LineTo(DVec2::new(300.0, 200.0))));
	}

	#[test]
	fn test_order_is_preserved() {
		let mut pipeline = pipeline();
		let points: Vec<_> = (0..50)
			.map(|i| DVec2::new(i as f64, (i * i % 17) as f64))
			.collect();
		pipeline.handle(InputEvent::press(Channel::Mouse));
		for point in &points {
			pipeline.handle(mouse_to(point.x, point.y));
		}

		let paints = pipeline.renderer().paints();
		assert_eq!(paints.len(), points.len());
		assert_eq!(paints[0], Paint::Anchor(points[0]));
		for (paint, pair) in paints[1..].iter().zip(points.windows(2)) {
			assert_eq!(
				*paint,
				Paint::Segment {
					from: pair[0],
					to: pair[1],
				}
			);
		}
	}

	#[test]
	fn test_moves_while_idle_produce_no_calls() {
		let mut pipeline = pipeline();
		for i in 0..10 {
			assert_eq!(pipeline.handle(mouse_to(i as f64, 0.0)), None);
			assert_eq!(pipeline.handle(touch_to(i as f64, 0.0)), None);
		}
		pipeline.handle(InputEvent::press(Channel::Mouse));
		pipeline.handle(InputEvent::release(Channel::Mouse));
		pipeline.handle(mouse_to(1.0, 1.0));
		assert!(pipeline.renderer().calls().is_empty());
	}

	#[test]
	fn test_repeated_gestures_behave_identically() {
		let mut pipeline = pipeline();
		for i in 0..100 {
			let offset = i as f64;
			pipeline.handle(InputEvent::press(Channel::Mouse));
			let first = pipeline.handle(mouse_to(offset, 0.0));
			let second = pipeline.handle(mouse_to(offset, 10.0));
			pipeline.handle(InputEvent::release(Channel::Mouse));

			assert_eq!(first, Some(Paint::Anchor(DVec2::new(offset, 0.0))), "gesture {i}");
			assert_eq!(
				second,
				Some(Paint::Segment {
					from: DVec2::new(offset, 0.0),
					to: DVec2::new(offset, 10.0),
				}),
				"gesture {i}"
			);
		}
		assert_eq!(pipeline.renderer().paints().len(), 200);
	}

	#[test]
	fn test_touch_samples_are_normalized() {
		let mut pipeline = pipeline();
		pipeline.handle(InputEvent::press(Channel::Touch));
		let paint = pipeline.handle(touch_to(150.0, 220.0));
		assert_eq!(paint, Some(Paint::Anchor(DVec2::new(130.0, 200.0))));
	}

	#[test]
	fn test_channels_are_independent() {
		let mut pipeline = pipeline();
		pipeline.handle(InputEvent::press(Channel::Mouse));
		pipeline.handle(InputEvent::press(Channel::Touch));
		pipeline.handle(mouse_to(1.0, 1.0));
		pipeline.handle(InputEvent::release(Channel::Touch));

		assert!(pipeline.gate(Channel::Mouse).is_active());
		assert!(!pipeline.gate(Channel::Touch).is_active());
		assert_eq!(
			pipeline.handle(mouse_to(2.0, 2.0)),
			Some(Paint::Segment {
				from: DVec2::new(1.0, 1.0),
				to: DVec2::new(2.0, 2.0),
			})
		);
		assert_eq!(pipeline.handle(touch_to(50.0, 50.0)), None);
	}

	#[test]
	fn test_empty_touch_list_is_dropped_without_breaking_stroke() {
		let mut pipeline = pipeline();
		pipeline.handle(InputEvent::press(Channel::Touch));
		pipeline.handle(touch_to(30.0, 30.0));
		let dropped = pipeline.handle(InputEvent::moved(
			Channel::Touch,
			PointerSample::Touches(Vec::new()),
		));
		assert_eq!(dropped, None);
		assert_eq!(
			pipeline.handle(touch_to(40.0, 30.0)),
			Some(Paint::Segment {
				from: DVec2::new(10.0, 10.0),
				to: DVec2::new(20.0, 10.0),
			})
		);
	}

	#[test]
	fn test_style_changes_apply_to_later_paints() {
		let mut pipeline = pipeline();
		pipeline.handle(InputEvent::press(Channel::Mouse));
		pipeline.handle(mouse_to(0.0, 0.0));
		let bevel = StrokeStyle::builder()
			.line_join(LineJoin::Bevel)
			.line_width(5.0)
			.color("blue")
			.build()
			.unwrap();
		pipeline.set_style(bevel.clone());
		pipeline.handle(mouse_to(1.0, 0.0));

		let styles: Vec<_> = pipeline
			.into_renderer()
			.calls()
			.iter()
			.filter_map(|call| match call {
				Call::ApplyStyle(style) => Some(style.clone()),
				_ => None,
			})
			.collect();
		assert_eq!(styles, [StrokeStyle::default(), bevel]);
	}

	#[test]
	fn test_config_enables_jump_suppression() {
		let mut pipeline = StrokePipeline::with_config(
			RecordingRenderer::default(),
			StrokeStyle::default(),
			SurfaceGeometry::default(),
			PipelineConfig::builder()
				.max_segment_length(100.0)
				.build()
				.unwrap(),
		);
		pipeline.handle(InputEvent::press(Channel::Mouse));
		pipeline.handle(mouse_to(0.0, 0.0));
		assert_eq!(
			pipeline.handle(mouse_to(0.0, 400.0)),
			Some(Paint::Anchor(DVec2::new(0.0, 400.0)))
		);
	}

	#[test]
	fn test_config_rejects_unusable_max_segment_length() {
		for max in [0.0, -1.0, f64::NAN, f64::INFINITY] {
			let result = PipelineConfig::builder().max_segment_length(max).build();
			assert!(
				matches!(result, Err(ConfigError::InvalidMaxSegmentLength(_))),
				"{max}"
			);
		}
		assert_eq!(
			PipelineConfig::builder().build().unwrap(),
			PipelineConfig::default()
		);
		assert_eq!(
			PipelineConfig::builder()
				.max_segment_length(0.5)
				.build()
				.unwrap()
				.max_segment_length(),
			Some(0.5)
		);
	}

	#[test]
	fn test_release_during_stroke_stops_later_moves() {
		let mut pipeline = pipeline();
		pipeline.handle(InputEvent::press(Channel::Mouse));
		pipeline.handle(mouse_to(10.0, 10.0));
		pipeline.handle(mouse_to(0.0, 10.0));
		// The button came up off the surface; the next move without it held reports a release.
		pipeline.handle(InputEvent::release(Channel::Mouse));
		assert_eq!(pipeline.handle(mouse_to(200.0, 150.0)), None);
		assert_eq!(pipeline.handle(mouse_to(210.0, 150.0)), None);
		assert!(!pipeline
			.renderer()
			.calls()
			.contains(&Call::LineTo(DVec2::new(200.0, 150.0))));
		assert_eq!(pipeline.renderer().paints().len(), 2);
	}
}

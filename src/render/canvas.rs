use super::Renderer;
use crate::engine::{Point, StrokeStyle};
use crate::util::JsError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
	#[error("canvas has no 2d context")]
	NoContext,

	#[error("failed to get 2d context")]
	Js(#[from] JsError),
}

static_assertions::assert_impl_all!(CanvasError: std::error::Error, Send, Sync);

/// Renders onto an HTML canvas through its 2D context.
#[derive(Debug, Clone)]
pub struct CanvasRenderer {
	context: CanvasRenderingContext2d,
	applied: Option<StrokeStyle>,
}

impl CanvasRenderer {
	pub fn new(context: CanvasRenderingContext2d) -> Self {
		Self {
			context,
			applied: None,
		}
	}

	#[tracing::instrument(skip_all, err)]
	pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, CanvasError> {
		let context = canvas
			.get_context("2d")
			.map_err(JsError::from)?
			.ok_or(CanvasError::NoContext)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|object| JsError::from(JsValue::from(object)))?;
		Ok(Self::new(context))
	}

	pub fn context(&self) -> &CanvasRenderingContext2d {
		&self.context
	}
}

impl Renderer for CanvasRenderer {
	fn apply_style(&mut self, style: &StrokeStyle) {
		// Context properties are only written when the style actually changes.
		if self.applied.as_ref() == Some(style) {
			return;
		}
		self.context.set_line_join(&style.line_join().to_string());
		self.context.set_line_cap(&style.line_cap().to_string());
		self.context.set_line_width(style.line_width());
		self.context.set_stroke_style_str(style.color());
		self.applied = Some(style.clone());
	}

	fn begin_path(&mut self) {
		self.context.begin_path();
	}

	fn move_to(&mut self, point: Point) {
		self.context.move_to(point.x, point.y);
	}

	fn line_to(&mut self, point: Point) {
		self.context.line_to(point.x, point.y);
	}

	fn stroke(&mut self) {
		self.context.stroke();
	}
}

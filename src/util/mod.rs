mod result_ext;
pub use result_ext::*;

use crate::engine::{Channel, InputEvent, PointerSample};
use glam::DVec2;

#[derive(thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

/// DOM events that carry a pointer position.
pub trait CoordinateSource {
	fn get_sample(&self) -> PointerSample;
}

impl CoordinateSource for leptos::ev::MouseEvent {
	/// The listener is bound to the canvas itself, so the offset is already surface-local.
	fn get_sample(&self) -> PointerSample {
		PointerSample::Local(DVec2::new(self.offset_x() as f64, self.offset_y() as f64))
	}
}

impl CoordinateSource for leptos::ev::TouchEvent {
	fn get_sample(&self) -> PointerSample {
		let touches = self.target_touches();
		PointerSample::Touches(
			(0..touches.length())
				.filter_map(|i| touches.get(i))
				.map(|touch| DVec2::new(touch.client_x() as f64, touch.client_y() as f64))
				.collect(),
		)
	}
}

/// Maps a mouse move on the surface to pipeline input. Without the primary button held, the
/// release happened where no listener saw it, so the move ends the stroke instead of extending it.
pub fn mouse_move_input(e: &leptos::ev::MouseEvent) -> InputEvent {
	if e.buttons() & 1 != 0 {
		InputEvent::moved(Channel::Mouse, e.get_sample())
	} else {
		InputEvent::release(Channel::Mouse)
	}
}

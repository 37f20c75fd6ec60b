use crate::engine::*;
use crate::geom::SurfaceGeometry;
use crate::render::{CanvasError, CanvasRenderer};
use crate::util::*;
use glam::DVec2;
use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

type Pipeline = StrokePipeline<CanvasRenderer>;

#[tracing::instrument(skip_all, err)]
fn create_pipeline(
	canvas: &HtmlCanvasElement,
	style: StrokeStyle,
	config: PipelineConfig,
) -> Result<Pipeline, CanvasError> {
	// Fill the parent once. Later resizes are not tracked.
	if let Some(parent) = canvas.parent_element() {
		canvas.set_width(parent.client_width().max(0) as u32);
		canvas.set_height(parent.client_height().max(0) as u32);
	}
	let geometry = SurfaceGeometry::new(
		DVec2::new(canvas.offset_left() as f64, canvas.offset_top() as f64),
		DVec2::new(canvas.width() as f64, canvas.height() as f64),
	);
	let renderer = CanvasRenderer::from_canvas(canvas)?;
	tracing::info!(?geometry, "Whiteboard::create_pipeline");
	Ok(StrokePipeline::with_config(renderer, style, geometry, config))
}

/// A canvas that draws a stroke under the mouse or a single touch while it is held down.
#[component]
pub fn Whiteboard(
	#[prop(into, default = Signal::stored(LineJoin::Round))] line_join: Signal<LineJoin>,
	#[prop(into, default = Signal::stored(LineCap::Round))] line_cap: Signal<LineCap>,
	#[prop(into, default = Signal::stored(DEFAULT_LINE_WIDTH))] line_width: Signal<f64>,
	#[prop(into, default = Signal::stored(DEFAULT_COLOR.to_owned()))] color: Signal<String>,
	#[prop(optional)] max_segment_length: Option<f64>,
) -> impl IntoView {
	let style = Memo::new(move |_| {
		StrokeStyle::builder()
			.line_join(line_join.get())
			.line_cap(line_cap.get())
			.line_width(line_width.get())
			.color(color.get())
			.build()
			.map_err(|err| err.to_string())
	});

	let config = PipelineConfig::builder()
		.maybe_max_segment_length(max_segment_length)
		.build()
		.ok_or_log_context("whiteboard config")
		.unwrap_or_default();

	let node_ref = NodeRef::<html::Canvas>::new();
	let pipeline = StoredValue::new_local(None::<Pipeline>);

	Effect::new(move |_| {
		let Some(canvas) = node_ref.get() else {
			return;
		};
		if pipeline.with_value(Option::is_some) {
			return;
		}
		let initial = style.get_untracked().unwrap_or_default();
		pipeline.set_value(create_pipeline(&canvas, initial, config).ok_or_log());
	});

	Effect::new(move |_| match style.get() {
		Ok(style) => pipeline.update_value(|pipeline| {
			if let Some(pipeline) = pipeline {
				pipeline.set_style(style);
			}
		}),
		Err(error) => tracing::warn!(%error, "keeping previous stroke style"),
	});

	let dispatch = move |event: InputEvent| {
		pipeline.update_value(|pipeline| {
			if let Some(pipeline) = pipeline {
				pipeline.handle(event);
			}
		});
	};

	let mousedown = move |_: leptos::ev::MouseEvent| dispatch(InputEvent::press(Channel::Mouse));
	let mousemove = move |e: leptos::ev::MouseEvent| dispatch(mouse_move_input(&e));

	// Listen on the window so a button released outside the canvas still ends the stroke.
	let mouseup = window_event_listener(leptos::ev::mouseup, move |_| {
		dispatch(InputEvent::release(Channel::Mouse));
	});
	on_cleanup(move || mouseup.remove());

	// Default handling would scroll the page and synthesize mouse events.
	let touchstart = move |e: leptos::ev::TouchEvent| {
		e.prevent_default();
		dispatch(InputEvent::press(Channel::Touch));
	};
	let touchmove = move |e: leptos::ev::TouchEvent| {
		e.prevent_default();
		dispatch(InputEvent::moved(Channel::Touch, e.get_sample()));
	};
	let touchend = move |_: leptos::ev::TouchEvent| dispatch(InputEvent::release(Channel::Touch));

	let style_error = move || {
		style
			.with(|style| style.as_ref().err().cloned())
			.map(|error| view! { <span class="WhiteboardError">{error}</span> })
	};

	view! {
		<div class="Whiteboard">
			<canvas
				class="WhiteboardSurface"
				node_ref=node_ref
				on:mousedown=mousedown
				on:mousemove=mousemove
				on:touchstart=touchstart
				on:touchmove=touchmove
				on:touchend=touchend
				on:touchcancel=touchend
			></canvas>
			{style_error}
		</div>
	}
}

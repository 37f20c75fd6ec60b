use super::BrushSetting;
use crate::engine::{LineCap, LineJoin};
use crate::util::ResultExt;
use leptos::prelude::*;

#[component]
pub fn StrokeSettings(
	line_join: RwSignal<LineJoin>,
	line_cap: RwSignal<LineCap>,
	line_width: RwSignal<f64>,
	color: RwSignal<String>,
) -> impl IntoView {
	let join_options = LineJoin::ALL
		.into_iter()
		.map(|join| {
			view! {
				<option value=join.to_string() selected=move || line_join.get() == join>
					{join.to_string()}
				</option>
			}
		})
		.collect_view();

	let cap_options = LineCap::ALL
		.into_iter()
		.map(|cap| {
			view! {
				<option value=cap.to_string() selected=move || line_cap.get() == cap>
					{cap.to_string()}
				</option>
			}
		})
		.collect_view();

	view! {
		<div class="StrokeSettings">
			<BrushSetting name="Width">
				<input
					type="range"
					min="0.5"
					max="32"
					step="0.5"
					prop:value=move || line_width.get().to_string()
					on:input=move |ev| {
						if let Some(width) = event_target_value(&ev)
							.parse::<f64>()
							.ok_or_log_context("line width")
						{
							line_width.set(width);
						}
					}
				/>
				<span>{move || line_width.get()}</span>
			</BrushSetting>

			<BrushSetting name="Color">
				<input
					type="text"
					prop:value=color
					on:change=move |ev| color.set(event_target_value(&ev))
				/>
			</BrushSetting>

			<BrushSetting name="Join">
				<select on:change=move |ev| {
					if let Some(join) = event_target_value(&ev).parse::<LineJoin>().ok_or_log() {
						line_join.set(join);
					}
				}>{join_options}</select>
			</BrushSetting>

			<BrushSetting name="Cap">
				<select on:change=move |ev| {
					if let Some(cap) = event_target_value(&ev).parse::<LineCap>().ok_or_log() {
						line_cap.set(cap);
					}
				}>{cap_options}</select>
			</BrushSetting>
		</div>
	}
}

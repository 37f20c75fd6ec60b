use leptos::prelude::*;

/// A labelled row in the stroke settings panel.
#[component]
pub fn BrushSetting(#[prop(into)] name: String, children: Children) -> impl IntoView {
	view! {
		<label class="BrushSetting">
			<span class="BrushSettingName">{name}</span>
			{children()}
		</label>
	}
}

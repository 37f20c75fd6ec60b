use crate::components::*;
use crate::engine::{LineCap, LineJoin, DEFAULT_COLOR, DEFAULT_LINE_WIDTH};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Home() -> impl IntoView {
	let line_join = RwSignal::new(LineJoin::Round);
	let line_cap = RwSignal::new(LineCap::Round);
	let line_width = RwSignal::new(DEFAULT_LINE_WIDTH);
	let color = RwSignal::new(DEFAULT_COLOR.to_owned());

	view! {
		<Title text="Home"/>
		<div class="Home">
			<Whiteboard line_join=line_join line_cap=line_cap line_width=line_width color=color/>
			<StrokeSettings line_join=line_join line_cap=line_cap line_width=line_width color=color/>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}

/// Level for the terminal subscriber. Release builds also compile out everything below `warn`.
fn fallback_level() -> tracing::Level {
	if cfg!(debug_assertions) {
		tracing::Level::DEBUG
	} else {
		tracing::Level::INFO
	}
}

/// Prefers the browser console and falls back to formatted output when that is unavailable,
/// e.g. when the binary is built natively.
fn install_subscriber() -> anyhow::Result<()> {
	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	if tracing_wasm::try_set_as_global_default().is_ok() {
		return Ok(());
	}

	let subscriber = tracing_subscriber::FmtSubscriber::builder()
		.with_max_level(fallback_level())
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;
	Ok(())
}

fn init_diagnostics() -> anyhow::Result<()> {
	install_subscriber()?;

	// Dependencies that emit through `log` end up in the same subscriber.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

fn main() {
	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	console_error_panic_hook::set_once();

	if let Err(error) = init_diagnostics() {
		tracing::error!(%error, "diagnostics unavailable");
	}

	leptos::mount::mount_to_body(whiteboard::App)
}

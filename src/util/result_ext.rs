use std::fmt::Display;

pub trait ResultExt<T, E> {
	/// Discards the error after logging it.
	fn ok_or_log(self) -> Option<T>
	where
		E: Display;

	/// Like `ok_or_log`, prefixing the logged error with what was being attempted.
	fn ok_or_log_context(self, context: &str) -> Option<T>
	where
		E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self) -> Option<T>
	where
		E: Display,
	{
		self.inspect_err(|err| tracing::error!("{}", err)).ok()
	}

	fn ok_or_log_context(self, context: &str) -> Option<T>
	where
		E: Display,
	{
		self
			.inspect_err(|err| tracing::error!(context, "{}", err))
			.ok()
	}
}

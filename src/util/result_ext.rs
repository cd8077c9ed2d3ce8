pub trait ResultExt<T, E> {
	/// Logs the error, if any, and drops it.
	fn ok_or_log(self) -> Option<T>;

	/// Logs the error, if any, and falls back to `T::default()`. `what` names the
	/// value being defaulted in the log line.
	fn unwrap_or_log_default(self, what: &str) -> T
	where
		T: Default;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self) -> Option<T> {
		self.inspect_err(|err| tracing::error!("{}", err)).ok()
	}

	fn unwrap_or_log_default(self, what: &str) -> T
	where
		T: Default,
	{
		self
			.inspect_err(|err| tracing::warn!(what, %err, "falling back to default"))
			.unwrap_or_default()
	}
}

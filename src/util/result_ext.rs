pub trait ResultExt<T, E> {
	/// Logs the error, if any, and carries on without the value.
	fn ok_or_log(self) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self.inspect_err(|err| tracing::warn!(error = %err, "ignoring error")).ok()
	}
}

/// log and drop the error of a result nobody needs to act upon, such as a closed channel
/// during shutdown. the error goes into an `error` field, `context` becomes the message
pub trait DiscardFailure {
	/// failure is routine, e.g. the receiving side already went away
	fn discard_info(self, context: &str);
	/// failure is unexpected but the caller can go on without the value
	fn discard_warn(self, context: &str);
}

impl<T, E: std::fmt::Display> DiscardFailure for Result<T, E> {
	fn discard_info(self, context: &str) {
		if let Err(e) = self {
			tracing::info!(error = %e, "{context}");
		}
	}

	fn discard_warn(self, context: &str) {
		if let Err(e) = self {
			tracing::warn!(error = %e, "{context}");
		}
	}
}

#[cfg(test)]
mod test {
	use super::DiscardFailure;

	#[tokio::test]
	async fn closed_channel_is_dropped_quietly() {
		let (tx, rx) = tokio::sync::watch::channel(false);
		drop(rx);
		tx.send(true).discard_info("no listeners left");

		let (tx, mut rx) = tokio::sync::watch::channel(false);
		drop(tx);
		rx.changed().await.discard_warn("stop channel gone");

		Ok::<(), String>(()).discard_warn("never logged");
	}
}

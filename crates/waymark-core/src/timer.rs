//! Timers for background polling.

use std::time::Duration;

/// Waits for `duration` on the browser event loop.
#[cfg(wasm)]
pub async fn sleep(duration: Duration) {
	gloo_timers::future::sleep(duration).await;
}

/// Waits for `duration` on the tokio timer.
#[cfg(native)]
pub async fn sleep(duration: Duration) {
	tokio::time::sleep(duration).await;
}

#[cfg(all(test, native))]
mod tests {
	use super::*;
	use std::time::Instant;

	#[tokio::test]
	async fn test_sleep_waits_at_least_duration() {
		let started = Instant::now();

		sleep(Duration::from_millis(20)).await;

		assert!(started.elapsed() >= Duration::from_millis(20));
	}
}

//! Detached task spawning.
//!
//! Background work that must never block navigation (error reports, session
//! refresh polling) is started through [`spawn_detached`]. In the browser the
//! task runs on the page's microtask queue via `wasm-bindgen-futures`;
//! natively it is handed to the ambient tokio runtime.

use std::fmt::Display;
use std::future::Future;

use crate::error_log;

/// Boxed future accepted by [`spawn_detached`] on the current target.
#[cfg(wasm)]
pub type TaskFuture<'a, T> = futures::future::LocalBoxFuture<'a, T>;

/// Boxed future accepted by [`spawn_detached`] on the current target.
#[cfg(native)]
pub type TaskFuture<'a, T> = futures::future::BoxFuture<'a, T>;

/// `Send` natively, no bound in the browser.
#[cfg(native)]
pub trait MaybeSend: Send {}
#[cfg(native)]
impl<T: Send + ?Sized> MaybeSend for T {}

/// `Send` natively, no bound in the browser.
#[cfg(wasm)]
pub trait MaybeSend {}
#[cfg(wasm)]
impl<T: ?Sized> MaybeSend for T {}

/// `Sync` natively, no bound in the browser.
#[cfg(native)]
pub trait MaybeSync: Sync {}
#[cfg(native)]
impl<T: Sync + ?Sized> MaybeSync for T {}

/// `Sync` natively, no bound in the browser.
#[cfg(wasm)]
pub trait MaybeSync {}
#[cfg(wasm)]
impl<T: ?Sized> MaybeSync for T {}

/// Spawns a future on the browser event loop without awaiting it.
#[cfg(wasm)]
pub fn spawn_detached<F>(task: F)
where
	F: Future<Output = ()> + 'static,
{
	wasm_bindgen_futures::spawn_local(task);
}

/// Spawns a future on the current tokio runtime without awaiting it.
///
/// Outside of a runtime the task is dropped and an error is logged.
#[cfg(native)]
pub fn spawn_detached<F>(task: F)
where
	F: Future<Output = ()> + Send + 'static,
{
	match tokio::runtime::Handle::try_current() {
		Ok(handle) => {
			handle.spawn(task);
		}
		Err(_) => error_log!("no async runtime available; detached task dropped"),
	}
}

/// Spawns a fallible future and logs its error under `label`.
#[cfg(wasm)]
pub fn spawn_logged<F, E>(label: &'static str, task: F)
where
	F: Future<Output = Result<(), E>> + 'static,
	E: Display + 'static,
{
	spawn_detached(async move {
		if let Err(err) = task.await {
			error_log!("{}: {}", label, err);
		}
	});
}

/// Spawns a fallible future and logs its error under `label`.
#[cfg(native)]
pub fn spawn_logged<F, E>(label: &'static str, task: F)
where
	F: Future<Output = Result<(), E>> + Send + 'static,
	E: Display + Send + 'static,
{
	spawn_detached(async move {
		if let Err(err) = task.await {
			error_log!("{}: {}", label, err);
		}
	});
}

#[cfg(all(test, native))]
mod tests {
	use super::*;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicBool, Ordering};

	#[tokio::test]
	async fn test_spawn_detached_runs_task() {
		let ran = Arc::new(AtomicBool::new(false));
		let (tx, rx) = tokio::sync::oneshot::channel();

		let flag = ran.clone();
		spawn_detached(async move {
			flag.store(true, Ordering::SeqCst);
			let _ = tx.send(());
		});

		rx.await.unwrap();
		assert!(ran.load(Ordering::SeqCst));
	}

	#[tokio::test]
	async fn test_spawn_logged_swallows_error() {
		let (tx, rx) = tokio::sync::oneshot::channel::<()>();

		spawn_logged("test task", async move {
			drop(tx);
			Err::<(), _>("boom")
		});

		// The sender is dropped by the task; the error itself is only logged.
		assert!(rx.await.is_err());
	}

	#[tokio::test]
	async fn test_task_future_is_spawnable() {
		let (tx, rx) = tokio::sync::oneshot::channel();
		let task: TaskFuture<'static, ()> = Box::pin(async move {
			let _ = tx.send(42);
		});

		spawn_detached(task);

		assert_eq!(rx.await.unwrap(), 42);
	}

	#[test]
	fn test_spawn_detached_without_runtime_does_not_panic() {
		spawn_detached(async {});
	}
}

use std::sync::{
    atomic::{
        AtomicBool,
        Ordering,
    },
    Arc,
};

use tokio::task::JoinHandle;

/// A spawned task that can be called off.
///
/// Cancelling flips the shared token first, so a task that already finished its
/// work but has not yet posted a result will not post it, then aborts the future.
pub struct TaskHandle {
    cancel_token: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<()>>,
}

impl TaskHandle {
    pub fn new(cancel_token: Arc<AtomicBool>, join_handle: JoinHandle<()>) -> Self {
        Self { cancel_token, join_handle: Some(join_handle) }
    }

    pub fn cancel(&self) {
        self.cancel_token.store(true, Ordering::Relaxed);
        if let Some(handle) = &self.join_handle {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.join_handle.as_ref().map(|h| h.is_finished()).unwrap_or(true)
    }
}

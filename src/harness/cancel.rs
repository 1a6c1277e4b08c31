use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation handle shared between a running test sweep and
/// the hosting service.
///
/// The harness only ever reads the token, and only between schedules — an
/// in-flight schedule replay always completes or exhausts its budget first.
/// Clones share one flag, so the host can keep a clone in whatever operation
/// registry it maintains and flip it from another thread or task.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

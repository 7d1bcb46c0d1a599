use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Marshals asynchronous repaint requests onto the presentation thread.
///
/// The engine may request a repaint from any thread at any frequency. The
/// scheduler is a level-triggered dirty flag: the first request after a
/// presentation pass invokes `post` (the hop onto the presentation
/// thread's task queue), and further requests before the next pass
/// coalesce into it. State machine: Idle -> PendingRepaint on request,
/// PendingRepaint -> Idle on `take`.
pub struct RepaintScheduler {
    inner: Arc<SchedulerInner>,
}

struct SchedulerInner {
    pending: AtomicBool,
    post: Box<dyn Fn() + Send + Sync>,
}

impl RepaintScheduler {
    /// `post` schedules one presentation pass; it must not block and must
    /// be callable from any thread.
    pub fn new(post: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(SchedulerInner {
                pending: AtomicBool::new(false),
                post: Box::new(post),
            }),
        }
    }

    /// A handle the engine can invoke from any thread. Handles hold a weak
    /// reference: they outlive the scheduler harmlessly.
    pub fn handle(&self) -> RepaintHandle {
        RepaintHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Consume the pending flag. Presentation thread only; returns whether
    /// a repaint had been requested since the last call.
    pub fn take(&self) -> bool {
        self.inner.pending.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.load(Ordering::Acquire)
    }
}

/// The repaint callback handed to the engine at init.
#[derive(Clone)]
pub struct RepaintHandle {
    inner: Weak<SchedulerInner>,
}

impl RepaintHandle {
    /// Request one repaint. Non-blocking, callable from any thread.
    ///
    /// Requests arriving while one is already pending coalesce; a request
    /// after the scheduler was torn down is discarded.
    pub fn request(&self) {
        let Some(inner) = self.inner.upgrade() else {
            log::debug!("repaint requested after host teardown, ignoring");
            return;
        };
        if !inner.pending.swap(true, Ordering::AcqRel) {
            (inner.post)();
        }
    }
}

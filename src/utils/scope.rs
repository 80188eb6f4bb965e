use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use derive_more::Display;
use futures::future::{AbortHandle, Abortable};

/// The owning page went away while the request was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "page closed while a request was in flight")]
pub struct Cancelled;

impl std::error::Error for Cancelled {}

/// Set of in-flight work bound to one page. Cancelling the scope aborts
/// everything running in it and refuses new work.
#[derive(Debug, Default)]
pub struct Scope {
    cancelled: AtomicBool,
    next: AtomicU64,
    running: Mutex<HashMap<u64, AbortHandle>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn in_flight(&self) -> usize {
        self.running.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, Cancelled> {
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        {
            let mut running = self.running.lock().unwrap_or_else(|e| e.into_inner());
            // checked under the lock so cancel() cannot slip in between
            if self.is_cancelled() {
                return Err(Cancelled);
            }
            running.insert(id, handle);
        }

        let result = Abortable::new(fut, registration).await;
        self.running
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&id);
        result.map_err(|_| Cancelled)
    }

    pub fn cancel(&self) {
        let mut running = self.running.lock().unwrap_or_else(|e| e.into_inner());
        self.cancelled.store(true, Ordering::Release);
        for (_, handle) in running.drain() {
            handle.abort();
        }
    }
}

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

use super::scope::Scope;

/// Server-held state of one page activation plus the scope its requests
/// run in.
pub struct PageSlot<P> {
    scope: Scope,
    state: Mutex<P>,
}

impl<P> PageSlot<P> {
    fn new(state: P) -> Self {
        Self {
            scope: Scope::new(),
            state: Mutex::new(state),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Never hold the guard across a gateway call.
    pub async fn lock(&self) -> MutexGuard<'_, P> {
        self.state.lock().await
    }
}

/// Page sessions keyed by id. A session ends when it is closed explicitly
/// (navigation away) or after `idle` without requests; either way its scope
/// is cancelled.
pub struct PageStore<P> {
    pages: Cache<Uuid, Arc<PageSlot<P>>>,
}

impl<P: Send + 'static> PageStore<P> {
    pub fn new(idle: Duration) -> Self {
        let pages = Cache::builder()
            .max_capacity(10_000)
            .time_to_idle(idle)
            .eviction_listener(|id: Arc<Uuid>, slot: Arc<PageSlot<P>>, cause| {
                debug!(page = %id, ?cause, "Page session ended");
                slot.scope.cancel();
            })
            .build();
        Self { pages }
    }

    pub async fn open(&self, state: P) -> (Uuid, Arc<PageSlot<P>>) {
        let id = Uuid::new_v4();
        let slot = Arc::new(PageSlot::new(state));
        self.pages.insert(id, slot.clone()).await;
        debug!(page = %id, "Page session opened");
        (id, slot)
    }

    pub async fn find(&self, id: &Uuid) -> Option<Arc<PageSlot<P>>> {
        self.pages.get(id).await
    }

    pub async fn close(&self, id: &Uuid) {
        self.pages.invalidate(id).await;
    }
}

/// Parses the `session` value carried in links and forms.
pub fn parse_page_id(raw: Option<&str>) -> Option<Uuid> {
    raw.and_then(|s| Uuid::parse_str(s.trim()).ok())
}

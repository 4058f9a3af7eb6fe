use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use moka::sync::Cache;

use super::controller::{DirectoryController, LoadTicket};
use crate::services::{ApiError, UserSource};

pub type SharedController = Arc<Mutex<DirectoryController>>;

/// Controllers keyed by the opaque directory id kept in each browser session.
///
/// Bounded and idle-expiring: a session that stops making requests loses
/// its controller and starts over with a fresh load.
pub struct DirectoryStore {
    controllers: Cache<String, SharedController>,
}

impl DirectoryStore {
    pub fn new(max_sessions: u64, idle_timeout: Duration) -> Self {
        let controllers = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle_timeout)
            .build();
        Self { controllers }
    }

    /// Controller for `directory_id`, created in `Loading` on first use.
    pub fn get_or_create(&self, directory_id: &str) -> SharedController {
        self.controllers.get_with(directory_id.to_string(), || {
            Arc::new(Mutex::new(DirectoryController::new()))
        })
    }

    pub fn contains(&self, directory_id: &str) -> bool {
        self.controllers.contains_key(directory_id)
    }

    /// Live sessions after pending evictions have been applied.
    pub fn len(&self) -> u64 {
        self.controllers.run_pending_tasks();
        self.controllers.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock a controller. A poisoned lock still holds consistent state since
/// every mutation is a single assignment sequence.
pub fn lock(controller: &SharedController) -> MutexGuard<'_, DirectoryController> {
    controller.lock().unwrap_or_else(|e| e.into_inner())
}

/// Initial load on mount. Returns false if a fetch was already running.
/// The fetch continues in the background; the caller renders `Loading`.
pub fn mount(controller: &SharedController, source: Arc<dyn UserSource>) -> bool {
    let ticket = lock(controller).begin_load();
    start_load(controller, source, ticket)
}

/// Manual recovery from `Errored`. Returns false if nothing was started.
pub fn retry(controller: &SharedController, source: Arc<dyn UserSource>) -> bool {
    let ticket = lock(controller).retry();
    start_load(controller, source, ticket)
}

/// Spawn the fetch and a watcher that always settles the ticket, even when
/// the fetch task panics or is cancelled. The lock is never held across an
/// await.
fn start_load(
    controller: &SharedController,
    source: Arc<dyn UserSource>,
    ticket: Option<LoadTicket>,
) -> bool {
    let Some(ticket) = ticket else {
        return false;
    };
    let target = controller.clone();
    actix_web::rt::spawn(async move {
        let fetch = actix_web::rt::spawn(async move { source.fetch_users().await });
        let result = match fetch.await {
            Ok(result) => result,
            Err(e) => {
                log::error!("Load task failed: {e}");
                Err(ApiError::Network { message: format!("load task failed: {e}") })
            }
        };
        lock(&target).finish_load(ticket, result);
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DirectoryStore {
        DirectoryStore::new(100, Duration::from_secs(60))
    }

    #[test]
    fn same_id_returns_same_controller() {
        let store = store();
        let a = store.get_or_create("abc");
        let b = store.get_or_create("abc");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_ids_are_isolated() {
        let store = store();
        let a = store.get_or_create("a");
        let b = store.get_or_create("b");
        assert!(!Arc::ptr_eq(&a, &b));
        let _ = lock(&a).begin_load();
        assert!(lock(&b).begin_load().is_some());
    }

    #[test]
    fn idle_sessions_are_evicted() {
        let store = DirectoryStore::new(100, Duration::from_millis(50));
        let first = store.get_or_create("idle");
        std::thread::sleep(Duration::from_millis(150));

        assert!(!store.contains("idle"));
        assert_eq!(store.len(), 0);
        let second = store.get_or_create("idle");
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn capacity_is_bounded() {
        let store = DirectoryStore::new(10, Duration::from_secs(60));
        for i in 0..200 {
            store.get_or_create(&format!("session-{i}"));
        }
        assert!(store.len() <= 10, "len = {}", store.len());
    }
}

//! Shared web-content process pool

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
struct Registry {
    origin_to_process: HashMap<String, u32>,
    next_id: u32,
}

/// Pool of content processes shared by every web view that references it.
///
/// Web views loading the same origin are served by the same process, so
/// opening many sites does not pay process startup each time.
#[derive(Debug)]
pub struct ProcessPool {
    id: u64,
    registry: Mutex<Registry>,
}

impl ProcessPool {
    /// Create a new, empty pool
    pub fn new() -> Self {
        let id = NEXT_POOL_ID.fetch_add(1, Ordering::SeqCst);
        log::debug!("Process pool {} created", id);
        Self {
            id,
            registry: Mutex::new(Registry {
                origin_to_process: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Pool id, unique within the running program
    pub fn id(&self) -> u64 {
        self.id
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // Registry updates are single inserts, so a poisoned guard still
        // holds consistent data.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the process serving `origin`, spawning one on first use
    pub fn process_for_origin(&self, origin: &str) -> u32 {
        let mut registry = self.registry();

        if let Some(&id) = registry.origin_to_process.get(origin) {
            return id;
        }

        let id = registry.next_id;
        registry.next_id += 1;
        registry.origin_to_process.insert(origin.to_string(), id);
        log::debug!("Pool {} spawned process {} for {}", self.id, id, origin);

        id
    }

    /// Number of content processes spawned so far
    pub fn process_count(&self) -> usize {
        self.registry().origin_to_process.len()
    }
}

impl Default for ProcessPool {
    fn default() -> Self {
        Self::new()
    }
}

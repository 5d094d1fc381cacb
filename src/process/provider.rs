//! Web view factory backed by one lazily created process pool
//!
//! Creating the pool is slow, so it is built on the first request and every
//! later web view reuses it. Sharing a pool trades per-site process
//! isolation for lower memory use and faster web view creation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};
use std::time::Instant;

use url::Url;

use super::pool::ProcessPool;
use super::webview::{WebView, WebViewConfiguration};
use crate::utils::{ProcessError, Result};

/// Anything that can hand out web views
pub trait WebViewProvidable: Send + Sync {
    fn create_web_view(&self) -> Result<WebView>;
}

/// Builds the shared pool
pub type PoolFactory = Box<dyn Fn() -> Result<ProcessPool> + Send + Sync>;

/// Where the pool may be constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadPolicy {
    /// Only on the given host UI thread
    HostThread(ThreadId),
    /// On any thread
    Any,
}

/// Provider counters
#[derive(Debug, Default)]
pub struct ProviderStats {
    pools_created: AtomicUsize,
    web_views_created: AtomicUsize,
}

impl ProviderStats {
    pub fn pools_created(&self) -> usize {
        self.pools_created.load(Ordering::Relaxed)
    }

    pub fn web_views_created(&self) -> usize {
        self.web_views_created.load(Ordering::Relaxed)
    }
}

/// Web view provider sharing a single [`ProcessPool`]
pub struct WebViewProvider {
    pool: Mutex<Option<Arc<ProcessPool>>>,
    factory: PoolFactory,
    thread_policy: ThreadPolicy,
    stats: ProviderStats,
}

impl WebViewProvider {
    /// Create a provider bound to the calling thread as the host UI thread
    pub fn new() -> Self {
        Self::with_factory(Box::new(|| -> Result<ProcessPool> { Ok(ProcessPool::new()) }))
    }

    /// Create a provider with a custom pool factory, bound to the calling
    /// thread. The factory must not call back into the provider.
    pub fn with_factory(factory: PoolFactory) -> Self {
        Self {
            pool: Mutex::new(None),
            factory,
            thread_policy: ThreadPolicy::HostThread(thread::current().id()),
            stats: ProviderStats::default(),
        }
    }

    pub fn with_thread_policy(mut self, policy: ThreadPolicy) -> Self {
        self.thread_policy = policy;
        self
    }

    /// Whether the shared pool has been built
    pub fn is_initialized(&self) -> bool {
        self.slot().is_some()
    }

    /// The shared pool, if already built
    pub fn pool(&self) -> Option<Arc<ProcessPool>> {
        self.slot().clone()
    }

    pub fn stats(&self) -> &ProviderStats {
        &self.stats
    }

    fn slot(&self) -> MutexGuard<'_, Option<Arc<ProcessPool>>> {
        // The slot is only written after the factory returns, so a panic
        // inside the factory leaves it holding `None`.
        self.pool.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the shared pool, building it on first use. The slot stays locked
    /// for the whole construction so racing callers wait for one build.
    fn shared_pool(&self) -> Result<Arc<ProcessPool>> {
        let mut slot = self.slot();

        if let Some(pool) = slot.as_ref() {
            return Ok(Arc::clone(pool));
        }

        if let ThreadPolicy::HostThread(host) = self.thread_policy {
            if thread::current().id() != host {
                return Err(ProcessError::WrongThread.into());
            }
        }

        let started = Instant::now();
        let pool = match (self.factory)() {
            Ok(pool) => Arc::new(pool),
            Err(e) => {
                log::warn!("Failed to create shared process pool: {}", e);
                return Err(e);
            }
        };
        self.stats.pools_created.fetch_add(1, Ordering::Relaxed);
        log::info!(
            "Shared process pool {} ready in {:?}",
            pool.id(),
            started.elapsed()
        );

        *slot = Some(Arc::clone(&pool));
        Ok(pool)
    }
}

impl WebViewProvidable for WebViewProvider {
    fn create_web_view(&self) -> Result<WebView> {
        let pool = self.shared_pool()?;
        self.stats.web_views_created.fetch_add(1, Ordering::Relaxed);
        Ok(WebView::new(WebViewConfiguration::new(pool)))
    }
}

/// Create a web view from `provider` and point it at `url`
pub fn open_in_web_view(provider: &dyn WebViewProvidable, url: &Url) -> Result<WebView> {
    let mut web_view = provider.create_web_view()?;
    web_view.load(url);
    Ok(web_view)
}

impl Default for WebViewProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SiteListError;

    fn counting_provider(calls: Arc<AtomicUsize>) -> WebViewProvider {
        WebViewProvider::with_factory(Box::new(move || -> Result<ProcessPool> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(ProcessPool::new())
        }))
    }

    #[test]
    fn test_open_in_web_view_loads_url() {
        let provider = WebViewProvider::new();
        let url = Url::parse("https://google.com").unwrap();
        let view = open_in_web_view(&provider, &url).unwrap();
        assert_eq!(view.current_url(), Some(&url));
        assert_eq!(provider.pool().unwrap().process_count(), 1);
    }

    #[test]
    fn test_pool_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = counting_provider(Arc::clone(&calls));
        assert!(!provider.is_initialized());
        assert!(provider.pool().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        provider.create_web_view().unwrap();
        assert!(provider.is_initialized());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_web_views_share_pool() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = counting_provider(Arc::clone(&calls));
        let a = provider.create_web_view().unwrap();
        let b = provider.create_web_view().unwrap();

        assert!(Arc::ptr_eq(a.process_pool(), b.process_pool()));
        assert!(Arc::ptr_eq(a.process_pool(), &provider.pool().unwrap()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.stats().pools_created(), 1);
        assert_eq!(provider.stats().web_views_created(), 2);
    }

    #[test]
    fn test_failed_construction_can_retry() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let provider = WebViewProvider::with_factory(Box::new(move || -> Result<ProcessPool> {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ProcessError::PoolUnavailable("out of memory".to_string()).into())
            } else {
                Ok(ProcessPool::new())
            }
        }));

        let err = provider.create_web_view().unwrap_err();
        assert!(matches!(
            err,
            SiteListError::Process(ProcessError::PoolUnavailable(_))
        ));
        assert!(!provider.is_initialized());
        assert_eq!(provider.stats().web_views_created(), 0);

        assert!(provider.create_web_view().is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_panicking_factory_can_retry() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let provider = WebViewProvider::with_factory(Box::new(move || -> Result<ProcessPool> {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("pool setup crashed");
            }
            Ok(ProcessPool::new())
        }));

        let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            provider.create_web_view()
        }));
        assert!(first.is_err());
        assert!(!provider.is_initialized());
        assert!(provider.pool().is_none());

        let view = provider.create_web_view().unwrap();
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
        assert!(Arc::ptr_eq(view.process_pool(), &provider.pool().unwrap()));
    }

    #[test]
    fn test_construction_off_host_thread_fails() {
        let provider = Arc::new(WebViewProvider::new());
        let remote = Arc::clone(&provider);
        let result = thread::spawn(move || remote.create_web_view().map(|_| ()))
            .join()
            .unwrap();
        assert!(matches!(
            result,
            Err(SiteListError::Process(ProcessError::WrongThread))
        ));
        assert!(!provider.is_initialized());
    }

    #[test]
    fn test_existing_pool_usable_from_any_thread() {
        let provider = Arc::new(WebViewProvider::new());
        let local = provider.create_web_view().unwrap();

        let remote = Arc::clone(&provider);
        let view = thread::spawn(move || remote.create_web_view())
            .join()
            .unwrap()
            .unwrap();
        assert!(Arc::ptr_eq(local.process_pool(), view.process_pool()));
    }

    #[test]
    fn test_concurrent_first_calls_build_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider =
            Arc::new(counting_provider(Arc::clone(&calls)).with_thread_policy(ThreadPolicy::Any));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = Arc::clone(&provider);
                thread::spawn(move || provider.create_web_view().unwrap().process_pool().id())
            })
            .collect();
        let ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(ids.iter().all(|&id| id == ids[0]));
    }
}

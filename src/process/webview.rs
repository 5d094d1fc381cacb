//! Lightweight web view handles

use std::sync::Arc;

use url::Url;

use super::pool::ProcessPool;
use crate::utils::{ProcessError, Result};

/// Configuration a web view is created with
#[derive(Debug, Clone)]
pub struct WebViewConfiguration {
    process_pool: Arc<ProcessPool>,
}

impl WebViewConfiguration {
    pub fn new(process_pool: Arc<ProcessPool>) -> Self {
        Self { process_pool }
    }

    pub fn process_pool(&self) -> &Arc<ProcessPool> {
        &self.process_pool
    }

    /// Whether both configurations reference the same pool instance
    pub fn shares_pool_with(&self, other: &WebViewConfiguration) -> bool {
        Arc::ptr_eq(&self.process_pool, &other.process_pool)
    }
}

/// A web view handed out per site display. Dropped when its view is
/// dismissed; the pool outlives it.
#[derive(Debug)]
pub struct WebView {
    configuration: WebViewConfiguration,
    current_url: Option<Url>,
    process_id: Option<u32>,
}

impl WebView {
    pub fn new(configuration: WebViewConfiguration) -> Self {
        Self {
            configuration,
            current_url: None,
            process_id: None,
        }
    }

    /// Load `url`, returning the id of the pooled process serving it
    pub fn load(&mut self, url: &Url) -> u32 {
        let origin = url.origin().ascii_serialization();
        let process_id = self.configuration.process_pool.process_for_origin(&origin);
        log::debug!("Loading {} in process {}", url, process_id);

        self.current_url = Some(url.clone());
        self.process_id = Some(process_id);
        process_id
    }

    /// Parse and load an address
    pub fn load_str(&mut self, address: &str) -> Result<u32> {
        let url = Url::parse(address)
            .map_err(|e| ProcessError::InvalidUrl(format!("{}: {}", address, e)))?;
        Ok(self.load(&url))
    }

    pub fn current_url(&self) -> Option<&Url> {
        self.current_url.as_ref()
    }

    pub fn process_id(&self) -> Option<u32> {
        self.process_id
    }

    pub fn configuration(&self) -> &WebViewConfiguration {
        &self.configuration
    }

    pub fn process_pool(&self) -> &Arc<ProcessPool> {
        self.configuration.process_pool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web_view(pool: &Arc<ProcessPool>) -> WebView {
        WebView::new(WebViewConfiguration::new(Arc::clone(pool)))
    }

    #[test]
    fn test_new_view_is_blank() {
        let pool = Arc::new(ProcessPool::new());
        let view = web_view(&pool);
        assert!(view.current_url().is_none());
        assert!(view.process_id().is_none());
    }

    #[test]
    fn test_load_records_url() {
        let pool = Arc::new(ProcessPool::new());
        let mut view = web_view(&pool);
        let url = Url::parse("https://google.com/search").unwrap();
        let pid = view.load(&url);
        assert_eq!(view.current_url(), Some(&url));
        assert_eq!(view.process_id(), Some(pid));
    }

    #[test]
    fn test_views_share_origin_process() {
        let pool = Arc::new(ProcessPool::new());
        let mut a = web_view(&pool);
        let mut b = web_view(&pool);
        let pa = a.load_str("https://msn.com/news").unwrap();
        let pb = b.load_str("https://msn.com/weather").unwrap();
        assert_eq!(pa, pb);
        assert_eq!(pool.process_count(), 1);
        assert!(a.configuration().shares_pool_with(b.configuration()));
    }

    #[test]
    fn test_load_invalid_address() {
        let pool = Arc::new(ProcessPool::new());
        let mut view = web_view(&pool);
        let err = view.load_str("not a url").unwrap_err();
        assert!(matches!(
            err,
            crate::SiteListError::Process(ProcessError::InvalidUrl(_))
        ));
        assert!(view.current_url().is_none());
    }
}

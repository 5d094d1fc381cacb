//! # sitelist - Paginated site list with pooled web views
//!
//! Backs a browser shell whose home screen is an endless list of sites and
//! folders. Selecting a site opens it in a web view; all web views share one
//! browsing-process pool.
//!
//! ## Architecture
//!
//! - **model**: Site and folder items forming the displayed hierarchy
//! - **feed**: Infinite-scroll item store with simulated load failures
//! - **process**: Shared process pool and the web view provider
//! - **utils**: Shared utilities and error types

pub mod feed;
pub mod model;
pub mod process;
pub mod utils;

// Re-export main types for convenience
pub use feed::{FeedConfig, ItemStore};
pub use model::{Folder, FolderItem, Site};
pub use process::{ProcessPool, WebView, WebViewProvidable, WebViewProvider};
pub use utils::error::{FeedError, ProcessError, Result, SiteListError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "sitelist";

/// Default tuning values
pub mod defaults {
    /// Items appended per page
    pub const PAGE_SIZE: usize = 20;
    /// One page in this many is reported as a simulated failure
    pub const FAILURE_ONE_IN: u32 = 20;
}

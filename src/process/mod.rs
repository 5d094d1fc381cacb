//! Web views sharing a browsing-process pool
//!
//! - Process pool: one content process per site origin
//! - Web views: per-display handles configured with the shared pool
//! - Provider: builds the pool once, lazily, and hands out web views

mod pool;
mod provider;
mod webview;

pub use pool::ProcessPool;
pub use provider::{
    PoolFactory, ProviderStats, ThreadPolicy, WebViewProvidable, WebViewProvider,
    open_in_web_view,
};
pub use webview::{WebView, WebViewConfiguration};

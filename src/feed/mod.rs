//! Infinite-scroll list loading
//!
//! Provides the paginated item list shown on the home screen:
//! - Page synthesis: deterministic sites and folders per index
//! - Growth: append-only pages triggered when the last row appears
//! - Simulated load failures surfaced as a dismissible flag

mod failure;
mod store;
mod synth;

pub use failure::{AlwaysFail, FailureSource, NeverFail, RandomFailures, ScriptedFailures};
pub use store::{ItemStore, LoadPhase};
pub use synth::{GOOGLE_URL, MSN_URL, item_id, synthesize_item, synthesize_page};

use crate::defaults;

/// List loading configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    /// Items appended per page
    pub page_size: usize,
    /// A page is reported as failed with probability `1 / failure_one_in`
    /// (0 disables simulated failures)
    pub failure_one_in: u32,
    /// Whether simulated failures set the store's failure flag
    pub surface_failures: bool,
}

impl FeedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_failure_one_in(mut self, one_in: u32) -> Self {
        self.failure_one_in = one_in;
        self
    }

    pub fn with_surface_failures(mut self, surface: bool) -> Self {
        self.surface_failures = surface;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::PAGE_SIZE,
            failure_one_in: defaults::FAILURE_ONE_IN,
            surface_failures: true,
        }
    }
}

//! Append-only item store backing the infinite-scroll list

use super::failure::{FailureSource, RandomFailures};
use super::synth::synthesize_page;
use super::FeedConfig;
use crate::model::FolderItem;
use crate::utils::FeedError;

/// Loading phase of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Growing,
}

/// Growing list of items plus the most recent simulated failure
pub struct ItemStore {
    items: Vec<FolderItem>,
    failure: Option<FeedError>,
    phase: LoadPhase,
    config: FeedConfig,
    failures: Box<dyn FailureSource>,
}

impl ItemStore {
    /// Create a store with the default configuration and load the first page
    pub fn new() -> Self {
        Self::with_config(FeedConfig::default())
    }

    /// Create a store using random failures at the configured odds
    pub fn with_config(config: FeedConfig) -> Self {
        let failures = Box::new(RandomFailures::new(config.failure_one_in));
        Self::with_failure_source(config, failures)
    }

    /// Create a store with an explicit failure source
    pub fn with_failure_source(config: FeedConfig, failures: Box<dyn FailureSource>) -> Self {
        let mut store = Self {
            items: Vec::with_capacity(config.page_size),
            failure: None,
            phase: LoadPhase::Idle,
            config,
            failures,
        };
        store.load_more();
        store
    }

    /// Append one page of `page_size` items
    pub fn load_more(&mut self) {
        self.grow_by(self.config.page_size);
    }

    /// Append `count` synthesized items to the end of the list
    pub fn grow_by(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.phase = LoadPhase::Growing;
        let start = self.items.len();
        self.items.extend(synthesize_page(start..start + count));
        log::debug!("Appended items {}..{}", start, start + count);

        // Everything stays in memory; very long sessions would need paging
        // older items out.
        if self.failures.page_failed(start) {
            if self.config.surface_failures {
                log::warn!("Simulated load failure for page at {}", start);
                self.failure = Some(FeedError::PageLoad(start));
            } else {
                log::debug!("Suppressed simulated load failure for page at {}", start);
            }
        }
        self.phase = LoadPhase::Idle;
    }

    /// Whether `id` is the last top-level item
    pub fn is_last_item(&self, id: &str) -> bool {
        self.items.last().is_some_and(|last| last.id() == id)
    }

    /// Row-appeared hook: loads the next page when the last row shows up.
    /// Returns whether a page was loaded.
    pub fn on_item_appeared(&mut self, id: &str) -> bool {
        if self.is_last_item(id) {
            self.load_more();
            true
        } else {
            false
        }
    }

    /// Top-level items in display order
    pub fn items(&self) -> &[FolderItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&FolderItem> {
        self.items.get(index)
    }

    pub fn last(&self) -> Option<&FolderItem> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item anywhere in the tree
    pub fn find(&self, id: &str) -> Option<&FolderItem> {
        self.items
            .iter()
            .flat_map(FolderItem::walk)
            .find(|item| item.id() == id)
    }

    /// Whether a surfaced load failure is pending
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }

    /// The pending load failure, if any
    pub fn failure(&self) -> Option<&FeedError> {
        self.failure.as_ref()
    }

    /// Acknowledge the pending failure. Loaded items are kept.
    pub fn dismiss_failure(&mut self) {
        self.failure = None;
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

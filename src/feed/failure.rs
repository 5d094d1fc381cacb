//! Simulated page load failures

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides whether a freshly appended page is reported as failed
pub trait FailureSource: Send {
    /// Called once per page, with the index of the page's first item
    fn page_failed(&mut self, first_index: usize) -> bool;
}

/// Fails each page with probability `1 / one_in`
pub struct RandomFailures {
    one_in: u32,
    rng: StdRng,
}

impl RandomFailures {
    /// Create a source seeded from OS entropy
    pub fn new(one_in: u32) -> Self {
        Self {
            one_in,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a reproducible source
    pub fn seeded(one_in: u32, seed: u64) -> Self {
        Self {
            one_in,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FailureSource for RandomFailures {
    fn page_failed(&mut self, _first_index: usize) -> bool {
        self.one_in != 0 && self.rng.gen_range(0..self.one_in) == 0
    }
}

/// Never fails
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverFail;

impl FailureSource for NeverFail {
    fn page_failed(&mut self, _first_index: usize) -> bool {
        false
    }
}

/// Fails every page
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysFail;

impl FailureSource for AlwaysFail {
    fn page_failed(&mut self, _first_index: usize) -> bool {
        true
    }
}

/// Replays a fixed sequence of outcomes, then succeeds
#[derive(Debug, Default, Clone)]
pub struct ScriptedFailures {
    outcomes: VecDeque<bool>,
}

impl ScriptedFailures {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
        }
    }
}

impl FailureSource for ScriptedFailures {
    fn page_failed(&mut self, _first_index: usize) -> bool {
        self.outcomes.pop_front().unwrap_or(false)
    }
}

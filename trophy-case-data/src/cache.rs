//! Request-scoped memoization of card-data lookups.

use std::cell::RefCell;
use std::collections::HashMap;

use trophy_case_core::lookup::GameCardSource;
use trophy_case_core::types::{GameId, GameRecord};

/// Memoizes [`GameCardSource`] reads for the lifetime of one render pass.
///
/// A page can render the same game card many times (tables, tooltips,
/// related lists); the underlying source is consulted once per id,
/// misses included. Single-threaded: a request renders on one thread and
/// the cache dies with it.
pub struct CardCache<'a> {
    source: &'a dyn GameCardSource,
    seen: RefCell<HashMap<GameId, Option<GameRecord>>>,
}

impl<'a> CardCache<'a> {
    pub fn new(source: &'a dyn GameCardSource) -> Self {
        Self {
            source,
            seen: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct ids looked up so far.
    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }
}

impl GameCardSource for CardCache<'_> {
    fn card_data(&self, id: GameId) -> Option<GameRecord> {
        self.seen
            .borrow_mut()
            .entry(id)
            .or_insert_with(|| self.source.card_data(id))
            .clone()
    }
}

//! Collaborator seams for data lookups.
//!
//! Rendering never talks to storage directly; pages inject implementations
//! of these traits. All reads are synchronous, idempotent, and side-effect
//! free. A missing record is `None`, never an error, and rendering
//! degrades to plain text instead of failing.

use crate::types::{ConsoleId, GameId, GameRecord, HashRecord};

/// Exact-title game lookup scoped to a console.
pub trait GameLookup {
    fn find_id_by_title(&self, title: &str, console_id: ConsoleId) -> Option<GameId>;
}

/// Source of card/page data for a game id.
///
/// Safe to call repeatedly with identical results for immutable underlying
/// data; callers may memoize by id for the life of a render pass.
pub trait GameCardSource {
    fn card_data(&self, id: GameId) -> Option<GameRecord>;
}

/// Source of the supported-file hash list for a game.
pub trait HashSource {
    fn hashes_for_game(&self, id: GameId) -> Vec<HashRecord>;
}

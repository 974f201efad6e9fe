//! Core data model and computations for the achievement-site rendering
//! helpers.
//!
//! This crate defines the normalized record types that flow into the
//! rendering layer, the scanner for the structured markers embedded in game
//! titles, and the completion-percentage math. Everything here is pure:
//! no I/O, no markup, no lookups.

pub mod lookup;
pub mod progress;
pub mod title;
pub mod types;

pub use lookup::{GameCardSource, GameLookup, HashSource};
pub use progress::{BadgeTier, CompletionStats, ProgressSummary};
pub use title::{SubsetMarker, TagMarker, find_subset_marker, find_tag_markers, split_subset};
pub use types::{
    ConsoleId, GameId, GameRecord, HashRecord, HubRecord, RecentPlayer, RelatedGameRow,
    split_attribute_list,
};

//! In-memory indexed view of site data.

use std::collections::HashMap;

use trophy_case_core::lookup::{GameCardSource, GameLookup, HashSource};
use trophy_case_core::progress::CompletionStats;
use trophy_case_core::types::{
    ConsoleId, GameId, GameRecord, HashRecord, HubRecord, RecentPlayer, RelatedGameRow,
};

use crate::load::SiteData;

/// Attribute fields that live on the game row but outside [`GameRecord`].
#[derive(Debug, Clone, Default)]
pub struct GameExtra {
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub genre: Option<String>,
}

/// An indexed, immutable snapshot of site data for one rendering process.
///
/// Built once from a [`SiteData`] dump; every lookup after that is a map
/// read, so the store satisfies the idempotent-read contract of the lookup
/// traits by construction.
#[derive(Debug, Default)]
pub struct SiteStore {
    games: Vec<GameRecord>,
    /// Game id → index into `games`
    by_id: HashMap<GameId, usize>,
    /// (title, console id) → game id
    by_title: HashMap<(String, ConsoleId), GameId>,
    extras: HashMap<GameId, GameExtra>,
    hashes: HashMap<GameId, Vec<HashRecord>>,
    hubs: HashMap<GameId, Vec<HubRecord>>,
    related: HashMap<GameId, Vec<RelatedGameRow>>,
    recent_players: HashMap<GameId, Vec<RecentPlayer>>,
    progress: HashMap<GameId, CompletionStats>,
}

impl SiteStore {
    /// Build the indexed store from a loaded data file.
    pub fn from_data(data: SiteData) -> Self {
        let mut store = Self::default();

        for row in data.games {
            let extra = GameExtra {
                developer: row.developer.clone(),
                publisher: row.publisher.clone(),
                genre: row.genre.clone(),
            };
            let game = GameRecord::from(row);
            store.by_id.insert(game.id, store.games.len());
            store
                .by_title
                .insert((game.title.clone(), game.console_id), game.id);
            store.extras.insert(game.id, extra);
            store.games.push(game);
        }

        for row in data.hashes {
            let game_id = row.game_id;
            store
                .hashes
                .entry(game_id)
                .or_default()
                .push(HashRecord::from(row));
        }

        for row in data.hubs {
            let game_id = row.game_id;
            store
                .hubs
                .entry(game_id)
                .or_default()
                .push(HubRecord::from(row));
        }

        for row in data.related {
            let game_id = row.game_id;
            store
                .related
                .entry(game_id)
                .or_default()
                .push(RelatedGameRow::from(row));
        }

        for row in data.recent_players {
            let game_id = row.game_id;
            store
                .recent_players
                .entry(game_id)
                .or_default()
                .push(RecentPlayer::from(row));
        }

        for row in data.progress {
            store.progress.insert(row.game_id, CompletionStats::from(row));
        }

        log::debug!(
            "indexed {} games, {} hashed, {} with hubs",
            store.games.len(),
            store.hashes.len(),
            store.hubs.len()
        );
        store
    }

    pub fn game(&self, id: GameId) -> Option<&GameRecord> {
        self.by_id.get(&id).map(|&i| &self.games[i])
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn extra(&self, id: GameId) -> Option<&GameExtra> {
        self.extras.get(&id)
    }

    pub fn hubs_for_game(&self, id: GameId) -> &[HubRecord] {
        self.hubs.get(&id).map_or(&[], Vec::as_slice)
    }

    pub fn related_games(&self, id: GameId) -> &[RelatedGameRow] {
        self.related.get(&id).map_or(&[], Vec::as_slice)
    }

    pub fn recent_players(&self, id: GameId) -> &[RecentPlayer] {
        self.recent_players.get(&id).map_or(&[], Vec::as_slice)
    }

    pub fn progress(&self, id: GameId) -> Option<CompletionStats> {
        self.progress.get(&id).copied()
    }
}

impl GameLookup for SiteStore {
    fn find_id_by_title(&self, title: &str, console_id: ConsoleId) -> Option<GameId> {
        self.by_title.get(&(title.to_string(), console_id)).copied()
    }
}

impl GameCardSource for SiteStore {
    fn card_data(&self, id: GameId) -> Option<GameRecord> {
        self.game(id).cloned()
    }
}

impl HashSource for SiteStore {
    fn hashes_for_game(&self, id: GameId) -> Vec<HashRecord> {
        self.hashes.get(&id).cloned().unwrap_or_default()
    }
}

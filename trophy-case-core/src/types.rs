//! Record types shared across the rendering crates.
//!
//! These are the normalized shapes produced once at the data boundary.
//! Rendering code never sees raw rows or legacy alias keys; alias
//! resolution (`GameID` vs `ID` and friends) happens in the data crate
//! before any of these are constructed.

use serde::{Deserialize, Serialize};

/// Numeric id of a game page.
pub type GameId = u32;

/// Numeric id of a console.
pub type ConsoleId = u32;

// ── Game ────────────────────────────────────────────────────────────────────

/// A game row as the rendering layer sees it.
///
/// The title may embed zero or more `~Category~` tag markers and at most
/// one `[Subset - Name]` suffix (see [`crate::title`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub title: String,
    pub console_id: ConsoleId,
    pub console_name: String,
    /// Site-relative path of the game's badge icon.
    #[serde(default)]
    pub icon_path: String,
    #[serde(default)]
    pub forum_topic_id: Option<u32>,
}

// ── Hashes ──────────────────────────────────────────────────────────────────

/// A supported game-file hash registered for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRecord {
    /// Hex digest of the game file, as stored. Never recomputed here.
    pub hash: String,
    /// Curated description of the file this hash belongs to. Hashes without
    /// a name are listed in a separate unlabeled section.
    #[serde(default)]
    pub name: Option<String>,
    /// Comma-separated label tokens (e.g. `nointro,patched`).
    #[serde(default)]
    pub labels: String,
    /// User who linked the hash, if tracked.
    #[serde(default)]
    pub linked_user: Option<String>,
}

impl HashRecord {
    /// Whether the hash has a curated (non-empty) name.
    pub fn is_named(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }
}

// ── Hubs ────────────────────────────────────────────────────────────────────

/// A hub cross-reference attached to a game.
///
/// Hub titles are curated as `[Category - Value]`; the value links back to
/// the hub's own game page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubRecord {
    pub title: String,
    pub linked_game_id: GameId,
}

impl HubRecord {
    /// The hub's display value for `category`, if this hub belongs to it.
    ///
    /// Strips the `[Category - ` prefix and the trailing `]`. A missing
    /// closing bracket is tolerated.
    pub fn value_for_category(&self, category: &str) -> Option<&str> {
        let prefix = format!("[{category} - ");
        let rest = self.title.strip_prefix(&prefix)?;
        Some(rest.strip_suffix(']').unwrap_or(rest))
    }

    /// The hub title with its surrounding brackets removed.
    pub fn bare_title(&self) -> &str {
        let rest = self.title.strip_prefix('[').unwrap_or(&self.title);
        rest.strip_suffix(']').unwrap_or(rest)
    }
}

// ── Similar games / recent players ──────────────────────────────────────────

/// One entry in a game's similar-games table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedGameRow {
    pub id: GameId,
    pub title: String,
    #[serde(default)]
    pub icon_path: String,
    /// Console display name. The literal `Hubs` marks a hub-style entry that
    /// spans the title columns and carries no point totals.
    pub console_name: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub true_points: u32,
}

impl RelatedGameRow {
    /// Whether this row is a fully featured game (as opposed to a hub page).
    pub fn is_full_game(&self) -> bool {
        self.console_name != "Hubs"
    }
}

/// One entry in a game's recent-players table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPlayer {
    pub username: String,
    /// Opaque display timestamp, already formatted upstream.
    pub date: String,
    pub activity: String,
}

// ── Attribute lists ─────────────────────────────────────────────────────────

/// Split a comma-separated attribute field into trimmed values.
///
/// Order is preserved: unmatched entries display in their original order
/// and hub-merged entries are replaced in place. An empty field yields an
/// empty list, but interior empty slots (`"a,,b"`) survive the split.
pub fn split_attribute_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|v| v.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_list_trims_and_preserves_order() {
        assert_eq!(
            split_attribute_list(" Action , Platformer"),
            vec!["Action".to_string(), "Platformer".to_string()]
        );
    }

    #[test]
    fn attribute_list_empty_field_is_empty() {
        assert!(split_attribute_list("").is_empty());
    }

    #[test]
    fn attribute_list_keeps_interior_empty_slots() {
        assert_eq!(
            split_attribute_list("a,,b"),
            vec!["a".to_string(), String::new(), "b".to_string()]
        );
    }

    #[test]
    fn hub_value_for_category() {
        let hub = HubRecord {
            title: "[Genre - Platformer]".to_string(),
            linked_game_id: 5,
        };
        assert_eq!(hub.value_for_category("Genre"), Some("Platformer"));
        assert_eq!(hub.value_for_category("Developer"), None);
        assert_eq!(hub.bare_title(), "Genre - Platformer");
    }
}

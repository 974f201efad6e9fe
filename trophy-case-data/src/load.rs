//! Site data file loading and row normalization.
//!
//! Data files are YAML (or JSON, by extension) dumps of the tables the
//! renderers draw from. Rows arrive with legacy alias keys (`GameID` vs
//! `ID`, `GameTitle` vs `Title`, and so on) and are normalized into the
//! core record types here, exactly once. Nothing downstream of this module
//! resolves aliases.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use trophy_case_core::progress::CompletionStats;
use trophy_case_core::types::{
    ConsoleId, GameId, GameRecord, HashRecord, HubRecord, RecentPlayer, RelatedGameRow,
};

/// Errors that can occur while loading a site data file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yml::Error,
    },

    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

// ── Raw rows ────────────────────────────────────────────────────────────────

/// A game row as it appears in a data file, legacy aliases included.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGameRow {
    #[serde(alias = "GameID", alias = "ID")]
    pub id: GameId,
    #[serde(alias = "GameTitle", alias = "Title")]
    pub title: String,
    #[serde(alias = "ConsoleID")]
    pub console_id: ConsoleId,
    #[serde(alias = "Console", alias = "ConsoleName")]
    pub console_name: String,
    #[serde(default, alias = "GameIcon", alias = "ImageIcon")]
    pub icon_path: String,
    #[serde(default, alias = "ForumTopicID")]
    pub forum_topic_id: Option<u32>,
    #[serde(default, alias = "Developer")]
    pub developer: Option<String>,
    #[serde(default, alias = "Publisher")]
    pub publisher: Option<String>,
    #[serde(default, alias = "Genre")]
    pub genre: Option<String>,
}

impl From<RawGameRow> for GameRecord {
    fn from(row: RawGameRow) -> Self {
        GameRecord {
            id: row.id,
            title: row.title,
            console_id: row.console_id,
            console_name: row.console_name,
            icon_path: row.icon_path,
            forum_topic_id: row.forum_topic_id,
        }
    }
}

/// A hash row tied to its owning game.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHashRow {
    #[serde(alias = "GameID")]
    pub game_id: GameId,
    #[serde(alias = "Hash", alias = "MD5")]
    pub hash: String,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Labels")]
    pub labels: String,
    #[serde(default, alias = "User")]
    pub linked_user: Option<String>,
}

impl From<RawHashRow> for HashRecord {
    fn from(row: RawHashRow) -> Self {
        HashRecord {
            hash: row.hash,
            name: row.name,
            labels: row.labels,
            linked_user: row.linked_user,
        }
    }
}

/// A hub cross-reference row tied to its owning game.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHubRow {
    #[serde(alias = "GameID")]
    pub game_id: GameId,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "gameIDAlt")]
    pub linked_game_id: GameId,
}

impl From<RawHubRow> for HubRecord {
    fn from(row: RawHubRow) -> Self {
        HubRecord {
            title: row.title,
            linked_game_id: row.linked_game_id,
        }
    }
}

/// A similar-game row tied to its owning game.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRelatedRow {
    #[serde(alias = "GameID")]
    pub game_id: GameId,
    #[serde(alias = "gameIDAlt")]
    pub id: GameId,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(default, alias = "ImageIcon")]
    pub icon_path: String,
    #[serde(alias = "ConsoleName")]
    pub console_name: String,
    #[serde(default, alias = "Points")]
    pub points: u32,
    #[serde(default, alias = "TotalTruePoints")]
    pub true_points: u32,
}

impl From<RawRelatedRow> for RelatedGameRow {
    fn from(row: RawRelatedRow) -> Self {
        RelatedGameRow {
            id: row.id,
            title: row.title,
            icon_path: row.icon_path,
            console_name: row.console_name,
            points: row.points,
            true_points: row.true_points,
        }
    }
}

/// A recent-player row tied to its game.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayerRow {
    #[serde(alias = "GameID")]
    pub game_id: GameId,
    #[serde(alias = "User")]
    pub username: String,
    #[serde(default, alias = "Date")]
    pub date: String,
    #[serde(default, alias = "Activity")]
    pub activity: String,
}

impl From<RawPlayerRow> for RecentPlayer {
    fn from(row: RawPlayerRow) -> Self {
        RecentPlayer {
            username: row.username,
            date: row.date,
            activity: row.activity,
        }
    }
}

/// Per-game earned/total counts for the viewing player.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawProgressRow {
    #[serde(alias = "GameID")]
    pub game_id: GameId,
    #[serde(alias = "NumAchievements")]
    pub total: u32,
    #[serde(default, alias = "NumEarnedCasual")]
    pub earned_casual: i64,
    #[serde(default, alias = "NumEarnedHardcore")]
    pub earned_hardcore: u32,
}

impl From<RawProgressRow> for CompletionStats {
    fn from(row: RawProgressRow) -> Self {
        CompletionStats {
            total: row.total,
            earned_casual: row.earned_casual,
            earned_hardcore: row.earned_hardcore,
        }
    }
}

// ── File loading ────────────────────────────────────────────────────────────

/// The full contents of a site data file.
#[derive(Debug, Default, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub games: Vec<RawGameRow>,
    #[serde(default)]
    pub hashes: Vec<RawHashRow>,
    #[serde(default)]
    pub hubs: Vec<RawHubRow>,
    #[serde(default)]
    pub related: Vec<RawRelatedRow>,
    #[serde(default)]
    pub recent_players: Vec<RawPlayerRow>,
    #[serde(default)]
    pub progress: Vec<RawProgressRow>,
}

/// Load a site data file. `.json` parses as JSON, anything else as YAML.
pub fn load_site_data(path: &Path) -> Result<SiteData, DataError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let data = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&contents).map_err(|e| DataError::Json {
            path: path.display().to_string(),
            source: e,
        })?
    } else {
        serde_yml::from_str(&contents).map_err(|e| DataError::Yaml {
            path: path.display().to_string(),
            source: e,
        })?
    };

    log::debug!("loaded site data from {}", path.display());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_YAML: &str = r#"
games:
  - ID: 1
    Title: "Super Game"
    ConsoleID: 3
    ConsoleName: SNES
    ImageIcon: /Images/000001.png
    ForumTopicID: 12
    Genre: "Action, Platformer"
  - GameID: 2
    GameTitle: "Super Game [Subset - Bonus]"
    ConsoleID: 3
    Console: SNES
hashes:
  - GameID: 1
    Hash: 1f3057031f6ecc668f884ff87e9fbb38
    Name: "Super Game (USA)"
    Labels: nointro
    User: Curator
hubs:
  - GameID: 1
    Title: "[Genre - Platformer]"
    gameIDAlt: 50
"#;

    #[test]
    fn yaml_rows_normalize_alias_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE_YAML.as_bytes()).unwrap();

        let data = load_site_data(&path).unwrap();
        assert_eq!(data.games.len(), 2);

        let first = GameRecord::from(data.games[0].clone());
        assert_eq!(first.id, 1);
        assert_eq!(first.console_name, "SNES");
        assert_eq!(first.forum_topic_id, Some(12));

        // Second row uses the other alias spellings
        let second = GameRecord::from(data.games[1].clone());
        assert_eq!(second.id, 2);
        assert_eq!(second.title, "Super Game [Subset - Bonus]");
        assert_eq!(second.icon_path, "");

        let hash = HashRecord::from(data.hashes[0].clone());
        assert_eq!(hash.linked_user.as_deref(), Some("Curator"));

        let hub = HubRecord::from(data.hubs[0].clone());
        assert_eq!(hub.linked_game_id, 50);
    }

    #[test]
    fn json_extension_parses_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(
            &path,
            r#"{"games":[{"ID":9,"Title":"G","ConsoleID":1,"ConsoleName":"NES"}]}"#,
        )
        .unwrap();

        let data = load_site_data(&path).unwrap();
        assert_eq!(data.games[0].id, 9);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_site_data(Path::new("/nonexistent/site.yaml")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "games: {not a list").unwrap();
        let err = load_site_data(&path).unwrap_err();
        assert!(matches!(err, DataError::Yaml { .. }));
    }
}

//! Route and asset URL construction.
//!
//! Render helpers never hard-code site paths; pages inject a [`UrlBuilder`]
//! so tests and alternate deployments can swap the URL scheme without
//! touching the fragment code.

use trophy_case_core::types::{ConsoleId, GameId};

/// Builds site routes and asset URLs for rendered fragments.
pub trait UrlBuilder {
    /// The unfiltered game listing.
    fn all_games(&self) -> String;
    /// The game listing filtered to one console.
    fn console_games(&self, console_id: ConsoleId) -> String;
    /// A game's page.
    fn game(&self, id: GameId) -> String;
    /// A user's profile page.
    fn user(&self, username: &str) -> String;
    /// A forum topic.
    fn forum_topic(&self, topic_id: u32) -> String;
    /// Absolute URL for a media asset path stored on a record.
    fn media_asset(&self, path: &str) -> String;
    /// A user's profile picture.
    fn user_pic(&self, username: &str) -> String {
        self.media_asset(&format!("/UserPic/{username}.png"))
    }
    /// URL of a hash label's badge image, if badge art exists for it.
    fn label_badge(&self, label: &str) -> Option<String>;
}

/// Stock URL scheme matching the site's legacy routes.
#[derive(Debug, Clone, Default)]
pub struct SiteUrls {
    /// Prefix for media asset paths (CDN host). Empty for same-origin.
    pub media_base: String,
    /// Labels that have badge art under `/assets/images/labels/`.
    pub badge_labels: Vec<String>,
}

impl SiteUrls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_badge_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            media_base: String::new(),
            badge_labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl UrlBuilder for SiteUrls {
    fn all_games(&self) -> String {
        "/gameList.php".to_string()
    }

    fn console_games(&self, console_id: ConsoleId) -> String {
        format!("/gameList.php?c={console_id}")
    }

    fn game(&self, id: GameId) -> String {
        format!("/game/{id}")
    }

    fn user(&self, username: &str) -> String {
        format!("/user/{username}")
    }

    fn forum_topic(&self, topic_id: u32) -> String {
        format!("/viewtopic.php?t={topic_id}")
    }

    fn media_asset(&self, path: &str) -> String {
        format!("{}{path}", self.media_base)
    }

    fn label_badge(&self, label: &str) -> Option<String> {
        self.badge_labels
            .iter()
            .any(|known| known == label)
            .then(|| format!("/assets/images/labels/{label}.png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_routes() {
        let urls = SiteUrls::new();
        assert_eq!(urls.all_games(), "/gameList.php");
        assert_eq!(urls.console_games(7), "/gameList.php?c=7");
        assert_eq!(urls.game(42), "/game/42");
        assert_eq!(urls.forum_topic(9), "/viewtopic.php?t=9");
    }

    #[test]
    fn label_badge_only_for_known_labels() {
        let urls = SiteUrls::with_badge_labels(["nointro"]);
        assert_eq!(
            urls.label_badge("nointro").as_deref(),
            Some("/assets/images/labels/nointro.png")
        );
        assert!(urls.label_badge("patched").is_none());
    }
}

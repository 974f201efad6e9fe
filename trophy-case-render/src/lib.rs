//! HTML fragment renderers for game pages.
//!
//! Each helper takes normalized records plus injected collaborators (URL
//! builder, lookups) and returns a markup fragment as a `String`. Nothing
//! here touches storage or the network, and nothing fails: unresolved
//! lookups degrade to plain text and malformed title markers pass through
//! untouched.
//!
//! Trust boundary: tag categories, subset names, and hub titles originate
//! from curated data and are emitted as-is. Free-form text (titles at the
//! avatar boundary, usernames, hash names, activity lines, unmerged
//! metadata values) is escaped here before it is baked into markup.

pub mod breadcrumb;
pub mod card;
pub mod escape;
pub mod hashes;
pub mod metadata;
pub mod players;
pub mod progress;
pub mod related;
pub mod title;
pub mod urls;

pub use breadcrumb::render_game_breadcrumb;
pub use card::{
    AvatarOptions, AvatarSubject, game_avatar, render_game_card, render_game_card_by_id,
    user_avatar, user_avatar_icon,
};
pub use escape::escape_html;
pub use hashes::{render_hash_list, render_hashes_page};
pub use metadata::{MetadataValue, attribute_values, merge_hub_metadata, render_metadata_row};
pub use players::render_recent_players;
pub use progress::{render_completion_icon, render_game_progress};
pub use related::render_related_games;
pub use title::render_game_title;
pub use urls::{SiteUrls, UrlBuilder};

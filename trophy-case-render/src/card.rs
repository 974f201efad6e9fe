//! Game and user avatars and the game-card hover fragment.

use trophy_case_core::lookup::GameCardSource;
use trophy_case_core::types::{GameId, GameRecord};

use crate::escape::escape_html;
use crate::title::render_game_title;
use crate::urls::UrlBuilder;

/// The fields an avatar needs from a game-shaped record.
///
/// Similar-game rows and full game records both render through this view;
/// building it is the one place their shapes converge.
#[derive(Debug, Clone, Copy)]
pub struct AvatarSubject<'a> {
    pub id: GameId,
    pub title: &'a str,
    /// Omitted for hub-style entries, which display without a console.
    pub console_name: Option<&'a str>,
    pub icon_path: &'a str,
}

impl<'a> From<&'a GameRecord> for AvatarSubject<'a> {
    fn from(game: &'a GameRecord) -> Self {
        Self {
            id: game.id,
            title: &game.title,
            console_name: Some(&game.console_name),
            icon_path: &game.icon_path,
        }
    }
}

/// Options controlling how a game avatar renders.
#[derive(Debug, Clone, Copy)]
pub struct AvatarOptions {
    /// Include the rendered title label.
    pub label: bool,
    /// Include the badge icon.
    pub icon: bool,
    pub icon_size: u32,
    pub icon_class: &'static str,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            label: true,
            icon: true,
            icon_size: 32,
            icon_class: "badgeimg",
        }
    }
}

impl AvatarOptions {
    pub fn icon_only(size: u32) -> Self {
        Self {
            label: false,
            icon_size: size,
            ..Self::default()
        }
    }

    pub fn label_only() -> Self {
        Self {
            icon: false,
            ..Self::default()
        }
    }

    pub fn icon_size(size: u32) -> Self {
        Self {
            icon_size: size,
            ..Self::default()
        }
    }
}

/// Render a linked game avatar: badge icon and/or rendered title label.
///
/// The label is `{title} ({console})`, escaped before tag rendering since
/// titles cross the trust boundary here.
pub fn game_avatar<'a>(
    subject: impl Into<AvatarSubject<'a>>,
    opts: AvatarOptions,
    urls: &dyn UrlBuilder,
) -> String {
    let subject = subject.into();
    let full_title = match subject.console_name {
        Some(console) => format!("{} ({console})", subject.title),
        None => subject.title.to_string(),
    };
    let alt = escape_html(&full_title);

    let mut inner = String::new();
    if opts.icon {
        inner.push_str(&format!(
            "<img loading='lazy' src='{}' width='{size}' height='{size}' alt='{alt}' class='{}'>",
            urls.media_asset(subject.icon_path),
            opts.icon_class,
            size = opts.icon_size,
        ));
    }
    if opts.label {
        inner.push_str(&render_game_title(&alt, true));
    }

    format!("<a href='{}'>{inner}</a>", urls.game(subject.id))
}

/// Render a label-only user avatar: a link to the profile page.
pub fn user_avatar(username: &str, urls: &dyn UrlBuilder) -> String {
    format!(
        "<a href='{}'>{}</a>",
        urls.user(username),
        escape_html(username)
    )
}

/// Render an icon-only user avatar.
pub fn user_avatar_icon(username: &str, size: u32, urls: &dyn UrlBuilder) -> String {
    format!(
        "<a href='{}'><img loading='lazy' src='{}' width='{size}' height='{size}' alt='{}' class='badgeimg'></a>",
        urls.user(username),
        urls.user_pic(username),
        escape_html(username),
    )
}

/// Render the hover-card fragment for a game.
///
/// `mastery` is an optional pre-rendered progress line for the viewing
/// player.
pub fn render_game_card(game: &GameRecord, mastery: Option<&str>, urls: &dyn UrlBuilder) -> String {
    let name = render_game_title(&game.title, true);

    let mut html =
        String::from("<div class='tooltip-body flex items-start' style='max-width: 400px'>");
    html.push_str(&format!(
        "<img style='margin-right:5px' src='{}' width='64' height='64' />",
        urls.media_asset(&game.icon_path)
    ));
    html.push_str("<div>");
    html.push_str(&format!("<b>{name}</b><br>"));
    html.push_str(&game.console_name);
    if let Some(mastery) = mastery.filter(|m| !m.is_empty()) {
        html.push_str(&format!("<div>{mastery}</div>"));
    }
    html.push_str("</div>");
    html.push_str("</div>");
    html
}

/// Card lookup through a [`GameCardSource`]; a missing game renders as
/// nothing rather than an error.
pub fn render_game_card_by_id(
    id: GameId,
    cards: &dyn GameCardSource,
    urls: &dyn UrlBuilder,
) -> String {
    match cards.card_data(id) {
        Some(game) => render_game_card(&game, None, urls),
        None => {
            log::debug!("no card data for game {id}");
            String::new()
        }
    }
}

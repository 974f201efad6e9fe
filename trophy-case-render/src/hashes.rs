//! Supported game-file hash listings.
//!
//! Hashes identify which copies of a game file are compatible with the
//! achievement set. Named hashes render one entry each with their label
//! badges; hashes without a curated name are collected into a trailing
//! unlabeled section.

use trophy_case_core::lookup::GameLookup;
use trophy_case_core::types::{GameRecord, HashRecord};

use crate::breadcrumb::render_game_breadcrumb;
use crate::card::{AvatarOptions, game_avatar, user_avatar};
use crate::escape::escape_html;
use crate::urls::UrlBuilder;

/// Render the hash list for a game.
///
/// Label tokens with badge art render as inline images, the rest as
/// bracketed text. A `linked by` credit follows each hash that has one.
pub fn render_hash_list(hashes: &[HashRecord], urls: &dyn UrlBuilder) -> String {
    let mut html = String::from("<ul>");
    let mut has_unlabeled = false;

    for hash in hashes {
        if !hash.is_named() {
            has_unlabeled = true;
            continue;
        }
        let name = hash.name.as_deref().unwrap_or_default();
        html.push_str(&format!(
            "<li><p class='embedded p-4'><b>{}</b>",
            escape_html(name)
        ));
        for label in hash.labels.split(',') {
            if label.is_empty() {
                continue;
            }
            match urls.label_badge(label) {
                Some(src) => {
                    html.push_str(&format!(" <img class=\"inline-image\" src=\"{src}\">"));
                }
                None => html.push_str(&format!(" [{label}]")),
            }
        }
        html.push_str(&format!("<br/><code> {}</code>", hash.hash));
        push_linked_by(&mut html, hash, urls);
        html.push_str("</p></li>");
    }

    if has_unlabeled {
        html.push_str("<li><p class=\"embedded p-4\"><b>Unlabeled Game File Hashes</b><br/>");
        for hash in hashes.iter().filter(|h| !h.is_named()) {
            html.push_str(&format!("<code> {}</code>", hash.hash));
            push_linked_by(&mut html, hash, urls);
            html.push_str("<br/>");
        }
        html.push_str("</p></li>");
    }

    html.push_str("</ul>");
    html
}

fn push_linked_by(html: &mut String, hash: &HashRecord, urls: &dyn UrlBuilder) {
    if let Some(user) = hash.linked_user.as_deref().filter(|u| !u.is_empty()) {
        html.push_str(&format!(" linked by {}", user_avatar(user, urls)));
    }
}

/// Render the supported-game-files page body for a game: breadcrumb, game
/// avatar, registered-hash count, the hash list, and the forum-topic footer.
pub fn render_hashes_page(
    game: &GameRecord,
    hashes: &[HashRecord],
    lookup: &dyn GameLookup,
    urls: &dyn UrlBuilder,
) -> String {
    let mut html = String::from("<div class='navpath'>");
    html.push_str(&render_game_breadcrumb(game, lookup, urls, true));
    html.push_str(" &raquo; <b>Supported Game Files</b></div>");

    html.push_str("<h3>List of Supported Game Files</h3>");
    html.push_str(&game_avatar(game, AvatarOptions::icon_size(64), urls));
    html.push_str("<br><br>");

    html.push_str(&format!(
        "<p class='mt-4 mb-1'>There are currently <span class='font-bold'>{}</span> \
         supported game file hashes registered for this game.</p>",
        hashes.len()
    ));

    html.push_str(&render_hash_list(hashes, urls));
    html.push_str("<br>");

    if let Some(topic_id) = game.forum_topic_id.filter(|t| *t > 0) {
        html.push_str(&format!(
            "Additional information for these hashes may be listed on the \
             <a href='{}'>official forum topic</a>.<br/>",
            urls.forum_topic(topic_id)
        ));
    }

    html
}

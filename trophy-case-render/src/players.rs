//! Recent-players table for a game page.

use trophy_case_core::types::RecentPlayer;

use crate::card::{user_avatar, user_avatar_icon};
use crate::escape::escape_html;
use crate::urls::UrlBuilder;

/// Render the recent-players table: avatar, name, timestamp, and the
/// player's latest activity line.
pub fn render_recent_players(players: &[RecentPlayer], urls: &dyn UrlBuilder) -> String {
    let mut html = String::from("<div class='component'>Recent Players:");
    html.push_str("<table class='table-highlight'><tbody>");
    html.push_str("<tr><th></th><th>User</th><th>When</th><th class='w-full'>Activity</th>");

    for player in players {
        html.push_str("<tr>");
        html.push_str(&format!(
            "<td>{}</td>",
            user_avatar_icon(&player.username, 32, urls)
        ));
        html.push_str(&format!("<td>{}</td>", user_avatar(&player.username, urls)));
        html.push_str(&format!(
            "<td class='whitespace-nowrap'>{}</td>",
            player.date
        ));
        html.push_str(&format!("<td>{}</td>", escape_html(&player.activity)));
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html.push_str("</div>");
    html
}

//! Similar-games table for a game page.

use trophy_case_core::types::RelatedGameRow;

use crate::card::{AvatarOptions, AvatarSubject, game_avatar};
use crate::urls::UrlBuilder;

/// Render the similar-games table.
///
/// Fully featured games show icon, linked title with console, and point
/// totals; hub-style rows span the title columns and carry no points.
pub fn render_related_games(
    rows: &[RelatedGameRow],
    header: Option<&str>,
    urls: &dyn UrlBuilder,
) -> String {
    let mut html = String::from("<div class='component gamealts'>");
    if let Some(header) = header {
        html.push_str(&format!("<h2 class='text-h3'>{header}</h2>"));
    }
    html.push_str("<table class='table-highlight'><tbody>");

    for row in rows {
        html.push_str("<tr>");

        let is_full_game = row.is_full_game();
        let subject = AvatarSubject {
            id: row.id,
            title: &row.title,
            console_name: is_full_game.then_some(row.console_name.as_str()),
            icon_path: &row.icon_path,
        };

        html.push_str("<td>");
        html.push_str(&game_avatar(subject, AvatarOptions::icon_only(32), urls));
        html.push_str("</td>");

        html.push_str(&format!(
            "<td style='width: 100%' {}>",
            if is_full_game { "" } else { "colspan=\"2\"" }
        ));
        html.push_str(&game_avatar(subject, AvatarOptions::label_only(), urls));
        html.push_str("</td>");

        if is_full_game {
            html.push_str("<td>");
            html.push_str(&format!(
                "<span class='whitespace-nowrap'>{} points</span><span class='TrueRatio'> ({})</span>",
                row.points, row.true_points
            ));
            html.push_str("</td>");
        }

        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html.push_str("</div>");
    html
}

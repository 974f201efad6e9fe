//! Game breadcrumb rendering.
//!
//! Format: `All Games » (console) » (game title)`, with `» Subset - (name)`
//! appended when the record is a subset of a base game.

use trophy_case_core::lookup::GameLookup;
use trophy_case_core::title::split_subset;
use trophy_case_core::types::GameRecord;

use crate::title::render_game_title;
use crate::urls::UrlBuilder;

/// Render the navigation prefix for a game page.
///
/// The main crumb links to the base game whenever a subset crumb follows it
/// (so only the truly final crumb is ever unlinked) or `link_last_crumb` is
/// set. A base game whose id cannot be resolved renders as plain bold text.
pub fn render_game_breadcrumb(
    game: &GameRecord,
    lookup: &dyn GameLookup,
    urls: &dyn UrlBuilder,
    link_last_crumb: bool,
) -> String {
    let (main_id, main_title, subset) = match split_subset(&game.title) {
        Some((main, subset_literal)) => {
            let main_id = lookup.find_id_by_title(&main, game.console_id);
            if main_id.is_none() {
                log::debug!(
                    "no base game found for '{main}' on console {}",
                    game.console_id
                );
            }
            let rendered_subset = render_game_title(&subset_literal, true);
            (main_id, main, Some((game.id, rendered_subset)))
        }
        None => (Some(game.id), game.title.clone(), None),
    };

    let mut rendered_main = render_game_title(&main_title, false);
    if rendered_main != main_title {
        // A derived game can share its bare title with a base game on the
        // same console; keep the category tags to tell the two apart.
        if let Some(pos) = main_title.rfind('~') {
            let base_title = main_title[pos + 1..].trim();
            if lookup
                .find_id_by_title(base_title, game.console_id)
                .is_some()
            {
                rendered_main = render_game_title(&main_title, true);
            }
        }
    }

    let mut html = format!("<a href='{}'>All Games</a>", urls.all_games());
    html.push_str(&next_crumb(
        &game.console_name,
        Some(&urls.console_games(game.console_id)),
    ));

    let main_href = if link_last_crumb || subset.is_some() {
        main_id.map(|id| urls.game(id))
    } else {
        None
    };
    html.push_str(&next_crumb(&rendered_main, main_href.as_deref()));

    if let Some((subset_id, rendered_subset)) = subset {
        let subset_href = link_last_crumb.then(|| urls.game(subset_id));
        html.push_str(&next_crumb(&rendered_subset, subset_href.as_deref()));
    }

    html
}

/// Next crumb (`» text`), linked or bold.
fn next_crumb(text: &str, href: Option<&str>) -> String {
    match href {
        Some(href) => format!(" &raquo; <a href='{href}'>{text}</a>"),
        None => format!(" &raquo; <b>{text}</b>"),
    }
}

#[cfg(test)]
#[path = "tests/breadcrumb_tests.rs"]
mod tests;

use super::*;
use trophy_case_core::types::{ConsoleId, GameId};

use crate::urls::SiteUrls;

/// Title → id fixture standing in for the game table.
struct TitleTable(Vec<(&'static str, ConsoleId, GameId)>);

impl GameLookup for TitleTable {
    fn find_id_by_title(&self, title: &str, console_id: ConsoleId) -> Option<GameId> {
        self.0
            .iter()
            .find(|(t, c, _)| *t == title && *c == console_id)
            .map(|(_, _, id)| *id)
    }
}

fn snes_game(id: GameId, title: &str) -> GameRecord {
    GameRecord {
        id,
        title: title.to_string(),
        console_id: 3,
        console_name: "SNES".to_string(),
        icon_path: "/Images/000001.png".to_string(),
        forum_topic_id: None,
    }
}

#[test]
fn plain_game_links_when_asked() {
    let game = snes_game(10, "Super Game");
    let html = render_game_breadcrumb(&game, &TitleTable(vec![]), &SiteUrls::new(), true);
    assert_eq!(
        html,
        "<a href='/gameList.php'>All Games</a> &raquo; <a href='/gameList.php?c=3'>SNES</a> \
         &raquo; <a href='/game/10'>Super Game</a>"
    );
}

#[test]
fn plain_game_last_crumb_unlinked_by_default() {
    let game = snes_game(10, "Super Game");
    let html = render_game_breadcrumb(&game, &TitleTable(vec![]), &SiteUrls::new(), false);
    assert!(html.ends_with(" &raquo; <b>Super Game</b>"));
}

#[test]
fn subset_keeps_main_crumb_linked_even_without_last_crumb_link() {
    let lookup = TitleTable(vec![("Super Game", 3, 42)]);
    let game = snes_game(99, "Super Game [Subset - Easy Mode]");
    let html = render_game_breadcrumb(&game, &lookup, &SiteUrls::new(), false);

    // Base crumb links to the resolved base game; subset crumb is the true
    // last crumb and stays bold.
    assert!(html.contains("<a href='/game/42'>Super Game</a>"));
    assert!(html.contains(" &raquo; <b><span class='tag'>"));
    assert!(!html.contains("/game/99"));
}

#[test]
fn subset_crumb_links_when_last_crumb_linked() {
    let lookup = TitleTable(vec![("Super Game", 3, 42)]);
    let game = snes_game(99, "Super Game [Subset - Easy Mode]");
    let html = render_game_breadcrumb(&game, &lookup, &SiteUrls::new(), true);

    assert!(html.contains("<a href='/game/42'>Super Game</a>"));
    assert!(html.contains("<a href='/game/99'>"));
    assert!(html.contains("<span>Easy Mode</span>"));
}

#[test]
fn unresolved_base_game_renders_bold() {
    let game = snes_game(99, "Super Game [Subset - Easy Mode]");
    let html = render_game_breadcrumb(&game, &TitleTable(vec![]), &SiteUrls::new(), true);

    assert!(html.contains(" &raquo; <b>Super Game</b>"));
    // The subset crumb still links to the record itself.
    assert!(html.contains("<a href='/game/99'>"));
}

#[test]
fn tagged_title_disambiguates_against_base_game() {
    // A hack shares its bare title with the base game on the same console;
    // the crumb keeps the category tag so the two don't collide.
    let lookup = TitleTable(vec![("Super Game", 3, 42)]);
    let game = snes_game(77, "~Hack~ Super Game");
    let html = render_game_breadcrumb(&game, &lookup, &SiteUrls::new(), true);

    assert!(html.contains("<span class='tag'><span>Hack</span></span>"));
}

#[test]
fn tagged_title_stays_stripped_without_a_conflict() {
    let game = snes_game(77, "~Hack~ Super Game");
    let html = render_game_breadcrumb(&game, &TitleTable(vec![]), &SiteUrls::new(), true);

    assert!(!html.contains("span class='tag'"));
    assert!(html.contains("<a href='/game/77'>Super Game</a>"));
}

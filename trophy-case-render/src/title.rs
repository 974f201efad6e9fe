//! Game title rendering with category tag styling.

use trophy_case_core::title::{find_subset_marker, find_tag_markers};

/// Render a game title, turning `~Category~` and `[Subset - Name]` markers
/// into trailing styled spans.
///
/// With `tags` false the markers are stripped instead. Markers are located
/// on the original title; each removal takes the first literal occurrence
/// still present in the working string, so repeated marker text is removed
/// once per match. The working string is trimmed after every step.
///
/// Category and subset text come from curated data and are emitted as-is;
/// the caller escapes any untrusted portion of the outer title first.
pub fn render_game_title(title: &str, tags: bool) -> String {
    let mut html = title.to_string();

    for marker in find_tag_markers(title) {
        let span = format!("<span class='tag'><span>{}</span></span>", marker.category);
        html = apply_marker(&html, &marker.literal, &span, tags);
    }

    if let Some(marker) = find_subset_marker(title) {
        let span = format!(
            "<span class='tag'>\
             <span class='tag-label'>Subset</span>\
             <span class='tag-arrow'></span>\
             <span>{}</span>\
             </span>",
            marker.name
        );
        html = apply_marker(&html, &marker.literal, &span, tags);
    }

    html
}

/// Remove one occurrence of `literal` and append the span (tags mode) or
/// nothing (strip mode), trimming the result.
fn apply_marker(html: &str, literal: &str, span: &str, tags: bool) -> String {
    let removed = html.replacen(literal, "", 1);
    let replaced = if tags {
        format!("{removed} {span}")
    } else {
        removed
    };
    replaced.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_becomes_trailing_span() {
        let html = render_game_title("~Hack~ Super Game", true);
        assert!(!html.contains("~Hack~"));
        assert!(html.starts_with("Super Game"));
        assert!(html.ends_with("<span class='tag'><span>Hack</span></span>"));
    }

    #[test]
    fn tag_and_subset_both_render() {
        let html = render_game_title("Super Game ~Hack~ [Subset - Easy Mode]", true);
        assert!(!html.contains("~Hack~"));
        assert!(!html.contains("[Subset - Easy Mode]"));
        assert!(html.contains("<span class='tag'><span>Hack</span></span>"));
        assert!(html.contains("<span class='tag-label'>Subset</span>"));
        assert!(html.contains("<span>Easy Mode</span>"));
    }

    #[test]
    fn strip_mode_removes_markers() {
        assert_eq!(
            render_game_title("Super Game ~Hack~ [Subset - Easy Mode]", false),
            "Super Game"
        );
    }

    #[test]
    fn strip_mode_is_idempotent() {
        let once = render_game_title("Super Game ~Hack~", false);
        let twice = render_game_title(&once, false);
        assert_eq!(once, twice);
        assert_eq!(once, "Super Game");
    }

    #[test]
    fn unbalanced_markers_pass_through() {
        assert_eq!(render_game_title("Game ~Hack", true), "Game ~Hack");
        assert_eq!(render_game_title("Game [Subset - Oops", false), "Game [Subset - Oops");
    }

    #[test]
    fn plain_title_is_unchanged() {
        assert_eq!(render_game_title("Super Game II", true), "Super Game II");
    }

    #[test]
    fn repeated_tag_text_removes_once_per_match() {
        let html = render_game_title("~Hack~ Game ~Hack~", false);
        assert_eq!(html, "Game");
    }
}

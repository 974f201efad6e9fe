//! Player progress widgets: the completion bar and completion icon.

use trophy_case_core::progress::ProgressSummary;

/// Render the completion icon shown beside a progress bar.
///
/// An empty placeholder until every achievement is earned; then the crown
/// for a fully hardcore set, the medal otherwise. The tooltip variant adds
/// hover text.
pub fn render_completion_icon(
    awarded_count: u64,
    total_count: u64,
    hardcore_ratio: u32,
    tooltip: bool,
) -> String {
    if awarded_count == 0 || awarded_count < total_count {
        return "<div class='completion-icon'></div>".to_string();
    }

    let (icon, tier) = if hardcore_ratio == 100 {
        ("\u{1F451}", "mastered")
    } else {
        ("\u{1F396}\u{FE0F}", "completed")
    };
    let mut class = format!("completion-icon {tier}");
    let mut tooltip_text = "";
    if tooltip {
        tooltip_text = if hardcore_ratio == 100 {
            "Mastered (hardcore)"
        } else {
            "Completed"
        };
        class.push_str(" tooltip");
    }

    format!("<div class='{class}' title='{tooltip_text}'>{icon}</div>")
}

/// Render the progress bar widget for one player's standing on a set.
///
/// The outer bar width is the overall completion percentage; the nested bar
/// is the hardcore share of earned unlocks. The hover title names the
/// hardcore percentage only when the player has unlocks in both modes.
pub fn render_game_progress(total: u32, earned_casual: i64, earned_hardcore: u32) -> String {
    let summary = ProgressSummary::compute(total, earned_casual, earned_hardcore);
    let casual = earned_casual.max(0) as u64;
    let earned_total = casual + u64::from(earned_hardcore);

    let bar_title = if total > 0 && casual > 0 && earned_hardcore > 0 {
        format!("{}% hardcore", summary.pct_hardcore)
    } else {
        String::new()
    };

    let mut html = String::new();
    html.push_str("<div class='w-40 my-2'>");
    html.push_str("<div class='flex w-full items-center'>");
    html.push_str("<div class='progressbar grow'>");
    html.push_str(&format!(
        "<div class='completion' style='width:{}%' title='{bar_title}'>",
        summary.pct_complete
    ));
    html.push_str(&format!(
        "<div class='completion-hardcore' style='width:{}%'></div>",
        summary.pct_hardcore_proportion
    ));
    html.push_str("</div>");
    html.push_str("</div>");
    html.push_str(&render_completion_icon(
        earned_total,
        u64::from(total),
        summary.pct_hardcore,
        false,
    ));
    html.push_str("</div>");
    html.push_str("<div class='progressbar-label pr-5 -mt-1'>");
    html.push_str(&summary.label());
    html.push_str("</div>");
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_is_placeholder_until_complete() {
        assert_eq!(
            render_completion_icon(3, 10, 30, false),
            "<div class='completion-icon'></div>"
        );
        assert_eq!(
            render_completion_icon(0, 0, 0, false),
            "<div class='completion-icon'></div>"
        );
    }

    #[test]
    fn crown_for_full_hardcore() {
        let html = render_completion_icon(10, 10, 100, false);
        assert_eq!(html, "<div class='completion-icon mastered' title=''>\u{1F451}</div>");
    }

    #[test]
    fn medal_for_mixed_completion() {
        let html = render_completion_icon(10, 10, 40, false);
        assert!(html.contains("completion-icon completed"));
        assert!(html.contains("\u{1F396}\u{FE0F}"));
    }

    #[test]
    fn tooltip_variant_adds_title_text() {
        let html = render_completion_icon(10, 10, 100, true);
        assert!(html.contains("completion-icon mastered tooltip"));
        assert!(html.contains("title='Mastered (hardcore)'"));

        let html = render_completion_icon(10, 10, 40, true);
        assert!(html.contains("title='Completed'"));
    }

    #[test]
    fn bar_widths_follow_the_summary() {
        let html = render_game_progress(10, 4, 4);
        assert!(html.contains("<div class='completion' style='width:80%'"));
        assert!(html.contains("<div class='completion-hardcore' style='width:50%'></div>"));
        assert!(html.ends_with(
            "<div class='progressbar-label pr-5 -mt-1'>80% complete</div></div>"
        ));
    }

    #[test]
    fn hover_title_only_with_unlocks_in_both_modes() {
        assert!(render_game_progress(10, 4, 4).contains("title='40% hardcore'"));
        assert!(render_game_progress(10, 0, 4).contains("title=''"));
        assert!(render_game_progress(10, 4, 0).contains("title=''"));
    }

    #[test]
    fn mastered_set_labels_and_crowns() {
        let html = render_game_progress(10, 0, 10);
        assert!(html.contains(">Mastered</div>"));
        assert!(html.contains("completion-icon mastered"));
    }
}

//! Hub-linked metadata rows for game pages.
//!
//! A game's comma-separated attribute fields (genre, developer, ...) are
//! reconciled against the game's hub cross-references: a value that has a
//! hub page is replaced in place with a link to it, and hub values missing
//! from the field are appended. Values that never matched a hub are escaped
//! at output time; generated links are emitted as-is.

use trophy_case_core::types::{HubRecord, split_attribute_list};

use crate::escape::escape_html;
use crate::urls::UrlBuilder;

/// One display value in a metadata row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataValue {
    pub text: String,
    /// Linked values carry generated markup and are exempt from the final
    /// escaping pass.
    pub is_link: bool,
}

impl MetadataValue {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_link: false,
        }
    }

    fn link(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_link: true,
        }
    }
}

/// Split a raw attribute field into plain display values.
pub fn attribute_values(raw: Option<&str>) -> Vec<MetadataValue> {
    match raw {
        Some(raw) => split_attribute_list(raw)
            .into_iter()
            .map(MetadataValue::plain)
            .collect(),
        None => Vec::new(),
    }
}

/// Merge hub cross-references for `label` (then each alt label, in order)
/// into the value list.
///
/// Later labels operate on the results of earlier ones, so an alt label can
/// further rewrite a list the primary label already touched.
pub fn merge_hub_metadata(
    label: &str,
    mut values: Vec<MetadataValue>,
    hubs: &[HubRecord],
    alt_labels: &[&str],
    urls: &dyn UrlBuilder,
) -> Vec<MetadataValue> {
    merge_category(label, &mut values, hubs, urls);
    for alt in alt_labels {
        merge_category(alt, &mut values, hubs, urls);
    }
    values
}

fn merge_category(
    category: &str,
    values: &mut Vec<MetadataValue>,
    hubs: &[HubRecord],
    urls: &dyn UrlBuilder,
) {
    for hub in hubs {
        let (value, slot) = if category.starts_with("Hack") {
            // Hack hubs keep their category in the display value, normalized
            // from the plural hub form `Hacks - XXX` to `Hack - XXX`; the
            // category check accepts the plural spelling for the same
            // reason. The raw form is tried against the field first, then
            // the normalized one.
            let Some(rest) = hub
                .title
                .strip_prefix('[')
                .and_then(|t| t.strip_prefix(category))
            else {
                continue;
            };
            if !(rest.starts_with(" - ") || rest.starts_with("s - ")) {
                continue;
            }
            let raw = hub.bare_title();
            let slot = position_of(values, raw);
            let value = raw.replace("Hacks - ", "Hack - ");
            let slot = slot.or_else(|| position_of(values, &value));
            (value, slot)
        } else {
            let Some(value) = hub.value_for_category(category) else {
                continue;
            };
            let slot = position_of(values, value);
            (value.to_string(), slot)
        };

        let link = format!("<a href={}>{value}</a>", urls.game(hub.linked_game_id));
        match slot {
            Some(i) => values[i] = MetadataValue::link(link),
            None => values.push(MetadataValue::link(link)),
        }
    }
}

fn position_of(values: &[MetadataValue], text: &str) -> Option<usize> {
    values.iter().position(|v| v.text == text)
}

/// Render one metadata table row, or `None` when there is nothing to show.
///
/// Never-linked values are escaped; merged links pass through untouched.
pub fn render_metadata_row(
    label: &str,
    raw_value: Option<&str>,
    hubs: &[HubRecord],
    alt_labels: &[&str],
    urls: &dyn UrlBuilder,
) -> Option<String> {
    let values = merge_hub_metadata(label, attribute_values(raw_value), hubs, alt_labels, urls);
    if values.is_empty() {
        return None;
    }

    let joined = values
        .iter()
        .map(|v| {
            if v.is_link {
                v.text.clone()
            } else {
                escape_html(&v.text)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!("<tr><td>{label}</td><td><b>{joined}</b></td></tr>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::urls::SiteUrls;

    fn hub(title: &str, id: u32) -> HubRecord {
        HubRecord {
            title: title.to_string(),
            linked_game_id: id,
        }
    }

    #[test]
    fn unmatched_hub_value_is_appended() {
        let urls = SiteUrls::new();
        let values = merge_hub_metadata(
            "Genre",
            vec![MetadataValue::plain("Action")],
            &[hub("[Genre - Platformer]", 5)],
            &[],
            &urls,
        );
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], MetadataValue::plain("Action"));
        assert_eq!(values[1].text, "<a href=/game/5>Platformer</a>");
        assert!(values[1].is_link);
    }

    #[test]
    fn matched_hub_value_is_replaced_in_place() {
        let urls = SiteUrls::new();
        let values = merge_hub_metadata(
            "Genre",
            vec![
                MetadataValue::plain("Action"),
                MetadataValue::plain("Platformer"),
            ],
            &[hub("[Genre - Platformer]", 5)],
            &[],
            &urls,
        );
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], MetadataValue::plain("Action"));
        assert_eq!(values[1].text, "<a href=/game/5>Platformer</a>");
    }

    #[test]
    fn hack_hub_normalizes_plural_category() {
        let urls = SiteUrls::new();
        let values = merge_hub_metadata(
            "Hack",
            vec![MetadataValue::plain("Hacks - Difficulty")],
            &[hub("[Hacks - Difficulty]", 7)],
            &[],
            &urls,
        );
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].text, "<a href=/game/7>Hack - Difficulty</a>");
    }

    #[test]
    fn hack_hub_matches_normalized_field_value() {
        let urls = SiteUrls::new();
        let values = merge_hub_metadata(
            "Hack",
            vec![MetadataValue::plain("Hack - Difficulty")],
            &[hub("[Hacks - Difficulty]", 7)],
            &[],
            &urls,
        );
        assert_eq!(values.len(), 1);
        assert!(values[0].is_link);
    }

    #[test]
    fn alt_labels_merge_after_the_primary() {
        let urls = SiteUrls::new();
        let values = merge_hub_metadata(
            "Developer",
            vec![MetadataValue::plain("Capcom")],
            &[hub("[Hacker - SomeAuthor]", 9), hub("[Developer - Capcom]", 4)],
            &["Hacker"],
            &urls,
        );
        // `Hacker` is a Hack-family label, so the linked value keeps its
        // category prefix.
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].text, "<a href=/game/4>Capcom</a>");
        assert_eq!(values[1].text, "<a href=/game/9>Hacker - SomeAuthor</a>");
    }

    #[test]
    fn row_suppressed_when_empty() {
        let urls = SiteUrls::new();
        assert!(render_metadata_row("Genre", None, &[], &[], &urls).is_none());
        assert!(render_metadata_row("Genre", Some(""), &[], &[], &urls).is_none());
    }

    #[test]
    fn row_escapes_unmerged_values_only() {
        let urls = SiteUrls::new();
        let html = render_metadata_row(
            "Genre",
            Some("Beat 'em Up, Platformer"),
            &[hub("[Genre - Platformer]", 5)],
            &[],
            &urls,
        )
        .unwrap();
        assert_eq!(
            html,
            "<tr><td>Genre</td><td><b>Beat &#039;em Up, \
             <a href=/game/5>Platformer</a></b></td></tr>"
        );
    }
}

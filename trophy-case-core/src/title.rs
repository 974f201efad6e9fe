//! Scanner for the structured markers embedded in game titles.
//!
//! Titles carry two kinds of inline annotation:
//! ```text
//! ~Hack~ Super Game II [Subset - Bonus]
//! ```
//! `~Category~` markers denote display category badges; a single
//! `[Subset - Name]` suffix marks a variant derived from a base game.
//!
//! Scanning is a plain left-to-right pass over the immutable input.
//! Unbalanced `~` or `[]` markers never match and are left for the caller
//! to display untouched.

/// The literal prefix opening a subset marker.
pub const SUBSET_PREFIX: &str = "[Subset - ";

/// A `~Category~` marker found in a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMarker {
    /// Category text between the tildes.
    pub category: String,
    /// The matched text, tildes included.
    pub literal: String,
}

/// A `[Subset - Name]` marker found in a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetMarker {
    /// Subset name. Greedy: runs to the final `]` in the title, so it may
    /// itself contain brackets.
    pub name: String,
    /// The matched text, brackets included.
    pub literal: String,
}

/// Find all `~Category~` markers, left to right.
///
/// Category text is anything non-empty between a tilde pair; an empty pair
/// does not match and its closing tilde may open the next marker.
pub fn find_tag_markers(title: &str) -> Vec<TagMarker> {
    let mut markers = Vec::new();
    let mut i = 0;
    while i < title.len() {
        let Some(open_rel) = title[i..].find('~') else {
            break;
        };
        let open = i + open_rel;
        let Some(close_rel) = title[open + 1..].find('~') else {
            break;
        };
        let close = open + 1 + close_rel;
        if close == open + 1 {
            i = close;
            continue;
        }
        markers.push(TagMarker {
            category: title[open + 1..close].to_string(),
            literal: title[open..=close].to_string(),
        });
        i = close + 1;
    }
    markers
}

/// Find the `[Subset - Name]` marker, if any.
///
/// The name capture is greedy: it extends to the last `]` in the title, so
/// a name may contain brackets. At least one character of name is required.
pub fn find_subset_marker(title: &str) -> Option<SubsetMarker> {
    let mut from = 0;
    while let Some(rel) = title[from..].find(SUBSET_PREFIX) {
        let start = from + rel;
        let after = start + SUBSET_PREFIX.len();
        if let Some(end_rel) = title[after..].rfind(']') {
            if end_rel >= 1 {
                let end = after + end_rel;
                return Some(SubsetMarker {
                    name: title[after..end].to_string(),
                    literal: title[start..=end].to_string(),
                });
            }
        }
        from = start + 1;
    }
    None
}

/// Split a title into its main portion and subset marker, if present.
///
/// The main portion is everything before the last viable subset marker,
/// trimmed; the subset portion is the marker literal running to the final
/// `]`. Both portions must be non-empty for a split to happen. Returns
/// `None` for titles without a subset marker.
pub fn split_subset(title: &str) -> Option<(String, String)> {
    let end = title.rfind(']')?;
    let mut limit = end;
    loop {
        let start = title[..limit].rfind(SUBSET_PREFIX)?;
        if start >= 1 && start + SUBSET_PREFIX.len() < end {
            let main = title[..start].trim().to_string();
            let subset = title[start..=end].to_string();
            return Some((main, subset));
        }
        if start == 0 {
            return None;
        }
        limit = start;
    }
}

/// Escape text for safe inclusion in HTML output.
///
/// Covers the five characters with meaning in markup and attribute
/// positions. Values that already carry generated link markup must not be
/// passed through here a second time.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert_eq!(escape_html("it's \"here\""), "it&#039;s &quot;here&quot;");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("Super Game II"), "Super Game II");
    }
}

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'` so text is safe inside element
/// content and quoted attribute values alike.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_borrowed() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
    }
}

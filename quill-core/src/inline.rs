//! Inline span recognition for paragraph, list item and quote text.
//!
//! A single left-to-right scan over the line. At each position the scanner
//! tries, in order: code span, bold, italic, strikethrough, image, link.
//! Whatever matches first is consumed whole, so delimiters inside a code
//! span or a link url are never reinterpreted. Anything that doesn't close
//! properly stays literal text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Code(String),
    Bold(Vec<Span>),
    Italic(Vec<Span>),
    Strikethrough(Vec<Span>),
    Link { label: String, url: String },
    Image { alt: String, url: String },
}

pub fn format_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        match match_span(rest) {
            Some((span, consumed)) => {
                if !plain.is_empty() {
                    spans.push(Span::Text(std::mem::take(&mut plain)));
                }
                spans.push(span);
                rest = &rest[consumed..];
            }
            None => {
                plain.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    if !plain.is_empty() {
        spans.push(Span::Text(plain));
    }

    spans
}

/// Visible text of a span sequence, markup removed.
pub fn plain_text(spans: &[Span]) -> String {
    let mut text = String::new();

    for span in spans {
        match span {
            Span::Text(s) | Span::Code(s) => text.push_str(s),
            Span::Bold(inner) | Span::Italic(inner) | Span::Strikethrough(inner) => {
                text.push_str(&plain_text(inner));
            }
            Span::Link { label, .. } => text.push_str(label),
            Span::Image { alt, .. } => text.push_str(alt),
        }
    }

    text
}

fn match_span(s: &str) -> Option<(Span, usize)> {
    match *s.as_bytes().first()? {
        b'`' => delimited(s, "`", '`', "`").map(|(code, len)| (Span::Code(code.to_string()), len)),
        b'*' if s.starts_with("**") => delimited(s, "**", '*', "**")
            .map(|(inner, len)| (Span::Bold(format_inline(inner)), len)),
        b'*' => delimited(s, "*", '*', "*")
            .map(|(inner, len)| (Span::Italic(format_inline(inner)), len)),
        b'~' if s.starts_with("~~") => delimited(s, "~~", '~', "~~")
            .map(|(inner, len)| (Span::Strikethrough(format_inline(inner)), len)),
        b'!' if s.starts_with("![") => bracketed(&s[1..], true).map(|(alt, url, len)| {
            let span = Span::Image {
                alt: alt.to_string(),
                url: url.to_string(),
            };
            (span, len + 1)
        }),
        b'[' => bracketed(s, false).map(|(label, url, len)| {
            let span = Span::Link {
                label: label.to_string(),
                url: url.to_string(),
            };
            (span, len)
        }),
        _ => None,
    }
}

/// Matches `open`, a non-empty run free of `stop`, then `close`.
/// Returns the run and the total byte length consumed.
fn delimited<'a>(s: &'a str, open: &str, stop: char, close: &str) -> Option<(&'a str, usize)> {
    let body = s.strip_prefix(open)?;
    let end = body.find(stop)?;
    if end == 0 || !body[end..].starts_with(close) {
        return None;
    }

    Some((&body[..end], open.len() + end + close.len()))
}

/// Matches `[text](url)`. The url must be non-empty; the text may be empty
/// only when `allow_empty_text` is set (image alt text).
fn bracketed(s: &str, allow_empty_text: bool) -> Option<(&str, &str, usize)> {
    let body = s.strip_prefix('[')?;
    let text_end = body.find(']')?;
    if text_end == 0 && !allow_empty_text {
        return None;
    }

    let after = body[text_end..].strip_prefix("](")?;
    let url_end = after.find(')')?;
    if url_end == 0 {
        return None;
    }

    // '[' + text + "](" + url + ')'
    let consumed = 1 + text_end + 2 + url_end + 1;
    Some((&body[..text_end], &after[..url_end], consumed))
}

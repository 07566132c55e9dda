use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::escape::escape_html;
use crate::inline::Span;
use crate::markdown::Block;

const HEADING_STYLE: &str = "margin:24px 0 16px;font-weight:600;color:#1f2328";
const PARAGRAPH_STYLE: &str = "margin:0 0 16px;line-height:1.8;font-size:16px;color:#333";
const LIST_STYLE: &str = "padding-left:24px;margin:16px 0";
const LIST_ITEM_STYLE: &str = "margin:8px 0;line-height:1.8";
const BLOCKQUOTE_STYLE: &str = "border-left:4px solid #dfe2e5;padding-left:16px;margin:16px 0;color:#666";
const PRE_STYLE: &str = "background:#f6f8fa;padding:16px;border-radius:8px;overflow-x:auto;margin:16px 0";
const PRE_CODE_STYLE: &str = "font-family:monospace;font-size:14px;line-height:1.6;color:#24292e";
const CODE_STYLE: &str =
    "background:#f6f8fa;padding:2px 6px;border-radius:4px;font-family:monospace;font-size:14px";
const STRONG_STYLE: &str = "font-weight:600";
const EM_STYLE: &str = "font-style:italic";
const DEL_STYLE: &str = "text-decoration:line-through;color:#999";
const LINK_STYLE: &str = "color:#57606a;text-decoration:none;border-bottom:1px solid #57606a";
const IMAGE_STYLE: &str = "max-width:100%;border-radius:8px;margin:16px 0;display:block";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Escape `<`, `>` and friends in paragraph, list and quote text.
    /// Off by default: raw HTML written in the source passes through.
    pub escape_inline_text: bool,
}

const HEADING_SIZES: [&str; 6] = ["28px", "24px", "20px", "18px", "16px", "14px"];

/// Heading levels outside `1..=6` are clamped into range.
pub fn heading_level(level: u8) -> u8 {
    level.clamp(1, 6)
}

pub fn heading_font_size(level: u8) -> &'static str {
    HEADING_SIZES[usize::from(heading_level(level)) - 1]
}

pub fn render_blocks(blocks: &[Block], options: &RenderOptions) -> String {
    blocks
        .iter()
        .map(|block| render_block(block, options))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_block(block: &Block, options: &RenderOptions) -> String {
    match block {
        Block::Heading { level, text } => format!(
            "<h{0} style=\"font-size:{1};{2}\">{3}</h{0}>",
            heading_level(*level),
            heading_font_size(*level),
            HEADING_STYLE,
            escape_html(text)
        ),
        Block::Paragraph { content } => format!(
            "<p style=\"{}\">{}</p>",
            PARAGRAPH_STYLE,
            render_spans(content, options)
        ),
        Block::CodeBlock { raw } => format!(
            "<pre style=\"{}\"><code style=\"{}\">{}</code></pre>",
            PRE_STYLE,
            PRE_CODE_STYLE,
            escape_html(raw)
        ),
        Block::Blockquote { lines } => {
            let content = lines
                .iter()
                .map(|line| render_spans(line, options))
                .collect::<Vec<_>>()
                .join("<br/>");
            format!("<blockquote style=\"{}\">{}</blockquote>", BLOCKQUOTE_STYLE, content)
        }
        Block::List { items } => {
            let items_html = items
                .iter()
                .map(|item| format!("<li style=\"{}\">{}</li>", LIST_ITEM_STYLE, render_spans(item, options)))
                .collect::<Vec<_>>()
                .join("\n");
            format!("<ul style=\"{}\">{}</ul>", LIST_STYLE, items_html)
        }
        Block::HorizontalRule => "<hr/>".to_string(),
    }
}

pub fn render_spans(spans: &[Span], options: &RenderOptions) -> String {
    let mut html = String::new();

    for span in spans {
        match span {
            Span::Text(text) => html.push_str(&inline_text(text, options)),
            Span::Code(code) => {
                html.push_str(&format!(
                    "<code style=\"{}\">{}</code>",
                    CODE_STYLE,
                    inline_text(code, options)
                ));
            }
            Span::Bold(inner) => {
                html.push_str(&format!(
                    "<strong style=\"{}\">{}</strong>",
                    STRONG_STYLE,
                    render_spans(inner, options)
                ));
            }
            Span::Italic(inner) => {
                html.push_str(&format!(
                    "<em style=\"{}\">{}</em>",
                    EM_STYLE,
                    render_spans(inner, options)
                ));
            }
            Span::Strikethrough(inner) => {
                html.push_str(&format!(
                    "<del style=\"{}\">{}</del>",
                    DEL_STYLE,
                    render_spans(inner, options)
                ));
            }
            Span::Link { label, url } => {
                html.push_str(&format!(
                    "<a href=\"{}\" style=\"{}\">{}</a>",
                    inline_text(url, options),
                    LINK_STYLE,
                    inline_text(label, options)
                ));
            }
            Span::Image { alt, url } => {
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\" style=\"{}\"/>",
                    inline_text(url, options),
                    inline_text(alt, options),
                    IMAGE_STYLE
                ));
            }
        }
    }

    html
}

fn inline_text<'a>(text: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_inline_text {
        escape_html(text)
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::format_inline;
    use rstest::rstest;
    use similar_asserts::assert_eq;

    #[rstest]
    #[case(1, "28px")]
    #[case(2, "24px")]
    #[case(3, "20px")]
    #[case(4, "18px")]
    #[case(5, "16px")]
    #[case(6, "14px")]
    fn heading_sizes_follow_level(#[case] level: u8, #[case] size: &str) {
        let html = render_block(
            &Block::Heading {
                level,
                text: "T".into(),
            },
            &RenderOptions::default(),
        );
        assert!(html.starts_with(&format!("<h{level} style=\"font-size:{size};")));
        assert!(html.ends_with(&format!("</h{level}>")));
    }

    #[rstest]
    #[case::below_range(0, 1, "28px")]
    #[case::above_range(7, 6, "14px")]
    #[case::far_above_range(9, 6, "14px")]
    fn out_of_range_heading_levels_are_clamped(
        #[case] level: u8,
        #[case] rendered: u8,
        #[case] size: &str,
    ) {
        let html = render_block(
            &Block::Heading {
                level,
                text: "T".into(),
            },
            &RenderOptions::default(),
        );
        assert_eq!(html, format!("<h{rendered} style=\"font-size:{size};{HEADING_STYLE}\">T</h{rendered}>"));
    }

    #[test]
    fn heading_text_is_escaped() {
        let html = render_block(
            &Block::Heading {
                level: 2,
                text: "a < b & c".into(),
            },
            &RenderOptions::default(),
        );
        assert!(html.contains(">a &lt; b &amp; c</h2>"));
    }

    #[test]
    fn code_block_is_escaped_verbatim() {
        let html = render_block(
            &Block::CodeBlock {
                raw: "if a < b && **c** {\n}".into(),
            },
            &RenderOptions::default(),
        );
        assert!(html.contains(">if a &lt; b &amp;&amp; **c** {\n}</code></pre>"));
        assert!(!html.contains("<strong"));
    }

    #[test]
    fn list_renders_one_li_per_item() {
        let html = render_block(
            &Block::List {
                items: vec![format_inline("a"), format_inline("b")],
            },
            &RenderOptions::default(),
        );
        assert_eq!(
            html,
            "<ul style=\"padding-left:24px;margin:16px 0\">\
             <li style=\"margin:8px 0;line-height:1.8\">a</li>\n\
             <li style=\"margin:8px 0;line-height:1.8\">b</li></ul>"
        );
    }

    #[test]
    fn blockquote_lines_join_with_line_break() {
        let html = render_block(
            &Block::Blockquote {
                lines: vec![format_inline("a"), format_inline("*b*")],
            },
            &RenderOptions::default(),
        );
        assert_eq!(
            html,
            "<blockquote style=\"border-left:4px solid #dfe2e5;padding-left:16px;margin:16px 0;color:#666\">\
             a<br/><em style=\"font-style:italic\">b</em></blockquote>"
        );
    }

    #[test]
    fn link_and_image_markup() {
        let html = render_spans(&format_inline("[x](u) ![y](i.png)"), &RenderOptions::default());
        assert_eq!(
            html,
            "<a href=\"u\" style=\"color:#57606a;text-decoration:none;border-bottom:1px solid #57606a\">x</a> \
             <img src=\"i.png\" alt=\"y\" style=\"max-width:100%;border-radius:8px;margin:16px 0;display:block\"/>"
        );
    }

    #[test]
    fn raw_inline_html_passes_through_by_default() {
        let html = render_spans(&format_inline("<b>hi</b>"), &RenderOptions::default());
        assert_eq!(html, "<b>hi</b>");
    }

    #[test]
    fn inline_text_is_escaped_when_enabled() {
        let options = RenderOptions {
            escape_inline_text: true,
        };
        let html = render_spans(&format_inline("<b> `<i>` [x](\"u\")"), &options);
        assert!(html.starts_with("&lt;b&gt; <code"));
        assert!(html.contains(">&lt;i&gt;</code>"));
        assert!(html.contains("href=\"&quot;u&quot;\""));
    }

    #[test]
    fn blocks_join_with_newlines() {
        let blocks = vec![Block::HorizontalRule, Block::HorizontalRule];
        assert_eq!(render_blocks(&blocks, &RenderOptions::default()), "<hr/>\n<hr/>");
    }
}

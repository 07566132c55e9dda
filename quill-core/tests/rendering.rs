use quill_core::markdown::UNTITLED;
use quill_core::{
    ArticleOptions, Block, BlockParser, RenderOptions, Theme, extract_title, format_article,
    parse_document, render_blocks,
};
use rstest::rstest;
use similar_asserts::assert_eq;

fn render(source: &str) -> String {
    render_blocks(&parse_document(source), &RenderOptions::default())
}

#[test]
fn list_then_blank_then_text() {
    let html = render("- a\n- b\n\ntext");

    assert_eq!(html.matches("<ul").count(), 1);
    assert_eq!(html.matches("<li").count(), 2);
    assert_eq!(html.matches("<p").count(), 1);
    assert!(html.find("</ul>").unwrap() < html.find("<p").unwrap());
}

#[test]
fn blank_line_inside_quote_keeps_single_blockquote() {
    let html = render("> a\n\n> b");

    assert_eq!(html.matches("<blockquote").count(), 1);
    assert!(html.contains(">a<br/>b</blockquote>"));
}

#[test]
fn list_at_end_of_input_is_not_lost() {
    let html = render("- a\n- b");
    assert_eq!(html.matches("<li").count(), 2);
    assert!(html.ends_with("</ul>"));
}

#[test]
fn fenced_code_is_escaped_and_never_formatted() {
    let html = render("```\n<div> & **bold** `tick` [x](y)\n```");

    assert!(html.contains("&lt;div&gt; &amp; **bold** `tick` [x](y)"));
    assert!(!html.contains("<strong"));
    assert!(!html.contains("<a href"));
    assert!(!html.contains("<div>"));
}

#[rstest]
#[case(1, "28px")]
#[case(2, "24px")]
#[case(3, "20px")]
#[case(4, "18px")]
#[case(5, "16px")]
#[case(6, "14px")]
fn heading_levels_map_to_font_sizes(#[case] level: usize, #[case] size: &str) {
    let html = render(&format!("{} Title", "#".repeat(level)));
    assert!(html.starts_with(&format!("<h{level} style=\"font-size:{size};")), "{html}");
}

#[rstest]
#[case("# Hello\nbody", "Hello")]
#[case("body only\n## Sub", UNTITLED)]
fn title_extraction(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(extract_title(source), expected);
}

#[rstest]
#[case::empty("")]
#[case::open_fence("```\n- x\n> y")]
#[case::open_quote("> a\n\n")]
#[case::open_list("- a\n* b")]
#[case::mixed("# h\n- a\n> q\n```\ncode\n```\n---\n####### x\n\n")]
fn finalize_leaves_nothing_open(#[case] source: &str) {
    let mut parser = BlockParser::new();
    let mut blocks: Vec<Block> = Vec::new();
    for line in source.split('\n') {
        blocks.extend(parser.feed(line));
    }
    blocks.extend(parser.finalize());

    // Running the same text through the driver produces the same blocks.
    assert_eq!(blocks, parse_document(source));
}

#[test]
fn renders_full_article_document() {
    let source = "\
# Weekly notes

Intro with `code`, **bold**, *italic* and ~~gone~~.

## Links
- [Site](https://example.com)
- ![Chart](chart.png)

> Quoted
> twice

```
fn main() {}
```

---
";
    let options = ArticleOptions {
        theme: Theme::Blue,
        cover: Some("cover.png".into()),
        ..Default::default()
    };
    let article = format_article(source, &options).unwrap();

    assert_eq!(article.title, "Weekly notes");
    assert_eq!(article.theme_name, "Blue");
    assert_eq!(article.char_count, source.chars().count());

    let html = &article.html;
    assert!(html.contains("<h1 style=\"font-size:28px;"));
    assert!(html.contains("<code style=\"background:#f6f8fa;padding:2px 6px;border-radius:4px;font-family:monospace;font-size:14px\">code</code>"));
    assert!(html.contains("<em style=\"font-style:italic\">italic</em>"));
    assert!(html.contains("<del style=\"text-decoration:line-through;color:#999\">gone</del>"));
    assert!(html.contains("<a href=\"https://example.com\""));
    assert!(html.contains("<img src=\"chart.png\" alt=\"Chart\""));
    assert!(html.contains(">Quoted<br/>twice</blockquote>"));
    assert!(html.contains(">fn main() {}</code></pre>"));
    assert!(html.contains("<hr/>"));
    assert!(html.contains("class=\"cover\" src=\"cover.png\""));
    assert!(html.contains("border-radius: 12px;"));
}

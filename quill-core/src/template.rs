use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::escape::escape_html;
use crate::theme::ThemeTokens;

pub const ARTICLE_TEMPLATE: &str = "article.html";

const DEFAULT_ARTICLE_TEMPLATE: &str = include_str!("../templates/article.html");

/// Characters read per minute when estimating reading time.
const READING_SPEED: usize = 400;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the article template can see. Text values are escaped on
/// construction, `body` is trusted HTML.
#[derive(Debug, Serialize)]
pub struct DocumentContext<'a> {
    pub title: String,
    pub cover: Option<String>,
    pub images: Vec<String>,
    pub body: &'a str,
    pub theme: ThemeTokens,
    pub reading_minutes: usize,
}

impl<'a> DocumentContext<'a> {
    pub fn new(title: &str, body: &'a str, theme: ThemeTokens, char_count: usize) -> Self {
        Self {
            title: escape_html(title).into_owned(),
            cover: None,
            images: Vec::new(),
            body,
            theme,
            reading_minutes: reading_minutes(char_count),
        }
    }

    pub fn cover(mut self, cover: Option<&str>) -> Self {
        self.cover = cover.map(|url| escape_html(url).into_owned());
        self
    }

    pub fn images<S: AsRef<str>>(mut self, images: &[S]) -> Self {
        self.images = images
            .iter()
            .map(|url| escape_html(url.as_ref()).into_owned())
            .collect();
        self
    }
}

pub fn reading_minutes(char_count: usize) -> usize {
    char_count.div_ceil(READING_SPEED).max(1)
}

pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Renderer backed by the built-in article template.
    pub fn new() -> Result<Self, TemplateError> {
        Self::from_source(DEFAULT_ARTICLE_TEMPLATE)
    }

    /// Renderer backed by a user supplied article template.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_source(&source)
    }

    fn from_source(source: &str) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        // Values are escaped up front; the body is already HTML.
        tera.autoescape_on(vec![]);
        tera.add_raw_template(ARTICLE_TEMPLATE, source)?;

        Ok(Self { tera })
    }

    pub fn render(&self, document: &DocumentContext<'_>) -> Result<String, TemplateError> {
        let context = Context::from_serialize(document)?;
        Ok(self.tera.render(ARTICLE_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(400, 1)]
    #[case(401, 2)]
    #[case(2000, 5)]
    fn estimates_reading_minutes(#[case] chars: usize, #[case] minutes: usize) {
        assert_eq!(reading_minutes(chars), minutes);
    }

    #[test]
    fn renders_theme_tokens_and_body() {
        let renderer = TemplateRenderer::new().unwrap();
        let doc = DocumentContext::new("Hello", "<p>body</p>", Theme::Dark.tokens(), 10);
        let html = renderer.render(&doc).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains("background-color: #1a1a1a;"));
        assert!(html.contains("font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'PingFang SC', sans-serif;"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("&copy; Hello"));
        assert!(!html.contains("class=\"cover\""));
        assert!(!html.contains("class=\"gallery\""));
    }

    #[test]
    fn renders_cover_and_numbered_gallery() {
        let renderer = TemplateRenderer::new().unwrap();
        let doc = DocumentContext::new("T", "", Theme::Pink.tokens(), 0)
            .cover(Some("https://img/c.png"))
            .images(&["a.png", "b.png"]);
        let html = renderer.render(&doc).unwrap();

        assert!(html.contains("class=\"cover\" src=\"https://img/c.png\" alt=\"T\""));
        assert!(html.contains("<img src=\"a.png\" alt=\"Image 1\""));
        assert!(html.contains("<img src=\"b.png\" alt=\"Image 2\""));
        assert!(html.contains("border-radius:16px"));
    }

    #[test]
    fn title_is_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let doc = DocumentContext::new("<script>", "", Theme::Elegant.tokens(), 0);
        let html = renderer.render(&doc).unwrap();
        assert!(html.contains("<title>&lt;script&gt;</title>"));
    }

    #[test]
    fn loads_custom_template_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.html");
        std::fs::write(&path, "{{ theme.name }}|{{ title }}|{{ body }}").unwrap();

        let renderer = TemplateRenderer::from_file(&path).unwrap();
        let doc = DocumentContext::new("T", "<hr/>", Theme::Blue.tokens(), 0);
        assert_eq!(renderer.render(&doc).unwrap(), "Blue|T|<hr/>");
    }

    #[test]
    fn missing_template_file_is_io_error() {
        let result = TemplateRenderer::from_file("/definitely/not/here.html");
        assert!(matches!(result, Err(TemplateError::Io(_))));
    }
}

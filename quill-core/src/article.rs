use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SkillError, SkillResult};
use crate::markdown::{extract_title, parse_document};
use crate::renderer::{RenderOptions, render_blocks};
use crate::template::{DocumentContext, TemplateError, TemplateRenderer};
use crate::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArticleOptions {
    pub theme: Theme,
    /// Overrides the title found in the source. Empty means "not set".
    pub title: Option<String>,
    pub cover: Option<String>,
    pub images: Vec<String>,
    pub render: RenderOptions,
    /// Article template to use instead of the built-in one.
    pub template: Option<PathBuf>,
}

impl ArticleOptions {
    pub fn renderer(&self) -> Result<TemplateRenderer, TemplateError> {
        match &self.template {
            Some(path) => TemplateRenderer::from_file(path),
            None => TemplateRenderer::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub html: String,
    pub title: String,
    pub theme_name: &'static str,
    pub char_count: usize,
}

pub fn format_article(source: &str, options: &ArticleOptions) -> Result<Article, TemplateError> {
    let renderer = options.renderer()?;
    format_article_with(&renderer, source, options)
}

/// Same as [`format_article`] but reuses an already loaded template.
pub fn format_article_with(
    renderer: &TemplateRenderer,
    source: &str,
    options: &ArticleOptions,
) -> Result<Article, TemplateError> {
    let title = match options.title.as_deref() {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => extract_title(source),
    };

    let blocks = parse_document(source);
    debug!(blocks = blocks.len(), title = %title, "parsed article");
    let body = render_blocks(&blocks, &options.render);

    let tokens = options.theme.tokens();
    let char_count = source.chars().count();
    let document = DocumentContext::new(&title, &body, tokens, char_count)
        .cover(options.cover.as_deref())
        .images(&options.images);

    Ok(Article {
        html: renderer.render(&document)?,
        title,
        theme_name: tokens.name,
        char_count,
    })
}

/// Read `input`, format it and write the HTML to `output`, creating parent
/// directories as needed.
pub fn format_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ArticleOptions,
) -> SkillResult<Article> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.is_file() {
        return Err(SkillError::NotFound(input.display().to_string()));
    }

    let source = std::fs::read_to_string(input)?;
    let article = format_article(&source, options)?;
    write_output(output, &article.html)?;

    debug!(input = %input.display(), output = %output.display(), "formatted article");
    Ok(article)
}

pub(crate) fn write_output(path: &Path, html: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
}

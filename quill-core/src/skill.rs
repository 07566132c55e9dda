//! JSON request/response envelope around the article formatter.
//!
//! One JSON object comes in, one JSON object goes out. Failures never
//! escape as errors: they are reported through `success`, `error` and
//! `error_kind` in the response.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::article::{Article, ArticleOptions, format_file};
use crate::error::{ErrorKind, SkillError, SkillResult};
use crate::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArticleRequest {
    pub input: Option<String>,
    pub output: Option<String>,
    pub theme: Option<String>,
    pub title: Option<String>,
    pub cover: Option<String>,
    pub images: Option<Vec<String>>,
}

impl ArticleRequest {
    pub fn parse(payload: &str) -> SkillResult<Self> {
        let payload = payload.trim();
        if payload.is_empty() {
            return Err(SkillError::MissingInput);
        }

        Ok(serde_json::from_str(payload)?)
    }

    /// Request fields layered over `defaults`.
    pub fn options(&self, defaults: &ArticleOptions) -> ArticleOptions {
        ArticleOptions {
            theme: self
                .theme
                .as_deref()
                .map(Theme::resolve)
                .unwrap_or(defaults.theme),
            title: self.title.clone().or_else(|| defaults.title.clone()),
            cover: self.cover.clone().or_else(|| defaults.cover.clone()),
            images: self.images.clone().unwrap_or_else(|| defaults.images.clone()),
            render: defaults.render,
            template: defaults.template.clone(),
        }
    }

    fn required_paths(&self) -> SkillResult<(&str, &str)> {
        match (non_empty(&self.input), non_empty(&self.output)) {
            (Some(input), Some(output)) => Ok((input, output)),
            (input, output) => {
                let missing: Vec<&str> = [("input", input), ("output", output)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(name, _)| name)
                    .collect();
                Err(SkillError::MissingRequiredField(missing.join(", ")))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArticleResponse {
    pub success: bool,
    pub output_path: Option<String>,
    pub title: Option<String>,
    pub theme: Option<String>,
    pub word_count: usize,
    pub error: Option<String>,
    pub error_kind: Option<ErrorKind>,
}

impl ArticleResponse {
    pub fn succeeded(output_path: &str, article: &Article) -> Self {
        Self {
            success: true,
            output_path: Some(output_path.to_string()),
            title: Some(article.title.clone()),
            theme: Some(article.theme_name.to_string()),
            word_count: article.char_count,
            error: None,
            error_kind: None,
        }
    }

    pub fn failed(err: &SkillError) -> Self {
        Self {
            error: Some(err.to_string()),
            error_kind: Some(err.kind()),
            ..Default::default()
        }
    }
}

impl From<SkillResult<ArticleResponse>> for ArticleResponse {
    fn from(result: SkillResult<ArticleResponse>) -> Self {
        result.unwrap_or_else(|err| {
            warn!(kind = ?err.kind(), "article request failed: {err}");
            ArticleResponse::failed(&err)
        })
    }
}

/// Handle one raw JSON payload. Always produces a response.
pub fn run_article_skill(payload: &str, defaults: &ArticleOptions) -> ArticleResponse {
    handle(payload, defaults).into()
}

fn handle(payload: &str, defaults: &ArticleOptions) -> SkillResult<ArticleResponse> {
    let request = ArticleRequest::parse(payload)?;
    let (input, output) = request.required_paths()?;
    let options = request.options(defaults);

    let article = format_file(input, output, &options)?;
    Ok(ArticleResponse::succeeded(output, &article))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

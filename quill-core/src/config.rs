use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::article::ArticleOptions;
use crate::renderer::RenderOptions;
use crate::theme::Theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parsing(#[from] toml::de::Error),
}

/// Contents of `quill.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub article: ArticleConfig,
    pub render: RenderOptions,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;

        Ok(config)
    }

    pub fn article_options(&self) -> ArticleOptions {
        ArticleOptions {
            theme: self.article.theme,
            title: None,
            cover: self.article.cover.clone(),
            images: self.article.images.clone(),
            render: self.render,
            template: self.article.template.clone(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ArticleConfig {
    pub theme: Theme,
    pub cover: Option<String>,
    pub images: Vec<String>,
    pub template: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.article.theme, Theme::Elegant);
        assert!(!config.render.escape_inline_text);
    }

    #[test]
    fn reads_article_and_render_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(
            &path,
            r#"
[article]
theme = "pink"
cover = "cover.png"
images = ["a.png", "b.png"]

[render]
escape_inline_text = true
"#,
        )
        .unwrap();

        let config = Config::read(&path).unwrap();
        let options = config.article_options();
        assert_eq!(options.theme, Theme::Pink);
        assert_eq!(options.cover.as_deref(), Some("cover.png"));
        assert_eq!(options.images.len(), 2);
        assert!(options.render.escape_inline_text);
        assert!(options.title.is_none());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config: Config = toml::from_str("[article]\ntheme = \"neon\"").unwrap();
        assert_eq!(config.article.theme, Theme::Elegant);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(Config::read("/no/quill.toml"), Err(ConfigError::Io(_))));
    }
}

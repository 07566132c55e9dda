use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use quill_core::ArticleOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    /// Build configuration
    pub build: BuildConfig,
    /// Article and render settings (from quill-core)
    #[serde(flatten)]
    pub settings: quill_core::config::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Source directory containing markdown files
    pub source: String,
    /// Output directory for generated articles
    pub output: String,
    /// Configuration file path
    pub config: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: "./articles".to_string(),
            output: "./out".to_string(),
            config: "./quill.toml".to_string(),
        }
    }
}

impl QuillConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (QUILL_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = optional_arg(args, "config")
            .cloned()
            .unwrap_or_else(|| BuildConfig::default().config);

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(ConfigBuilder::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        let file_exists = Path::new(&config_file).exists();
        debug!(config = %config_file, exists = file_exists, "loading configuration");
        if file_exists {
            builder = builder.add_source(File::from(Path::new(&config_file)));
        }

        // 3. Add environment variables with QUILL_ prefix
        builder = builder.add_source(
            Environment::with_prefix("QUILL")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        // 4. Override with CLI arguments that are defined for this command
        builder = builder.set_override("build.config", config_file)?;
        for (arg, key) in [
            ("source", "build.source"),
            ("output_dir", "build.output"),
            ("theme", "article.theme"),
            ("cover", "article.cover"),
            ("template", "article.template"),
        ] {
            if let Some(value) = optional_arg(args, arg) {
                builder = builder.set_override(key, value.clone())?;
            }
        }
        if let Some(images) = optional_many(args, "image") {
            builder = builder.set_override("article.images", images)?;
        }
        if optional_flag(args, "escape_inline") {
            builder = builder.set_override("render.escape_inline_text", true)?;
        }

        // Build and deserialize
        let config = builder.build()?;
        let quill_config: QuillConfig = config.try_deserialize()?;

        Ok(quill_config)
    }

    /// Article options for passing to quill-core
    pub fn article_options(&self) -> ArticleOptions {
        self.settings.article_options()
    }

    /// Get the build configuration
    pub fn build_config(&self) -> &BuildConfig {
        &self.build
    }
}

fn optional_arg<'a>(args: &'a ArgMatches, id: &str) -> Option<&'a String> {
    args.try_get_one::<String>(id).ok().flatten()
}

fn optional_many(args: &ArgMatches, id: &str) -> Option<Vec<String>> {
    args.try_get_many::<String>(id)
        .ok()
        .flatten()
        .map(|values| values.cloned().collect())
}

fn optional_flag(args: &ArgMatches, id: &str) -> bool {
    args.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false)
}

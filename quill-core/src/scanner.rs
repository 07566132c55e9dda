use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::article::{Article, ArticleOptions, format_article_with, write_output};
use crate::markdown::extract_title;
use crate::template::TemplateError;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Source directory not found: {}", .0.display())]
    MissingSourceDir(PathBuf),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A markdown file found under the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSource {
    pub title: String,
    /// Path relative to the scanned directory.
    pub path: PathBuf,
}

impl ArticleSource {
    pub fn out_path(&self) -> PathBuf {
        self.path.with_extension("html")
    }
}

pub struct ArticleScanner {
    source_dir: PathBuf,
}

impl ArticleScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source_dir: path.as_ref().to_path_buf(),
        }
    }

    /// Every `*.md` file below the source directory, sorted by path.
    pub fn scan(&self) -> Result<Vec<ArticleSource>, ScanError> {
        info!(source = %self.source_dir.display(), "scanning for articles");

        let mut articles = Vec::new();
        for entry in WalkDir::new(&self.source_dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }

            articles.push(self.scan_article(path)?);
        }

        Ok(articles)
    }

    fn scan_article(&self, path: &Path) -> Result<ArticleSource, ScanError> {
        let relative_path = path
            .strip_prefix(&self.source_dir)
            .map_err(|_| ScanError::InvalidPath(path.to_path_buf()))?;
        let source = std::fs::read_to_string(path)?;

        Ok(ArticleSource {
            title: extract_title(&source),
            path: relative_path.to_path_buf(),
        })
    }
}

/// Format every article under `source_dir` into `output_dir`, mirroring
/// the directory layout. Articles take their own title from their first
/// heading; a title in `options` is ignored here.
pub fn build_articles<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    output_dir: Q,
    options: &ArticleOptions,
) -> Result<Vec<Article>, BuildError> {
    let source_dir = source_dir.as_ref();
    let output_dir = output_dir.as_ref();

    if !source_dir.is_dir() {
        return Err(BuildError::MissingSourceDir(source_dir.to_path_buf()));
    }

    let sources = ArticleScanner::new(source_dir).scan()?;
    let renderer = options.renderer()?;
    let options = ArticleOptions {
        title: None,
        ..options.clone()
    };

    let mut articles = Vec::with_capacity(sources.len());
    for source in &sources {
        let text = std::fs::read_to_string(source_dir.join(&source.path)).map_err(ScanError::from)?;
        let article = format_article_with(&renderer, &text, &options)?;

        let out_path = output_dir.join(source.out_path());
        write_output(&out_path, &article.html).map_err(|err| BuildError::Write {
            path: out_path.clone(),
            source: err,
        })?;
        debug!(article = %source.path.display(), out = %out_path.display(), "wrote article");

        articles.push(article);
    }

    let titles: Vec<&str> = sources.iter().map(|source| source.title.as_str()).collect();
    info!(count = articles.len(), output = %output_dir.display(), ?titles, "built articles");
    Ok(articles)
}

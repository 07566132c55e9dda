pub mod article;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod escape;
pub mod inline;
pub mod markdown;
pub mod renderer;
pub mod scanner;
pub mod skill;
pub mod template;
pub mod theme;

// Re-export main types
pub use article::{Article, ArticleOptions, format_article, format_file};
pub use error::{ErrorKind, SkillError};
pub use inline::{Span, format_inline};
pub use markdown::{Block, BlockParser, Document, extract_title, parse_document};
pub use renderer::{RenderOptions, render_blocks};
pub use scanner::{ArticleScanner, BuildError, build_articles};
pub use skill::{ArticleRequest, ArticleResponse, run_article_skill};
pub use template::{TemplateError, TemplateRenderer};
pub use theme::{Theme, ThemeTokens};

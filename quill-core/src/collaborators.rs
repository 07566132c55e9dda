//! Request/response shapes for the external services an article workflow
//! leans on: media transforms, web search and slide decks.
//!
//! Implementations live outside this crate. Each trait method takes one
//! request and returns one response; a failed call is a response with
//! `success: false` and an `error` message, never an `Err`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::inline::plain_text;
use crate::markdown::{Block, extract_title_from_blocks};
use crate::theme::Theme;

/// Audio extraction, transcription, background removal, video clip/merge,
/// captioning, scoring and speech synthesis all use this envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MediaRequest {
    pub source: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub options: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MediaResponse {
    pub success: bool,
    #[serde(default)]
    pub outputs: Vec<PathBuf>,
    /// Seconds, when the artifact has a duration.
    pub duration: Option<f64>,
    /// Bytes, when known.
    pub size: Option<u64>,
    pub error: Option<String>,
}

pub trait MediaTransform {
    fn transform(&self, request: &MediaRequest) -> MediaResponse;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

pub trait WebSearch {
    /// Results in ranking order, at most `request.count` of them.
    fn search(&self, request: &SearchRequest) -> Vec<SearchResult>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlideOutline {
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeckRequest {
    pub outline: Vec<SlideOutline>,
    pub theme: Theme,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeckResponse {
    pub success: bool,
    pub output_path: Option<PathBuf>,
    pub slide_count: usize,
    pub error: Option<String>,
}

pub trait SlideDeckGenerator {
    fn generate(&self, request: &DeckRequest) -> DeckResponse;
}

/// Turn a parsed article into a slide outline.
///
/// Level 1 and 2 headings start a new slide. Paragraphs, list items and
/// quote lines under a heading become its bullets. Content that appears
/// before the first heading lands on a leading slide named after the
/// article title. Code blocks and rules are skipped.
pub fn outline_from_document(blocks: &[Block]) -> Vec<SlideOutline> {
    let mut slides: Vec<SlideOutline> = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } if *level <= 2 => {
                slides.push(SlideOutline {
                    title: text.clone(),
                    bullets: Vec::new(),
                });
            }
            Block::Heading { text, .. } => current(&mut slides, blocks).bullets.push(text.clone()),
            Block::Paragraph { content } => {
                current(&mut slides, blocks).bullets.push(plain_text(content));
            }
            Block::List { items: lines } | Block::Blockquote { lines } => {
                let slide = current(&mut slides, blocks);
                slide.bullets.extend(lines.iter().map(|line| plain_text(line)));
            }
            Block::CodeBlock { .. } | Block::HorizontalRule => {}
        }
    }

    slides
}

fn current<'a>(slides: &'a mut Vec<SlideOutline>, blocks: &[Block]) -> &'a mut SlideOutline {
    if slides.is_empty() {
        slides.push(SlideOutline {
            title: extract_title_from_blocks(blocks),
            bullets: Vec::new(),
        });
    }
    let last = slides.len() - 1;
    &mut slides[last]
}

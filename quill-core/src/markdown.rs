use crate::inline::{Span, format_inline};

pub const UNTITLED: &str = "Untitled";

const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading text is kept raw; it is escaped on render but never
    /// inline-formatted.
    Heading { level: u8, text: String },
    Paragraph { content: Vec<Span> },
    /// Unescaped fence body, lines joined with `\n`.
    CodeBlock { raw: String },
    Blockquote { lines: Vec<Vec<Span>> },
    List { items: Vec<Vec<Span>> },
    HorizontalRule,
}

pub type Document = Vec<Block>;

/// The one accumulator that may be open while lines are fed.
#[derive(Debug, Default)]
enum Context {
    #[default]
    None,
    CodeBlock(Vec<String>),
    Blockquote(Vec<Vec<Span>>),
    List(Vec<Vec<Span>>),
}

impl Context {
    fn into_block(self) -> Option<Block> {
        match self {
            Context::None => None,
            Context::CodeBlock(lines) => Some(Block::CodeBlock {
                raw: lines.join("\n"),
            }),
            Context::Blockquote(lines) => Some(Block::Blockquote { lines }),
            Context::List(items) => Some(Block::List { items }),
        }
    }
}

/// Line-at-a-time block recognizer.
///
/// Each call to [`BlockParser::feed`] returns the blocks completed by that
/// line, in document order. A line can complete two blocks at once: a
/// paragraph line first closes an open list or quote, then becomes its
/// own paragraph. Call [`BlockParser::finalize`] after the last line to
/// drain whatever is still open.
#[derive(Debug, Default)]
pub struct BlockParser {
    context: Context,
}

impl BlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, line: &str) -> Vec<Block> {
        let line = line.trim_end();
        let mut flushed = Vec::new();

        if line.starts_with(FENCE) {
            match std::mem::take(&mut self.context) {
                Context::CodeBlock(lines) => {
                    flushed.push(Block::CodeBlock {
                        raw: lines.join("\n"),
                    });
                }
                open => {
                    flushed.extend(open.into_block());
                    self.context = Context::CodeBlock(Vec::new());
                }
            }
            return flushed;
        }

        if let Context::CodeBlock(lines) = &mut self.context {
            lines.push(line.to_string());
            return flushed;
        }

        let blank = line.trim().is_empty();

        if let Some(quoted) = line.strip_prefix('>') {
            if !matches!(self.context, Context::Blockquote(_)) {
                flushed.extend(self.flush());
            }
            let content = format_inline(quoted.trim());
            match &mut self.context {
                Context::Blockquote(lines) => lines.push(content),
                _ => self.context = Context::Blockquote(vec![content]),
            }
            return flushed;
        }

        // Blank lines do not end a quote, they only end a list.
        let item = list_item(line);
        let closes = match self.context {
            Context::Blockquote(_) => !blank,
            Context::List(_) => item.is_none(),
            _ => false,
        };
        if closes {
            flushed.extend(self.flush());
        }

        if let Some(heading) = heading(line) {
            flushed.push(heading);
        } else if line.starts_with("---") {
            flushed.push(Block::HorizontalRule);
        } else if let Some(item) = item {
            let content = format_inline(item);
            match &mut self.context {
                Context::List(items) => items.push(content),
                _ => self.context = Context::List(vec![content]),
            }
        } else if !blank {
            flushed.push(Block::Paragraph {
                content: format_inline(line),
            });
        }

        flushed
    }

    /// Drain the open accumulator at end of input. An unterminated fence
    /// that never received a line yields nothing.
    pub fn finalize(self) -> Option<Block> {
        match self.context {
            Context::CodeBlock(lines) if lines.is_empty() => None,
            open => open.into_block(),
        }
    }

    fn flush(&mut self) -> Option<Block> {
        std::mem::take(&mut self.context).into_block()
    }
}

/// Split source text into lines with trailing whitespace (and `\r`) removed.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.split('\n').map(str::trim_end).collect()
}

pub fn parse_document(text: &str) -> Document {
    let mut parser = BlockParser::new();
    let mut blocks = Document::new();

    for line in normalize_lines(text) {
        blocks.extend(parser.feed(line));
    }
    blocks.extend(parser.finalize());

    blocks
}

/// Text of the first `# ` heading, or [`UNTITLED`].
pub fn extract_title(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Text of the first level 1 heading of an already parsed document.
pub fn extract_title_from_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .find_map(|block| match block {
            Block::Heading { level: 1, text } => Some(text.clone()),
            _ => None,
        })
        .unwrap_or_else(|| UNTITLED.to_string())
}

fn heading(line: &str) -> Option<Block> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }

    Some(Block::Heading {
        level: level as u8,
        text: line[level..].trim().to_string(),
    })
}

fn list_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(str::trim)
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A named bundle of colors, font and corner radius used by the document
/// template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub name: &'static str,
    pub font_family: &'static str,
    pub bg_color: &'static str,
    pub text_color: &'static str,
    pub link_color: &'static str,
    pub code_bg: &'static str,
    pub code_color: &'static str,
    pub blockquote_border: &'static str,
    pub header_color: &'static str,
    pub accent_color: &'static str,
    pub img_max_width: &'static str,
    pub border_radius: &'static str,
}

/// Deserializing never fails: unknown identifiers resolve to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    #[default]
    Elegant,
    Dark,
    Blue,
    Pink,
    Minimal,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Elegant,
        Theme::Dark,
        Theme::Blue,
        Theme::Pink,
        Theme::Minimal,
    ];

    /// Look a theme up by identifier, falling back to [`Theme::Elegant`].
    pub fn resolve(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            debug!(theme = id, "unknown theme, using default");
            Theme::default()
        })
    }

    pub fn id(self) -> &'static str {
        match self {
            Theme::Elegant => "elegant",
            Theme::Dark => "dark",
            Theme::Blue => "blue",
            Theme::Pink => "pink",
            Theme::Minimal => "minimal",
        }
    }

    pub fn tokens(self) -> ThemeTokens {
        match self {
            Theme::Elegant => ThemeTokens {
                name: "Elegant",
                font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', 'PingFang SC', 'Hiragino Sans GB', 'Microsoft YaHei', sans-serif",
                bg_color: "#ffffff",
                text_color: "#333333",
                link_color: "#57606a",
                code_bg: "#f6f8fa",
                code_color: "#24292e",
                blockquote_border: "#dfe2e5",
                header_color: "#1f2328",
                accent_color: "#0969da",
                img_max_width: "100%",
                border_radius: "8px",
            },
            Theme::Dark => ThemeTokens {
                name: "Dark",
                font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', 'PingFang SC', sans-serif",
                bg_color: "#1a1a1a",
                text_color: "#e0e0e0",
                link_color: "#8ab4f8",
                code_bg: "#2d2d2d",
                code_color: "#e0e0e0",
                blockquote_border: "#4a4a4a",
                header_color: "#ffffff",
                accent_color: "#58a6ff",
                img_max_width: "100%",
                border_radius: "8px",
            },
            Theme::Blue => ThemeTokens {
                name: "Blue",
                font_family: "-apple-system, BlinkMacSystemFont, 'PingFang SC', 'Microsoft YaHei', sans-serif",
                bg_color: "#f0f7ff",
                text_color: "#333333",
                link_color: "#0366d6",
                code_bg: "#e6f3ff",
                code_color: "#24292e",
                blockquote_border: "#79b8ff",
                header_color: "#0366d6",
                accent_color: "#0366d6",
                img_max_width: "100%",
                border_radius: "12px",
            },
            Theme::Pink => ThemeTokens {
                name: "Pink",
                font_family: "-apple-system, BlinkMacSystemFont, 'PingFang SC', 'Microsoft YaHei', sans-serif",
                bg_color: "#fff5f5",
                text_color: "#4a4a4a",
                link_color: "#e91e63",
                code_bg: "#fce4ec",
                code_color: "#880e4f",
                blockquote_border: "#f48fb1",
                header_color: "#c2185b",
                accent_color: "#e91e63",
                img_max_width: "100%",
                border_radius: "16px",
            },
            Theme::Minimal => ThemeTokens {
                name: "Minimal",
                font_family: "Georgia, 'Times New Roman', serif",
                bg_color: "#ffffff",
                text_color: "#222222",
                link_color: "#666666",
                code_bg: "#f9f9f9",
                code_color: "#666666",
                blockquote_border: "#dddddd",
                header_color: "#000000",
                accent_color: "#999999",
                img_max_width: "100%",
                border_radius: "4px",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.id() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

impl From<String> for Theme {
    fn from(id: String) -> Self {
        Theme::resolve(&id)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

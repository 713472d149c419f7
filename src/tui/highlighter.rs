//! Syntax highlighting for code results using syntect

use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use std::collections::HashMap;
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style as SyntectStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

// Only load from single thread once
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

/// Language the Code Assistant snippets are written in
pub const SNIPPET_EXTENSION: &str = "js";

/// syntect highlighter with a per-extension syntax cache
pub struct SyntaxHighlighter {
    syntax_cache: HashMap<String, &'static SyntaxReference>,
    theme: &'static Theme,
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let theme_set = THEME_SET.get_or_init(ThemeSet::load_defaults);
        let theme = &theme_set.themes["base16-ocean.dark"];

        Self {
            syntax_cache: HashMap::new(),
            theme,
        }
    }

    fn get_syntax_set() -> &'static SyntaxSet {
        SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
    }

    /// Get cached syntax reference for a given file extension
    fn get_cached_syntax(&mut self, extension: &str) -> Option<&'static SyntaxReference> {
        if let Some(cached_syntax) = self.syntax_cache.get(extension) {
            return Some(*cached_syntax);
        }

        let syntax = Self::get_syntax_set().find_syntax_by_extension(extension)?;
        self.syntax_cache.insert(extension.to_string(), syntax);
        Some(syntax)
    }

    /// Highlight a block of code, falling back to plain text for unknown languages
    pub fn highlight_text(&mut self, content: &str, extension: Option<&str>) -> Text<'static> {
        let Some(syntax) = extension.and_then(|ext| self.get_cached_syntax(ext)) else {
            return Text::from(content.to_string());
        };

        let mut highlighter = HighlightLines::new(syntax, self.theme);
        let syntax_set = Self::get_syntax_set();
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(content) {
            let highlights = highlighter
                .highlight_line(line, syntax_set)
                .unwrap_or_default();
            let spans: Vec<Span> = highlights
                .iter()
                .map(|(style, text)| {
                    // drop line endings, ratatui breaks lines itself
                    let text = text.trim_end_matches(['\n', '\r']);
                    Span::styled(text.to_string(), syntect_style_to_ratatui(*style))
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Text::from(lines)
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert syntect style to ratatui style
fn syntect_style_to_ratatui(style: SyntectStyle) -> Style {
    let fg_color = Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b);
    let mut ratatui_style = Style::default().fg(fg_color);

    if style.font_style.contains(FontStyle::BOLD) {
        ratatui_style = ratatui_style.bold();
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        ratatui_style = ratatui_style.italic();
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        ratatui_style = ratatui_style.underlined();
    }

    ratatui_style
}

//! Syntax highlighting of before/after code panes
//!
//! Whole blocks are highlighted at once (so multi-line constructs such as
//! block comments keep their state) and cached by path and content, since
//! the commit list is rendered on every frame.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Mutex, OnceLock};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

const THEME_NAME: &str = "base16-ocean.dark";

/// Blocks kept before the cache is dropped
const MAX_CACHED_BLOCKS: usize = 512;

pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
    cache: HashMap<u64, Vec<Line<'static>>>,
}

impl std::fmt::Debug for CodeHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeHighlighter")
            .field("cached_blocks", &self.cache_size())
            .finish()
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter {
    pub fn new() -> Self {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = theme_set.themes.remove(THEME_NAME).unwrap_or_default();

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            cache: HashMap::new(),
        }
    }

    /// Highlight `code` using the syntax for `path`'s extension
    ///
    /// Unknown extensions are shown as plain text. Tabs are expanded to four
    /// spaces and line endings are stripped.
    pub fn highlight_block(&mut self, path: &str, code: &str) -> Vec<Line<'static>> {
        let key = cache_key(path, code);
        if let Some(lines) = self.cache.get(&key) {
            return lines.clone();
        }

        let syntax = self.syntax_for(path);
        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut lines = Vec::new();

        for raw in LinesWithEndings::from(code) {
            let line = match highlighter.highlight_line(raw, &self.syntax_set) {
                Ok(ranges) => Line::from(
                    ranges
                        .into_iter()
                        .map(|(style, text)| Span::styled(clean(text), to_style(style)))
                        .collect::<Vec<_>>(),
                ),
                Err(e) => {
                    log::warn!("Highlighting {} failed: {}", path, e);
                    Line::raw(clean(raw))
                }
            };
            lines.push(line);
        }

        if self.cache.len() >= MAX_CACHED_BLOCKS {
            self.cache.clear();
        }
        self.cache.insert(key, lines.clone());
        lines
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn syntax_for(&self, path: &str) -> &SyntaxReference {
        let extension = std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        self.syntax_set
            .find_syntax_by_extension(extension)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

/// Highlight with the process-wide highlighter
pub fn highlight_block(path: &str, code: &str) -> Vec<Line<'static>> {
    static HIGHLIGHTER: OnceLock<Mutex<CodeHighlighter>> = OnceLock::new();

    let highlighter = HIGHLIGHTER.get_or_init(|| Mutex::new(CodeHighlighter::new()));
    let mut highlighter = highlighter
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    highlighter.highlight_block(path, code)
}

fn clean(text: &str) -> String {
    text.trim_end_matches(['\n', '\r']).replace('\t', "    ")
}

fn to_style(style: syntect::highlighting::Style) -> Style {
    let fg = style.foreground;
    let mut out = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    out
}

fn cache_key(path: &str, code: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    path.hash(&mut hasher);
    code.hash(&mut hasher);
    hasher.finish()
}

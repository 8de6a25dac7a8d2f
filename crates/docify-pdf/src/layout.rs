//! Page layout
//!
//! A cursor that places wrapped text lines, shaded blocks and rules onto
//! pages. Coordinates are in points measured from the top-left corner of the
//! page; `y` of a text run is its baseline. Pages are only started when the
//! next line would cross the bottom margin.

use crate::style::{PageGeometry, Rgb, TextStyle, RULE};

/// Distance between a baseline and the bottom edge of its shading
const SHADE_DESCENT: f32 = 4.0;

/// Gap above a separator rule
const RULE_GAP: f32 = 6.0;

/// One line of text at a fixed position
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub style: TextStyle,
}

/// A filled rectangle drawn behind text
#[derive(Debug, Clone, PartialEq)]
pub struct Shade {
    pub x: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
}

impl Shade {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// A horizontal line
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub color: Rgb,
}

/// Everything placed on one page; shades are painted first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub shades: Vec<Shade>,
    pub rules: Vec<Rule>,
    pub texts: Vec<TextRun>,
}

/// Layout cursor
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    geometry: PageGeometry,
    pages: Vec<Page>,
    y: f32,
}

impl DocumentLayout {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Page::default()],
            y: geometry.margin,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Current baseline position on the last page
    pub fn cursor(&self) -> f32 {
        self.y
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    /// Wrap `text` and place it line by line, `indent` points from the margin
    ///
    /// Returns the number of lines placed.
    pub fn add_text(&mut self, text: &str, style: TextStyle, indent: f32) -> usize {
        let lines = wrap_text(text, self.geometry.chars_per_line(indent));
        let count = lines.len();
        for line in lines {
            self.place_line(line, style, indent);
        }
        count
    }

    /// Place `label` followed by `body` on a shaded background
    ///
    /// Text starts at `text_indent`; the shading starts at `shade_indent`
    /// and extends to the right margin. The shading is computed from the
    /// lines actually placed, one rectangle per page the block occupies.
    pub fn add_shaded_block(
        &mut self,
        label: &str,
        body: &str,
        style: TextStyle,
        text_indent: f32,
        shade_indent: f32,
        shade: Rgb,
    ) -> usize {
        let width = self.geometry.chars_per_line(text_indent);
        let mut lines = wrap_text(label, width);
        lines.extend(wrap_text(body, width));

        let count = lines.len();
        let mut current_page = None;
        for line in lines {
            self.ensure_room();
            let page_index = self.pages.len() - 1;
            let top = self.y - self.geometry.line_height + SHADE_DESCENT;

            if current_page != Some(page_index) {
                current_page = Some(page_index);
                let x = self.geometry.margin + shade_indent;
                let width = self.geometry.width - self.geometry.margin - x;
                self.current_page().shades.push(Shade {
                    x,
                    top,
                    width,
                    height: 0.0,
                    color: shade,
                });
            }

            let line_height = self.geometry.line_height;
            if let Some(rect) = self.current_page().shades.last_mut() {
                rect.height = top + line_height - rect.top;
            }
            self.place_line(line, style, text_indent);
        }
        count
    }

    /// Horizontal rule across the usable width, with spacing around it
    ///
    /// A rule that would land in the bottom margin starts the next page.
    pub fn add_separator(&mut self) {
        if self.y + RULE_GAP > self.geometry.bottom_limit() {
            self.new_page();
        }
        self.y += RULE_GAP;
        let rule = Rule {
            x1: self.geometry.margin,
            x2: self.geometry.width - self.geometry.margin,
            y: self.y,
            color: RULE,
        };
        self.current_page().rules.push(rule);
        self.y += self.geometry.section_spacing;
    }

    pub fn add_space(&mut self, points: f32) {
        self.y += points;
    }

    pub fn add_section_spacing(&mut self) {
        self.y += self.geometry.section_spacing;
    }

    fn place_line(&mut self, text: String, style: TextStyle, indent: f32) {
        self.ensure_room();
        let run = TextRun {
            x: self.geometry.margin + indent,
            y: self.y,
            text,
            style,
        };
        self.current_page().texts.push(run);
        self.y += self.geometry.line_height;
    }

    fn ensure_room(&mut self) {
        if self.y + self.geometry.line_height > self.geometry.bottom_limit() {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = self.geometry.margin;
    }

    fn current_page(&mut self) -> &mut Page {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

/// Replace characters the built-in PDF fonts cannot encode
///
/// Tabs become four spaces, carriage returns are dropped and anything outside
/// printable Latin-1 becomes `?`.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push_str("    "),
            '\r' => {}
            '\n' | ' '..='~' | '\u{A0}'..='\u{FF}' => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Split `text` into lines of at most `max_chars` characters
///
/// Explicit newlines are kept, empty paragraphs yield empty lines. Long lines
/// break after the last space that fits, or mid-word when there is none.
/// Concatenating the lines of a paragraph gives back the paragraph.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let text = sanitize(text);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let chars: Vec<char> = paragraph.chars().collect();
        let mut start = 0;

        while chars.len() - start > max_chars {
            let end = start + max_chars;
            let split = (start + 1..end)
                .rev()
                .find(|&i| chars[i] == ' ')
                .map(|i| i + 1)
                .unwrap_or(end);
            lines.push(chars[start..split].iter().collect());
            start = split;
        }
        lines.push(chars[start..].iter().collect());
    }

    lines
}

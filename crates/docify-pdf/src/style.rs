//! Colours, weights and page geometry

/// An sRGB colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Channels scaled to `0.0..=1.0`
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
pub const HEADING: Rgb = Rgb(0x1F, 0x4E, 0x79);
pub const BODY: Rgb = Rgb(0x33, 0x33, 0x33);
pub const ACCENT: Rgb = Rgb(0xC0, 0x00, 0x00);
pub const MUTED: Rgb = Rgb(0x4B, 0x4B, 0x4B);
pub const FILE: Rgb = Rgb(0x00, 0x79, 0x6B);
pub const WARNING: Rgb = Rgb(0xB0, 0x00, 0x20);
pub const SUCCESS: Rgb = Rgb(0x00, 0x64, 0x00);

pub const SHADE_BEFORE: Rgb = Rgb(240, 240, 240);
pub const SHADE_AFTER: Rgb = Rgb(230, 255, 230);
pub const RULE: Rgb = Rgb(180, 180, 180);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub weight: Weight,
    pub color: Rgb,
}

impl TextStyle {
    pub const fn regular(color: Rgb) -> Self {
        Self {
            weight: Weight::Regular,
            color,
        }
    }

    pub const fn bold(color: Rgb) -> Self {
        Self {
            weight: Weight::Bold,
            color,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::regular(BLACK)
    }
}

/// Page dimensions and spacing, all in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub line_height: f32,
    pub section_spacing: f32,
    pub indent: f32,
    pub font_size: f32,
}

/// Advance of every Courier glyph as a fraction of the font size
const COURIER_ADVANCE: f32 = 0.6;

impl PageGeometry {
    /// A4 portrait
    pub const fn a4() -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            margin: 20.0,
            line_height: 16.0,
            section_spacing: 12.0,
            indent: 10.0,
            font_size: 10.0,
        }
    }

    /// Width between the left and right margins
    pub fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn char_width(&self) -> f32 {
        self.font_size * COURIER_ADVANCE
    }

    /// Characters that fit on a line starting `indent` points in
    pub fn chars_per_line(&self, indent: f32) -> usize {
        let chars = ((self.usable_width() - indent) / self.char_width()).floor();
        (chars as usize).max(1)
    }

    /// Lowest baseline a line may use
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

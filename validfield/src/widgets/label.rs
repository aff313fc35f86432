//! Status message shown under a validated field.

use bordered::{Buffer, Color, Rect};
use unicode_width::UnicodeWidthStr;

/// Font metrics the label needs for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub line_height: f32,
}

impl Font {
    pub const fn new(size: f32, line_height: f32) -> Self {
        Self { size, line_height }
    }

    /// A system-style font whose line height is 1.2× its size.
    pub fn system(size: f32) -> Self {
        Self {
            size,
            line_height: size * 1.2,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(17.0)
    }
}

/// A single-line text display with its own frame and visibility.
#[derive(Debug, Clone)]
pub struct MessageLabel {
    text: Option<String>,
    hidden: bool,
    color: Color,
    frame: Rect,
    font: Font,
}

impl MessageLabel {
    /// A hidden, empty label.
    pub fn new(font: Font) -> Self {
        Self {
            text: None,
            hidden: true,
            color: Color::default(),
            frame: Rect::default(),
            font,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        self.text = text.map(str::to_string);
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Place the label `gap` units below `anchor`, matching its x and width.
    /// Height is one line of the current font.
    pub fn place_below(&mut self, anchor: Rect, gap: f32) {
        self.frame = Rect::new(
            anchor.x,
            anchor.bottom() + gap,
            anchor.width,
            self.font.line_height,
        );
    }

    /// Draw the text into `buf`, centered within the label's frame.
    pub fn rasterize(&self, buf: &mut Buffer) {
        let Some(text) = self.text.as_deref() else {
            return;
        };
        if self.hidden || self.frame.is_empty() {
            return;
        }

        let x = self.frame.x.max(0.0).floor() as u16;
        let y = self.frame.y.max(0.0).floor() as u16;
        let available = self.frame.width.max(0.0).floor() as u16;
        let used = text.width().min(available as usize) as u16;

        let pad = (available - used) / 2;

        buf.put_str(x.saturating_add(pad), y, text, self.color.to_rgb(), available - pad);
    }
}

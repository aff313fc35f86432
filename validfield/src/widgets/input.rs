//! Text input with a colored border.

use bordered::{BorderSpec, Buffer, Color, Rect, Surface};

/// A text input drawn on a [`Surface`] with a [`BorderSpec`].
///
/// The border is applied on construction and again whenever its color or
/// the input's frame changes.
#[derive(Debug, Clone)]
pub struct BorderedInput {
    surface: Surface,
    border: BorderSpec,
    text: String,
}

impl BorderedInput {
    pub fn new(frame: Rect, border: BorderSpec) -> Self {
        let mut surface = Surface::new(frame);
        surface.apply_border(&border);
        Self {
            surface,
            border,
            text: String::new(),
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn frame(&self) -> Rect {
        self.surface.frame()
    }

    /// Move or resize the input and redraw the border for the new bounds.
    pub fn set_frame(&mut self, frame: Rect) {
        self.surface.set_frame(frame);
        self.paint();
    }

    pub fn border(&self) -> &BorderSpec {
        &self.border
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border.color = color;
        self.paint();
    }

    /// Re-apply the current border to the surface.
    pub fn paint(&mut self) {
        self.surface.apply_border(&self.border);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Draw the border overlays and the text into `buf`.
    pub fn rasterize(&self, buf: &mut Buffer) {
        self.surface.rasterize(buf);

        let frame = self.frame();
        let inset = self.border.width.max(0.0).ceil();
        let x = (frame.x + inset).max(0.0).floor() as u16;
        let y = (frame.y + (frame.height / 2.0).floor()).max(0.0) as u16;
        let width = (frame.width - inset * 2.0).max(0.0).floor() as u16;

        let fg = buf.get(x, y).map(|cell| cell.fg).unwrap_or_default();
        buf.put_str(x, y, &self.text, fg, width);
    }
}

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::overlay::{BorderSpec, OverlayChange, OverlayLayers};

/// A rectangular surface that carries edge overlays.
///
/// Overlay frames are kept in the surface's local space (origin at its
/// top-left corner), the way child layers sit inside their parent.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    frame: Rect,
    overlays: OverlayLayers,
}

impl Surface {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            overlays: OverlayLayers::new(),
        }
    }

    /// Frame of the surface in its parent's space.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Resize or move the surface.
    ///
    /// Overlays keep their old geometry until the border is applied again.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn bounds(&self) -> Rect {
        self.frame.bounds()
    }

    pub fn apply_border(&mut self, spec: &BorderSpec) -> Vec<OverlayChange> {
        self.overlays.apply_border(self.bounds(), spec)
    }

    pub fn overlays(&self) -> &OverlayLayers {
        &self.overlays
    }

    /// Paint every overlay into `buf`, translated into the parent's space.
    pub fn rasterize(&self, buf: &mut Buffer) {
        for overlay in self.overlays.iter() {
            let rect = overlay.frame.offset(self.frame.x, self.frame.y);
            buf.fill_rect(rect, overlay.color.to_rgb());
        }
    }
}

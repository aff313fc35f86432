//! Edge overlays: thin colored strips laid over a surface to draw a border.
//!
//! A surface holds at most one overlay per [`Edge`]. Applying a border finds
//! the overlay for each requested edge and refreshes it in place, creating it
//! only the first time. Overlays for edges that are later dropped from the
//! spec stay where they are.

use log::trace;

use crate::layout::Rect;
use crate::types::{Color, Edge, EdgeSet};

/// Color, width, and edges of a border.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSpec {
    pub color: Color,
    pub width: f32,
    pub edges: EdgeSet,
}

impl BorderSpec {
    pub fn new(color: Color, edges: EdgeSet, width: f32) -> Self {
        Self {
            color,
            width,
            edges,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A single edge strip.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeOverlay {
    pub edge: Edge,
    pub frame: Rect,
    pub color: Color,
    pub width: f32,
}

impl EdgeOverlay {
    /// Stable layer name for this overlay.
    pub fn tag(&self) -> &'static str {
        self.edge.tag()
    }
}

/// Whether an overlay was created or refreshed by the last apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayChange {
    Created(Edge),
    Updated(Edge),
}

/// Fixed table of overlays, one slot per edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayLayers {
    slots: [Option<EdgeOverlay>; 4],
}

impl OverlayLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `spec` to a surface with the given bounds.
    ///
    /// Every edge in `spec.edges` gets its frame recomputed and its color and
    /// width refreshed. Edges outside `spec.edges` are left untouched.
    pub fn apply_border(&mut self, bounds: Rect, spec: &BorderSpec) -> Vec<OverlayChange> {
        let mut changes = Vec::new();

        for edge in spec.edges.iter() {
            let frame = edge.frame(bounds, spec.width);
            let slot = &mut self.slots[edge.slot()];

            match slot.as_mut() {
                Some(overlay) => {
                    overlay.frame = frame;
                    overlay.color = spec.color.clone();
                    overlay.width = spec.width;
                    trace!("updated overlay {} frame={:?}", edge.tag(), frame);
                    changes.push(OverlayChange::Updated(edge));
                }
                None => {
                    *slot = Some(EdgeOverlay {
                        edge,
                        frame,
                        color: spec.color.clone(),
                        width: spec.width,
                    });
                    trace!("created overlay {} frame={:?}", edge.tag(), frame);
                    changes.push(OverlayChange::Created(edge));
                }
            }
        }

        changes
    }

    pub fn get(&self, edge: Edge) -> Option<&EdgeOverlay> {
        self.slots[edge.slot()].as_ref()
    }

    /// Look an overlay up by its layer name.
    pub fn find(&self, tag: &str) -> Option<&EdgeOverlay> {
        self.iter().find(|overlay| overlay.tag() == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeOverlay> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

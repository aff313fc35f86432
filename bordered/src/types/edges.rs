use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::error::BorderError;
use crate::layout::Rect;

/// One side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Every edge, in the order overlays are applied.
    pub const ALL: [Edge; 4] = [Edge::Bottom, Edge::Left, Edge::Right, Edge::Top];

    /// Stable name of the overlay layer that paints this edge.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Top => "border-overlay.top",
            Self::Bottom => "border-overlay.bottom",
            Self::Left => "border-overlay.left",
            Self::Right => "border-overlay.right",
        }
    }

    /// Slot of this edge in a fixed four-entry table.
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Frame of a `width`-thick strip along this edge of `bounds`.
    pub fn frame(self, bounds: Rect, width: f32) -> Rect {
        let Rect { x, y, width: w, height: h } = bounds;
        match self {
            Self::Top => Rect::new(x, y, w, width),
            Self::Bottom => Rect::new(x, y + h - width, w, width),
            Self::Left => Rect::new(x, y, width, h),
            Self::Right => Rect::new(x + w - width, y, width, h),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// A set of edges. Any combination may be active at once.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeSet(u8);

impl EdgeSet {
    pub const NONE: Self = Self(0);
    pub const TOP: Self = Self(1);
    pub const BOTTOM: Self = Self(2);
    pub const LEFT: Self = Self(4);
    pub const RIGHT: Self = Self(8);
    pub const ALL: Self = Self(15);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a set from raw bits. Bits outside the four edges are kept so
    /// that a malformed value is reported rather than silently masked.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn has(self, edge: Edge) -> bool {
        self.contains(Self::from_edge(edge))
    }

    pub const fn from_edge(edge: Edge) -> Self {
        match edge {
            Edge::Top => Self::TOP,
            Edge::Bottom => Self::BOTTOM,
            Edge::Left => Self::LEFT,
            Edge::Right => Self::RIGHT,
        }
    }

    pub const fn insert(mut self, edge: Edge) -> Self {
        self.0 |= Self::from_edge(edge).0;
        self
    }

    pub const fn remove(mut self, edge: Edge) -> Self {
        self.0 &= !Self::from_edge(edge).0;
        self
    }

    /// Edges in this set, in application order.
    pub fn iter(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |edge| self.has(*edge))
    }

    /// The single edge this set names, if it names exactly one.
    pub fn as_edge(self) -> Option<Edge> {
        match self {
            Self::TOP => Some(Edge::Top),
            Self::BOTTOM => Some(Edge::Bottom),
            Self::LEFT => Some(Edge::Left),
            Self::RIGHT => Some(Edge::Right),
            _ => None,
        }
    }

    /// Frame for a set that names exactly one edge.
    ///
    /// Unions such as [`EdgeSet::ALL`], the empty set, and stray bits have no
    /// single frame and are rejected.
    pub fn frame(self, bounds: Rect, width: f32) -> Result<Rect, BorderError> {
        self.as_edge()
            .map(|edge| edge.frame(bounds, width))
            .ok_or(BorderError::UnsupportedEdge(self))
    }
}

impl From<Edge> for EdgeSet {
    fn from(edge: Edge) -> Self {
        Self::from_edge(edge)
    }
}

impl BitOr for EdgeSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Edge> for EdgeSet {
    type Output = Self;

    fn bitor(self, rhs: Edge) -> Self {
        self.insert(rhs)
    }
}

impl BitOrAssign for EdgeSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for EdgeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ALL {
            return f.write_str("EdgeSet(all)");
        }
        let names: Vec<String> = self.iter().map(|edge| edge.to_string()).collect();
        if self.0 & !Self::ALL.0 != 0 {
            write!(f, "EdgeSet({:#06b})", self.0)
        } else {
            write!(f, "EdgeSet({})", names.join(" | "))
        }
    }
}

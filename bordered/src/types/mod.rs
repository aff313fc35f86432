mod color;
mod edges;

pub use color::{Color, Rgb};
pub use edges::{Edge, EdgeSet};

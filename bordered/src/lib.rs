//! Colored edge overlays for rectangular surfaces.
//!
//! A [`Surface`] carries up to four [`EdgeOverlay`]s, one per [`Edge`].
//! [`Surface::apply_border`] creates them on first use and refreshes them in
//! place afterwards, so repeated application never duplicates an overlay.

pub mod buffer;
pub mod error;
pub mod layout;
pub mod overlay;
pub mod surface;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use error::BorderError;
pub use layout::Rect;
pub use overlay::{BorderSpec, EdgeOverlay, OverlayChange, OverlayLayers};
pub use surface::Surface;
pub use types::*;

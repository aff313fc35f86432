use thiserror::Error;

use crate::types::EdgeSet;

/// Errors raised by border geometry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BorderError {
    /// A frame was requested for something other than a single edge.
    ///
    /// This is a caller bug: overlay application only ever asks for the
    /// four concrete edges.
    #[error("border direction {0:?} is not supported")]
    UnsupportedEdge(EdgeSet),
}

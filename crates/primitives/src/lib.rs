//! Core types shared by the workspace: identifiers, geometry, and refresh policy.

/// Container dimensions.
pub mod geometry;
/// Identifier types for documents, panes, and views.
pub mod ids;
/// Layout refresh policy.
pub mod refresh;

pub use geometry::Size;
pub use ids::{DocumentId, PaneId, ViewId};
pub use refresh::RefreshMode;

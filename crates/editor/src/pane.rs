//! Pane capability consumed by the editor registry.

use paneview_primitives::PaneId;

use crate::view::ViewHandle;

/// A host container that displays one current view at a time.
///
/// The registry never owns panes. Both methods are fire-and-forget.
pub trait Pane<V> {
	/// Returns this pane's identifier.
	fn id(&self) -> PaneId;

	/// Installs `view` under `view_id`, making it the pane's current view.
	fn add_view(&mut self, view_id: &str, view: ViewHandle<V>);

	/// Brings an already installed view to the front without re-adding it.
	fn show_view(&mut self, view: &ViewHandle<V>);
}

//! Editor view capabilities.
//!
//! The workspace never renders. It drives views through [`EditorView`], shares
//! them through [`ViewHandle`], and delegates construction to a [`ViewFactory`].


use std::fmt;
use std::sync::Arc;

use paneview_primitives::{DocumentId, PaneId, ViewId};
use parking_lot::RwLock;

use crate::document::DocumentRef;

/// Opaque per-document view state (scroll, cursor, folds).
///
/// The workspace stores and hands it back; only views interpret it.
pub type ViewState = serde_json::Value;

/// A live editing view bound to one document.
pub trait EditorView {
	/// Returns the document this view is bound to.
	fn document(&self) -> DocumentId;

	/// Re-measures and redraws the whole view.
	fn refresh_all(&mut self);

	/// Captures the view's current state for caching, if it has any.
	fn view_state(&self) -> Option<ViewState> {
		None
	}

	/// Applies previously cached state to a freshly created view.
	fn restore_view_state(&mut self, _state: &ViewState) {}
}

/// Constructs views for documents on behalf of the editor registry.
///
/// Any closure `FnMut(&DocumentRef, PaneId) -> Result<V, E>` is a factory.
pub trait ViewFactory {
	/// The view type this factory produces.
	type View: EditorView;
	/// Construction failure, propagated unchanged to the caller of `open_document`.
	type Error;

	/// Creates a view bound to `document` for display in `pane`.
	fn create_view(&mut self, document: &DocumentRef, pane: PaneId) -> Result<Self::View, Self::Error>;
}

impl<V, E, F> ViewFactory for F
where
	V: EditorView,
	F: FnMut(&DocumentRef, PaneId) -> Result<V, E>,
{
	type View = V;
	type Error = E;

	fn create_view(&mut self, document: &DocumentRef, pane: PaneId) -> Result<V, E> {
		self(document, pane)
	}
}

/// Shared handle to a live view.
///
/// Clones refer to the same view instance; compare instances with [`Self::ptr_eq`].
pub struct ViewHandle<V> {
	id: ViewId,
	view: Arc<RwLock<V>>,
}

impl<V> ViewHandle<V> {
	pub(crate) fn new(id: ViewId, view: V) -> Self {
		Self {
			id,
			view: Arc::new(RwLock::new(view)),
		}
	}

	/// Returns the workspace-unique id of this view.
	pub fn id(&self) -> ViewId {
		self.id
	}

	/// Runs `f` with shared access to the view.
	pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
		let guard = self.view.read();
		f(&guard)
	}

	/// Runs `f` with exclusive access to the view.
	pub fn with_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
		let mut guard = self.view.write();
		f(&mut guard)
	}

	/// Returns `true` if both handles refer to the same view instance.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.view, &other.view)
	}
}

impl<V> Clone for ViewHandle<V> {
	fn clone(&self) -> Self {
		Self {
			id: self.id,
			view: Arc::clone(&self.view),
		}
	}
}

impl<V> fmt::Debug for ViewHandle<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ViewHandle")
			.field("id", &self.id)
			.field("ptr", &Arc::as_ptr(&self.view))
			.finish()
	}
}

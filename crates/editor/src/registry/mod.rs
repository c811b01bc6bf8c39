//! Document-to-view binding per pane.
//!
//! [`EditorRegistry`] owns the mapping from `(document, pane)` to a live view.
//! It creates a view the first time a document is opened in a pane, reuses it on
//! every later open, installs it through the [`Pane`] capability, and tracks the
//! current editor.
//!
//! # Invariants
//!
//! - At most one live view per `(document, pane)`.
//! - Reopening shows *and* re-adds the existing view; it never constructs.
//! - A failed construction leaves the registry and the pane untouched.

mod listeners;

#[cfg(test)]
mod invariants;

pub use listeners::{ActiveEditorChange, ActiveEditorListeners, Subscription};
use paneview_primitives::{DocumentId, PaneId, ViewId};
use rustc_hash::FxHashMap;

use crate::document::DocumentRef;
use crate::pane::Pane;
use crate::view::{EditorView, ViewFactory, ViewHandle};
use crate::view_state::ViewStateCache;

/// Owns live editor views keyed by document and pane.
pub struct EditorRegistry<F: ViewFactory> {
	/// Constructs views on first open.
	factory: F,
	/// Live views keyed by `(document, pane)`.
	editors: FxHashMap<(DocumentId, PaneId), ViewHandle<F::View>>,
	/// Counter for generating unique view IDs.
	next_view_id: u64,
	/// The editor most recently opened or focused.
	current: Option<ViewHandle<F::View>>,
	/// Notified whenever `current` changes.
	listeners: ActiveEditorListeners<F::View>,
}

impl<F: ViewFactory> EditorRegistry<F> {
	/// Creates an empty registry that builds views with `factory`.
	pub fn new(factory: F) -> Self {
		Self {
			factory,
			editors: FxHashMap::default(),
			next_view_id: 1,
			current: None,
			listeners: ActiveEditorListeners::default(),
		}
	}

	/// Returns the view factory.
	pub fn factory(&self) -> &F {
		&self.factory
	}

	/// Opens `document` in `pane`, creating its view on first use.
	///
	/// Reuse path: `pane.show_view` then `pane.add_view` with the existing view.
	/// Creation path: construct, restore cached state from `restore_from` when
	/// given, then `pane.add_view`. Either way the opened view becomes current.
	///
	/// # Errors
	///
	/// Returns the factory's error unchanged if construction fails.
	pub fn open_document<P>(
		&mut self,
		document: &DocumentRef,
		pane: &mut P,
		restore_from: Option<&ViewStateCache>,
	) -> Result<ViewHandle<F::View>, F::Error>
	where
		P: Pane<F::View> + ?Sized,
	{
		let pane_id = pane.id();
		let key = (document.id, pane_id);

		let handle = if let Some(existing) = self.editors.get(&key) {
			let existing = existing.clone();
			tracing::trace!(document = ?document.id, pane = ?pane_id, view = %existing.id(), "Reusing editor");
			pane.show_view(&existing);
			pane.add_view(&existing.id().to_string(), existing.clone());
			existing
		} else {
			let view = self.factory.create_view(document, pane_id)?;
			if view.document() != document.id {
				tracing::warn!(document = ?document.id, bound = ?view.document(), "Factory bound view to another document");
			}

			let handle = ViewHandle::new(self.alloc_view_id(), view);
			if let Some(state) = restore_from.and_then(|cache| cache.get_view_state(&document.view_state_key())) {
				handle.with_mut(|v| v.restore_view_state(state));
			}
			tracing::debug!(document = ?document.id, pane = ?pane_id, view = %handle.id(), "Created editor");

			self.editors.insert(key, handle.clone());
			pane.add_view(&handle.id().to_string(), handle.clone());
			handle
		};

		self.set_current_handle(Some(handle.clone()));
		Ok(handle)
	}

	/// Tracks a view the host constructed itself, as if it had been opened.
	///
	/// Replaces any view already tracked for the pair. Does not touch the pane.
	/// The current editor only changes when it is the view being replaced; the
	/// replacement then becomes current.
	pub fn register_editor(&mut self, document: DocumentId, pane: PaneId, view: F::View) -> ViewHandle<F::View> {
		let handle = ViewHandle::new(self.alloc_view_id(), view);
		if let Some(replaced) = self.editors.insert((document, pane), handle.clone()) {
			tracing::warn!(?document, ?pane, view = %replaced.id(), "Replaced tracked editor");
			if self.current.as_ref().is_some_and(|current| current.ptr_eq(&replaced)) {
				self.set_current_handle(Some(handle.clone()));
			}
		}
		handle
	}

	/// Returns the view tracked for `(document, pane)`.
	pub fn editor_for(&self, document: DocumentId, pane: PaneId) -> Option<&ViewHandle<F::View>> {
		self.editors.get(&(document, pane))
	}

	/// Returns every view of `document` across panes, ordered by pane.
	pub fn editors_for_document(&self, document: DocumentId) -> Vec<(PaneId, &ViewHandle<F::View>)> {
		let mut found: Vec<_> = self
			.editors
			.iter()
			.filter(|((doc, _), _)| *doc == document)
			.map(|((_, pane), view)| (*pane, view))
			.collect();
		found.sort_by_key(|(pane, _)| *pane);
		found
	}

	/// Returns the number of live views.
	pub fn len(&self) -> usize {
		self.editors.len()
	}

	/// Returns `true` if no view is tracked.
	pub fn is_empty(&self) -> bool {
		self.editors.is_empty()
	}

	/// Returns the current editor, if any.
	pub fn current_editor(&self) -> Option<&ViewHandle<F::View>> {
		self.current.as_ref()
	}

	/// Makes the view tracked for `(document, pane)` current.
	///
	/// Returns `false` if no view is tracked for the pair.
	pub fn set_current(&mut self, document: DocumentId, pane: PaneId) -> bool {
		match self.editors.get(&(document, pane)).cloned() {
			Some(handle) => {
				self.set_current_handle(Some(handle));
				true
			}
			None => false,
		}
	}

	/// Stops tracking the view for `(document, pane)` and returns it.
	///
	/// When `save_into` is given, the view's state is cached under the document's
	/// key first. Closing the current editor leaves no editor current.
	pub fn close_editor(
		&mut self,
		document: &DocumentRef,
		pane: PaneId,
		save_into: Option<&mut ViewStateCache>,
	) -> Option<ViewHandle<F::View>> {
		let handle = self.editors.remove(&(document.id, pane))?;
		if let Some(cache) = save_into
			&& let Some(state) = handle.with(|v| v.view_state())
		{
			cache.add_view_states([(document.view_state_key(), state)]);
		}
		tracing::debug!(document = ?document.id, ?pane, view = %handle.id(), "Closed editor");

		if self.current.as_ref().is_some_and(|current| current.ptr_eq(&handle)) {
			self.set_current_handle(None);
		}
		Some(handle)
	}

	/// Closes every view of `document`. Returns how many were closed.
	pub fn close_document(&mut self, document: &DocumentRef, mut save_into: Option<&mut ViewStateCache>) -> usize {
		let panes: Vec<PaneId> = self
			.editors_for_document(document.id)
			.into_iter()
			.map(|(pane, _)| pane)
			.collect();
		panes
			.into_iter()
			.filter(|pane| self.close_editor(document, *pane, save_into.as_deref_mut()).is_some())
			.count()
	}

	/// Returns the active-editor listeners.
	pub fn listeners_mut(&mut self) -> &mut ActiveEditorListeners<F::View> {
		&mut self.listeners
	}

	fn alloc_view_id(&mut self) -> ViewId {
		let id = ViewId(self.next_view_id);
		self.next_view_id += 1;
		id
	}

	/// Replaces the current editor and notifies listeners if it changed.
	fn set_current_handle(&mut self, next: Option<ViewHandle<F::View>>) {
		let unchanged = match (&self.current, &next) {
			(Some(a), Some(b)) => a.ptr_eq(b),
			(None, None) => true,
			_ => false,
		};
		if unchanged {
			return;
		}

		let previous = std::mem::replace(&mut self.current, next);
		tracing::trace!(
			current = ?self.current.as_ref().map(ViewHandle::id),
			previous = ?previous.as_ref().map(ViewHandle::id),
			"Active editor changed"
		);
		let change = ActiveEditorChange {
			current: self.current.as_ref(),
			previous: previous.as_ref(),
		};
		self.listeners.notify(&change);
	}
}

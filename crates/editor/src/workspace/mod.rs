//! The workspace context: one registry, one view-state cache, one layout
//! controller, and their configuration.
//!
//! Everything that would otherwise be process-wide lives here, so a host (or a
//! test) controls its lifetime and resets it explicitly.


use paneview_primitives::{DocumentId, PaneId, RefreshMode, Size};

use crate::config::WorkspaceConfig;
use crate::document::DocumentRef;
use crate::layout::{LayoutRecompute, LayoutRefreshController};
use crate::pane::Pane;
use crate::registry::{ActiveEditorChange, EditorRegistry, Subscription};
use crate::view::{ViewFactory, ViewHandle, ViewState};
use crate::view_state::ViewStateCache;

/// Owned coordination state for one editing session.
pub struct Workspace<F: ViewFactory> {
	config: WorkspaceConfig,
	editors: EditorRegistry<F>,
	view_states: ViewStateCache,
	layout: LayoutRefreshController,
}

impl<F: ViewFactory> Workspace<F> {
	/// Creates a workspace with default configuration.
	pub fn new(factory: F) -> Self {
		Self::with_config(factory, WorkspaceConfig::default())
	}

	/// Creates a workspace with `config`.
	pub fn with_config(factory: F, config: WorkspaceConfig) -> Self {
		Self {
			config,
			editors: EditorRegistry::new(factory),
			view_states: ViewStateCache::new(),
			layout: LayoutRefreshController::new(),
		}
	}

	/// Returns the configuration.
	pub fn config(&self) -> &WorkspaceConfig {
		&self.config
	}

	/// Returns the editor registry.
	pub fn editors(&self) -> &EditorRegistry<F> {
		&self.editors
	}

	/// Returns the view-state cache.
	pub fn view_states(&self) -> &ViewStateCache {
		&self.view_states
	}

	/// Opens `document` in `pane`, reusing the pane's existing view for it.
	///
	/// # Errors
	///
	/// Returns the view factory's error unchanged.
	pub fn open_document<P>(&mut self, document: &DocumentRef, pane: &mut P) -> Result<ViewHandle<F::View>, F::Error>
	where
		P: Pane<F::View> + ?Sized,
	{
		let restore_from = self.config.restore_view_state.then_some(&self.view_states);
		self.editors.open_document(document, pane, restore_from)
	}

	/// Tracks a view constructed by the host for `(document, pane)`.
	pub fn register_editor(&mut self, document: DocumentId, pane: PaneId, view: F::View) -> ViewHandle<F::View> {
		self.editors.register_editor(document, pane, view)
	}

	/// Returns the current editor, if any.
	pub fn current_editor(&self) -> Option<&ViewHandle<F::View>> {
		self.editors.current_editor()
	}

	/// Makes the tracked view for `(document, pane)` current.
	pub fn set_current_editor(&mut self, document: DocumentId, pane: PaneId) -> bool {
		self.editors.set_current(document, pane)
	}

	/// Closes the editor for `(document, pane)`, caching its state if configured.
	pub fn close_editor(&mut self, document: &DocumentRef, pane: PaneId) -> Option<ViewHandle<F::View>> {
		let save_into = self.config.save_view_state_on_close.then_some(&mut self.view_states);
		self.editors.close_editor(document, pane, save_into)
	}

	/// Closes every editor of `document`. Returns how many were closed.
	pub fn close_document(&mut self, document: &DocumentRef) -> usize {
		let save_into = self.config.save_view_state_on_close.then_some(&mut self.view_states);
		self.editors.close_document(document, save_into)
	}

	/// Registers a listener for changes of the current editor.
	pub fn subscribe_active_editor(
		&mut self,
		listener: impl FnMut(&ActiveEditorChange<'_, F::View>) + 'static,
	) -> Subscription {
		self.editors.listeners_mut().subscribe(listener)
	}

	/// Removes an active-editor listener.
	pub fn unsubscribe_active_editor(&mut self, subscription: Subscription) -> bool {
		self.editors.listeners_mut().unsubscribe(subscription)
	}

	/// Merges `states` into the view-state cache.
	pub fn add_view_states<K, I>(&mut self, states: I)
	where
		K: Into<String>,
		I: IntoIterator<Item = (K, ViewState)>,
	{
		self.view_states.add_view_states(states);
	}

	/// Returns the cached view state for `key`.
	pub fn get_view_state(&self, key: &str) -> Option<&ViewState> {
		self.view_states.get_view_state(key)
	}

	/// Empties the view-state cache.
	pub fn reset_view_states(&mut self) {
		self.view_states.reset_view_states();
	}

	/// Recomputes layout for a container of `container` size under `mode`,
	/// refreshing the current editor when the mode calls for it.
	pub fn recompute_layout(&mut self, container: Size, mode: RefreshMode) -> LayoutRecompute {
		self.layout
			.recompute_layout(container, mode, self.editors.current_editor())
	}

	/// Recomputes layout with the configured default mode.
	pub fn recompute_layout_default(&mut self, container: Size) -> LayoutRecompute {
		self.recompute_layout(container, self.config.default_refresh_mode)
	}

	/// Forgets the recorded container size so the next recompute sets a new baseline.
	pub fn reset_layout(&mut self) {
		self.layout.reset();
	}

	/// Returns the layout controller's last recorded container size.
	pub fn last_layout_size(&self) -> Option<Size> {
		self.layout.last_size()
	}
}

//! Layout-driven refresh of the active view.
//!
//! [`LayoutRefreshController`] remembers the container size seen by the previous
//! recompute and decides, per [`RefreshMode`], whether the active view must redraw.
//!
//! A refresh must not trigger another recompute; views are expected to redraw
//! in place.


use paneview_primitives::{RefreshMode, Size};

use crate::view::{EditorView, ViewHandle};

/// Result of one [`LayoutRefreshController::recompute_layout`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRecompute {
	/// Container size observed by this call, now the stored snapshot.
	pub size: Size,
	/// Whether the size differs from the previous snapshot.
	///
	/// Always `false` for the first call, which only establishes the baseline.
	pub changed: bool,
	/// Whether the active view was refreshed.
	pub refreshed: bool,
}

/// Tracks the last measured container size.
#[derive(Debug, Default, Clone)]
pub struct LayoutRefreshController {
	/// Snapshot from the previous recompute; `None` until the first one.
	last_size: Option<Size>,
}

impl LayoutRefreshController {
	/// Creates a controller with no baseline.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the size recorded by the last recompute.
	pub fn last_size(&self) -> Option<Size> {
		self.last_size
	}

	/// Forgets the baseline so the next recompute establishes a new one.
	pub fn reset(&mut self) {
		self.last_size = None;
	}

	/// Compares `container` against the snapshot, refreshes `active` if `mode`
	/// calls for it, then stores `container` as the new snapshot.
	///
	/// The snapshot is updated under every mode, and also when there is no
	/// active view to refresh.
	pub fn recompute_layout<V: EditorView>(
		&mut self,
		container: Size,
		mode: RefreshMode,
		active: Option<&ViewHandle<V>>,
	) -> LayoutRecompute {
		let changed = self
			.last_size
			.is_some_and(|previous| container.differs_from(previous));

		let refreshed = match active {
			Some(view) if mode.should_refresh(changed) => {
				view.with_mut(|v| v.refresh_all());
				true
			}
			_ => false,
		};

		tracing::trace!(
			?mode,
			width = container.width,
			height = container.height,
			changed,
			refreshed,
			view = ?active.map(ViewHandle::id),
			"Recomputed layout"
		);

		self.last_size = Some(container);
		LayoutRecompute {
			size: container,
			changed,
			refreshed,
		}
	}
}

//! Workspace-wide cache of per-document view state.
//!
//! Entries outlive the views that produced them so a replacement view can be
//! restored later. The cache only grows or is reset wholesale.


use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::view::ViewState;

/// Flat map from document key to opaque view state.
///
/// Serializes as a plain JSON object so hosts can persist it between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewStateCache {
	entries: FxHashMap<String, ViewState>,
}

impl ViewStateCache {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Merges `states` into the cache.
	///
	/// Existing keys are overwritten and new keys added; other keys are untouched.
	/// The merge is shallow: nested values are replaced, never combined.
	pub fn add_view_states<K, I>(&mut self, states: I)
	where
		K: Into<String>,
		I: IntoIterator<Item = (K, ViewState)>,
	{
		self.entries
			.extend(states.into_iter().map(|(key, state)| (key.into(), state)));
	}

	/// Returns the cached state for `key`, or `None` if absent.
	pub fn get_view_state(&self, key: &str) -> Option<&ViewState> {
		self.entries.get(key)
	}

	/// Replaces the whole cache with an empty map.
	pub fn reset_view_states(&mut self) {
		tracing::debug!(cleared = self.entries.len(), "Resetting view state cache");
		self.entries = FxHashMap::default();
	}

	/// Returns the number of cached entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

//! Active-editor change notification.

use crate::view::ViewHandle;

/// Describes a change of the current editor.
#[derive(Debug)]
pub struct ActiveEditorChange<'a, V> {
	/// The editor that is now current, if any.
	pub current: Option<&'a ViewHandle<V>>,
	/// The editor that was current before, if any.
	pub previous: Option<&'a ViewHandle<V>>,
}

/// Token returned by [`ActiveEditorListeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener<V> = Box<dyn FnMut(&ActiveEditorChange<'_, V>)>;

/// Listeners invoked synchronously, in registration order, on every change.
///
/// Listeners receive handles only, never the registry.
pub struct ActiveEditorListeners<V> {
	next_id: u64,
	entries: Vec<(Subscription, Listener<V>)>,
}

impl<V> Default for ActiveEditorListeners<V> {
	fn default() -> Self {
		Self {
			next_id: 0,
			entries: Vec::new(),
		}
	}
}

impl<V> ActiveEditorListeners<V> {
	/// Registers `listener` after all existing listeners.
	pub fn subscribe(&mut self, listener: impl FnMut(&ActiveEditorChange<'_, V>) + 'static) -> Subscription {
		let id = Subscription(self.next_id);
		self.next_id += 1;
		self.entries.push((id, Box::new(listener)));
		id
	}

	/// Removes a listener. Returns `false` if it was already removed.
	pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
		let before = self.entries.len();
		self.entries.retain(|(id, _)| *id != subscription);
		self.entries.len() != before
	}

	pub(crate) fn notify(&mut self, change: &ActiveEditorChange<'_, V>) {
		for (_, listener) in &mut self.entries {
			listener(change);
		}
	}
}

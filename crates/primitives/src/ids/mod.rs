
use std::fmt;

/// Unique identifier for a document.
///
/// Documents are owned by the host; the workspace only uses this as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// Identifier of a pane in the host workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub u64);

impl PaneId {
	/// The first pane every workspace starts with.
	pub const FIRST: PaneId = PaneId(0);
}

/// Identifier of a live editor view.
///
/// Allocated by the editor registry; unique for the lifetime of a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "view-{}", self.0)
	}
}

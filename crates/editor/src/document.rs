//! Non-owning document references.
//!
//! Document content lives with the host. The workspace only needs a document's
//! identity (to key editors) and a stable string key (to key cached view state).

use std::path::{Path, PathBuf};

use paneview_primitives::DocumentId;

/// A host-owned document as seen by the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentRef {
	/// Identity used to key editors.
	pub id: DocumentId,
	/// Associated file path. `None` for scratch documents.
	path: Option<PathBuf>,
}

impl DocumentRef {
	/// Creates a reference to a scratch document with no backing file.
	pub fn scratch(id: DocumentId) -> Self {
		Self { id, path: None }
	}

	/// Creates a reference to a file-backed document.
	pub fn with_path(id: DocumentId, path: impl Into<PathBuf>) -> Self {
		Self {
			id,
			path: Some(path.into()),
		}
	}

	/// Returns the file path, if any.
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Returns the key under which this document's view state is cached.
	///
	/// File-backed documents use their path; scratch documents use `untitled:<id>`.
	pub fn view_state_key(&self) -> String {
		match &self.path {
			Some(path) => path.display().to_string(),
			None => format!("untitled:{}", self.id.0),
		}
	}
}

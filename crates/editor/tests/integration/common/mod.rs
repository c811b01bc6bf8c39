//! Host-side doubles for workspace integration tests.

use std::collections::HashSet;

use paneview_editor::{DocumentId, DocumentRef, EditorView, Pane, PaneId, ViewFactory, ViewHandle, ViewId, ViewState};
use serde_json::json;

/// Installs a fmt subscriber once per test binary.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

/// A text view with a scroll offset that round-trips through view state.
#[derive(Debug)]
pub struct TextView {
	pub document: DocumentId,
	pub scroll_line: u64,
	pub redraws: u32,
}

impl EditorView for TextView {
	fn document(&self) -> DocumentId {
		self.document
	}

	fn refresh_all(&mut self) {
		self.redraws += 1;
	}

	fn view_state(&self) -> Option<ViewState> {
		Some(json!({ "scroll_line": self.scroll_line }))
	}

	fn restore_view_state(&mut self, state: &ViewState) {
		if let Some(line) = state.get("scroll_line").and_then(ViewState::as_u64) {
			self.scroll_line = line;
		}
	}
}

/// Builds [`TextView`]s, refusing documents on a deny list.
#[derive(Debug, Default)]
pub struct TextViewFactory {
	pub built: u32,
	pub unreadable: HashSet<DocumentId>,
}

impl ViewFactory for TextViewFactory {
	type View = TextView;
	type Error = String;

	fn create_view(&mut self, document: &DocumentRef, _pane: PaneId) -> Result<TextView, String> {
		if self.unreadable.contains(&document.id) {
			return Err(format!("cannot open {}", document.view_state_key()));
		}
		self.built += 1;
		Ok(TextView {
			document: document.id,
			scroll_line: 0,
			redraws: 0,
		})
	}
}

/// A pane that keeps installed views and a current view, like a tabbed host pane.
#[derive(Debug)]
pub struct HostPane {
	pub id: PaneId,
	pub installed: Vec<(String, ViewHandle<TextView>)>,
	pub current: Option<ViewId>,
	pub show_calls: u32,
}

impl HostPane {
	pub fn new(id: u64) -> Self {
		Self {
			id: PaneId(id),
			installed: Vec::new(),
			current: None,
			show_calls: 0,
		}
	}
}

impl Pane<TextView> for HostPane {
	fn id(&self) -> PaneId {
		self.id
	}

	fn add_view(&mut self, view_id: &str, view: ViewHandle<TextView>) {
		self.current = Some(view.id());
		if !self.installed.iter().any(|(_, v)| v.ptr_eq(&view)) {
			self.installed.push((view_id.to_owned(), view));
		}
	}

	fn show_view(&mut self, view: &ViewHandle<TextView>) {
		self.show_calls += 1;
		self.current = Some(view.id());
	}
}

use paneview_editor::{DocumentId, DocumentRef, ViewStateCache, Workspace, WorkspaceConfig};
use serde_json::json;

use crate::common::{HostPane, TextViewFactory, init_tracing};

#[test]
fn scroll_position_survives_close_and_reopen() {
	init_tracing();
	let mut workspace = Workspace::new(TextViewFactory::default());
	let mut pane = HostPane::new(1);
	let doc = DocumentRef::with_path(DocumentId(1), "/repo/notes.md");

	let view = workspace.open_document(&doc, &mut pane).unwrap();
	view.with_mut(|v| v.scroll_line = 120);
	assert_eq!(workspace.close_document(&doc), 1);
	assert_eq!(workspace.get_view_state("/repo/notes.md"), Some(&json!({ "scroll_line": 120 })));

	let reopened = workspace.open_document(&doc, &mut pane).unwrap();
	assert!(!reopened.ptr_eq(&view));
	assert_eq!(reopened.with(|v| v.scroll_line), 120);
}

#[test]
fn persisted_cache_seeds_a_new_session() {
	let mut cache = ViewStateCache::new();
	cache.add_view_states([("/repo/a.rs", json!({ "scroll_line": 7 }))]);
	let saved = serde_json::to_string(&cache).unwrap();

	let config = WorkspaceConfig::from_toml_str("restore_view_state = true").unwrap();
	let mut workspace = Workspace::with_config(TextViewFactory::default(), config);
	let restored: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&saved).unwrap();
	workspace.add_view_states(restored);

	let mut pane = HostPane::new(1);
	let view = workspace
		.open_document(&DocumentRef::with_path(DocumentId(3), "/repo/a.rs"), &mut pane)
		.unwrap();
	assert_eq!(view.with(|v| v.scroll_line), 7);

	workspace.reset_view_states();
	assert!(workspace.get_view_state("/repo/a.rs").is_none());
}

use paneview_primitives::{DocumentId, PaneId};

use super::EditorRegistry;
use crate::document::DocumentRef;
use crate::test_support::{RecordingPane, counting_factory};

/// Must keep at most one live view per `(document, pane)`.
///
/// * Enforced in: `EditorRegistry::open_document`
/// * Failure symptom: Two views of one file in one pane drift apart in cursor and scroll.
#[cfg_attr(test, test)]
pub(crate) fn test_one_view_per_document_and_pane() {
	let (factory, created) = counting_factory();
	let mut registry = EditorRegistry::new(factory);
	let mut pane = RecordingPane::new(PaneId(3));
	let document = DocumentRef::scratch(DocumentId(5));

	for _ in 0..4 {
		registry.open_document(&document, &mut pane, None).unwrap();
	}

	assert_eq!(created.get(), 1);
	assert_eq!(registry.editors_for_document(document.id).len(), 1);
}

/// Must call both `show_view` and `add_view` with the same instance when reusing.
///
/// * Enforced in: `EditorRegistry::open_document`
/// * Failure symptom: Pane keeps a stale current-content reference after reopen.
#[cfg_attr(test, test)]
pub(crate) fn test_reuse_shows_and_readds_same_instance() {
	let (factory, _) = counting_factory();
	let mut registry = EditorRegistry::new(factory);
	let mut pane = RecordingPane::new(PaneId(3));
	let document = DocumentRef::scratch(DocumentId(5));

	let view = registry.open_document(&document, &mut pane, None).unwrap();
	pane.calls.clear();
	registry.open_document(&document, &mut pane, None).unwrap();

	let shown = pane.shown();
	let added = pane.added();
	assert_eq!((shown.len(), added.len()), (1, 1));
	assert!(shown[0].ptr_eq(&view) && added[0].ptr_eq(&view));
}

/// Must not track or install anything when view construction fails.
///
/// * Enforced in: `EditorRegistry::open_document`
/// * Failure symptom: Pane shows a placeholder for a document that never opened.
#[cfg_attr(test, test)]
pub(crate) fn test_failed_construction_has_no_side_effects() {
	let failing = |_doc: &DocumentRef, _pane: PaneId| Err::<crate::test_support::TestView, _>(());
	let mut registry = EditorRegistry::new(failing);
	let mut pane = RecordingPane::new(PaneId(3));

	assert!(registry.open_document(&DocumentRef::scratch(DocumentId(5)), &mut pane, None).is_err());
	assert!(registry.is_empty());
	assert!(pane.calls.is_empty());
}

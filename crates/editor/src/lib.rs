#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Binding of documents to editor views across panes, and layout-driven refresh.
//!
//! # Main Types
//!
//! - [`Workspace`] - Owned context holding the registry, cache, and layout state
//! - [`EditorRegistry`] - One live view per `(document, pane)`, plus the current editor
//! - [`ViewStateCache`] - Per-document view state that outlives views
//! - [`LayoutRefreshController`] - Decides when a recompute redraws the current view
//!
//! # Architecture
//!
//! ```text
//! Workspace
//! ├── editors: EditorRegistry               // (DocumentId, PaneId) -> ViewHandle
//! │   └── listeners: ActiveEditorListeners  // current-editor observers
//! ├── view_states: ViewStateCache           // key -> opaque state
//! └── layout: LayoutRefreshController       // last container Size
//! ```
//!
//! Rendering, document content, and pane arrangement stay with the host, which
//! plugs in through [`Pane`], [`EditorView`], and [`ViewFactory`].

/// Workspace configuration and its errors.
pub mod config;
/// Non-owning document references.
pub mod document;
/// Layout recompute and refresh decisions.
pub mod layout;
/// Pane capability.
pub mod pane;
/// Editor registry and active-editor notification.
pub mod registry;
/// View capabilities, handles, and factories.
pub mod view;
/// View-state cache.
pub mod view_state;
/// The owned workspace context.
pub mod workspace;

pub use config::{ConfigError, WorkspaceConfig};
pub use document::DocumentRef;
pub use layout::{LayoutRecompute, LayoutRefreshController};
pub use pane::Pane;
pub use paneview_primitives::{DocumentId, PaneId, RefreshMode, Size, ViewId};
pub use registry::{ActiveEditorChange, ActiveEditorListeners, EditorRegistry, Subscription};
pub use view::{EditorView, ViewFactory, ViewHandle, ViewState};
pub use view_state::ViewStateCache;
pub use workspace::Workspace;

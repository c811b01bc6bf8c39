//! Workspace configuration.
//!
//! ```toml
//! default_refresh_mode = "auto"   # "force" | "skip" | "auto"
//! restore_view_state = true
//! save_view_state_on_close = true
//! ```

mod error;

use std::path::Path;

pub use error::{ConfigError, Result};
use paneview_primitives::RefreshMode;
use serde::{Deserialize, Serialize};

/// Static settings that rarely change after the workspace is created.
///
/// Missing keys take their defaults; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
	/// Mode used by [`crate::Workspace::recompute_layout_default`].
	pub default_refresh_mode: RefreshMode,
	/// Restore cached view state into newly created views.
	pub restore_view_state: bool,
	/// Cache a view's state when its editor is closed.
	pub save_view_state_on_close: bool,
}

impl Default for WorkspaceConfig {
	fn default() -> Self {
		Self {
			default_refresh_mode: RefreshMode::Auto,
			restore_view_state: true,
			save_view_state_on_close: true,
		}
	}
}

impl WorkspaceConfig {
	/// Parses configuration from TOML text.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), ?config, "Loaded workspace config");
		Ok(config)
	}
}

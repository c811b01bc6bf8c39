
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Policy governing whether a layout recomputation redraws the active view.
///
/// Parses from and displays as lowercase (`"force"`, `"skip"`, `"auto"`).
#[derive(
	Debug, Default, Display, EnumString, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RefreshMode {
	/// Always refresh, even when the container size is unchanged.
	Force,
	/// Never refresh, even when the container size changed.
	Skip,
	/// Refresh only when the container width or height changed.
	#[default]
	Auto,
}

impl RefreshMode {
	/// Decides whether a recompute with this mode should refresh the active view.
	pub fn should_refresh(self, size_changed: bool) -> bool {
		match self {
			Self::Force => true,
			Self::Skip => false,
			Self::Auto => size_changed,
		}
	}
}

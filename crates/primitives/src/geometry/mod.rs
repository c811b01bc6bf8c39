
/// Width and height of a layout container, in host units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
	pub width: u32,
	pub height: u32,
}

impl Size {
	/// Creates a new size.
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// Returns `true` if this size differs from `other` in width or height.
	pub fn differs_from(self, other: Size) -> bool {
		self.width != other.width || self.height != other.height
	}
}

impl From<(u32, u32)> for Size {
	fn from((width, height): (u32, u32)) -> Self {
		Self { width, height }
	}
}

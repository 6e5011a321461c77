//! Alignment options for wrapped lines and the items within them.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a line within the container bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    /// Align to the leading (left) edge
    Leading,
    /// Center the line
    #[default]
    Center,
    /// Align to the trailing (right) edge
    Trailing,
}

impl HorizontalAlignment {
    /// Starting offset for content of the given extent within the available
    /// extent. Offsets are clamped at zero only by the caller; oversized
    /// content yields a negative offset for center and trailing.
    #[must_use]
    pub fn offset(self, available: f32, content: f32) -> f32 {
        match self {
            Self::Leading => 0.0,
            Self::Center => (available - content) / 2.0,
            Self::Trailing => available - content,
        }
    }
}

/// Vertical alignment of an item within its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlignment {
    /// Align to the top of the line
    Top,
    /// Center within the line
    #[default]
    Center,
    /// Align to the bottom of the line
    Bottom,
}

impl VerticalAlignment {
    /// Offset of content of the given extent within the available extent.
    #[must_use]
    pub fn offset(self, available: f32, content: f32) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => (available - content) / 2.0,
            Self::Bottom => available - content,
        }
    }
}

/// Combined alignment applied to a wrapping stack.
///
/// For a horizontal stack the horizontal component positions each line within
/// the container and the vertical component positions items within their
/// line. For a vertical stack the roles swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alignment {
    /// Horizontal component
    pub horizontal: HorizontalAlignment,
    /// Vertical component
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Center on both axes.
    pub const CENTER: Self = Self {
        horizontal: HorizontalAlignment::Center,
        vertical: VerticalAlignment::Center,
    };

    /// Top-leading corner.
    pub const TOP_LEADING: Self = Self {
        horizontal: HorizontalAlignment::Leading,
        vertical: VerticalAlignment::Top,
    };

    /// Create a new alignment.
    #[must_use]
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

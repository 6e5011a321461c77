//! Wrapping direction for a flow layout.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// The main axis of a wrapping stack.
///
/// Items are placed along the main axis until they overflow, then wrap onto
/// the next line, and lines stack along the orthogonal (cross) axis. A
/// horizontal axis gives a row-wrapping stack; a vertical axis gives a
/// column-wrapping stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Items flow left to right, lines stack downward.
    #[default]
    Horizontal,
    /// Items flow top to bottom, lines stack rightward.
    Vertical,
}

impl Axis {
    /// Extent of a size along the main axis.
    #[must_use]
    pub const fn main(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of a size along the cross axis.
    #[must_use]
    pub const fn cross(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Build a size from main and cross extents.
    #[must_use]
    pub const fn pack(self, main: f32, cross: f32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Build a point from main and cross coordinates.
    #[must_use]
    pub const fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_default() {
        assert_eq!(Axis::default(), Axis::Horizontal);
    }

    #[test]
    fn test_axis_main_cross() {
        let size = Size::new(10.0, 20.0);
        assert_eq!(Axis::Horizontal.main(size), 10.0);
        assert_eq!(Axis::Horizontal.cross(size), 20.0);
        assert_eq!(Axis::Vertical.main(size), 20.0);
        assert_eq!(Axis::Vertical.cross(size), 10.0);
    }

    #[test]
    fn test_axis_pack_round_trips() {
        let size = Size::new(10.0, 20.0);
        for axis in [Axis::Horizontal, Axis::Vertical] {
            assert_eq!(axis.pack(axis.main(size), axis.cross(size)), size);
        }
    }

    #[test]
    fn test_axis_point() {
        assert_eq!(Axis::Horizontal.point(1.0, 2.0), Point::new(1.0, 2.0));
        assert_eq!(Axis::Vertical.point(1.0, 2.0), Point::new(2.0, 1.0));
    }
}

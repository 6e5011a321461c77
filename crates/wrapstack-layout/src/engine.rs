//! Flow layout: split, size, and place in one pass.

use crate::lines::{FitPolicy, LineBreaker};
use crate::place::place;
use crate::size::{grid_size, max_size, min_size};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use wrapstack_core::{Alignment, Axis, Point, Size};

/// Result of one flow layout pass.
///
/// Covers the measured prefix of the input: when layout was computed from
/// partially measured sizes, `lines` and `positions` stop at the first
/// unmeasured item and the caller should finish measuring before the next
/// pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLayoutResult {
    /// Item index ranges, one per line, in order.
    pub lines: Vec<Range<usize>>,
    /// Bounding size of all lines.
    pub size: Size,
    /// Absolute position per item, indexed by item.
    pub positions: Vec<Point>,
}

impl FlowLayoutResult {
    /// Number of items covered by this pass.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.positions.len()
    }

    /// Check whether every input item was covered.
    #[must_use]
    pub fn is_complete(&self, input_len: usize) -> bool {
        self.positions.len() == input_len
    }
}

/// A wrapping flow layout configuration.
///
/// Arranges items along the main axis, wrapping to a new line when the next
/// item would overflow the bounds, then stacks lines along the cross axis.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FlowLayout {
    /// Main axis of the stack.
    pub axis: Axis,
    /// Spacing between items on the same line.
    pub main_spacing: f32,
    /// Spacing between lines.
    pub cross_spacing: f32,
    /// Line and item alignment.
    pub alignment: Alignment,
    /// Boundary policy for the wrap test.
    pub fit_policy: FitPolicy,
}

impl FlowLayout {
    /// Row-wrapping layout with zero spacing and centered alignment.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Column-wrapping layout with zero spacing and centered alignment.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
            ..Self::default()
        }
    }

    /// Set the spacing between items on the same line.
    #[must_use]
    pub const fn with_main_spacing(mut self, spacing: f32) -> Self {
        self.main_spacing = spacing;
        self
    }

    /// Set the spacing between lines.
    #[must_use]
    pub const fn with_cross_spacing(mut self, spacing: f32) -> Self {
        self.cross_spacing = spacing;
        self
    }

    /// Set the alignment.
    #[must_use]
    pub const fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the boundary policy for the wrap test.
    #[must_use]
    pub const fn with_fit_policy(mut self, policy: FitPolicy) -> Self {
        self.fit_policy = policy;
        self
    }

    /// Compute a full layout for fully measured items.
    ///
    /// `bounds_main` is the container extent along the main axis; it limits
    /// line length and is the reference for centered/trailing line alignment.
    #[must_use]
    pub fn compute(&self, sizes: &[Size], bounds_main: f32) -> FlowLayoutResult {
        self.compute_with(sizes.len(), bounds_main, |index| Some(sizes[index]))
    }

    /// Compute a layout for partially measured items.
    ///
    /// The pass stops at the first `None`; the result covers only the
    /// measured prefix (see [`FlowLayoutResult::is_complete`]).
    #[must_use]
    pub fn compute_partial(&self, sizes: &[Option<Size>], bounds_main: f32) -> FlowLayoutResult {
        self.compute_with(sizes.len(), bounds_main, |index| sizes[index])
    }

    fn compute_with<F>(&self, count: usize, bounds_main: f32, size_of: F) -> FlowLayoutResult
    where
        F: Fn(usize) -> Option<Size>,
    {
        let axis = self.axis;
        let length = |index: usize| size_of(index).map_or(0.0, |size| axis.main(size));
        let orthogonal = |index: usize| size_of(index).map_or(0.0, |size| axis.cross(size));

        let breaker = LineBreaker::new()
            .with_spacing(self.main_spacing)
            .with_policy(self.fit_policy);
        let lines = breaker.split(count, bounds_main, |index| {
            size_of(index).map(|size| axis.main(size))
        });

        let (main, cross) = grid_size(
            &lines,
            self.main_spacing,
            self.cross_spacing,
            length,
            orthogonal,
        );
        let positions = place(
            &lines,
            axis,
            self.main_spacing,
            self.cross_spacing,
            self.alignment,
            bounds_main,
            length,
            orthogonal,
        );

        FlowLayoutResult {
            lines,
            size: axis.pack(main, cross),
            positions,
        }
    }

    /// Minimum possible size: every item on its own line.
    #[must_use]
    pub fn min_size(&self, sizes: &[Size]) -> Size {
        let axis = self.axis;
        let (main, cross) = min_size(
            sizes.len(),
            self.cross_spacing,
            |index| axis.main(sizes[index]),
            |index| axis.cross(sizes[index]),
        );
        axis.pack(main, cross)
    }

    /// Maximum possible size: all items on a single line.
    #[must_use]
    pub fn max_size(&self, sizes: &[Size]) -> Size {
        let axis = self.axis;
        let (main, cross) = max_size(
            sizes.len(),
            self.main_spacing,
            |index| axis.main(sizes[index]),
            |index| axis.cross(sizes[index]),
        );
        axis.pack(main, cross)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapstack_core::{HorizontalAlignment, VerticalAlignment};

    fn top_leading(layout: FlowLayout) -> FlowLayout {
        layout.with_alignment(Alignment::new(
            HorizontalAlignment::Leading,
            VerticalAlignment::Top,
        ))
    }

    #[test]
    fn test_compute_empty_input() {
        let layout = FlowLayout::horizontal();
        let result = layout.compute(&[], 100.0);
        assert!(result.lines.is_empty());
        assert!(result.positions.is_empty());
        assert_eq!(result.size, Size::ZERO);
        assert!(result.is_complete(0));
    }

    #[test]
    fn test_compute_wraps_and_sizes() {
        let layout = top_leading(FlowLayout::horizontal())
            .with_main_spacing(10.0)
            .with_cross_spacing(4.0);
        let sizes = [
            Size::new(40.0, 10.0),
            Size::new(40.0, 20.0),
            Size::new(40.0, 10.0),
        ];
        let result = layout.compute(&sizes, 100.0);

        // 40 + 10 + 40 = 90 fits; adding the third would need 140
        assert_eq!(result.lines, vec![0..2, 2..3]);
        assert_eq!(result.size, Size::new(90.0, 34.0));
        assert_eq!(result.positions[0], Point::new(0.0, 0.0));
        assert_eq!(result.positions[1], Point::new(50.0, 0.0));
        assert_eq!(result.positions[2], Point::new(0.0, 24.0));
    }

    #[test]
    fn test_compute_vertical_axis() {
        let layout = top_leading(FlowLayout::vertical()).with_cross_spacing(4.0);
        let sizes = [Size::new(10.0, 60.0), Size::new(10.0, 60.0)];
        let result = layout.compute(&sizes, 100.0);

        // heights 60 + 60 overflow 100, so two columns
        assert_eq!(result.lines, vec![0..1, 1..2]);
        assert_eq!(result.size, Size::new(24.0, 60.0));
        assert_eq!(result.positions[1], Point::new(14.0, 0.0));
    }

    #[test]
    fn test_compute_partial_stops_at_unmeasured() {
        let layout = top_leading(FlowLayout::horizontal());
        let sizes = [Some(Size::new(10.0, 10.0)), None, Some(Size::new(10.0, 10.0))];
        let result = layout.compute_partial(&sizes, 100.0);

        assert_eq!(result.lines, vec![0..1]);
        assert_eq!(result.item_count(), 1);
        assert!(!result.is_complete(sizes.len()));
    }

    #[test]
    fn test_min_and_max_size() {
        let layout = FlowLayout::horizontal()
            .with_main_spacing(10.0)
            .with_cross_spacing(4.0);
        let sizes = [Size::new(40.0, 10.0), Size::new(20.0, 30.0)];

        assert_eq!(layout.min_size(&sizes), Size::new(40.0, 44.0));
        assert_eq!(layout.max_size(&sizes), Size::new(70.0, 30.0));
    }

    #[test]
    fn test_min_max_size_empty() {
        let layout = FlowLayout::horizontal();
        assert_eq!(layout.min_size(&[]), Size::ZERO);
        assert_eq!(layout.max_size(&[]), Size::ZERO);
    }

    #[test]
    fn test_default_alignment_centers_lines() {
        let layout = FlowLayout::horizontal();
        let sizes = [Size::new(40.0, 10.0)];
        let result = layout.compute(&sizes, 100.0);
        assert_eq!(result.positions[0], Point::new(30.0, 0.0));
    }

    #[test]
    fn test_strict_policy_flows_through() {
        let layout = top_leading(FlowLayout::horizontal()).with_fit_policy(FitPolicy::Strict);
        let sizes = [Size::new(50.0, 10.0), Size::new(50.0, 10.0)];
        let result = layout.compute(&sizes, 100.0);
        assert_eq!(result.lines, vec![0..1, 1..2]);

        let inclusive = top_leading(FlowLayout::horizontal()).compute(&sizes, 100.0);
        assert_eq!(inclusive.lines, vec![0..2]);
    }
}

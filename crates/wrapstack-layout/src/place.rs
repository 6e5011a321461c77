//! Placement: absolute positions for every item in a partition.

use crate::size::line_size;
use std::ops::Range;
use wrapstack_core::{Alignment, Axis, Point};

/// Compute an absolute position for every item covered by `partition`.
///
/// Lines are walked in order; each line starts at the running cross-axis
/// cursor and its main-axis start comes from the alignment component along
/// the main axis (leading 0, centered, or trailing against `bounds_main`).
/// Within a line, items advance a main cursor by their length plus
/// `main_spacing`, and the alignment component along the cross axis offsets
/// each item against the line's cross extent.
///
/// For [`Axis::Horizontal`] the horizontal alignment positions lines and the
/// vertical alignment positions items; for [`Axis::Vertical`] the roles swap.
///
/// Returns one position per item covered by the partition, indexed by item.
/// The bounding box of the placed items matches
/// [`grid_size`](crate::grid_size) for the same partition whenever the
/// lines are leading-aligned (other alignments only translate lines within
/// `bounds_main`).
pub fn place<L, O>(
    partition: &[Range<usize>],
    axis: Axis,
    main_spacing: f32,
    cross_spacing: f32,
    alignment: Alignment,
    bounds_main: f32,
    length: L,
    orthogonal: O,
) -> Vec<Point>
where
    L: Fn(usize) -> f32,
    O: Fn(usize) -> f32,
{
    let line_offset = |available: f32, content: f32| match axis {
        Axis::Horizontal => alignment.horizontal.offset(available, content),
        Axis::Vertical => alignment.vertical.offset(available, content),
    };
    let item_offset = |available: f32, content: f32| match axis {
        Axis::Horizontal => alignment.vertical.offset(available, content),
        Axis::Vertical => alignment.horizontal.offset(available, content),
    };

    let item_count = partition.last().map_or(0, |line| line.end);
    let mut positions = vec![Point::ORIGIN; item_count];

    let mut cross_cursor = 0.0f32;
    for line in partition {
        let (line_main, line_cross) = line_size(line.clone(), main_spacing, &length, &orthogonal);

        let mut main_cursor = line_offset(bounds_main, line_main);
        for index in line.clone() {
            let item_cross = cross_cursor + item_offset(line_cross, orthogonal(index));
            positions[index] = axis.point(main_cursor, item_cross);
            main_cursor += length(index) + main_spacing;
        }

        cross_cursor += line_cross + cross_spacing;
    }

    positions
}

//! Aggregate size computation for lines and stacked-line grids.
//!
//! All functions are parameterized by accessors returning an item's extent
//! along the main axis (`length`) and the cross axis (`orthogonal`), so the
//! same code serves row-wrapping and column-wrapping stacks. Results are
//! `(main, cross)` pairs; callers orient them into a `Size` via
//! [`wrapstack_core::Axis::pack`].

use std::ops::Range;

/// Size of a single line: `(sum of lengths + spacing between items, max
/// orthogonal length)`. Spacing is counted only between items, never before
/// the first or after the last. An empty range yields `(0, 0)`.
pub fn line_size<L, O>(range: Range<usize>, spacing: f32, length: L, orthogonal: O) -> (f32, f32)
where
    L: Fn(usize) -> f32,
    O: Fn(usize) -> f32,
{
    let count = range.len();
    if count == 0 {
        return (0.0, 0.0);
    }

    let mut main = 0.0f32;
    let mut cross = 0.0f32;
    for index in range {
        main += length(index);
        cross = cross.max(orthogonal(index));
    }
    (main + spacing * (count - 1) as f32, cross)
}

/// Bounding size of a partition laid out as stacked lines.
///
/// Main extent is the widest line; cross extent is the sum of line heights
/// plus `cross_spacing` between lines. An empty partition yields `(0, 0)`.
///
/// Monotonic: appending an item to the underlying sequence (and re-splitting)
/// never decreases either extent.
pub fn grid_size<L, O>(
    partition: &[Range<usize>],
    main_spacing: f32,
    cross_spacing: f32,
    length: L,
    orthogonal: O,
) -> (f32, f32)
where
    L: Fn(usize) -> f32,
    O: Fn(usize) -> f32,
{
    if partition.is_empty() {
        return (0.0, 0.0);
    }

    let mut main = 0.0f32;
    let mut cross = 0.0f32;
    for line in partition {
        let (line_main, line_cross) = line_size(line.clone(), main_spacing, &length, &orthogonal);
        main = main.max(line_main);
        cross += line_cross;
    }
    (main, cross + cross_spacing * (partition.len() - 1) as f32)
}

/// Minimum possible size: every item on its own line, a single column along
/// the cross axis. Equivalent to [`line_size`] with the axes swapped and the
/// cross spacing between entries.
pub fn min_size<L, O>(count: usize, cross_spacing: f32, length: L, orthogonal: O) -> (f32, f32)
where
    L: Fn(usize) -> f32,
    O: Fn(usize) -> f32,
{
    let (cross, main) = line_size(0..count, cross_spacing, orthogonal, length);
    (main, cross)
}

/// Maximum possible size: all items on a single line with no wrapping.
pub fn max_size<L, O>(count: usize, main_spacing: f32, length: L, orthogonal: O) -> (f32, f32)
where
    L: Fn(usize) -> f32,
    O: Fn(usize) -> f32,
{
    line_size(0..count, main_spacing, length, orthogonal)
}

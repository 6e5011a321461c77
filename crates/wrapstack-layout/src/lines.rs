//! Line splitting: partition measured items into lines that fit a limit.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Boundary policy for the fit test when closing a line.
///
/// Whether an item whose accumulated length lands exactly on the limit joins
/// the current line or wraps to the next one. Container sizing wants
/// exactly-fitting items to join (`Inclusive`); incremental layout against a
/// still-growing bound wants them to wrap (`Strict`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FitPolicy {
    /// An item fits when `new_length <= limit`.
    #[default]
    Inclusive,
    /// An item fits only when `new_length < limit`.
    Strict,
}

impl FitPolicy {
    /// Apply the fit test.
    #[must_use]
    pub fn fits(self, new_length: f32, limit: f32) -> bool {
        match self {
            Self::Inclusive => new_length <= limit,
            Self::Strict => new_length < limit,
        }
    }
}

/// Partition `count` items into contiguous lines.
///
/// Single forward pass: each item's extent is read once through `length_of`.
/// An item joins the current line when its accumulated length (including the
/// spacing between items, never before the first or after the last) passes
/// the [`FitPolicy`] test, or unconditionally when the line is still empty,
/// so an oversized item always occupies a line alone rather than being
/// dropped or split.
///
/// `length_of` returning `None` (or NaN, which is treated the same) stops
/// the pass without consuming that item: the resulting partition covers only
/// the measured prefix, signalling the caller to collect the missing
/// measurements and retry.
///
/// A negative limit or spacing never fits anything, forcing one item per
/// line; this is a documented fallback, not an error.
///
/// Ranges in the result are ordered, non-overlapping, never empty, and
/// exhaustive over the consumed prefix. Empty input yields an empty
/// partition.
pub fn split_into_lines<F>(
    count: usize,
    length_limit: f32,
    spacing: f32,
    policy: FitPolicy,
    mut length_of: F,
) -> Vec<Range<usize>>
where
    F: FnMut(usize) -> Option<f32>,
{
    let never_fits = length_limit < 0.0 || spacing < 0.0;

    let mut result = Vec::new();
    let mut current_length = 0.0f32;
    let mut items_in_line = 0usize;
    let mut line_start = 0usize;
    let mut consumed = count;

    for index in 0..count {
        let length = match length_of(index) {
            Some(length) if !length.is_nan() => length,
            _ => {
                consumed = index;
                break;
            }
        };

        let new_length = current_length + length;
        if (!never_fits && policy.fits(new_length, length_limit)) || items_in_line == 0 {
            current_length = new_length + spacing;
            items_in_line += 1;
        } else {
            result.push(line_start..index);
            current_length = length + spacing;
            items_in_line = 1;
            line_start = index;
        }
    }

    if line_start < consumed {
        result.push(line_start..consumed);
    }
    result
}

/// Reusable line-splitting configuration.
///
/// Holds the spacing and boundary policy so call sites only supply the item
/// count, the current limit, and the extent lookup per pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LineBreaker {
    /// Spacing between items on the same line.
    pub spacing: f32,
    /// Boundary policy for the fit test.
    pub policy: FitPolicy,
}

impl LineBreaker {
    /// Create a breaker with zero spacing and the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inter-item spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the boundary policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: FitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Split `count` items against `length_limit`. See [`split_into_lines`].
    pub fn split<F>(&self, count: usize, length_limit: f32, length_of: F) -> Vec<Range<usize>>
    where
        F: FnMut(usize) -> Option<f32>,
    {
        split_into_lines(count, length_limit, self.spacing, self.policy, length_of)
    }
}

//! Core types for the wrapstack layout library.
//!
//! This crate holds the vocabulary shared by every layout computation:
//! geometric primitives ([`Point`], [`Size`], [`Rect`]), the wrapping
//! direction ([`Axis`]), and alignment options ([`Alignment`]).
//!
//! Nothing here performs layout; the algorithms live in `wrapstack-layout`.

mod alignment;
mod axis;
mod geometry;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use axis::Axis;
pub use geometry::{Point, Rect, Size};

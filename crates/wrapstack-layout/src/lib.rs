//! Wrapping flow layout algorithms.
//!
//! A wrapping stack arranges items along a main axis and wraps to a new line
//! when the next item would overflow the available extent, CSS flex-wrap
//! style. This crate holds the three pure computations behind it, plus the
//! measurement bookkeeping a caller needs to drive them:
//!
//! - [`split_into_lines`]: partition measured items into lines
//! - [`line_size`] / [`grid_size`] / [`min_size`] / [`max_size`]: aggregate
//!   bounding sizes for a line or a stack of lines
//! - [`place`]: absolute positions for every item under spacing and alignment
//! - [`MeasurementTracker`] / [`MeasurementCache`]: the two-phase
//!   measure-then-layout protocol
//! - [`FlowLayout`]: one-call orchestration of split, size, and place
//!
//! The core receives already-measured extents as plain numbers and never
//! waits for a measurement: an unknown extent truncates the pass, and the
//! caller retries once measuring completes.

mod engine;
mod lines;
mod measure;
mod place;
mod size;

pub use engine::{FlowLayout, FlowLayoutResult};
pub use lines::{split_into_lines, FitPolicy, LineBreaker};
pub use measure::{MeasureError, MeasurePhase, MeasurementCache, MeasurementTracker};
pub use place::place;
pub use size::{grid_size, line_size, max_size, min_size};

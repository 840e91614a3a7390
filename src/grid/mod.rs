//! Uniform grid core.
//!
//! This module provides the rasterized grid and its query surface:
//!
//! - [`Grid`]: grid aggregate with per-axis coordinate tables, strides,
//!   and total node count
//! - Index conversion between flat and multi-dimensional node indices
//! - Spatial queries: node location, neighborhood enumeration, and
//!   enveloping nodes

mod index;
mod query;
mod raster;

pub use raster::Grid;

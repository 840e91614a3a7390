//! Binary persistence for grids.
//!
//! Grids are stored header-only in the native `.jgrid` format; the raster
//! tables are recomputed when a grid is loaded.

mod grid_format;

pub use grid_format::{load_grid, read_grid, save_grid, write_grid, GRID_EXTENSION};

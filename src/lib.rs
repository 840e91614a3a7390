//! # jaala-grid
//!
//! A uniform N-dimensional grid that discretizes a bounded rectangular
//! region of continuous space into an evenly spaced lattice of nodes.
//!
//! The grid provides fast conversions between three node representations:
//!
//! - **multi-dimensional index**: one integer component per axis
//! - **flat index**: a single integer in `[0, node_count)`, axis 0 fastest
//! - **coordinates**: the node's position in continuous space
//!
//! On top of the indexing layer it answers spatial queries: the node
//! nearest to an arbitrary point, the bottom-left anchor of the cell
//! containing a point, all nodes within an index-space radius of a node,
//! and all nodes of the (optionally expanded) hyper-rectangle enclosing a
//! point.
//!
//! ## Quick Start
//!
//! ```
//! use jaala_grid::{Grid, GridConfig};
//!
//! // A 3x3 grid over [0, 2] x [0, 2].
//! let grid = Grid::new(GridConfig::uniform(2, 3, 0.0, 2.0))?;
//! assert_eq!(grid.node_count(), 9);
//!
//! // Node (1, 1) sits at the center.
//! let center = grid.flat_index(&[1, 1])?;
//! assert_eq!(grid.node_coordinates_flat(center)?, vec![1.0, 1.0]);
//!
//! // The eight nodes surrounding it.
//! let ring = grid.neighborhood(center, 1)?;
//! assert_eq!(ring, vec![0, 1, 2, 3, 5, 6, 7, 8]);
//!
//! // Locate an arbitrary point.
//! assert_eq!(grid.nearest_index(&[1.5, 0.2]), vec![2, 0]);
//! assert_eq!(grid.bottom_left_index(&[1.5, 0.2]), vec![1, 0]);
//! # Ok::<(), jaala_grid::GridError>(())
//! ```
//!
//! ## Design
//!
//! A [`GridConfig`] describes the lattice (per-axis node counts and
//! bounds); [`Grid::new`] validates it and rasterizes once, allocating the
//! per-axis coordinate tables. The resulting [`Grid`] is immutable, all
//! queries return owned values, and the type is `Send + Sync`.
//! Construction is O(sum of node counts) and belongs outside
//! latency-sensitive loops; index and coordinate queries are O(D), and the
//! enumerators are O(D + result size).
//!
//! Grids persist header-only in the native `.jgrid` binary format (see
//! [`io`]); uniform point sampling delegates randomness to a caller-owned
//! [`rand::Rng`].

pub mod config;
pub mod error;
pub mod grid;
pub mod io;

pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use io::{load_grid, read_grid, save_grid, write_grid, GRID_EXTENSION};

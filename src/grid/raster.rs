//! Grid aggregate and rasterization.

use rand::Rng;

use crate::config::GridConfig;
use crate::error::Result;

/// A rasterized uniform N-dimensional grid.
///
/// Nodes are evenly distributed along each axis of the configured bounds
/// such that the first node sits exactly at `min` and the last node exactly
/// at `max`. Every node is addressable either by a multi-dimensional index
/// (one component per axis) or by a flat index in `[0, node_count)`; axis 0
/// varies fastest in the flat enumeration.
///
/// A `Grid` is immutable after construction: [`Grid::new`] validates the
/// configuration and rasterizes it exactly once, so queries can never
/// observe stale or partially derived state. To change the resolution or
/// bounds, build a new `Grid`. All queries return owned values and the
/// type is `Send + Sync`.
///
/// ```
/// use jaala_grid::{Grid, GridConfig};
///
/// let grid = Grid::new(GridConfig::uniform(2, 3, 0.0, 2.0))?;
/// assert_eq!(grid.node_count(), 9);
/// assert_eq!(grid.stride(), &[1.0, 1.0]);
/// # Ok::<(), jaala_grid::GridError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    /// Validated configuration the grid was rasterized from.
    pub(crate) config: GridConfig,
    /// Total number of nodes, the product of all per-axis counts.
    pub(crate) node_count: usize,
    /// Index-space stride: `cum_counts[0] = 1`,
    /// `cum_counts[d] = cum_counts[d-1] * node_counts[d-1]`.
    pub(crate) cum_counts: Vec<usize>,
    /// Per-axis node spacing.
    pub(crate) stride: Vec<f64>,
    /// Per-axis reciprocal spacing, precomputed for point queries.
    pub(crate) stride_inv: Vec<f64>,
    /// Per-axis node coordinate tables, `raster[d]` has `node_counts[d]`
    /// monotonically increasing entries from `min[d]` to `max[d]`.
    pub(crate) raster: Vec<Vec<f64>>,
}

impl Grid {
    /// Validate `config` and rasterize it.
    ///
    /// Computes the node count, index-space strides, per-axis spacing, and
    /// per-axis coordinate tables. Allocates heap memory proportional to
    /// the sum of the node counts; construct grids outside of
    /// latency-sensitive loops.
    ///
    /// Fails with [`GridError::Config`](crate::GridError::Config) on a
    /// degenerate configuration (see [`GridConfig::validate`]).
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        let dim = config.dim();

        let node_count = config.node_counts.iter().product();

        let mut cum_counts = vec![1usize; dim];
        for d in 1..dim {
            cum_counts[d] = cum_counts[d - 1] * config.node_counts[d - 1];
        }

        let mut stride = Vec::with_capacity(dim);
        let mut stride_inv = Vec::with_capacity(dim);
        let mut raster = Vec::with_capacity(dim);
        for d in 0..dim {
            let n = config.node_counts[d];
            let s = (config.max[d] - config.min[d]) / (n - 1) as f64;
            stride.push(s);
            stride_inv.push(1.0 / s);

            let mut axis = Vec::with_capacity(n);
            for i in 0..n {
                axis.push(config.min[d] + i as f64 * s);
            }
            // Pin the last node to the exact upper bound.
            axis[n - 1] = config.max[d];
            raster.push(axis);
        }

        Ok(Self {
            config,
            node_count,
            cum_counts,
            stride,
            stride_inv,
            raster,
        })
    }

    /// The configuration this grid was rasterized from.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of axes.
    #[inline]
    pub fn dim(&self) -> usize {
        self.config.node_counts.len()
    }

    /// Total number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Nodes per axis.
    #[inline]
    pub fn node_counts(&self) -> &[usize] {
        &self.config.node_counts
    }

    /// Lower bound per axis.
    #[inline]
    pub fn min(&self) -> &[f64] {
        &self.config.min
    }

    /// Upper bound per axis.
    #[inline]
    pub fn max(&self) -> &[f64] {
        &self.config.max
    }

    /// Per-axis node spacing (cell width).
    #[inline]
    pub fn stride(&self) -> &[f64] {
        &self.stride
    }

    /// Per-axis reciprocal node spacing.
    #[inline]
    pub fn stride_inv(&self) -> &[f64] {
        &self.stride_inv
    }

    /// Node coordinates along one axis, from `min[axis]` to `max[axis]`.
    ///
    /// # Panics
    /// Panics if `axis >= self.dim()`.
    #[inline]
    pub fn axis_coordinates(&self, axis: usize) -> &[f64] {
        &self.raster[axis]
    }

    /// Returns true if `point` lies within the grid bounds on every axis.
    ///
    /// The boundary itself counts as inside. This is the only strict
    /// bounds check; point-to-node queries clamp instead.
    ///
    /// # Panics
    /// Panics if `point.len() != self.dim()`.
    pub fn contains(&self, point: &[f64]) -> bool {
        assert_eq!(point.len(), self.dim(), "point dimensionality mismatch");
        point
            .iter()
            .enumerate()
            .all(|(d, &p)| p >= self.config.min[d] && p <= self.config.max[d])
    }

    /// Draw a uniformly distributed point from the grid bounds.
    ///
    /// One independent draw per axis over `[min, max]`.
    pub fn sample_uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.dim())
            .map(|d| rng.random_range(self.config.min[d]..=self.config.max[d]))
            .collect()
    }

    /// Iterate over all nodes as `(flat_index, coordinates)` pairs.
    ///
    /// Enumeration follows the flat index order, axis 0 fastest.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, Vec<f64>)> + '_ {
        (0..self.node_count).map(move |n| {
            let idx = self.unfold_index(n);
            (n, self.coordinates_unchecked(&idx))
        })
    }
}

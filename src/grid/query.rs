//! Spatial queries: node location, neighborhood enumeration, and
//! enveloping nodes.
//!
//! Point-to-node queries clamp out-of-bounds points to the boundary cell
//! instead of rejecting them; [`Grid::contains`] is the only strict bounds
//! check.

use super::Grid;
use crate::error::{GridError, Result};

impl Grid {
    /// Multi-dimensional index of the bottom-left node of the grid cell
    /// containing `point`.
    ///
    /// Per axis: `clamp(floor((p - min) * stride_inv), 0, N - 2)`. The
    /// upper clamp at `N - 2` guarantees the cell's far corner at `+1`
    /// exists; points outside the bounds resolve to the boundary cell.
    ///
    /// # Panics
    /// Panics if `point.len() != self.dim()`.
    pub fn bottom_left_index(&self, point: &[f64]) -> Vec<usize> {
        assert_eq!(point.len(), self.dim(), "point dimensionality mismatch");
        (0..self.dim())
            .map(|d| self.bottom_left_axis(point[d], d))
            .collect()
    }

    /// Multi-dimensional index of the grid node nearest to `point`.
    ///
    /// Nearest by independent per-axis rounding (half away from zero),
    /// clamped to `[0, N - 1]`. This is axis-separable rounding, not a
    /// Euclidean nearest-neighbor search.
    ///
    /// # Panics
    /// Panics if `point.len() != self.dim()`.
    pub fn nearest_index(&self, point: &[f64]) -> Vec<usize> {
        assert_eq!(point.len(), self.dim(), "point dimensionality mismatch");
        (0..self.dim())
            .map(|d| self.nearest_axis(point[d], d))
            .collect()
    }

    /// Flat-index variant of [`Grid::bottom_left_index`].
    ///
    /// # Panics
    /// Panics if `point.len() != self.dim()`.
    pub fn bottom_left_flat_index(&self, point: &[f64]) -> usize {
        let idx = self.bottom_left_index(point);
        self.fold_index(&idx)
    }

    /// Flat-index variant of [`Grid::nearest_index`].
    ///
    /// # Panics
    /// Panics if `point.len() != self.dim()`.
    pub fn nearest_flat_index(&self, point: &[f64]) -> usize {
        let idx = self.nearest_index(point);
        self.fold_index(&idx)
    }

    /// Coordinates of the node at a multi-dimensional index.
    ///
    /// # Panics
    /// Panics if `idx.len() != self.dim()`.
    pub fn node_coordinates(&self, idx: &[usize]) -> Result<Vec<f64>> {
        assert_eq!(idx.len(), self.dim(), "index dimensionality mismatch");
        for (d, &i) in idx.iter().enumerate() {
            let count = self.config.node_counts[d];
            if i >= count {
                return Err(GridError::IndexOutOfRange {
                    axis: d,
                    index: i,
                    count,
                });
            }
        }
        Ok(self.coordinates_unchecked(idx))
    }

    /// Coordinates of the node at a flat index.
    pub fn node_coordinates_flat(&self, flat: usize) -> Result<Vec<f64>> {
        let idx = self.dim_index(flat)?;
        Ok(self.coordinates_unchecked(&idx))
    }

    /// Raster table lookup without range checks; callers guarantee
    /// validity.
    #[inline]
    pub(crate) fn coordinates_unchecked(&self, idx: &[usize]) -> Vec<f64> {
        idx.iter()
            .enumerate()
            .map(|(d, &i)| self.raster[d][i])
            .collect()
    }

    /// Flat indices of all nodes within `radius` index steps of the node
    /// `center`, the center itself excluded.
    ///
    /// The radius bounds a hyper-rectangle in index space,
    /// `[idx - radius, idx + radius]` per axis, clamped to the grid.
    /// Radius 0 therefore yields an empty vector. Enumeration order is a
    /// lexicographic odometer with axis 0 varying fastest.
    pub fn neighborhood(&self, center: usize, radius: usize) -> Result<Vec<usize>> {
        let idx = self.dim_index(center)?;
        Ok(self.enumerate_box(&idx, radius, 0, Some(center)))
    }

    /// Multi-dimensional-index variant of [`Grid::neighborhood`].
    ///
    /// # Panics
    /// Panics if `center.len() != self.dim()`.
    pub fn neighborhood_of(&self, center: &[usize], radius: usize) -> Result<Vec<usize>> {
        let flat = self.flat_index(center)?;
        Ok(self.enumerate_box(center, radius, 0, Some(flat)))
    }

    /// Flat indices of all nodes of the hyper-rectangle enclosing `point`,
    /// expanded by `radius` index steps per axis.
    ///
    /// Anchored at the bottom-left node of the cell containing `point`;
    /// the upper bound extends one extra step to cover the cell's far
    /// corner. Unlike [`Grid::neighborhood`] the anchor node is included,
    /// so radius 0 yields the (up to) `2^D` corners of the enclosing cell.
    ///
    /// # Panics
    /// Panics if `point.len() != self.dim()`.
    pub fn enveloping_nodes(&self, point: &[f64], radius: usize) -> Vec<usize> {
        let anchor = self.bottom_left_index(point);
        self.enumerate_box(&anchor, radius, 1, None)
    }

    #[inline]
    fn bottom_left_axis(&self, p: f64, d: usize) -> usize {
        let cell = ((p - self.config.min[d]) * self.stride_inv[d]).floor();
        (cell.max(0.0) as usize).min(self.config.node_counts[d] - 2)
    }

    #[inline]
    fn nearest_axis(&self, p: f64, d: usize) -> usize {
        let node = ((p - self.config.min[d]) * self.stride_inv[d]).round();
        (node.max(0.0) as usize).min(self.config.node_counts[d] - 1)
    }

    /// Enumerate the flat indices of the clamped hyper-rectangle
    /// `[center - radius, center + radius + upper_extra]` per axis,
    /// skipping `exclude` if given.
    ///
    /// The lower bound saturates at zero, the upper bound clamps to the
    /// last node of each axis. Runs an odometer over the per-axis ranges
    /// with axis 0 varying fastest.
    fn enumerate_box(
        &self,
        center: &[usize],
        radius: usize,
        upper_extra: usize,
        exclude: Option<usize>,
    ) -> Vec<usize> {
        let dim = self.dim();
        let mut bmin = Vec::with_capacity(dim);
        let mut bmax = Vec::with_capacity(dim);
        for d in 0..dim {
            bmin.push(center[d].saturating_sub(radius));
            bmax.push((center[d] + radius + upper_extra).min(self.config.node_counts[d] - 1));
        }

        let mut total = 1usize;
        for d in 0..dim {
            total *= bmax[d] - bmin[d] + 1;
        }

        let mut result = Vec::with_capacity(total - usize::from(exclude.is_some()));
        let mut cursor = bmin.clone();
        for _ in 0..total {
            let flat = self.fold_index(&cursor);
            if Some(flat) != exclude {
                result.push(flat);
            }

            // Odometer step.
            for d in 0..dim {
                cursor[d] += 1;
                if cursor[d] <= bmax[d] {
                    break;
                }
                cursor[d] = bmin[d];
            }
        }
        result
    }
}

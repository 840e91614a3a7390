//! Conversion between flat and multi-dimensional node indices.
//!
//! Flat indices enumerate the nodes with axis 0 varying fastest,
//! consistent with the cumulative-count table computed at rasterization.
//! The public converters reject out-of-range input instead of silently
//! folding it onto another node.

use super::Grid;
use crate::error::{GridError, Result};

impl Grid {
    /// Fold a multi-dimensional index into a flat index.
    ///
    /// Fails with [`GridError::IndexOutOfRange`] if any component reaches
    /// its axis node count.
    ///
    /// # Panics
    /// Panics if `idx.len() != self.dim()`.
    pub fn flat_index(&self, idx: &[usize]) -> Result<usize> {
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
        Ok(self.fold_index(idx))
    }

    /// Unfold a flat index into a multi-dimensional index.
    ///
    /// Fails with [`GridError::FlatIndexOutOfRange`] if `flat` reaches the
    /// total node count.
    pub fn dim_index(&self, flat: usize) -> Result<Vec<usize>> {
        if flat >= self.node_count {
            return Err(GridError::FlatIndexOutOfRange {
                index: flat,
                count: self.node_count,
            });
        }
        Ok(self.unfold_index(flat))
    }

    /// Fold without range checks; callers guarantee validity.
    #[inline]
    pub(crate) fn fold_index(&self, idx: &[usize]) -> usize {
        debug_assert_eq!(idx.len(), self.dim());
        idx.iter()
            .zip(self.cum_counts.iter())
            .map(|(&i, &c)| i * c)
            .sum()
    }

    /// Unfold without range checks; callers guarantee `flat < node_count`.
    #[inline]
    pub(crate) fn unfold_index(&self, flat: usize) -> Vec<usize> {
        debug_assert!(flat < self.node_count);
        let mut rest = flat;
        let mut idx = Vec::with_capacity(self.dim());
        for &count in &self.config.node_counts {
            idx.push(rest % count);
            rest /= count;
        }
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn grid_3x4x5() -> Grid {
        Grid::new(GridConfig {
            node_counts: vec![3, 4, 5],
            min: vec![0.0, 0.0, 0.0],
            max: vec![1.0, 1.0, 1.0],
        })
        .unwrap()
    }

    #[test]
    fn test_axis_zero_varies_fastest() {
        let grid = grid_3x4x5();
        assert_eq!(grid.flat_index(&[0, 0, 0]).unwrap(), 0);
        assert_eq!(grid.flat_index(&[1, 0, 0]).unwrap(), 1);
        assert_eq!(grid.flat_index(&[0, 1, 0]).unwrap(), 3);
        assert_eq!(grid.flat_index(&[0, 0, 1]).unwrap(), 12);
        assert_eq!(grid.flat_index(&[2, 3, 4]).unwrap(), 59);
    }

    #[test]
    fn test_round_trip_exhaustive() {
        let grid = grid_3x4x5();
        for flat in 0..grid.node_count() {
            let idx = grid.dim_index(flat).unwrap();
            assert_eq!(grid.flat_index(&idx).unwrap(), flat);
        }
    }

    #[test]
    fn test_round_trip_dim_first() {
        let grid = grid_3x4x5();
        for z in 0..5 {
            for y in 0..4 {
                for x in 0..3 {
                    let idx = vec![x, y, z];
                    let flat = grid.flat_index(&idx).unwrap();
                    assert_eq!(grid.dim_index(flat).unwrap(), idx);
                }
            }
        }
    }

    #[test]
    fn test_bijection_covers_all_nodes() {
        let grid = grid_3x4x5();
        let mut seen = vec![false; grid.node_count()];
        for flat in 0..grid.node_count() {
            let idx = grid.dim_index(flat).unwrap();
            let folded = grid.flat_index(&idx).unwrap();
            assert!(!seen[folded]);
            seen[folded] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_out_of_range_component_fails() {
        let grid = grid_3x4x5();
        let result = grid.flat_index(&[3, 0, 0]);
        assert!(matches!(
            result,
            Err(GridError::IndexOutOfRange {
                axis: 0,
                index: 3,
                count: 3
            })
        ));

        let result = grid.flat_index(&[0, 0, 5]);
        assert!(matches!(
            result,
            Err(GridError::IndexOutOfRange { axis: 2, .. })
        ));
    }

    #[test]
    fn test_out_of_range_flat_fails() {
        let grid = grid_3x4x5();
        assert!(grid.dim_index(59).is_ok());
        assert!(matches!(
            grid.dim_index(60),
            Err(GridError::FlatIndexOutOfRange {
                index: 60,
                count: 60
            })
        ));
    }

    #[test]
    #[should_panic(expected = "index dimensionality mismatch")]
    fn test_wrong_length_panics() {
        let grid = grid_3x4x5();
        let _ = grid.flat_index(&[0, 0]);
    }
}

//! Grid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Configuration of a uniform N-dimensional grid.
///
/// Describes the lattice before rasterization: per-axis node counts and
/// per-axis `[min, max]` bounds. Dimensionality is the length of
/// `node_counts`; `min` and `max` must have the same length. Build a
/// [`Grid`](crate::Grid) from it with [`Grid::new`](crate::Grid::new),
/// which validates and rasterizes in one step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Nodes per axis; each entry must be at least 2.
    pub node_counts: Vec<usize>,
    /// Lower bound per axis.
    pub min: Vec<f64>,
    /// Upper bound per axis; must exceed `min` on every axis.
    pub max: Vec<f64>,
}

impl GridConfig {
    /// Create a config with `dim` axes, two nodes per axis over `[0, 1]`.
    pub fn new(dim: usize) -> Self {
        Self {
            node_counts: vec![2; dim],
            min: vec![0.0; dim],
            max: vec![1.0; dim],
        }
    }

    /// Create a uniform config: same node count and bounds on every axis.
    pub fn uniform(dim: usize, nodes_per_axis: usize, min: f64, max: f64) -> Self {
        Self {
            node_counts: vec![nodes_per_axis; dim],
            min: vec![min; dim],
            max: vec![max; dim],
        }
    }

    /// Number of axes.
    #[inline]
    pub fn dim(&self) -> usize {
        self.node_counts.len()
    }

    /// Total number of nodes the rasterized grid will have.
    pub fn node_count(&self) -> usize {
        self.node_counts.iter().product()
    }

    /// Check the configuration for degenerate values.
    ///
    /// Rejects zero dimensionality, mismatched vector lengths, fewer than
    /// two nodes on any axis, non-finite bounds, and `min >= max`.
    pub fn validate(&self) -> Result<()> {
        if self.node_counts.is_empty() {
            return Err(GridError::Config(
                "dimensionality must be at least 1".to_string(),
            ));
        }
        if self.min.len() != self.dim() || self.max.len() != self.dim() {
            return Err(GridError::Config(format!(
                "axis count mismatch: {} node counts, {} min bounds, {} max bounds",
                self.node_counts.len(),
                self.min.len(),
                self.max.len()
            )));
        }
        for d in 0..self.dim() {
            if self.node_counts[d] < 2 {
                return Err(GridError::Config(format!(
                    "axis {}: node count {} is below the minimum of 2",
                    d, self.node_counts[d]
                )));
            }
            if !self.min[d].is_finite() || !self.max[d].is_finite() {
                return Err(GridError::Config(format!(
                    "axis {}: bounds must be finite",
                    d
                )));
            }
            if self.min[d] >= self.max[d] {
                return Err(GridError::Config(format!(
                    "axis {}: min {} is not below max {}",
                    d, self.min[d], self.max[d]
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| GridError::Parse(e.to_string()))
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Serialize configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| GridError::Parse(e.to_string()))
    }
}

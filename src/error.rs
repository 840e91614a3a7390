//! Error types for jaala-grid.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum GridError {
    /// Degenerate configuration: zero dimensionality, mismatched vector
    /// lengths, fewer than two nodes on an axis, or inverted bounds.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A multi-dimensional index component reached its axis node count.
    #[error("index {index} out of range on axis {axis} ({count} nodes)")]
    IndexOutOfRange {
        /// Axis on which the component was out of range.
        axis: usize,
        /// The offending index component.
        index: usize,
        /// Node count on that axis.
        count: usize,
    },

    /// A flat index reached the total node count.
    #[error("flat index {index} out of range ({count} nodes)")]
    FlatIndexOutOfRange {
        /// The offending flat index.
        index: usize,
        /// Total node count of the grid.
        count: usize,
    },

    /// File path rejected before any I/O was attempted.
    #[error("invalid file path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// Underlying file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed .jgrid data.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// The .jgrid file was written by an incompatible format version.
    #[error("version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Format version this build understands.
        expected: u8,
        /// Format version found in the file.
        found: u8,
    },

    /// YAML (de)serialization failure.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

//! Native .jgrid binary format for grid persistence.
//!
//! Format:
//! - Magic: "JAALA" (5 bytes)
//! - Version: u8 (1 byte)
//! - Dimension count: u32 (4 bytes, little-endian)
//! - Min bounds: f64 per axis (little-endian)
//! - Max bounds: f64 per axis (little-endian)
//! - Node counts: u32 per axis (little-endian)
//!
//! Node coordinate tables are never stored; loading rebuilds the grid from
//! the decoded configuration, which re-derives the raster.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::grid::Grid;

/// Magic bytes for the .jgrid format.
const MAGIC: &[u8; 5] = b"JAALA";

/// Current format version.
const VERSION: u8 = 1;

/// Upper bound on the dimension count accepted from a file. Anything
/// larger is corrupt data, not a real grid.
const MAX_DIM: u32 = 4096;

/// File extension used by [`save_grid`] and [`load_grid`].
pub const GRID_EXTENSION: &str = "jgrid";

/// Save a grid to a .jgrid file.
///
/// The extension of `path` is replaced with `.jgrid`. An empty path is
/// rejected before any I/O is attempted; on failure no file is written.
pub fn save_grid(grid: &Grid, path: &Path) -> Result<()> {
    let path = grid_path(path, "save")?;
    let mut file = std::fs::File::create(&path)?;
    write_grid(grid, &mut file)
}

/// Load a grid from a .jgrid file and rasterize it.
///
/// The extension of `path` is replaced with `.jgrid`. An empty path is
/// rejected before any I/O is attempted; on failure no grid is produced.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let path = grid_path(path, "load")?;
    let mut file = std::fs::File::open(&path)?;
    read_grid(&mut file)
}

/// Validate a user-supplied path and force the .jgrid extension.
fn grid_path(path: &Path, op: &str) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        log::warn!("grid {op}: empty file path");
        return Err(GridError::InvalidPath(path.to_path_buf()));
    }
    Ok(path.with_extension(GRID_EXTENSION))
}

/// Write a grid header to a writer in .jgrid format.
pub fn write_grid<W: Write>(grid: &Grid, writer: &mut W) -> Result<()> {
    let config = grid.config();

    let mut header = Vec::with_capacity(10 + config.dim() * 20);
    header.extend_from_slice(MAGIC);
    header.push(VERSION);
    header.extend_from_slice(&(config.dim() as u32).to_le_bytes());
    for &m in &config.min {
        header.extend_from_slice(&m.to_le_bytes());
    }
    for &m in &config.max {
        header.extend_from_slice(&m.to_le_bytes());
    }
    for &n in &config.node_counts {
        header.extend_from_slice(&(n as u32).to_le_bytes());
    }

    writer.write_all(&header)?;
    Ok(())
}

/// Read a grid from a reader in .jgrid format and rasterize it.
pub fn read_grid<R: Read>(reader: &mut R) -> Result<Grid> {
    let mut magic = [0u8; 5];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(GridError::InvalidFormat("invalid magic bytes".to_string()));
    }

    let mut version = [0u8; 1];
    reader.read_exact(&mut version)?;
    if version[0] != VERSION {
        return Err(GridError::VersionMismatch {
            expected: VERSION,
            found: version[0],
        });
    }

    let dim = read_u32(reader)?;
    if dim == 0 || dim > MAX_DIM {
        return Err(GridError::InvalidFormat(format!(
            "implausible dimension count {dim}"
        )));
    }
    let dim = dim as usize;

    let mut config = GridConfig::new(dim);
    for d in 0..dim {
        config.min[d] = read_f64(reader)?;
    }
    for d in 0..dim {
        config.max[d] = read_f64(reader)?;
    }
    for d in 0..dim {
        config.node_counts[d] = read_u32(reader)? as usize;
    }

    Grid::new(config)
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_f64<R: Read>(reader: &mut R) -> Result<f64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn test_grid() -> Grid {
        Grid::new(GridConfig {
            node_counts: vec![3, 4, 5],
            min: vec![-1.0, 0.0, 2.5],
            max: vec![1.0, 6.0, 3.5],
        })
        .unwrap()
    }

    #[test]
    fn test_round_trip() {
        let grid = test_grid();

        let mut buffer = Vec::new();
        write_grid(&grid, &mut buffer).unwrap();
        // Header is magic + version + dim + 3 axes of (min, max, count).
        assert_eq!(buffer.len(), 5 + 1 + 4 + 3 * (8 + 8 + 4));

        let mut cursor = Cursor::new(buffer);
        let loaded = read_grid(&mut cursor).unwrap();

        assert_eq!(loaded.config(), grid.config());
        assert_eq!(loaded.node_count(), grid.node_count());
        assert_eq!(loaded.stride(), grid.stride());
        assert_eq!(loaded.axis_coordinates(2), grid.axis_coordinates(2));
    }

    #[test]
    fn test_invalid_magic() {
        let mut data = Vec::new();
        data.extend_from_slice(b"WRONG");
        data.push(VERSION);
        data.extend_from_slice(&1u32.to_le_bytes());

        let mut cursor = Cursor::new(data);
        assert!(matches!(
            read_grid(&mut cursor),
            Err(GridError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_version_mismatch() {
        let mut data = Vec::new();
        data.extend_from_slice(MAGIC);
        data.push(99);
        data.extend_from_slice(&1u32.to_le_bytes());

        let mut cursor = Cursor::new(data);
        assert!(matches!(
            read_grid(&mut cursor),
            Err(GridError::VersionMismatch {
                expected: VERSION,
                found: 99
            })
        ));
    }

    #[test]
    fn test_truncated_header() {
        let grid = test_grid();
        let mut buffer = Vec::new();
        write_grid(&grid, &mut buffer).unwrap();
        buffer.truncate(buffer.len() - 7);

        let mut cursor = Cursor::new(buffer);
        assert!(matches!(read_grid(&mut cursor), Err(GridError::Io(_))));
    }

    #[test]
    fn test_implausible_dimension_count() {
        let mut data = Vec::new();
        data.extend_from_slice(MAGIC);
        data.push(VERSION);
        data.extend_from_slice(&u32::MAX.to_le_bytes());

        let mut cursor = Cursor::new(data);
        assert!(matches!(
            read_grid(&mut cursor),
            Err(GridError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_path_rejected() {
        let grid = test_grid();
        assert!(matches!(
            save_grid(&grid, Path::new("")),
            Err(GridError::InvalidPath(_))
        ));
        assert!(matches!(
            load_grid(Path::new("")),
            Err(GridError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_extension_is_forced() {
        let grid = test_grid();
        let dir = TempDir::new().unwrap();

        save_grid(&grid, &dir.path().join("map.bin")).unwrap();
        assert!(dir.path().join("map.jgrid").exists());
        assert!(!dir.path().join("map.bin").exists());

        // Loading by the original name finds the .jgrid file.
        let loaded = load_grid(&dir.path().join("map.bin")).unwrap();
        assert_eq!(loaded.config(), grid.config());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_grid(&dir.path().join("nope")),
            Err(GridError::Io(_))
        ));
    }
}

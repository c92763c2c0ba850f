//! Plain-text grid format.
//!
//! ```text
//! 0000000000
//! 0010000000
//! 0001000000
//! 0111000000
//! ```
//!
//! One row per line, `'1'` for a live cell and any other character for a dead
//! one. Rows and columns past the grid dimension are ignored; missing rows or
//! short lines leave the corresponding cells untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::error;

use super::Grid;

/// Character marking a live cell.
pub const ALIVE_DIGIT: char = '1';

/// Character written for a dead cell.
pub const DEAD_DIGIT: char = '0';

/// Failure to read a grid text source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read grid file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read all rows of a grid file.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD and so load as dead cells.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect())
}

/// Load a grid file into `grid`.
///
/// The whole file is read before any cell is touched, so on error the grid is
/// left exactly as it was.
pub fn load_file<P: AsRef<Path>>(grid: &mut Grid, path: P) -> Result<(), LoadError> {
    let lines = read_lines(path)?;
    grid.load_from_text(&lines);
    Ok(())
}

/// Load a grid file, logging any failure instead of returning it.
///
/// Returns `true` if the grid was populated.
pub fn load_file_or_report<P: AsRef<Path>>(grid: &mut Grid, path: P) -> bool {
    match load_file(grid, path) {
        Ok(()) => true,
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

/// Encode the current generation in the text format.
pub fn encode(grid: &Grid) -> String {
    grid.render_with(ALIVE_DIGIT, DEAD_DIGIT)
}

/// Write the current generation to `path` in the text format.
pub fn save_file<P: AsRef<Path>>(grid: &Grid, path: P) -> io::Result<()> {
    fs::write(path, encode(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix");
        fs::write(&path, "010\n010\n010\n").unwrap();

        let mut grid = Grid::new(3).unwrap();
        load_file(&mut grid, &path).unwrap();

        assert_eq!(grid.population(), 3);
        assert!(grid.get(0, 1) && grid.get(1, 1) && grid.get(2, 1));
    }

    #[test]
    fn test_load_file_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix");
        fs::write(&path, "11\r\n01\r\n").unwrap();

        let mut grid = Grid::new(2).unwrap();
        load_file(&mut grid, &path).unwrap();
        assert_eq!(grid.rows(), vec![vec![true, true], vec![false, true]]);
    }

    #[test]
    fn test_load_file_invalid_utf8_is_dead() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix");
        fs::write(&path, b"1\xE91\n111\n").unwrap();

        let mut grid = Grid::new(3).unwrap();
        load_file(&mut grid, &path).unwrap();

        assert_eq!(
            grid.rows(),
            vec![
                vec![true, false, true],
                vec![true, true, true],
                vec![false, false, false],
            ]
        );
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn test_missing_file_leaves_grid_untouched() {
        let dir = tempdir().unwrap();
        let mut grid = Grid::new(4).unwrap();
        grid.load_from_text(["1100", "1100"]);
        let before = grid.clone();

        let result = load_file(&mut grid, dir.path().join("missing"));
        assert!(matches!(result, Err(LoadError::Read { .. })));
        assert_eq!(grid, before);

        assert!(!load_file_or_report(&mut grid, dir.path().join("missing")));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_error_names_path() {
        let err = read_lines("/nonexistent/grid/file").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/grid/file"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved");

        let mut original = Grid::new(5).unwrap();
        original.load_from_text(["01000", "00100", "11100"]);
        original.run(3);
        save_file(&original, &path).unwrap();

        let mut restored = Grid::new(5).unwrap();
        assert!(load_file_or_report(&mut restored, &path));
        assert_eq!(restored.rows(), original.rows());
        assert_eq!(restored.next(), original.next());
    }

    #[test]
    fn test_encode_format() {
        let mut grid = Grid::new(3).unwrap();
        grid.load_from_text(["1", "01", "001"]);
        assert_eq!(encode(&grid), "100\n010\n001\n");
    }
}

//! Read text input as lines, byte grids, or blank-line separated blocks.
//!
//! Line endings (`\n` or `\r\n`) are stripped. The `*_from` variants work on
//! any [`BufRead`]; the path variants open the file and attach the path to
//! any error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading input files.
#[derive(Debug, Error)]
pub enum LinesError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read every line from `reader`.
pub fn lines_from<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Read every line from `reader` as raw bytes.
pub fn grid_from<R: BufRead>(reader: R) -> io::Result<Vec<Vec<u8>>> {
    reader
        .lines()
        .map(|line| line.map(String::into_bytes))
        .collect()
}

/// Split lines into blocks separated by empty lines.
///
/// Every empty line closes the current block, so two consecutive empty lines
/// produce an empty block. A trailing block without a closing empty line is
/// kept; a trailing empty line does not add an empty block.
pub fn split_blocks(lines: Vec<String>) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in lines {
        if line.is_empty() {
            blocks.push(std::mem::take(&mut current));
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Read blank-line separated blocks from `reader`.
pub fn blocks_from<R: BufRead>(reader: R) -> io::Result<Vec<Vec<String>>> {
    lines_from(reader).map(split_blocks)
}

fn open(path: &Path) -> Result<BufReader<File>, LinesError> {
    tracing::debug!(path = %path.display(), "opening input");
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LinesError::Io { path: path.to_path_buf(), source })
}

fn with_path<T>(path: &Path, result: io::Result<T>) -> Result<T, LinesError> {
    result.map_err(|source| LinesError::Io { path: path.to_path_buf(), source })
}

/// Read every line of the file at `path`.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LinesError> {
    let path = path.as_ref();
    let lines = with_path(path, lines_from(open(path)?))?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "read lines");
    Ok(lines)
}

/// Read the file at `path` as a grid of bytes, one row per line.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>, LinesError> {
    let path = path.as_ref();
    with_path(path, grid_from(open(path)?))
}

/// Read the file at `path` as blank-line separated blocks.
pub fn read_blocks<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, LinesError> {
    read_lines(path).map(split_blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lines_from_strips_endings() {
        let lines = lines_from(Cursor::new("a\r\nbc\n\nd")).unwrap();
        assert_eq!(lines, strings(&["a", "bc", "", "d"]));
    }

    #[test]
    fn test_grid_from() {
        let grid = grid_from(Cursor::new("#.#\n..#\n")).unwrap();
        assert_eq!(grid, vec![b"#.#".to_vec(), b"..#".to_vec()]);
    }

    #[test]
    fn test_split_blocks() {
        let blocks = split_blocks(strings(&["1", "2", "", "3", "", "", "4", "5"]));
        assert_eq!(
            blocks,
            vec![strings(&["1", "2"]), strings(&["3"]), vec![], strings(&["4", "5"])]
        );
    }

    #[test]
    fn test_split_blocks_trailing_blank() {
        let blocks = split_blocks(strings(&["1", ""]));
        assert_eq!(blocks, vec![strings(&["1"])]);
        assert!(split_blocks(Vec::new()).is_empty());
    }

    #[test]
    fn test_read_file_variants() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1=\n12\n\n2=0=\n").unwrap();

        assert_eq!(read_lines(file.path()).unwrap(), strings(&["1=", "12", "", "2=0="]));
        assert_eq!(read_grid(file.path()).unwrap()[1], b"12".to_vec());
        assert_eq!(
            read_blocks(file.path()).unwrap(),
            vec![strings(&["1=", "12"]), strings(&["2=0="])]
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = read_lines(&missing).unwrap_err();
        let LinesError::Io { path, source } = &err;
        assert_eq!(path, &missing);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.txt"));
    }
}

//! File boundary: read whole file then decode, encode whole matrix then write

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use num_traits::Zero;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::matrix::{Config, Element, SparseMatrix};

/// Loads a matrix from `path` using the default configuration
pub fn load<T: Element, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
    load_with_config(path, &Config::default())
}

/// Loads a matrix from `path`
///
/// A missing or unreadable file yields [`Error::NotFound`]; malformed content,
/// including bytes that are not valid UTF-8, yields [`Error::Format`].
pub fn load_with_config<T: Element, P: AsRef<Path>>(
    path: P,
    config: &Config,
) -> Result<SparseMatrix<T>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes)
        .map_err(|e| invalid_utf8(e.as_bytes(), e.utf8_error()))?;

    super::decode_with_config(&text, config)
}

/// Format error pointing at the line holding the first invalid byte
fn invalid_utf8(bytes: &[u8], error: std::str::Utf8Error) -> Error {
    let valid = &bytes[..error.valid_up_to()];
    let line_start = valid.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;

    // The prefix up to the bad byte is valid UTF-8 by construction
    let content = String::from_utf8_lossy(&valid[line_start..]);
    Error::format(line, &content, "invalid UTF-8")
}

/// Saves `matrix` to `path`
///
/// The full text is rendered first and written to a temporary file next to
/// the destination, which is then renamed over it. A failed save leaves any
/// previous file at `path` untouched.
pub fn save<T, P>(matrix: &SparseMatrix<T>, path: P) -> Result<()>
where
    T: Display + Zero,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let io_err = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let text = super::encode(matrix);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(text.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}

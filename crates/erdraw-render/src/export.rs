//! Writing rendered markup to disk.

use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write rendered SVG markup to `path`.
///
/// The host decides when an export happens; this only performs the write.
pub fn write_svg(path: impl AsRef<Path>, markup: &str) -> Result<(), ExportError> {
    let path = path.as_ref();
    fs::write(path, markup).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Exported SVG to: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_file_matches_markup() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("diagram.svg");
        let markup = "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>\n";

        write_svg(&path, markup).expect("write");
        let contents = fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, markup);
    }

    #[test]
    fn test_missing_directory_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("diagram.svg");

        let err = write_svg(&path, "<svg/>").expect_err("directory does not exist");
        match err {
            ExportError::Write { path: err_path, .. } => assert_eq!(err_path, path),
        }
    }
}

//! File I/O primitives with consistent error handling.

use crate::core::encoding::Encoding;
use crate::core::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read file contents in the given encoding.
///
/// Missing files map to `file.not_found` so callers can tell a skippable
/// target from a real I/O failure; everything else maps to
/// `Error::internal_io` with the operation label.
pub fn read_file(path: &Path, encoding: Encoding, operation: &str) -> Result<String> {
    // UTF-8 is the only encoding detectors currently report; other
    // encodings would decode here.
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
        ErrorKind::InvalidData => Error::internal_io(
            format!("{} is not valid {}", path.display(), encoding),
            Some(operation.to_string()),
        ),
        _ => Error::internal_io(e.to_string(), Some(operation.to_string())),
    })
}

/// Write content to a file in the given encoding.
///
/// Truncates in place so the target keeps its permissions.
pub fn write_file(path: &Path, content: &str, encoding: Encoding, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} ({})", operation, encoding))))
}

/// Copy a file, preserving what `fs::copy` preserves (permission bits).
pub fn copy_file(src: &Path, dst: &Path, operation: &str) -> Result<()> {
    fs::copy(src, dst)
        .map(|_| ())
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Move a file by rename. Callers keep source and destination in the same
/// directory, so the rename atomically replaces the destination.
pub fn rename_file(src: &Path, dst: &Path, operation: &str) -> Result<()> {
    fs::rename(src, dst)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), Encoding::UTF8, "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_maps_missing_file_to_not_found() {
        let result = read_file(Path::new("/nonexistent/path.txt"), Encoding::UTF8, "test read");
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn write_file_round_trips() {
        let temp = NamedTempFile::new().unwrap();
        write_file(temp.path(), "new content", Encoding::UTF8, "test write").unwrap();

        let content = read_file(temp.path(), Encoding::UTF8, "test read").unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(
            Path::new("/nonexistent/dir/file.txt"),
            "content",
            Encoding::UTF8,
            "test write",
        );
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalIoError);
    }

    #[test]
    fn copy_file_duplicates_content() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "payload").unwrap();

        copy_file(&src, &dst, "test copy").unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "payload");
        assert!(src.exists());
    }

    #[test]
    fn rename_file_consumes_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "payload").unwrap();
        fs::write(&dst, "old").unwrap();

        rename_file(&src, &dst, "test rename").unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "payload");
        assert!(!src.exists());
    }
}

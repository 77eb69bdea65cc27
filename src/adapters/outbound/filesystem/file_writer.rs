use crate::ports::outbound::{LicenseOutputWriter, OutputPresenter};
use crate::shared::error::AttributionError;
use crate::shared::security::check_output_target;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// FileSystemWriter adapter for the generated license files
///
/// This adapter implements the LicenseOutputWriter port. A file is only
/// rewritten when its bytes differ from the candidate content, so unchanged
/// outputs keep their timestamps.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
        AttributionError::FileWrite {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseOutputWriter for FileSystemWriter {
    fn write_if_changed(&self, path: &Path, content: &[u8]) -> Result<bool> {
        check_output_target(path)?;

        match fs::read(path) {
            Ok(existing) if existing == content => return Ok(false),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(Self::write_error(path, format!("Failed to read existing file: {}", e))),
        }

        if let Some(parent) = path.parent() {
            if parent != Path::new("") {
                fs::create_dir_all(parent).map_err(|e| {
                    Self::write_error(path, format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        fs::write(path, content).map_err(|e| Self::write_error(path, e.to_string()))?;
        Ok(true)
    }

    fn remove_if_exists(&self, path: &Path) -> Result<bool> {
        // A symlink left at an output path is removed, never followed
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Self::write_error(path, format!("Failed to delete file: {}", e))),
        }
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_if_changed_creates_file_and_parents() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("build/licensing/LICENSE");

        let writer = FileSystemWriter::new();
        let changed = writer.write_if_changed(&output_path, b"content").unwrap();

        assert!(changed);
        assert_eq!(fs::read(&output_path).unwrap(), b"content");
    }

    #[test]
    fn test_write_if_changed_skips_identical_content() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("LICENSE");
        fs::write(&output_path, b"content").unwrap();

        let writer = FileSystemWriter::new();
        assert!(!writer.write_if_changed(&output_path, b"content").unwrap());
    }

    #[test]
    fn test_write_if_changed_compares_bytes_not_size() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("LICENSE");
        fs::write(&output_path, b"aaaa").unwrap();

        let writer = FileSystemWriter::new();
        assert!(writer.write_if_changed(&output_path, b"bbbb").unwrap());
        assert_eq!(fs::read(&output_path).unwrap(), b"bbbb");
    }

    #[test]
    fn test_write_if_changed_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemWriter::new();
        assert!(writer.write_if_changed(temp_dir.path(), b"content").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_if_changed_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("elsewhere");
        let link = temp_dir.path().join("LICENSE");
        fs::write(&target, b"original").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let writer = FileSystemWriter::new();
        let result = writer.write_if_changed(&link, b"content");

        assert!(result.is_err());
        assert_eq!(fs::read(&target).unwrap(), b"original");
    }

    #[test]
    fn test_remove_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("LICENSE.blob");
        fs::write(&output_path, b"blob").unwrap();

        let writer = FileSystemWriter::new();
        assert!(writer.remove_if_exists(&output_path).unwrap());
        assert!(!output_path.exists());
        assert!(!writer.remove_if_exists(&output_path).unwrap());
    }

    #[test]
    fn test_stdout_presenter() {
        let presenter = StdoutPresenter::new();
        let result = presenter.present("test output");
        assert!(result.is_ok());
    }
}

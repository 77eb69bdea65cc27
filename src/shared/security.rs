use crate::shared::error::AttributionError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a config or dependency-graph file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum size of a dependency archive opened during the scan (512 MiB)
pub const MAX_ARCHIVE_SIZE: u64 = 512 * 1024 * 1024;

/// Maximum uncompressed size of an embedded `LICENSE.blob` entry (16 MiB)
pub const MAX_BLOB_ENTRY_SIZE: u64 = 16 * 1024 * 1024;

/// Checks that `path` is a regular file no larger than `max_size` and
/// returns its size.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read (missing file, permissions)
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `max_size`
pub fn check_input_file(path: &Path, description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| AttributionError::FileRead {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(AttributionError::Security {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Point the option at the real file instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let size = metadata.len();
    if size > max_size {
        return Err(AttributionError::Security {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes). Maximum allowed size is {} bytes",
                description, size, max_size
            ),
            hint: "Large inputs are refused to keep memory use bounded".to_string(),
        }
        .into());
    }

    Ok(size)
}

/// Reads a whole input file after [`check_input_file`] accepted it
pub fn read_input_file(path: &Path, description: &str, max_size: u64) -> Result<Vec<u8>> {
    check_input_file(path, description, max_size)?;
    fs::read(path).map_err(|e| {
        AttributionError::FileRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Refuses to write through an existing symbolic link at `path`
///
/// A path that does not exist yet is accepted.
pub fn check_output_target(path: &Path) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    if metadata.is_symlink() {
        return Err(AttributionError::Security {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Remove the link so the license file can be written in place".to_string(),
        }
        .into());
    }

    if metadata.is_dir() {
        return Err(AttributionError::FileWrite {
            path: path.to_path_buf(),
            details: "Output path is a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

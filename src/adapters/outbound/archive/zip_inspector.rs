use crate::ports::outbound::{ArtifactInspector, LICENSE_BLOB_ENTRY};
use crate::shared::error::AttributionError;
use crate::shared::security::{check_input_file, MAX_ARCHIVE_SIZE, MAX_BLOB_ENTRY_SIZE};
use crate::shared::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// ZipArtifactInspector adapter for jar/zip dependency artifacts
///
/// This adapter implements the ArtifactInspector port. Artifacts are
/// opened read-only, one at a time, and closed before the call returns.
pub struct ZipArtifactInspector;

impl ZipArtifactInspector {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, artifact: &Path) -> Result<ZipArchive<File>> {
        check_input_file(artifact, "archive", MAX_ARCHIVE_SIZE)?;

        let file = File::open(artifact).map_err(|e| archive_error(artifact, e))?;
        let archive = ZipArchive::new(file).map_err(|e| archive_error(artifact, e))?;
        Ok(archive)
    }
}

impl Default for ZipArtifactInspector {
    fn default() -> Self {
        Self::new()
    }
}

fn archive_error(artifact: &Path, error: impl std::fmt::Display) -> anyhow::Error {
    AttributionError::ArchiveRead {
        path: artifact.to_path_buf(),
        details: error.to_string(),
    }
    .into()
}

impl ArtifactInspector for ZipArtifactInspector {
    fn first_entry_year(&self, artifact: &Path) -> Result<Option<i32>> {
        let mut archive = self.open(artifact)?;
        if archive.is_empty() {
            return Ok(None);
        }

        let entry = archive.by_index(0).map_err(|e| archive_error(artifact, e))?;
        Ok(entry
            .last_modified()
            .map(|timestamp| i32::from(timestamp.year())))
    }

    fn read_license_blob(&self, artifact: &Path) -> Result<Option<Vec<u8>>> {
        let mut archive = self.open(artifact)?;

        let entry = match archive.by_name(LICENSE_BLOB_ENTRY) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(archive_error(artifact, e)),
        };

        if entry.size() > MAX_BLOB_ENTRY_SIZE {
            return Err(archive_error(
                artifact,
                format!(
                    "{} is too large ({} bytes, limit {} bytes)",
                    LICENSE_BLOB_ENTRY,
                    entry.size(),
                    MAX_BLOB_ENTRY_SIZE
                ),
            ));
        }

        // The declared size is not trusted; the read itself is bounded too
        let mut blob = Vec::with_capacity(entry.size() as usize);
        entry
            .take(MAX_BLOB_ENTRY_SIZE + 1)
            .read_to_end(&mut blob)
            .map_err(|e| archive_error(artifact, e))?;
        if blob.len() as u64 > MAX_BLOB_ENTRY_SIZE {
            return Err(archive_error(
                artifact,
                format!("{} exceeds {} bytes", LICENSE_BLOB_ENTRY, MAX_BLOB_ENTRY_SIZE),
            ));
        }

        Ok(Some(blob))
    }
}

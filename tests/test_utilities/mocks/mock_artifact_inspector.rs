use std::collections::HashMap;
use std::path::{Path, PathBuf};
use license_attribution::prelude::*;

/// Mock ArtifactInspector for testing
///
/// Unregistered artifacts behave like archives without a date or blob;
/// broken ones fail every call.
#[derive(Default)]
pub struct MockArtifactInspector {
    years: HashMap<PathBuf, i32>,
    blobs: HashMap<PathBuf, Vec<u8>>,
    broken: Vec<PathBuf>,
}

impl MockArtifactInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, artifact: &str, year: i32) -> Self {
        self.years.insert(PathBuf::from(artifact), year);
        self
    }

    pub fn with_blob(mut self, artifact: &str, blob: Vec<u8>) -> Self {
        self.blobs.insert(PathBuf::from(artifact), blob);
        self
    }

    pub fn with_broken(mut self, artifact: &str) -> Self {
        self.broken.push(PathBuf::from(artifact));
        self
    }

    fn check(&self, artifact: &Path) -> Result<()> {
        if self.broken.iter().any(|broken| broken == artifact) {
            anyhow::bail!("Mock archive read failure: {}", artifact.display());
        }
        Ok(())
    }
}

impl ArtifactInspector for MockArtifactInspector {
    fn first_entry_year(&self, artifact: &Path) -> Result<Option<i32>> {
        self.check(artifact)?;
        Ok(self.years.get(artifact).copied())
    }

    fn read_license_blob(&self, artifact: &Path) -> Result<Option<Vec<u8>>> {
        self.check(artifact)?;
        Ok(self.blobs.get(artifact).cloned())
    }
}

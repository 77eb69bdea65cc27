use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use license_attribution::prelude::*;

/// Mock LicenseOutputWriter keeping files in memory
#[derive(Default, Clone)]
pub struct MockOutputWriter {
    pub files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
}

impl MockOutputWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer pre-populated with an existing file
    pub fn with_file(self, path: &str, content: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_vec());
        self
    }

    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).map(|bytes| String::from_utf8(bytes).unwrap())
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl LicenseOutputWriter for MockOutputWriter {
    fn write_if_changed(&self, path: &Path, content: &[u8]) -> Result<bool> {
        let mut files = self.files.lock().unwrap();
        if files.get(path).map(Vec::as_slice) == Some(content) {
            return Ok(false);
        }
        files.insert(path.to_path_buf(), content.to_vec());
        Ok(true)
    }

    fn remove_if_exists(&self, path: &Path) -> Result<bool> {
        Ok(self.files.lock().unwrap().remove(path).is_some())
    }
}

use crate::attribution::domain::License;
use crate::ports::outbound::LicenseTextSource;
use crate::shared::security::{read_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use anyhow::Context;
use std::path::PathBuf;

/// BundledLicenseTexts adapter for license text files
///
/// Serves the texts compiled into the binary. When an override directory is
/// configured, a file in it named like the license's text file takes
/// precedence over the bundled copy.
pub struct BundledLicenseTexts {
    override_dir: Option<PathBuf>,
}

impl BundledLicenseTexts {
    pub fn new() -> Self {
        Self { override_dir: None }
    }

    pub fn with_override_dir(override_dir: PathBuf) -> Self {
        Self {
            override_dir: Some(override_dir),
        }
    }
}

impl Default for BundledLicenseTexts {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseTextSource for BundledLicenseTexts {
    fn license_text(&self, license: License) -> Result<Vec<u8>> {
        let file_name = license.license_file();
        if file_name.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(dir) = &self.override_dir {
            let path = dir.join(file_name);
            if path.exists() {
                return read_input_file(&path, "license text", MAX_FILE_SIZE).with_context(|| {
                    format!("Failed to load the {} license text override", license.id())
                });
            }
        }

        Ok(license.license_text().to_vec())
    }
}

use license_attribution::prelude::*;

/// Mock LicenseTextSource returning a short marker text per license
///
/// Licenses without a text file, and those listed as missing, yield no text.
#[derive(Default)]
pub struct MockTextSource {
    missing: Vec<License>,
}

impl MockTextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_text(mut self, license: License) -> Self {
        self.missing.push(license);
        self
    }
}

impl LicenseTextSource for MockTextSource {
    fn license_text(&self, license: License) -> Result<Vec<u8>> {
        if license.license_file().is_empty() || self.missing.contains(&license) {
            return Ok(Vec::new());
        }
        Ok(format!("text of {}\n", license.id()).into_bytes())
    }
}

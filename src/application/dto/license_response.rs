use super::{PrimaryLicenseMetadata, ScanReport};
use std::path::PathBuf;

/// LicenseResponse - Internal response DTO from the license generation use case
#[derive(Debug, Clone)]
pub struct LicenseResponse {
    /// Every generated file, build directory files first
    pub generated_files: Vec<PathBuf>,
    /// Number of files created or changed by this run
    pub changed_files: usize,
    /// Classification of the scanned dependencies
    pub scan_report: ScanReport,
    /// License metadata of the primary license, absent when none is declared
    pub metadata: Option<PrimaryLicenseMetadata>,
}

impl LicenseResponse {
    /// True if this run created or changed at least one file
    pub fn did_work(&self) -> bool {
        self.changed_files > 0
    }
}

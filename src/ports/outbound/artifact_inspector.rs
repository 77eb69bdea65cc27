use crate::shared::Result;
use std::path::Path;

/// Name of the embedded license data entry at the archive root
pub const LICENSE_BLOB_ENTRY: &str = "LICENSE.blob";

/// ArtifactInspector port for looking inside dependency archives
///
/// Every failure is recoverable from the scanner's point of view: an artifact
/// that cannot be inspected only means its license data stays missing.
pub trait ArtifactInspector {
    /// Year of the archive's first entry, if the archive records one
    fn first_entry_year(&self, artifact: &Path) -> Result<Option<i32>>;

    /// Raw bytes of the `LICENSE.blob` entry, or `None` when the archive has none
    fn read_license_blob(&self, artifact: &Path) -> Result<Option<Vec<u8>>>;
}

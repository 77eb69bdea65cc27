use crate::shared::Result;
use std::path::Path;

/// LicenseOutputWriter port for the generated license files
pub trait LicenseOutputWriter {
    /// Writes `content` unless the file already holds exactly these bytes
    ///
    /// # Returns
    /// `true` if the file was created or changed, `false` if it was up to date
    ///
    /// # Errors
    /// Returns an error if the target is a symbolic link, the parent
    /// directory cannot be created, or the write fails
    fn write_if_changed(&self, path: &Path, content: &[u8]) -> Result<bool>;

    /// Deletes `path` if it exists
    ///
    /// # Returns
    /// `true` if a file was deleted
    fn remove_if_exists(&self, path: &Path) -> Result<bool>;
}

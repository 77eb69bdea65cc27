use crate::attribution::domain::License;
use crate::shared::Result;

/// LicenseTextSource port for the full text of a catalog license
pub trait LicenseTextSource {
    /// Full license text, empty when none is available for `license`
    fn license_text(&self, license: License) -> Result<Vec<u8>>;
}

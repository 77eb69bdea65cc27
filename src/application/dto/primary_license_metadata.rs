use crate::attribution::domain::{AttributionRecord, License};
use serde::Serialize;

/// License metadata of the project's primary license, for publication
/// descriptors (e.g. a POM `<license>` element)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryLicenseMetadata {
    pub name: String,
    pub url: String,
    /// Concatenated notes, only for CUSTOM licenses (the notes are the license)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl PrimaryLicenseMetadata {
    pub fn from_primary(primary: &AttributionRecord) -> Self {
        let license = primary.license();
        let comments = (license == License::Custom).then(|| primary.notes().concat());

        Self {
            name: license.preferred_name().to_string(),
            url: license.preferred_url().to_string(),
            comments,
        }
    }
}

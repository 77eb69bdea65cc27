/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod license_request;
mod license_response;
mod primary_license_metadata;
mod scan_report;

pub use license_request::{LicenseRequest, DEFAULT_CONFIGURATIONS};
pub use license_response::LicenseResponse;
pub use primary_license_metadata::PrimaryLicenseMetadata;
pub use scan_report::ScanReport;

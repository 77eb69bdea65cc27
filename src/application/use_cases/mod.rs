/// Use cases module containing application business logic orchestration
mod generate_license_files;
mod scan_dependencies;

pub use generate_license_files::{
    all_output_file_names, GenerateLicenseFilesUseCase, LICENSE_BLOB_FILE, LICENSE_FILE,
};
pub use scan_dependencies::ScanDependenciesUseCase;

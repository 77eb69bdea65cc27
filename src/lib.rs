//! license-attribution - dependency license attribution for build outputs
//!
//! This library resolves the license of every dependency in a project's
//! resolved dependency graph and produces a canonical `LICENSE` document plus
//! a `LICENSE.blob` that dependents read back when they scan this project as
//! one of their own dependencies. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`attribution`): license catalog, attribution records,
//!   the versioned rule table and the document/blob services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_attribution::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Declare the project's own license
//! let mut primary = AttributionRecord::new("Acme App", License::Apache2);
//! primary.add_author("Acme Corp").add_copyright(2024);
//!
//! // Create use case with adapters
//! let use_case = GenerateLicenseFilesUseCase::new(
//!     JsonDependencyGraphReader::new(),
//!     ZipArtifactInspector::new(),
//!     FileSystemWriter::new(),
//!     BundledLicenseTexts::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = LicenseRequest::new(PathBuf::from("."), PathBuf::from("build/licensing"), vec![primary])
//!     .with_dependency_graph(PathBuf::from("build/dependencies.json"));
//! let response = use_case.execute(request)?;
//! println!("{} file(s) changed", response.changed_files);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod attribution;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::archive::ZipArtifactInspector;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        BundledLicenseTexts, FileSystemWriter, JsonDependencyGraphReader, StdoutPresenter,
    };
    pub use crate::application::dto::{
        LicenseRequest, LicenseResponse, PrimaryLicenseMetadata, ScanReport,
    };
    pub use crate::application::use_cases::{
        GenerateLicenseFilesUseCase, ScanDependenciesUseCase,
    };
    pub use crate::attribution::domain::{
        AttributionRecord, DependencyGraph, DependencyNode, License, ModuleKey, ModuleVersion,
        RecordBuilder,
    };
    pub use crate::attribution::policies::CopyrightPolicy;
    pub use crate::attribution::services::{
        BlobCodec, DocumentBuilder, GraphFlattener, LicenseFlattener, VersionedRuleTable,
    };
    pub use crate::ports::outbound::{
        ArtifactInspector, DependencyGraphSource, LicenseOutputWriter, LicenseTextSource,
        OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}

/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, archives, console).
pub mod artifact_inspector;
pub mod dependency_graph_source;
pub mod license_output_writer;
pub mod license_text_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use artifact_inspector::{ArtifactInspector, LICENSE_BLOB_ENTRY};
pub use dependency_graph_source::DependencyGraphSource;
pub use license_output_writer::LicenseOutputWriter;
pub use license_text_source::LicenseTextSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;

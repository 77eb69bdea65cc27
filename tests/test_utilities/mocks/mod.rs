/// Mock implementations for testing
mod mock_artifact_inspector;
mod mock_graph_source;
mod mock_output_writer;
mod mock_progress_reporter;
mod mock_text_source;

pub use mock_artifact_inspector::MockArtifactInspector;
pub use mock_graph_source::MockGraphSource;
pub use mock_output_writer::MockOutputWriter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_text_source::MockTextSource;

/// Filesystem adapters for file I/O operations
mod file_writer;
mod graph_reader;
mod license_texts;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use graph_reader::JsonDependencyGraphReader;
pub use license_texts::BundledLicenseTexts;

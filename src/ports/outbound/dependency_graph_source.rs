use crate::attribution::domain::DependencyGraph;
use crate::shared::Result;
use std::path::Path;

/// DependencyGraphSource port for reading the resolved dependency graph
///
/// Dependency resolution itself belongs to the build tool; this port only
/// loads the graph it exported.
pub trait DependencyGraphSource {
    /// Reads the dependency graph document at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file is a symbolic link or exceeds the size limit
    /// - The content is not a valid dependency graph document
    fn read_graph(&self, path: &Path) -> Result<DependencyGraph>;
}

use std::path::Path;
use license_attribution::prelude::*;

/// Mock DependencyGraphSource for testing
pub struct MockGraphSource {
    pub graph: DependencyGraph,
    pub should_fail: bool,
}

impl MockGraphSource {
    pub fn new(graph: DependencyGraph) -> Self {
        Self {
            graph,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            graph: DependencyGraph::new(),
            should_fail: true,
        }
    }
}

impl DependencyGraphSource for MockGraphSource {
    fn read_graph(&self, _path: &Path) -> Result<DependencyGraph> {
        if self.should_fail {
            anyhow::bail!("Mock dependency graph read failure");
        }
        Ok(self.graph.clone())
    }
}

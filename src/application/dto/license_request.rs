use crate::attribution::domain::AttributionRecord;
use std::path::PathBuf;

/// Configurations scanned when the request does not name any
pub const DEFAULT_CONFIGURATIONS: [&str; 2] = ["compileClasspath", "runtimeClasspath"];

/// LicenseRequest - Internal request DTO for the license generation use case
#[derive(Debug, Clone)]
pub struct LicenseRequest {
    /// Project root; receives a copy of LICENSE and LICENSE.blob
    pub project_path: PathBuf,
    /// Build output directory for the generated files
    pub build_dir: PathBuf,
    /// Declared licenses, the first one is the project's primary license
    pub licenses: Vec<AttributionRecord>,
    /// Dependency graph exported by the build tool; no scan when absent
    pub dependency_graph: Option<PathBuf>,
    /// Configurations of the graph whose dependencies are scanned
    pub configurations: Vec<String>,
    /// Delete every previously generated file before writing
    pub clean: bool,
}

impl LicenseRequest {
    pub fn new(project_path: PathBuf, build_dir: PathBuf, licenses: Vec<AttributionRecord>) -> Self {
        Self {
            project_path,
            build_dir,
            licenses,
            dependency_graph: None,
            configurations: DEFAULT_CONFIGURATIONS.iter().map(|c| c.to_string()).collect(),
            clean: false,
        }
    }

    pub fn with_dependency_graph(mut self, path: PathBuf) -> Self {
        self.dependency_graph = Some(path);
        self
    }

    /// Replaces the scanned configurations; an empty list keeps the defaults
    pub fn with_configurations(mut self, configurations: Vec<String>) -> Self {
        if !configurations.is_empty() {
            self.configurations = configurations;
        }
        self
    }

    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }
}

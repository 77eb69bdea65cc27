use std::collections::BTreeMap;
use std::path::PathBuf;

/// A resolved dependency with its backing artifact files and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    group: String,
    name: String,
    version: String,
    artifacts: Vec<PathBuf>,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(group: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            artifacts: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_artifact(mut self, artifact: impl Into<PathBuf>) -> Self {
        self.artifacts.push(artifact.into());
        self
    }

    pub fn with_child(mut self, child: DependencyNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn artifacts(&self) -> &[PathBuf] {
        &self.artifacts
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }

    /// `group:name:version`, the identity used for deduplication
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }
}

/// Dependency graph exported by the build tool
///
/// Holds one dependency forest per named configuration plus the coordinates
/// of the project's own modules, which never count as missing license data.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    configurations: BTreeMap<String, Vec<DependencyNode>>,
    project_coordinates: Vec<String>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_configuration(&mut self, name: impl Into<String>, roots: Vec<DependencyNode>) {
        self.configurations.insert(name.into(), roots);
    }

    pub fn add_project(&mut self, group: &str, name: &str, version: &str) {
        self.project_coordinates
            .push(format!("{}:{}:{}", group, name, version));
    }

    pub fn configuration(&self, name: &str) -> Option<&[DependencyNode]> {
        self.configurations.get(name).map(Vec::as_slice)
    }

    pub fn configuration_names(&self) -> impl Iterator<Item = &str> {
        self.configurations.keys().map(String::as_str)
    }

    pub fn project_coordinates(&self) -> &[String] {
        &self.project_coordinates
    }

    pub fn is_project(&self, coordinate: &str) -> bool {
        self.project_coordinates.iter().any(|p| p == coordinate)
    }
}

use crate::attribution::domain::{DependencyGraph, DependencyNode};
use crate::ports::outbound::DependencyGraphSource;
use crate::shared::error::AttributionError;
use crate::shared::security::{read_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// JsonDependencyGraphReader adapter for the build tool's exported graph
///
/// Reads the JSON document written by the build tool: the scanning
/// project's own coordinates plus one dependency forest per configuration.
/// Relative artifact paths are resolved against the directory holding the
/// graph file.
pub struct JsonDependencyGraphReader;

impl JsonDependencyGraphReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonDependencyGraphReader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    projects: Vec<ProjectEntry>,
    #[serde(default)]
    configurations: BTreeMap<String, Vec<NodeEntry>>,
}

#[derive(Debug, Deserialize)]
struct ProjectEntry {
    group: String,
    name: String,
    #[serde(default)]
    version: String,
}

#[derive(Debug, Deserialize)]
struct NodeEntry {
    group: String,
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    artifacts: Vec<String>,
    #[serde(default)]
    children: Vec<NodeEntry>,
}

impl NodeEntry {
    fn into_node(self, base_dir: &Path) -> DependencyNode {
        let mut node = DependencyNode::new(self.group, self.name, self.version);
        for artifact in self.artifacts {
            node = node.with_artifact(base_dir.join(artifact));
        }
        for child in self.children {
            node = node.with_child(child.into_node(base_dir));
        }
        node
    }
}

impl DependencyGraphSource for JsonDependencyGraphReader {
    fn read_graph(&self, path: &Path) -> Result<DependencyGraph> {
        let content = read_input_file(path, "dependency graph", MAX_FILE_SIZE)?;

        let document: GraphDocument =
            serde_json::from_slice(&content).map_err(|e| AttributionError::DependencyGraphParse {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        // `Path::join` keeps absolute artifact paths as they are
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

        let mut graph = DependencyGraph::new();
        for project in &document.projects {
            graph.add_project(&project.group, &project.name, &project.version);
        }
        for (name, roots) in document.configurations {
            let roots = roots
                .into_iter()
                .map(|entry| entry.into_node(base_dir))
                .collect();
            graph.add_configuration(name, roots);
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const GRAPH: &str = r#"{
        "projects": [{"group": "com.acme", "name": "app", "version": "1.0"}],
        "configurations": {
            "compileClasspath": [
                {
                    "group": "net.example",
                    "name": "lib",
                    "version": "4.0",
                    "artifacts": ["libs/lib-4.0.jar"],
                    "children": [
                        {"group": "org.slf4j", "name": "slf4j-api", "version": "1.7.30"}
                    ]
                }
            ],
            "runtimeClasspath": []
        }
    }"#;

    #[test]
    fn test_read_graph_success() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("dependencies.json");
        fs::write(&graph_path, GRAPH).unwrap();

        let reader = JsonDependencyGraphReader::new();
        let graph = reader.read_graph(&graph_path).unwrap();

        assert!(graph.is_project("com.acme:app:1.0"));
        let names: Vec<&str> = graph.configuration_names().collect();
        assert_eq!(names, vec!["compileClasspath", "runtimeClasspath"]);

        let compile = graph.configuration("compileClasspath").unwrap();
        assert_eq!(compile.len(), 1);
        assert_eq!(compile[0].coordinate(), "net.example:lib:4.0");
        assert_eq!(compile[0].children()[0].coordinate(), "org.slf4j:slf4j-api:1.7.30");
        assert!(compile[0].children()[0].artifacts().is_empty());
    }

    #[test]
    fn test_relative_artifacts_resolve_against_graph_dir() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("dependencies.json");
        fs::write(&graph_path, GRAPH).unwrap();

        let graph = JsonDependencyGraphReader::new().read_graph(&graph_path).unwrap();
        let node = &graph.configuration("compileClasspath").unwrap()[0];
        assert_eq!(node.artifacts(), &[temp_dir.path().join("libs/lib-4.0.jar")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_artifacts_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("dependencies.json");
        let content = r#"{"configurations": {"c": [
            {"group": "g", "name": "a", "version": "1", "artifacts": ["/cache/a.jar"]}
        ]}}"#;
        fs::write(&graph_path, content).unwrap();

        let graph = JsonDependencyGraphReader::new().read_graph(&graph_path).unwrap();
        let node = &graph.configuration("c").unwrap()[0];
        assert_eq!(node.artifacts(), &[PathBuf::from("/cache/a.jar")]);
    }

    #[test]
    fn test_read_graph_missing_sections_default_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("dependencies.json");
        fs::write(&graph_path, "{}").unwrap();

        let graph = JsonDependencyGraphReader::new().read_graph(&graph_path).unwrap();
        assert!(graph.project_coordinates().is_empty());
        assert_eq!(graph.configuration_names().count(), 0);
    }

    #[test]
    fn test_read_graph_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("dependencies.json");
        fs::write(&graph_path, "{ not json").unwrap();

        let result = JsonDependencyGraphReader::new().read_graph(&graph_path);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Failed to parse dependency graph"));
    }

    #[test]
    fn test_read_graph_not_found() {
        let result =
            JsonDependencyGraphReader::new().read_graph(&PathBuf::from("/nonexistent/deps.json"));
        assert!(result.is_err());
    }
}

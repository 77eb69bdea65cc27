use crate::application::dto::ScanReport;
use crate::attribution::domain::{AttributionRecord, DependencyGraph, DependencyNode};
use crate::attribution::policies::CopyrightPolicy;
use crate::attribution::services::{BlobCodec, GraphFlattener, RuleId, VersionedRuleTable};
use crate::ports::outbound::{ArtifactInspector, ProgressReporter};
use chrono::Datelike;
use log::warn;
use std::collections::HashSet;

/// ScanDependenciesUseCase - classifies every resolved dependency
///
/// Each distinct `group:name:version` in the selected configurations is
/// either **known** (a built-in rule matches), **embedded** (one of its
/// archives carries a `LICENSE.blob`) or **missing**. Attributions of known
/// and embedded dependencies are merged into the extras of the primary
/// license. Nothing in a scan is fatal: unreadable archives and corrupt blobs
/// only leave a dependency missing.
///
/// # Type Parameters
/// * `AI` - ArtifactInspector implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanDependenciesUseCase<'a, AI, PR> {
    rule_table: &'a VersionedRuleTable,
    artifact_inspector: &'a AI,
    progress_reporter: &'a PR,
    current_year: i32,
}

impl<'a, AI, PR> ScanDependenciesUseCase<'a, AI, PR>
where
    AI: ArtifactInspector,
    PR: ProgressReporter,
{
    pub fn new(
        rule_table: &'a VersionedRuleTable,
        artifact_inspector: &'a AI,
        progress_reporter: &'a PR,
    ) -> Self {
        Self {
            rule_table,
            artifact_inspector,
            progress_reporter,
            current_year: chrono::Local::now().year(),
        }
    }

    /// Overrides the year used when no archive provides a copyright year
    pub fn with_current_year(mut self, current_year: i32) -> Self {
        self.current_year = current_year;
        self
    }

    /// Scans `configurations` of `graph`, attaching attributions to `licenses[0]`
    ///
    /// Returns an empty report without scanning when no license is declared.
    pub fn scan(
        &self,
        graph: &DependencyGraph,
        configurations: &[String],
        licenses: &mut [AttributionRecord],
    ) -> ScanReport {
        let mut report = ScanReport::default();
        let Some(primary) = licenses.first_mut() else {
            return report;
        };

        let mut roots: Vec<&DependencyNode> = Vec::new();
        for name in configurations {
            match graph.configuration(name) {
                Some(nodes) => roots.extend(nodes),
                None => {
                    warn!("Configuration '{}' is not present in the dependency graph", name);
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Unable to resolve the '{}' configuration, skipping it.",
                        name
                    ));
                }
            }
        }

        let nodes = GraphFlattener::flatten(roots.iter().copied());
        let total = nodes.len();
        let mut attached_rules: HashSet<RuleId> = HashSet::new();
        let mut unresolved: Vec<&DependencyNode> = Vec::new();

        // Step 1: rule table
        for (index, node) in nodes.into_iter().enumerate() {
            let coordinate = node.coordinate();
            self.progress_reporter
                .report_progress(index + 1, total, Some(&coordinate));

            let rule = match self.rule_table.resolve(&coordinate) {
                Ok(Some(rule)) => rule,
                Ok(None) => {
                    unresolved.push(node);
                    continue;
                }
                Err(e) => {
                    warn!("{}", e);
                    unresolved.push(node);
                    continue;
                }
            };

            report
                .known
                .push(format!("[{}] {}", rule.record().license().id(), coordinate));

            if !attached_rules.insert(rule.id()) || primary.extras().contains(rule.record()) {
                continue;
            }

            let mut record = rule.record().clone();
            if record.copyright() == 0 {
                record.add_copyright(self.backfill_year(node));
            }
            if !primary.extras().contains(&record) {
                primary.push_extra(record);
            }
        }

        // Step 2: license data embedded in the artifacts
        for node in unresolved {
            let coordinate = node.coordinate();

            match self.find_embedded_records(node) {
                Some(records) => {
                    report
                        .embedded
                        .push(format!("[{}] {}", records[0].license().id(), coordinate));

                    for record in records {
                        if !primary.extras().contains(&record) {
                            primary.push_extra(record);
                        }
                    }
                }
                None if graph.is_project(&coordinate) => {}
                None => {
                    let children =
                        GraphFlattener::transitive_children_in(roots.iter().copied(), &coordinate);
                    if children.is_empty() {
                        report.missing.push(coordinate);
                    } else {
                        report
                            .missing
                            .push(format!("{} [{}]", coordinate, children.join(", ")));
                    }
                }
            }
        }

        report.sort();
        report
    }

    /// Oldest archive year among the node's artifacts, else the current year
    fn backfill_year(&self, node: &DependencyNode) -> i32 {
        let years: Vec<i32> = node
            .artifacts()
            .iter()
            .filter_map(|artifact| match self.artifact_inspector.first_entry_year(artifact) {
                Ok(year) => year,
                Err(e) => {
                    warn!(
                        "Unable to read the archive date of {}: {:#}",
                        artifact.display(),
                        e
                    );
                    None
                }
            })
            .collect();

        CopyrightPolicy::backfill_year(years, self.current_year)
    }

    /// Records of the first artifact that carries a license blob
    ///
    /// Returns `None` when no artifact has one, or when that blob cannot be
    /// decoded or holds no records.
    fn find_embedded_records(&self, node: &DependencyNode) -> Option<Vec<AttributionRecord>> {
        for artifact in node.artifacts() {
            let bytes = match self.artifact_inspector.read_license_blob(artifact) {
                Ok(Some(bytes)) => bytes,
                Ok(None) => continue,
                Err(e) => {
                    warn!("Unable to inspect {}: {:#}", artifact.display(), e);
                    continue;
                }
            };

            return match BlobCodec::decode(&bytes) {
                Ok(records) if !records.is_empty() => Some(records),
                Ok(_) => {
                    warn!("{} holds an empty license blob", artifact.display());
                    None
                }
                Err(e) => {
                    warn!("{} ({})", e, artifact.display());
                    None
                }
            };
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribution::domain::License;
    use crate::shared::Result;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct StubInspector {
        years: HashMap<PathBuf, i32>,
        blobs: HashMap<PathBuf, Vec<u8>>,
        broken: Vec<PathBuf>,
    }

    impl ArtifactInspector for StubInspector {
        fn first_entry_year(&self, artifact: &Path) -> Result<Option<i32>> {
            if self.broken.iter().any(|b| b == artifact) {
                anyhow::bail!("not a zip archive");
            }
            Ok(self.years.get(artifact).copied())
        }

        fn read_license_blob(&self, artifact: &Path) -> Result<Option<Vec<u8>>> {
            if self.broken.iter().any(|b| b == artifact) {
                anyhow::bail!("not a zip archive");
            }
            Ok(self.blobs.get(artifact).cloned())
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        errors: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, _message: &str) {}
    }

    fn primary() -> Vec<AttributionRecord> {
        let mut record = AttributionRecord::new("Acme", License::Apache2);
        record.add_author("Acme Corp");
        vec![record]
    }

    fn graph(roots: Vec<DependencyNode>) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        graph.add_configuration("runtimeClasspath", roots);
        graph
    }

    fn configurations() -> Vec<String> {
        vec!["runtimeClasspath".to_string()]
    }

    fn table() -> VersionedRuleTable {
        let mut table = VersionedRuleTable::new();
        table
            .insert("net.example:lib:1", AttributionRecord::new("Lib", License::Gpl3))
            .unwrap();
        table
            .insert("net.example:lib:4", AttributionRecord::new("Lib", License::Apache2))
            .unwrap();
        table
            .insert("org.shared", AttributionRecord::new("Shared", License::Mit))
            .unwrap();
        table
    }

    #[test]
    fn test_known_dependencies_attach_per_threshold() {
        let table = table();
        let inspector = StubInspector::default();
        let reporter = RecordingReporter::default();
        let scanner =
            ScanDependenciesUseCase::new(&table, &inspector, &reporter).with_current_year(2024);

        let graph = graph(vec![
            DependencyNode::new("net.example", "lib", "4.0"),
            DependencyNode::new("net.example", "lib", "2.0"),
        ]);
        let mut licenses = primary();
        let report = scanner.scan(&graph, &configurations(), &mut licenses);

        assert_eq!(
            report.known,
            vec!["[APACHE_2] net.example:lib:4.0", "[GPLv3] net.example:lib:2.0"]
        );
        let extras: Vec<License> = licenses[0].extras().iter().map(|e| e.license()).collect();
        assert_eq!(extras, vec![License::Apache2, License::Gpl3]);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_same_rule_attaches_once() {
        let table = table();
        let inspector = StubInspector::default();
        let reporter = RecordingReporter::default();
        let scanner =
            ScanDependenciesUseCase::new(&table, &inspector, &reporter).with_current_year(2024);

        let graph = graph(vec![
            DependencyNode::new("org.shared", "one", "1.0"),
            DependencyNode::new("org.shared", "two", "1.0"),
        ]);
        let mut licenses = primary();
        let report = scanner.scan(&graph, &configurations(), &mut licenses);

        assert_eq!(report.known.len(), 2);
        assert_eq!(licenses[0].extras().len(), 1);
    }

    #[test]
    fn test_copyright_backfilled_from_oldest_artifact() {
        let table = table();
        let mut inspector = StubInspector::default();
        inspector.years.insert(PathBuf::from("/libs/a.jar"), 2016);
        inspector.years.insert(PathBuf::from("/libs/b.jar"), 2012);
        let reporter = RecordingReporter::default();
        let scanner =
            ScanDependenciesUseCase::new(&table, &inspector, &reporter).with_current_year(2024);

        let graph = graph(vec![DependencyNode::new("org.shared", "one", "1.0")
            .with_artifact("/libs/a.jar")
            .with_artifact("/libs/b.jar")]);
        let mut licenses = primary();
        scanner.scan(&graph, &configurations(), &mut licenses);

        assert_eq!(licenses[0].extras()[0].copyright(), 2012);
    }

    #[test]
    fn test_copyright_backfill_falls_back_to_current_year() {
        let table = table();
        let mut inspector = StubInspector::default();
        inspector.broken.push(PathBuf::from("/libs/broken.jar"));
        let reporter = RecordingReporter::default();
        let scanner =
            ScanDependenciesUseCase::new(&table, &inspector, &reporter).with_current_year(2024);

        let graph = graph(vec![
            DependencyNode::new("org.shared", "one", "1.0").with_artifact("/libs/broken.jar")
        ]);
        let mut licenses = primary();
        scanner.scan(&graph, &configurations(), &mut licenses);

        assert_eq!(licenses[0].extras()[0].copyright(), 2024);
    }

    #[test]
    fn test_embedded_blob_is_merged() {
        let table = table();
        let mut inspector = StubInspector::default();
        let foo = AttributionRecord::new("Foo", License::Mit);
        inspector.blobs.insert(
            PathBuf::from("/libs/bar-1.0.jar"),
            BlobCodec::encode(&[foo.clone()]),
        );
        let reporter = RecordingReporter::default();
        let scanner =
            ScanDependenciesUseCase::new(&table, &inspector, &reporter).with_current_year(2024);

        let graph = graph(vec![
            DependencyNode::new("foo", "bar", "1.0").with_artifact("/libs/bar-1.0.jar")
        ]);
        let mut licenses = primary();
        let report = scanner.scan(&graph, &configurations(), &mut licenses);

        assert_eq!(report.embedded, vec!["[MIT] foo:bar:1.0"]);
        assert!(report.missing.is_empty());
        assert!(licenses[0].extras().contains(&foo));
    }

    #[test]
    fn test_corrupt_blob_is_missing() {
        let table = table();
        let mut inspector = StubInspector::default();
        inspector
            .blobs
            .insert(PathBuf::from("/libs/bad.jar"), vec![0, 0, 0, 9, 1]);
        let reporter = RecordingReporter::default();
        let scanner =
            ScanDependenciesUseCase::new(&table, &inspector, &reporter).with_current_year(2024);

        let graph = graph(vec![
            DependencyNode::new("bad", "blob", "1.0").with_artifact("/libs/bad.jar")
        ]);
        let mut licenses = primary();
        let report = scanner.scan(&graph, &configurations(), &mut licenses);

        assert_eq!(report.missing, vec!["bad:blob:1.0"]);
        assert!(licenses[0].extras().is_empty());
    }

    #[test]
    fn test_missing_lists_children_and_skips_projects() {
        let table = table();
        let inspector = StubInspector::default();
        let reporter = RecordingReporter::default();
        let scanner =
            ScanDependenciesUseCase::new(&table, &inspector, &reporter).with_current_year(2024);

        let mut graph = graph(vec![
            DependencyNode::new("com.acme", "core", "1.0"),
            DependencyNode::new("x", "parent", "1.0")
                .with_child(DependencyNode::new("org.shared", "child", "2.0")),
        ]);
        graph.add_project("com.acme", "core", "1.0");
        let mut licenses = primary();
        let report = scanner.scan(&graph, &configurations(), &mut licenses);

        assert_eq!(report.missing, vec!["x:parent:1.0 [org.shared:child:2.0]"]);
    }

    #[test]
    fn test_unknown_configuration_is_reported() {
        let table = table();
        let inspector = StubInspector::default();
        let reporter = RecordingReporter::default();
        let scanner = ScanDependenciesUseCase::new(&table, &inspector, &reporter);

        let graph = graph(vec![]);
        let mut licenses = primary();
        let report = scanner.scan(
            &graph,
            &["compileClasspath".to_string()],
            &mut licenses,
        );

        assert!(report.is_empty());
        assert!(reporter.errors.borrow()[0].contains("compileClasspath"));
    }

    #[test]
    fn test_no_licenses_skips_scan() {
        let table = table();
        let inspector = StubInspector::default();
        let reporter = RecordingReporter::default();
        let scanner = ScanDependenciesUseCase::new(&table, &inspector, &reporter);

        let graph = graph(vec![DependencyNode::new("x", "y", "1.0")]);
        let report = scanner.scan(&graph, &configurations(), &mut []);
        assert!(report.is_empty());
    }
}

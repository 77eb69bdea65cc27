use crate::application::dto::{LicenseRequest, LicenseResponse, PrimaryLicenseMetadata, ScanReport};
use crate::application::use_cases::ScanDependenciesUseCase;
use crate::attribution::domain::{AttributionRecord, License};
use crate::attribution::services::{
    BlobCodec, DocumentBuilder, LicenseFlattener, VersionedRuleTable,
};
use crate::ports::outbound::{
    ArtifactInspector, DependencyGraphSource, LicenseOutputWriter, LicenseTextSource,
    ProgressReporter,
};
use crate::shared::Result;
use chrono::Datelike;
use log::warn;
use std::path::PathBuf;

/// File name of the rendered attribution document
pub const LICENSE_FILE: &str = "LICENSE";

/// File name of the serialized attribution records
pub const LICENSE_BLOB_FILE: &str = "LICENSE.blob";

/// GenerateLicenseFilesUseCase - Core use case for license attribution
///
/// Validates the declared licenses, scans the dependency graph, and writes
/// `LICENSE`, `LICENSE.blob` and the referenced license texts to the build
/// directory and the project root. Files whose content is unchanged are not
/// rewritten.
///
/// # Type Parameters
/// * `GS` - DependencyGraphSource implementation
/// * `AI` - ArtifactInspector implementation
/// * `W` - LicenseOutputWriter implementation
/// * `TS` - LicenseTextSource implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateLicenseFilesUseCase<GS, AI, W, TS, PR> {
    graph_source: GS,
    artifact_inspector: AI,
    output_writer: W,
    text_source: TS,
    progress_reporter: PR,
    rule_table: VersionedRuleTable,
    current_year: i32,
}

impl<GS, AI, W, TS, PR> GenerateLicenseFilesUseCase<GS, AI, W, TS, PR>
where
    GS: DependencyGraphSource,
    AI: ArtifactInspector,
    W: LicenseOutputWriter,
    TS: LicenseTextSource,
    PR: ProgressReporter,
{
    /// Creates a new GenerateLicenseFilesUseCase with the built-in rule table
    pub fn new(
        graph_source: GS,
        artifact_inspector: AI,
        output_writer: W,
        text_source: TS,
        progress_reporter: PR,
    ) -> Self {
        Self {
            graph_source,
            artifact_inspector,
            output_writer,
            text_source,
            progress_reporter,
            rule_table: VersionedRuleTable::builtin(),
            current_year: chrono::Local::now().year(),
        }
    }

    /// Replaces the rule table
    pub fn with_rule_table(mut self, rule_table: VersionedRuleTable) -> Self {
        self.rule_table = rule_table;
        self
    }

    /// Fixes the current year used for copyright lines and backfill
    pub fn with_current_year(mut self, current_year: i32) -> Self {
        self.current_year = current_year;
        self
    }

    /// Executes the license generation use case
    ///
    /// # Errors
    /// Returns an error if:
    /// - A declared license has no name or no author
    /// - The dependency graph cannot be read
    /// - An output file cannot be written or deleted
    pub fn execute(&self, request: LicenseRequest) -> Result<LicenseResponse> {
        let LicenseRequest {
            project_path,
            build_dir,
            mut licenses,
            dependency_graph,
            configurations,
            clean,
        } = request;

        // Step 1: Validate the declared licenses
        for license in &licenses {
            license.validate_declaration()?;
        }

        let output_dirs = [build_dir, project_path];

        // Step 2: Remove previous outputs if requested
        if clean {
            let removed = self.clean_outputs(&output_dirs)?;
            self.progress_reporter
                .report(&format!("🧹 Removed {} previously generated file(s)", removed));
        }

        if licenses.is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: No License information defined in the project. Unable to build license data",
            );
            return Ok(LicenseResponse {
                generated_files: Vec::new(),
                changed_files: 0,
                scan_report: ScanReport::default(),
                metadata: None,
            });
        }

        // Step 3: Scan dependencies
        let scan_report = match dependency_graph {
            Some(graph_path) => {
                self.progress_reporter.report(&format!(
                    "📖 Loading dependency graph from: {}",
                    graph_path.display()
                ));
                let graph = self.graph_source.read_graph(&graph_path)?;

                self.progress_reporter.report("🔍 Scanning dependency licenses...");
                let scanner = ScanDependenciesUseCase::new(
                    &self.rule_table,
                    &self.artifact_inspector,
                    &self.progress_reporter,
                )
                .with_current_year(self.current_year);
                let report = scanner.scan(&graph, &configurations, &mut licenses);

                self.progress_reporter.report_completion(&format!(
                    "✅ Scanned dependencies: {} known, {} embedded, {} missing",
                    report.known.len(),
                    report.embedded.len(),
                    report.missing.len()
                ));
                report
            }
            None => {
                self.progress_reporter
                    .report("ℹ️  No dependency graph configured, skipping the dependency scan");
                ScanReport::default()
            }
        };

        self.report_scan_summary(&scan_report);

        // Step 4: Render outputs
        let licenses = DocumentBuilder::sort_and_clean(&licenses);
        let document = DocumentBuilder::with_current_year(self.current_year).render(&licenses);
        let blob = BlobCodec::encode(&licenses);
        let texts = self.collect_license_texts(&licenses)?;

        // Step 5: Write outputs
        self.progress_reporter.report("📝 Writing license files...");
        let mut generated_files = Vec::new();
        let mut changed_files = 0;

        for dir in &output_dirs {
            let mut outputs: Vec<(PathBuf, &[u8])> = vec![
                (dir.join(LICENSE_FILE), document.as_bytes()),
                (dir.join(LICENSE_BLOB_FILE), blob.as_slice()),
            ];
            for (license, text) in &texts {
                outputs.push((dir.join(license.license_file()), text.as_slice()));
            }

            for (path, content) in outputs {
                if self.output_writer.write_if_changed(&path, content)? {
                    changed_files += 1;
                }
                generated_files.push(path);
            }
        }

        if changed_files == 0 {
            self.progress_reporter
                .report_completion("✅ License files are up to date");
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ Updated {} license file(s)",
                changed_files
            ));
        }

        Ok(LicenseResponse {
            generated_files,
            changed_files,
            scan_report,
            metadata: licenses.first().map(PrimaryLicenseMetadata::from_primary),
        })
    }

    /// License texts for every distinct license referenced by the records,
    /// skipping licenses without text
    fn collect_license_texts(&self, licenses: &[AttributionRecord]) -> Result<Vec<(License, Vec<u8>)>> {
        let mut texts = Vec::new();
        for license in LicenseFlattener::distinct_licenses(licenses) {
            if license.license_file().is_empty() {
                continue;
            }

            let text = self.text_source.license_text(license)?;
            if text.is_empty() {
                warn!(
                    "No license text available for {} ({}), omitting it from the output",
                    license.id(),
                    license.license_file()
                );
                continue;
            }
            texts.push((license, text));
        }
        Ok(texts)
    }

    /// Deletes every file this use case could have generated
    fn clean_outputs(&self, output_dirs: &[PathBuf]) -> Result<usize> {
        let mut removed = 0;
        for dir in output_dirs {
            for name in all_output_file_names() {
                if self.output_writer.remove_if_exists(&dir.join(name))? {
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }

    fn report_scan_summary(&self, report: &ScanReport) {
        if !report.known.is_empty() {
            self.progress_reporter.report("\tPreloaded license data:");
            for line in &report.known {
                self.progress_reporter.report(&format!("\t  {}", line));
            }
        }

        if !report.embedded.is_empty() {
            self.progress_reporter.report("\tEmbedded license data:");
            for line in &report.embedded {
                self.progress_reporter.report(&format!("\t  {}", line));
            }
        }

        if report.has_missing() {
            self.progress_reporter.report_error("\tMissing license data:");
            for line in &report.missing {
                self.progress_reporter.report_error(&format!("\t  {}", line));
            }
            self.progress_reporter.report_error(
                "\tPlease submit an issue with this information to include it in future license scans.",
            );
        }
    }
}

/// Every file name the use case can write into an output directory
pub fn all_output_file_names() -> Vec<&'static str> {
    let mut names = vec![LICENSE_FILE, LICENSE_BLOB_FILE];
    for license in License::ALL {
        let file = license.license_file();
        if !file.is_empty() && !names.contains(&file) {
            names.push(file);
        }
    }
    names
}

mod cli;

use cli::Args;
use license_attribution::adapters::outbound::archive::ZipArtifactInspector;
use license_attribution::adapters::outbound::console::StderrProgressReporter;
use license_attribution::adapters::outbound::filesystem::{
    BundledLicenseTexts, FileSystemWriter, JsonDependencyGraphReader, StdoutPresenter,
};
use license_attribution::application::dto::{LicenseRequest, LicenseResponse};
use license_attribution::application::use_cases::GenerateLicenseFilesUseCase;
use license_attribution::config::{discover_config, load_config_from_path};
use license_attribution::ports::outbound::{LicenseOutputWriter, OutputPresenter};
use license_attribution::shared::error::{AttributionError, ExitCode};
use license_attribution::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Build output directory, relative to the project directory
const DEFAULT_BUILD_DIR: &str = "build/licensing";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Explicit config paths are taken as given, discovered ones live in the project
    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(&project_path)?.unwrap_or_default(),
    };

    // CLI flags override the config file; config paths are relative to the project
    let in_project = |path: &PathBuf| project_path.join(path);
    let dependency_graph = args
        .graph
        .map(PathBuf::from)
        .or_else(|| config.dependency_graph.as_ref().map(in_project));
    let build_dir = args
        .build_dir
        .map(PathBuf::from)
        .or_else(|| config.output_build_dir.as_ref().map(in_project))
        .unwrap_or_else(|| project_path.join(DEFAULT_BUILD_DIR));
    let license_text_dir = args
        .license_text_dir
        .map(PathBuf::from)
        .or_else(|| config.license_text_dir.as_ref().map(in_project));
    let configurations = if args.configurations.is_empty() {
        config.configurations.clone().unwrap_or_default()
    } else {
        args.configurations
    };

    // Create adapters (Dependency Injection)
    let text_source = match license_text_dir {
        Some(dir) => BundledLicenseTexts::with_override_dir(dir),
        None => BundledLicenseTexts::new(),
    };
    let use_case = GenerateLicenseFilesUseCase::new(
        JsonDependencyGraphReader::new(),
        ZipArtifactInspector::new(),
        FileSystemWriter::new(),
        text_source,
        StderrProgressReporter::new(),
    );

    let mut request = LicenseRequest::new(project_path, build_dir, config.license_records())
        .with_configurations(configurations)
        .with_clean(args.clean);
    if let Some(graph) = dependency_graph {
        request = request.with_dependency_graph(graph);
    }

    // Execute use case
    let response = use_case.execute(request)?;

    if let Some(metadata_output) = args.metadata_output {
        write_metadata(&response, Path::new(&metadata_output))?;
    }

    if args.print_outputs {
        let presenter = StdoutPresenter::new();
        presenter.present(&format_output_paths(&response.generated_files))?;
    }

    if args.strict && response.scan_report.has_missing() {
        eprintln!(
            "❌ {} dependencies have no license data (--strict)",
            response.scan_report.missing.len()
        );
        return Ok(ExitCode::MissingLicenseData);
    }

    Ok(ExitCode::Success)
}

/// Writes the primary license metadata as pretty JSON, only when it changed
fn write_metadata(response: &LicenseResponse, path: &Path) -> Result<()> {
    let Some(metadata) = response.metadata.as_ref() else {
        eprintln!("⚠️  Warning: No primary license declared, metadata not written.");
        return Ok(());
    };

    let mut json = serde_json::to_string_pretty(metadata)?;
    json.push('\n');
    FileSystemWriter::new().write_if_changed(path, json.as_bytes())?;
    Ok(())
}

fn format_output_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("{}\n", path.display()))
        .collect()
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AttributionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| AttributionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(AttributionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(AttributionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

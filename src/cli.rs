use clap::Parser;

/// Generate LICENSE attribution files for a project and its dependencies
#[derive(Parser, Debug)]
#[command(name = "license-attribution")]
#[command(version)]
#[command(
    about = "Generate LICENSE attribution files for a project and its dependencies",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Config file path (defaults to license-attribution.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dependency graph JSON exported by the build tool
    #[arg(short, long)]
    pub graph: Option<String>,

    /// Graph configurations to scan
    /// Can be specified multiple times: --configuration compileClasspath --configuration runtimeClasspath
    #[arg(long = "configuration", value_name = "NAME")]
    pub configurations: Vec<String>,

    /// Build output directory (defaults to build/licensing in the project directory)
    #[arg(short, long)]
    pub build_dir: Option<String>,

    /// Directory whose license text files replace the bundled ones
    #[arg(long)]
    pub license_text_dir: Option<String>,

    /// Write the primary license metadata (name, url, comments) as JSON to this file
    #[arg(long)]
    pub metadata_output: Option<String>,

    /// Print the generated file paths to stdout, one per line
    #[arg(long)]
    pub print_outputs: bool,

    /// Delete previously generated files before writing
    #[arg(long)]
    pub clean: bool,

    /// Exit with code 1 when some dependencies have no license data
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

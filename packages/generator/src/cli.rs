//! Command-line interface for the generator.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::accessor::{build_generation_spec, GenerationOptions};
use crate::analyzer::analyze_file;
use crate::catalog::{create_default_catalog, load_catalog_files, TypeCatalog};
use crate::config::{resource_path, validate_markup_path, DEFAULT_COMPONENT, DEFAULT_OUTPUT_DIR};
use crate::emit::{save_generated, OutputFormat, RustOptions};
use crate::types::GenerationSpec;
use crate::error::{GeneratorError, Result};

/// xamlnames - Typed accessors for named elements in XAML markup.
#[derive(Parser)]
#[command(name = "xamlnames")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the root kind and named elements of a markup file.
    Analyze {
        /// Markup file (.xaml)
        file: PathBuf,

        /// Additional type catalog (YAML); may be repeated
        #[arg(short, long = "catalog")]
        catalogs: Vec<PathBuf>,
    },

    /// Generate accessor code or descriptors for markup files.
    Generate {
        /// Markup files (.xaml)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Additional type catalog (YAML); may be repeated
        #[arg(short, long = "catalog")]
        catalogs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Rust)]
        format: OutputFormat,

        /// Output directory (default: generated/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Component name used in resource identifiers
        #[arg(long, default_value = DEFAULT_COMPONENT)]
        component: String,

        /// Component root directory; resource identifiers are relative to it
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, catalogs } => analyze_command(&file, &catalogs),
        Commands::Generate {
            files,
            catalogs,
            format,
            output,
            component,
            root,
        } => generate_command(
            &files,
            &catalogs,
            format,
            output.as_deref(),
            &GenerationOptions::default().with_component(component),
            &root,
        ),
    }
}

/// Default catalog extended with the given files. Skipped files are reported.
fn build_catalog(catalogs: &[PathBuf]) -> TypeCatalog {
    let mut catalog = create_default_catalog();
    for (path, err) in load_catalog_files(&mut catalog, catalogs) {
        eprintln!(
            "{} skipped catalog {}: {err}",
            style("Warning:").yellow().bold(),
            path.display()
        );
    }
    catalog
}

/// Execute the analyze command.
fn analyze_command(file: &Path, catalogs: &[PathBuf]) -> Result<()> {
    validate_markup_path(file)?;
    let catalog = build_catalog(catalogs);
    let analysis = analyze_file(file, &catalog)?;

    println!(
        "{} {} ({})",
        style("Analyzed").bold(),
        style(&analysis.source).cyan(),
        style(analysis.root_kind).green()
    );
    if let Some(class_name) = &analysis.class_name {
        println!("  Class: {}", style(class_name).green());
    }
    println!();

    for node in &analysis.nodes {
        let marker = if node.is_root { "*" } else { " " };
        println!(
            "{marker} {:<24} {:<48} {}",
            node.name,
            node.resolved_type.full_name(),
            style(&node.position).dim()
        );
    }

    if !analysis.root_supports_name_lookup && analysis.children().next().is_some() {
        println!();
        println!(
            "  {}",
            style("Root type does not support name lookup; no accessors will be generated")
                .yellow()
        );
    }

    Ok(())
}

/// Execute the generate command.
fn generate_command(
    files: &[PathBuf],
    catalogs: &[PathBuf],
    format: OutputFormat,
    output: Option<&Path>,
    options: &GenerationOptions,
    root: &Path,
) -> Result<()> {
    // Validate inputs before touching the output directory
    for file in files {
        validate_markup_path(file)?;
    }
    if let Some(output_dir) = output {
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(GeneratorError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is not a directory: {}", output_dir.display()),
            )));
        }
    }
    let output_dir = output.unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));

    let catalog = build_catalog(catalogs);
    let rust_options = RustOptions::default();

    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:30.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut outputs: HashMap<PathBuf, &Path> = HashMap::new();
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        pb.set_message(file.display().to_string());

        let result = build_spec(file, &catalog, options, root).and_then(|spec| {
            claim_output(&mut outputs, output_dir.join(format.file_name(&spec)), file)?;
            save_generated(&spec, format, &rust_options, output_dir)
        });
        match result {
            Ok(path) => written.push(path),
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    for path in &written {
        println!("{} {}", style("Generated:").green().bold(), path.display());
    }

    Ok(())
}

/// Analyze one file and build its spec, with the resource path taken
/// relative to `root`.
fn build_spec(
    file: &Path,
    catalog: &TypeCatalog,
    options: &GenerationOptions,
    root: &Path,
) -> Result<GenerationSpec> {
    let analysis = analyze_file(file, catalog)?;
    let options = options.clone().with_resource_path(resource_path(file, root)?);
    build_generation_spec(&analysis, &options)
}

/// Record `path` as produced by `file`, failing if an earlier input already
/// produced it.
fn claim_output<'a>(
    outputs: &mut HashMap<PathBuf, &'a Path>,
    path: PathBuf,
    file: &'a Path,
) -> Result<()> {
    if let Some(first) = outputs.get(&path) {
        return Err(GeneratorError::OutputCollision {
            path: path.display().to_string(),
            first: first.display().to_string(),
            second: file.display().to_string(),
        });
    }
    outputs.insert(path, file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_analyze() {
        let cli = Cli::parse_from(["xamlnames", "analyze", "MainWindow.xaml"]);

        let Commands::Analyze { file, catalogs } = cli.command else {
            panic!("expected analyze command");
        };
        assert_eq!(file, PathBuf::from("MainWindow.xaml"));
        assert!(catalogs.is_empty());
    }

    #[test]
    fn test_cli_parse_generate_defaults() {
        let cli = Cli::parse_from(["xamlnames", "generate", "A.xaml", "B.xaml"]);

        let Commands::Generate {
            files,
            catalogs,
            format,
            output,
            component,
            root,
        } = cli.command
        else {
            panic!("expected generate command");
        };
        assert_eq!(files.len(), 2);
        assert!(catalogs.is_empty());
        assert_eq!(format, OutputFormat::Rust);
        assert!(output.is_none());
        assert_eq!(component, DEFAULT_COMPONENT);
        assert_eq!(root, PathBuf::from("."));
    }

    #[test]
    fn test_cli_parse_generate_options() {
        let cli = Cli::parse_from([
            "xamlnames",
            "generate",
            "Theme.xaml",
            "--format",
            "yaml",
            "--catalog",
            "a.yaml",
            "--catalog",
            "b.yaml",
            "--output",
            "out",
            "--component",
            "MyApp",
            "--root",
            "src",
        ]);

        let Commands::Generate {
            catalogs,
            format,
            output,
            component,
            root,
            ..
        } = cli.command
        else {
            panic!("expected generate command");
        };
        assert_eq!(catalogs, vec![PathBuf::from("a.yaml"), PathBuf::from("b.yaml")]);
        assert_eq!(format, OutputFormat::Yaml);
        assert_eq!(output, Some(PathBuf::from("out")));
        assert_eq!(component, "MyApp");
        assert_eq!(root, PathBuf::from("src"));
    }

    #[test]
    fn test_cli_generate_requires_files() {
        assert!(Cli::try_parse_from(["xamlnames", "generate"]).is_err());
    }

    #[test]
    fn test_claim_output_rejects_repeats() {
        let mut outputs = HashMap::new();
        let first = Path::new("Views/Main.xaml");
        let second = Path::new("Dialogs/Main.xaml");

        claim_output(&mut outputs, PathBuf::from("generated/main.rs"), first).unwrap();
        claim_output(&mut outputs, PathBuf::from("generated/about.rs"), second).unwrap();
        let err = claim_output(&mut outputs, PathBuf::from("generated/main.rs"), second)
            .unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::OutputCollision { ref first, ref second, .. }
                if first == "Views/Main.xaml" && second == "Dialogs/Main.xaml"
        ));
    }
}

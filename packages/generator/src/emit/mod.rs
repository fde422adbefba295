//! Output emitters for generation specs.
//!
//! - `rust`: a component type against the `xamlnames-runtime` contract
//! - `descriptor`: the `GenerationSpec` itself as YAML or JSON

mod descriptor;
mod rust;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

use crate::error::Result;
use crate::types::GenerationSpec;

pub use descriptor::{generate_json, generate_yaml};
pub use rust::{generate_rust, to_snake_case, RustOptions};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rust component source
    #[default]
    Rust,
    /// YAML descriptor
    Yaml,
    /// JSON descriptor
    Json,
}

impl OutputFormat {
    /// File name for a generated type, e.g. `main_window.rs` or
    /// `MainWindow.names.yaml`.
    #[must_use]
    pub fn file_name(&self, spec: &GenerationSpec) -> String {
        let short = spec.short_type_name();
        match self {
            Self::Rust => format!("{}.rs", to_snake_case(short)),
            Self::Yaml => format!("{short}.names.yaml"),
            Self::Json => format!("{short}.names.json"),
        }
    }
}

/// Render a spec in the chosen format.
pub fn emit(spec: &GenerationSpec, format: OutputFormat, options: &RustOptions) -> Result<String> {
    match format {
        OutputFormat::Rust => generate_rust(spec, options),
        OutputFormat::Yaml => generate_yaml(spec),
        OutputFormat::Json => generate_json(spec),
    }
}

/// Render a spec and save it under `output_dir`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
///
/// # Returns
/// Path to the saved file
pub fn save_generated(
    spec: &GenerationSpec,
    format: OutputFormat,
    options: &RustOptions,
    output_dir: &Path,
) -> Result<PathBuf> {
    let content = emit(spec, format, options)?;

    fs::create_dir_all(output_dir)?;
    let file_name = format.file_name(spec);
    let output_file = output_dir.join(&file_name);
    let temp_file = output_dir.join(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;
    debug!(path = %output_file.display(), "saved generated output");

    Ok(output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InitializationContract, RootKind, TypeDescriptor};
    use tempfile::tempdir;

    fn spec() -> GenerationSpec {
        GenerationSpec {
            type_name: "MyApp.Views.MainWindow".to_string(),
            base_type: TypeDescriptor::new("System.Windows.Window"),
            root_kind: RootKind::ElementTree,
            source: "MainWindow.xaml".to_string(),
            accessors: Vec::new(),
            contract: InitializationContract {
                resource_uri: "/MyApp;component/MainWindow.xaml".to_string(),
                name_index: false,
            },
        }
    }

    #[test]
    fn test_file_names() {
        let spec = spec();
        assert_eq!(OutputFormat::Rust.file_name(&spec), "main_window.rs");
        assert_eq!(OutputFormat::Yaml.file_name(&spec), "MainWindow.names.yaml");
        assert_eq!(OutputFormat::Json.file_name(&spec), "MainWindow.names.json");
    }

    #[test]
    fn test_save_generated() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested");

        for format in [OutputFormat::Rust, OutputFormat::Yaml, OutputFormat::Json] {
            let path = save_generated(&spec(), format, &RustOptions::default(), &out).unwrap();
            assert!(path.exists());
            assert_eq!(
                fs::read_to_string(&path).unwrap(),
                emit(&spec(), format, &RustOptions::default()).unwrap()
            );
        }

        let leftovers: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let mut spec = spec();
        let first = save_generated(&spec, OutputFormat::Yaml, &RustOptions::default(), dir.path())
            .unwrap();
        spec.source = "Other.xaml".to_string();
        let second = save_generated(&spec, OutputFormat::Yaml, &RustOptions::default(), dir.path())
            .unwrap();

        assert_eq!(first, second);
        assert!(fs::read_to_string(second).unwrap().contains("source: Other.xaml"));
    }
}

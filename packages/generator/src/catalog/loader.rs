//! Catalog files declaring additional type namespaces.
//!
//! A catalog file is YAML:
//!
//! ```yaml
//! namespaces:
//!   - uri: clr-namespace:MyApp.Controls
//!     types:
//!       - name: Gauge
//!         full_name: MyApp.Controls.Gauge
//!         base: System.Windows.Controls.Control
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::core::{TypeCatalog, TypeDefinition};
use crate::error::{GeneratorError, Result};

/// Contents of one catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub namespaces: Vec<NamespaceDeclaration>,
}

/// Types declared under one namespace URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDeclaration {
    pub uri: String,
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
}

impl CatalogFile {
    /// Parse catalog YAML.
    pub fn parse(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    /// Returns `CatalogLoad` naming the path when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let load_error = |message: String| GeneratorError::CatalogLoad {
            path: path.display().to_string(),
            message,
        };

        let yaml = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        Self::parse(&yaml).map_err(|e| load_error(e.to_string()))
    }

    /// Number of declared types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.types.len()).sum()
    }
}

impl TypeCatalog {
    /// Register every type of a catalog file.
    pub fn extend_from(&mut self, file: CatalogFile) {
        for namespace in file.namespaces {
            for definition in namespace.types {
                self.register(namespace.uri.clone(), definition);
            }
        }
    }
}

/// Load catalog files into `catalog`, skipping the ones that fail.
///
/// A file that cannot be read or parsed is logged and left out; the
/// remaining files are still loaded.
///
/// # Returns
/// The skipped paths with their errors.
pub fn load_catalog_files<P: AsRef<Path>>(
    catalog: &mut TypeCatalog,
    paths: &[P],
) -> Vec<(PathBuf, GeneratorError)> {
    let mut skipped = Vec::new();

    for path in paths {
        let path = path.as_ref();
        match CatalogFile::load(path) {
            Ok(file) => {
                debug!(path = %path.display(), types = file.type_count(), "loaded catalog file");
                catalog.extend_from(file);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping catalog file");
                skipped.push((path.to_path_buf(), err));
            }
        }
    }

    skipped
}

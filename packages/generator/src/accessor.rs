//! Accessor specification builder.
//!
//! Turns a [`MarkupAnalysis`] into a [`GenerationSpec`]: the root supplies
//! the base type, every other named node becomes an accessor, and the
//! initialization contract records whether the generated type needs a
//! named-lookup index.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::{resource_uri, type_name_from_path, validate_type_name, DEFAULT_COMPONENT};
use crate::error::{GeneratorError, Result};
use crate::types::{
    AccessorSpec, GenerationSpec, InitializationContract, MarkupAnalysis, SourcePosition,
};

/// Caller-supplied settings for one generated type.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Full name of the generated type. Overrides `x:Class`.
    pub type_name: Option<String>,

    /// Component (assembly) name used in the markup resource identifier.
    pub component: String,

    /// Path of the markup file relative to the component root.
    /// Defaults to the analysis' source identifier.
    pub resource_path: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            type_name: None,
            component: DEFAULT_COMPONENT.to_string(),
            resource_path: None,
        }
    }
}

impl GenerationOptions {
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    #[must_use]
    pub fn with_resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = Some(path.into());
        self
    }
}

/// Build the generation spec for an analysed document.
///
/// Accessors are produced only when the document has non-root named nodes
/// *and* the root type supports named-child lookup; otherwise the generated
/// type only initializes itself.
///
/// # Errors
/// - `InvalidTypeName` when the chosen type name is not a dotted identifier.
/// - `NameCollision` when two non-root nodes share a name.
/// - `MarkupParse` when the analysis has no root node.
pub fn build_generation_spec(
    analysis: &MarkupAnalysis,
    options: &GenerationOptions,
) -> Result<GenerationSpec> {
    let root = analysis.root().ok_or_else(|| GeneratorError::MarkupParse {
        position: SourcePosition::new(&analysis.source, 1, 1),
        message: "document has no root element".to_string(),
    })?;

    let type_name = options
        .type_name
        .clone()
        .or_else(|| analysis.class_name.clone())
        .unwrap_or_else(|| type_name_from_path(Path::new(&analysis.source)));
    validate_type_name(&type_name)?;

    let named_children = analysis.children().count();
    let accessors = if named_children > 0 && !analysis.root_supports_name_lookup {
        warn!(
            source = %analysis.source,
            root_type = %root.resolved_type,
            named_children,
            "root type does not support name lookup, no accessors generated"
        );
        Vec::new()
    } else {
        collect_accessors(analysis)?
    };

    let resource_path = match &options.resource_path {
        Some(path) => path.clone(),
        None => default_resource_path(&analysis.source),
    };

    let contract = InitializationContract {
        resource_uri: resource_uri(&options.component, &resource_path),
        name_index: !accessors.is_empty(),
    };

    debug!(
        type_name = %type_name,
        accessors = accessors.len(),
        name_index = contract.name_index,
        "built generation spec"
    );

    Ok(GenerationSpec {
        type_name,
        base_type: root.resolved_type.clone(),
        root_kind: analysis.root_kind,
        source: analysis.source.clone(),
        accessors,
        contract,
    })
}

/// Resource path when the caller gave none: the source identifier, or just
/// its file name when the source is an absolute path.
fn default_resource_path(source: &str) -> String {
    let path = Path::new(source);
    if !path.is_absolute() {
        return source.to_string();
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string())
}

/// One accessor per non-root node, rejecting repeated names.
fn collect_accessors(analysis: &MarkupAnalysis) -> Result<Vec<AccessorSpec>> {
    let mut seen: HashMap<&str, &SourcePosition> = HashMap::new();
    let mut accessors = Vec::new();

    for node in analysis.children() {
        if let Some(first) = seen.insert(&node.name, &node.position) {
            return Err(GeneratorError::NameCollision {
                name: node.name.clone(),
                first: first.clone(),
                second: node.position.clone(),
            });
        }

        accessors.push(AccessorSpec {
            name: node.name.clone(),
            resolved_type: node.resolved_type.clone(),
            position: node.position.clone(),
        });
    }

    Ok(accessors)
}

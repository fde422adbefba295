//! Core data types for the generator.
//!
//! These types form the intermediate representation passed from the analysis
//! phase (markup scan, classification, naming) to the emitters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::OBJECT_TYPE;

/// Location of a markup event, used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Source file identifier as given by the caller.
    pub file: String,

    /// 1-based line number.
    pub line: u32,

    /// 1-based column number.
    pub column: u32,
}

impl SourcePosition {
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Classification of the document's root element.
///
/// Decided once from the root's resolved type and fixed for the rest of
/// the document. Selects the naming policy for every non-root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    /// Windows, user controls, pages and other composable components.
    ElementTree,

    /// A resource dictionary: elements are named by `x:Key`.
    ResourceDictionary,

    /// An application definition: elements are named by `x:Key`.
    Application,
}

impl RootKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ElementTree => "element_tree",
            Self::ResourceDictionary => "resource_dictionary",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a concrete type in the target type system.
///
/// Identified by its dotted full name. Unresolved elements get
/// [`TypeDescriptor::object`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDescriptor {
    full_name: String,
}

impl TypeDescriptor {
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }

    /// The generic "unknown object" fallback type.
    #[must_use]
    pub fn object() -> Self {
        Self::new(OBJECT_TYPE)
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Name without its namespace, e.g. `Button` for `System.Windows.Controls.Button`.
    ///
    /// # Examples
    /// ```
    /// use xamlnames_generator::types::TypeDescriptor;
    ///
    /// assert_eq!(TypeDescriptor::new("System.Windows.Controls.Button").short_name(), "Button");
    /// assert_eq!(TypeDescriptor::new("Widget").short_name(), "Widget");
    /// ```
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.full_name
            .rsplit_once('.')
            .map_or(self.full_name.as_str(), |(_, name)| name)
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        self.full_name == OBJECT_TYPE
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// An element that carries a logical name under the active naming policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedNode {
    pub position: SourcePosition,

    /// True for the document root only.
    pub is_root: bool,

    /// Logical name, never empty.
    pub name: String,

    pub resolved_type: TypeDescriptor,
}

/// Result of analysing one markup document.
///
/// `nodes` is never empty and `nodes[0]` is the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkupAnalysis {
    /// Source file identifier. Exposed so a driver can watch the file.
    pub source: String,

    pub root_kind: RootKind,

    /// Full type name from the root's `x:Class` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Whether the root type supports looking up named children.
    pub root_supports_name_lookup: bool,

    pub nodes: Vec<NamedNode>,
}

impl MarkupAnalysis {
    /// The root node.
    ///
    /// Returns `None` only for a hand-built analysis with no nodes.
    #[must_use]
    pub fn root(&self) -> Option<&NamedNode> {
        self.nodes.first().filter(|n| n.is_root)
    }

    /// Named nodes other than the root, in document order.
    pub fn children(&self) -> impl Iterator<Item = &NamedNode> {
        self.nodes.iter().filter(|n| !n.is_root)
    }
}

/// A read-only property to generate for one named element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub resolved_type: TypeDescriptor,

    /// Where the element was declared.
    pub position: SourcePosition,
}

/// Members the generated type must provide.
///
/// Every generated type has an idempotent initializer (state machine
/// `Uninitialized -> Initialized`), an optional post-initialize hook and a
/// no-op connector. The named-lookup index field exists only when
/// `name_index` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitializationContract {
    /// Markup resource identifier handed to the injection service.
    pub resource_uri: String,

    /// Whether the generated type carries the internal named-lookup index.
    pub name_index: bool,
}

/// Everything an emitter needs to produce one generated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSpec {
    /// Full name of the generated type.
    pub type_name: String,

    /// Resolved type of the document root.
    pub base_type: TypeDescriptor,

    pub root_kind: RootKind,

    /// Source markup file.
    pub source: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accessors: Vec<AccessorSpec>,

    pub contract: InitializationContract,
}

impl GenerationSpec {
    /// Generated type name without its namespace.
    #[must_use]
    pub fn short_type_name(&self) -> &str {
        self.type_name
            .rsplit_once('.')
            .map_or(self.type_name.as_str(), |(_, name)| name)
    }

    /// Namespace part of the generated type name, if any.
    #[must_use]
    pub fn type_namespace(&self) -> Option<&str> {
        self.type_name.rsplit_once('.').map(|(ns, _)| ns)
    }
}

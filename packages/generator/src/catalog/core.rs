//! Type catalog mapping `(namespace, local name)` to concrete types.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::TypeDescriptor;

/// Declaration of one type known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Local element name, e.g. `Button`.
    pub name: String,

    /// Dotted full name, e.g. `System.Windows.Controls.Button`.
    pub full_name: String,

    /// Full name of the base type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Whether instances of this type support looking up named children.
    /// Inherited by derived types.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub name_scope: bool,
}

impl TypeDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            base: None,
            name_scope: false,
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[must_use]
    pub fn with_name_scope(mut self) -> Self {
        self.name_scope = true;
        self
    }

    #[must_use]
    pub fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new(&self.full_name)
    }
}

/// Read-only catalog of the types markup elements can resolve to.
///
/// Built once, before any document is processed, then shared by reference.
/// All query methods take `&self`, so a catalog can serve concurrent
/// analyses without locking.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    /// Namespace URI -> local name -> type.
    namespaces: HashMap<String, HashMap<String, TypeDescriptor>>,
    /// Local name -> type, consulted before any namespace lookup.
    overrides: HashMap<String, TypeDescriptor>,
    /// Full name -> definition, for base-type walks.
    definitions: HashMap<String, TypeDefinition>,
}

impl TypeCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type under a namespace URI.
    ///
    /// A later registration of the same local name in the same namespace
    /// replaces the earlier one.
    pub fn register(&mut self, namespace: impl Into<String>, definition: TypeDefinition) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(definition.name.clone(), definition.descriptor());
        self.define(definition);
    }

    /// Register a type that resolves by local name alone, in any namespace.
    pub fn register_override(&mut self, definition: TypeDefinition) {
        self.overrides
            .insert(definition.name.clone(), definition.descriptor());
        self.define(definition);
    }

    /// Record a definition for base-type walks without making it resolvable.
    pub fn define(&mut self, definition: TypeDefinition) {
        self.definitions
            .insert(definition.full_name.clone(), definition);
    }

    /// Look up an element type without falling back.
    ///
    /// Order: override table by local name, then the types declared under
    /// `namespace` (and under its CLR namespace when `namespace` is a
    /// `clr-namespace:` or `using:` URI).
    #[must_use]
    pub fn lookup(&self, namespace: &str, local_name: &str) -> Option<TypeDescriptor> {
        if let Some(ty) = self.overrides.get(local_name) {
            return Some(ty.clone());
        }

        let in_namespace = |ns: &str| {
            self.namespaces
                .get(ns)
                .and_then(|types| types.get(local_name))
                .cloned()
        };

        in_namespace(namespace).or_else(|| clr_namespace(namespace).and_then(in_namespace))
    }

    /// Resolve an element type, degrading to [`TypeDescriptor::object`].
    #[must_use]
    pub fn resolve(&self, namespace: &str, local_name: &str) -> TypeDescriptor {
        self.lookup(namespace, local_name).unwrap_or_else(|| {
            debug!(
                namespace,
                element = local_name,
                "type not found in catalog, using object"
            );
            TypeDescriptor::object()
        })
    }

    /// Get the definition of a type by full name.
    #[must_use]
    pub fn definition(&self, full_name: &str) -> Option<&TypeDefinition> {
        self.definitions.get(full_name)
    }

    /// Iterate over `ty` and its base types, nearest first.
    ///
    /// Stops at the first type without a known definition, and at cycles.
    pub fn ancestry<'a>(&'a self, ty: &'a TypeDescriptor) -> impl Iterator<Item = &'a str> + 'a {
        let mut seen = HashSet::new();
        let mut next = Some(ty.full_name());

        std::iter::from_fn(move || {
            let current = next.take()?;
            if !seen.insert(current) {
                return None;
            }
            next = self
                .definitions
                .get(current)
                .and_then(|def| def.base.as_deref());
            Some(current)
        })
    }

    /// Whether a value of type `ty` can be used where `target` is expected.
    #[must_use]
    pub fn is_assignable_to(&self, ty: &TypeDescriptor, target: &str) -> bool {
        self.ancestry(ty).any(|name| name == target)
    }

    /// Whether `ty` or one of its base types supports named-child lookup.
    #[must_use]
    pub fn supports_name_lookup(&self, ty: &TypeDescriptor) -> bool {
        self.ancestry(ty).any(|name| {
            self.definitions
                .get(name)
                .is_some_and(|def| def.name_scope)
        })
    }

    /// Check if a namespace URI has any registered types.
    #[must_use]
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }

    /// Return the set of registered namespace URIs.
    #[must_use]
    pub fn namespaces(&self) -> HashSet<&str> {
        self.namespaces.keys().map(String::as_str).collect()
    }

    /// Number of resolvable types, overrides included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len() + self.namespaces.values().map(HashMap::len).sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extract the CLR namespace from a `clr-namespace:` or `using:` URI.
///
/// `clr-namespace:MyApp.Controls;assembly=MyApp` yields `MyApp.Controls`.
fn clr_namespace(uri: &str) -> Option<&str> {
    let rest = uri
        .strip_prefix("clr-namespace:")
        .or_else(|| uri.strip_prefix("using:"))?;
    let ns = rest.split(';').next().unwrap_or(rest).trim();
    (!ns.is_empty()).then_some(ns)
}

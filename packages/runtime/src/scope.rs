//! Named-element lookup over a realized object graph.

use std::any::{type_name, Any};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{AccessError, Result};

/// A type-erased element of a realized object graph.
pub type Object = Arc<dyn Any + Send + Sync>;

/// Lookup of descendants by logical name.
///
/// Toolkit independent: any component-tree toolkit can provide one.
pub trait NameScope {
    /// Return the element registered under `name`, or `None` on a miss.
    fn locate(&self, name: &str) -> Option<Object>;
}

/// Root types that can build a [`NameScope`] over their realized graph.
pub trait NameScopeSource {
    fn name_scope(&self) -> Box<dyn NameScope>;
}

/// Locate `name` in `scope` and coerce it to `T`.
///
/// # Errors
/// - [`AccessError::NotFound`] when the scope has no such name.
/// - [`AccessError::Coercion`] when the element is not a `T`.
pub fn locate_as<T>(scope: &(impl NameScope + ?Sized), name: &str) -> Result<Arc<T>>
where
    T: Any + Send + Sync,
{
    locate_object(scope, name)?
        .downcast::<T>()
        .map_err(|_| AccessError::Coercion {
            name: name.to_string(),
            expected: type_name::<T>(),
        })
}

/// Locate `name` in `scope` without coercion.
///
/// Used for elements whose type could not be resolved at generation time.
///
/// # Errors
/// [`AccessError::NotFound`] when the scope has no such name.
pub fn locate_object(scope: &(impl NameScope + ?Sized), name: &str) -> Result<Object> {
    scope.locate(name).ok_or_else(|| AccessError::NotFound {
        name: name.to_string(),
    })
}

/// Simple map-backed name scope.
///
/// Toolkits that record names while realizing a graph can hand one of these
/// out from [`NameScopeSource::name_scope`].
#[derive(Default, Clone)]
pub struct NameIndex {
    entries: HashMap<String, Object>,
}

impl NameIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element. A later registration under the same name wins.
    pub fn register(&mut self, name: impl Into<String>, object: Object) {
        self.entries.insert(name.into(), object);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NameScope for NameIndex {
    fn locate(&self, name: &str) -> Option<Object> {
        self.entries.get(name).cloned()
    }
}

impl fmt::Debug for NameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("NameIndex").field("names", &names).finish()
    }
}

/// Name scope built on first use.
///
/// Generated components hold one of these as their internal lookup index
/// field; it stays empty until the first accessor call.
#[derive(Default)]
pub struct LazyNameIndex {
    scope: OnceCell<Box<dyn NameScope>>,
}

impl LazyNameIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the scope, building it from `root` on the first call.
    pub fn get_or_build(&self, root: &(impl NameScopeSource + ?Sized)) -> &dyn NameScope {
        self.scope
            .get_or_init(|| {
                debug!("building name scope from realized root");
                root.name_scope()
            })
            .as_ref()
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.scope.get().is_some()
    }
}

impl fmt::Debug for LazyNameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyNameIndex")
            .field("built", &self.is_built())
            .finish()
    }
}

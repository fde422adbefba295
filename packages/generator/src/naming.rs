//! Root classification and per-element naming policy.

use tracing::debug;

use crate::catalog::TypeCatalog;
use crate::config::{APPLICATION_TYPE, RESOURCE_DICTIONARY_TYPE, ROOT_NAME, XAML_NAMESPACE};
use crate::types::{RootKind, TypeDescriptor};
use crate::xml::ElementStart;

/// Classify the document from the root element's resolved type.
///
/// Resource dictionaries are checked before applications; anything else is
/// an element tree.
#[must_use]
pub fn classify_root(catalog: &TypeCatalog, root_type: &TypeDescriptor) -> RootKind {
    let kind = if catalog.is_assignable_to(root_type, RESOURCE_DICTIONARY_TYPE) {
        RootKind::ResourceDictionary
    } else if catalog.is_assignable_to(root_type, APPLICATION_TYPE) {
        RootKind::Application
    } else {
        RootKind::ElementTree
    };

    debug!(root_type = %root_type, kind = %kind, "classified document root");
    kind
}

/// Name of the root element: `x:Name`, else [`ROOT_NAME`].
///
/// The root is named before its kind is known, so `Name` and `x:Key` are
/// never consulted here.
#[must_use]
pub fn root_name(root: &ElementStart<'_, '_>) -> String {
    root.name_attribute((XAML_NAMESPACE, "Name"))
        .unwrap_or(ROOT_NAME)
        .to_string()
}

/// Logical name of a non-root element under the policy of `kind`.
///
/// | kind | attributes, in order |
/// |---|---|
/// | element tree | `Name`, `x:Name` |
/// | resource dictionary, application | `x:Key` |
///
/// Returns `None` when the element is unnamed and should be excluded.
#[must_use]
pub fn element_name<'a>(kind: RootKind, element: &ElementStart<'a, '_>) -> Option<&'a str> {
    match kind {
        RootKind::ElementTree => element
            .name_attribute("Name")
            .or_else(|| element.name_attribute((XAML_NAMESPACE, "Name"))),
        RootKind::ResourceDictionary | RootKind::Application => {
            element.name_attribute((XAML_NAMESPACE, "Key"))
        }
    }
}

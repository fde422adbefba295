//! XML utility functions for reading element names and attributes.

use roxmltree::{ExpandedName, Node};

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xamlnames_generator::xml::get_tag_name;
///
/// let xml = r#"<x:Window xmlns:x="urn:toolkit"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "Window");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the resolved namespace URI of an element, or `""` when it has none.
pub fn get_namespace<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().namespace().unwrap_or_default()
}

/// Get an attribute value from a node.
///
/// # Arguments
/// * `node` - Node to get attribute from
/// * `name` - Attribute name, either a plain local name or a
///   `(namespace, local_name)` pair
pub fn get_attribute<'a, 'n, 'm>(
    node: Node<'a, '_>,
    name: impl Into<ExpandedName<'n, 'm>>,
) -> Option<&'a str> {
    node.attribute(name)
}

/// Get an attribute value, treating empty and whitespace-only values as absent.
///
/// A value that is present is returned as written, surrounding whitespace
/// included.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xamlnames_generator::xml::non_empty_attribute;
///
/// let doc = Document::parse(r#"<Button Name="  " Tag=" ok "/>"#).unwrap();
/// let button = doc.root_element();
/// assert_eq!(non_empty_attribute(button, "Name"), None);
/// assert_eq!(non_empty_attribute(button, "Tag"), Some(" ok "));
/// ```
pub fn non_empty_attribute<'a, 'n, 'm>(
    node: Node<'a, '_>,
    name: impl Into<ExpandedName<'n, 'm>>,
) -> Option<&'a str> {
    get_attribute(node, name).filter(|value| !value.trim().is_empty())
}

//! Single-pass analysis of a markup document into named nodes.
//!
//! The scan folds an explicit accumulator over the element stream. Before
//! the first element it is [`Scan::AwaitingRoot`]; the root element fixes
//! the [`RootKind`] for the remainder of the document.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::TypeCatalog;
use crate::config::XAML_NAMESPACE;
use crate::error::{GeneratorError, Result};
use crate::naming::{classify_root, element_name, root_name};
use crate::types::{MarkupAnalysis, NamedNode, RootKind, SourcePosition};
use crate::xml::{ElementStart, MarkupDocument};

/// Fold accumulator for the element scan.
#[derive(Debug)]
enum Scan {
    AwaitingRoot,
    Rooted(Collected),
}

/// State accumulated after the root element has been seen.
#[derive(Debug)]
struct Collected {
    kind: RootKind,
    class_name: Option<String>,
    root_supports_name_lookup: bool,
    nodes: Vec<NamedNode>,
}

impl Scan {
    fn step(self, element: &ElementStart<'_, '_>, catalog: &TypeCatalog) -> Self {
        let resolve = || catalog.resolve(element.namespace(), element.local_name());

        match self {
            Self::AwaitingRoot => {
                let resolved_type = resolve();
                let kind = classify_root(catalog, &resolved_type);
                let root = NamedNode {
                    position: element.position.clone(),
                    is_root: true,
                    name: root_name(element),
                    resolved_type,
                };

                Self::Rooted(Collected {
                    kind,
                    class_name: element
                        .name_attribute((XAML_NAMESPACE, "Class"))
                        .map(String::from),
                    root_supports_name_lookup: catalog.supports_name_lookup(&root.resolved_type),
                    nodes: vec![root],
                })
            }
            Self::Rooted(mut collected) => {
                if let Some(name) = element_name(collected.kind, element) {
                    let node = NamedNode {
                        position: element.position.clone(),
                        is_root: false,
                        name: name.to_string(),
                        resolved_type: resolve(),
                    };
                    debug!(
                        name = %node.name,
                        resolved_type = %node.resolved_type,
                        position = %node.position,
                        "named element"
                    );
                    collected.nodes.push(node);
                }
                Self::Rooted(collected)
            }
        }
    }
}

/// Analyse markup text.
///
/// # Arguments
/// * `text` - Markup document text
/// * `file` - Source file identifier, used in positions
/// * `catalog` - Type catalog used for resolution and classification
///
/// # Returns
/// The named nodes in document order, root first.
///
/// # Errors
/// Returns a markup error (`MarkupParse` or `UnexpectedNode`) with the
/// position of the offending token. Unresolved element types are not errors.
pub fn analyze_markup(text: &str, file: &str, catalog: &TypeCatalog) -> Result<MarkupAnalysis> {
    let doc = MarkupDocument::parse(text, file)?;

    let scan = doc
        .elements()
        .try_fold(Scan::AwaitingRoot, |scan, event| {
            event.map(|element| scan.step(&element, catalog))
        })?;

    let Scan::Rooted(collected) = scan else {
        return Err(GeneratorError::MarkupParse {
            position: SourcePosition::new(file, 1, 1),
            message: "document has no root element".to_string(),
        });
    };

    debug!(
        file,
        kind = %collected.kind,
        named = collected.nodes.len(),
        "analysed markup"
    );

    Ok(MarkupAnalysis {
        source: file.to_string(),
        root_kind: collected.kind,
        class_name: collected.class_name,
        root_supports_name_lookup: collected.root_supports_name_lookup,
        nodes: collected.nodes,
    })
}

/// Read and analyse a markup file.
///
/// The path as given is used as the source file identifier.
pub fn analyze_file(path: &Path, catalog: &TypeCatalog) -> Result<MarkupAnalysis> {
    let text = fs::read_to_string(path)?;
    analyze_markup(&text, &path.display().to_string(), catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::create_default_catalog;
    use crate::config::PRESENTATION_NAMESPACE;
    use crate::types::TypeDescriptor;
    use pretty_assertions::assert_eq;

    fn document(root: &str, attributes: &str, body: &str) -> String {
        format!(
            r#"<{root} xmlns="{PRESENTATION_NAMESPACE}" xmlns:x="{XAML_NAMESPACE}" {attributes}>{body}</{root}>"#
        )
    }

    fn names(analysis: &MarkupAnalysis) -> Vec<(&str, &str, bool)> {
        analysis
            .nodes
            .iter()
            .map(|n| (n.name.as_str(), n.resolved_type.short_name(), n.is_root))
            .collect()
    }

    #[test]
    fn test_window_scenario() {
        let text = document(
            "Window",
            r#"Name="MainWin""#,
            r#"<Grid><Button x:Name="OkButton"/><TextBlock/></Grid>"#,
        );
        let analysis = analyze_markup(&text, "Main.xaml", &create_default_catalog()).unwrap();

        assert_eq!(analysis.root_kind, RootKind::ElementTree);
        assert!(analysis.root_supports_name_lookup);
        assert_eq!(
            names(&analysis),
            vec![("Root", "Window", true), ("OkButton", "Button", false)]
        );
    }

    #[test]
    fn test_root_x_name() {
        let text = document("UserControl", r#"x:Name="Shell""#, "");
        let analysis = analyze_markup(&text, "a.xaml", &create_default_catalog()).unwrap();
        assert_eq!(names(&analysis), vec![("Shell", "UserControl", true)]);
    }

    #[test]
    fn test_resource_dictionary_keys() {
        let text = document(
            "ResourceDictionary",
            "",
            r#"<SolidColorBrush x:Key="Accent" Color="Red"/><Style x:Name="Ignored"/><Color x:Key="Base">Red</Color>"#,
        );
        let analysis = analyze_markup(&text, "Theme.xaml", &create_default_catalog()).unwrap();

        assert_eq!(analysis.root_kind, RootKind::ResourceDictionary);
        assert!(!analysis.root_supports_name_lookup);
        assert_eq!(
            names(&analysis),
            vec![
                ("Root", "ResourceDictionary", true),
                ("Accent", "SolidColorBrush", false),
                ("Base", "Color", false),
            ]
        );
    }

    #[test]
    fn test_application_keys() {
        let text = document(
            "Application",
            r#"x:Class="MyApp.App""#,
            r#"<Application.Resources><Style x:Key="Primary"/></Application.Resources>"#,
        );
        let analysis = analyze_markup(&text, "App.xaml", &create_default_catalog()).unwrap();

        assert_eq!(analysis.root_kind, RootKind::Application);
        assert_eq!(analysis.class_name.as_deref(), Some("MyApp.App"));
        assert_eq!(
            names(&analysis),
            vec![("Root", "Application", true), ("Primary", "Style", false)]
        );
    }

    #[test]
    fn test_unresolved_type_falls_back_to_object() {
        let text = document(
            "Window",
            r#"xmlns:local="clr-namespace:MyApp.Controls""#,
            r#"<local:Gauge x:Name="Speed"/>"#,
        );
        let analysis = analyze_markup(&text, "a.xaml", &create_default_catalog()).unwrap();

        assert_eq!(analysis.nodes.len(), 2);
        assert_eq!(analysis.nodes[1].resolved_type, TypeDescriptor::object());
    }

    #[test]
    fn test_unknown_root_is_element_tree_without_lookup() {
        let text = r#"<Widget xmlns="urn:custom"><Part Name="Inner"/></Widget>"#;
        let analysis = analyze_markup(text, "a.xaml", &create_default_catalog()).unwrap();

        assert_eq!(analysis.root_kind, RootKind::ElementTree);
        assert!(!analysis.root_supports_name_lookup);
        assert_eq!(
            names(&analysis),
            vec![("Root", "Object", true), ("Inner", "Object", false)]
        );
    }

    #[test]
    fn test_positions_are_recorded() {
        let text = format!(
            "<Window xmlns=\"{PRESENTATION_NAMESPACE}\">\n  <Button Name=\"Ok\"/>\n</Window>"
        );
        let analysis = analyze_markup(&text, "Main.xaml", &create_default_catalog()).unwrap();

        assert_eq!(analysis.nodes[0].position, SourcePosition::new("Main.xaml", 1, 1));
        assert_eq!(analysis.nodes[1].position, SourcePosition::new("Main.xaml", 2, 3));
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let text = document(
            "Window",
            "",
            r#"<Button Name="Ok"/><Button Name="Ok"/>"#,
        );
        let analysis = analyze_markup(&text, "a.xaml", &create_default_catalog()).unwrap();
        assert_eq!(analysis.nodes.len(), 3);
    }

    #[test]
    fn test_malformed_document_fails() {
        let err = analyze_markup("<Window>\n<Button", "bad.xaml", &create_default_catalog())
            .unwrap_err();
        assert!(err.is_markup_error());
        assert_eq!(err.position(), Some(&SourcePosition::new("bad.xaml", 2, 1)));
    }

    #[test]
    fn test_processing_instruction_fails() {
        let text = "<Window><?pi data?></Window>";
        let err = analyze_markup(text, "pi.xaml", &create_default_catalog()).unwrap_err();
        assert!(matches!(err, GeneratorError::UnexpectedNode { .. }));
    }

    #[test]
    fn test_analyze_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Main.xaml");
        fs::write(&path, document("Window", "", r#"<Button x:Name="Ok"/>"#)).unwrap();

        let analysis = analyze_file(&path, &create_default_catalog()).unwrap();
        assert_eq!(analysis.source, path.display().to_string());
        assert_eq!(analysis.nodes.len(), 2);
    }
}

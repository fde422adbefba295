//! Descriptor emitters: the generation spec as YAML or JSON, for
//! downstream tools that render their own source.

use serde::Serialize;

use crate::error::Result;
use crate::types::GenerationSpec;

/// Generator identification stamped into every descriptor.
const GENERATOR: &str = concat!("xamlnames ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct Descriptor<'a> {
    generator: &'static str,
    #[serde(flatten)]
    spec: &'a GenerationSpec,
}

impl<'a> From<&'a GenerationSpec> for Descriptor<'a> {
    fn from(spec: &'a GenerationSpec) -> Self {
        Self {
            generator: GENERATOR,
            spec,
        }
    }
}

/// Indent YAML sequences under their parent key.
///
/// serde_yaml_ng places `- ` items at the same indent as the key that owns
/// them; this shifts each sequence two spaces to the right.
fn indent_yaml_sequences(yaml: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut seq_indents: Vec<usize> = Vec::new();

    for line in yaml.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            result.push(line.to_string());
            continue;
        }

        let indent = line.len() - trimmed.len();

        while let Some(&seq_indent) = seq_indents.last() {
            if indent < seq_indent || (indent == seq_indent && !trimmed.starts_with("- ")) {
                seq_indents.pop();
            } else {
                break;
            }
        }

        if trimmed.starts_with("- ") && seq_indents.last() != Some(&indent) {
            seq_indents.push(indent);
        }

        let extra = seq_indents.len() * 2;
        result.push(format!("{}{}", " ".repeat(indent + extra), trimmed));
    }

    result.join("\n")
}

/// Render a spec as a YAML document.
pub fn generate_yaml(spec: &GenerationSpec) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(&Descriptor::from(spec))?;
    let yaml = indent_yaml_sequences(&yaml);

    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Render a spec as pretty-printed JSON.
pub fn generate_json(spec: &GenerationSpec) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&Descriptor::from(spec))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AccessorSpec, InitializationContract, RootKind, SourcePosition, TypeDescriptor,
    };
    use pretty_assertions::assert_eq;

    fn spec() -> GenerationSpec {
        GenerationSpec {
            type_name: "MyApp.MainWindow".to_string(),
            base_type: TypeDescriptor::new("System.Windows.Window"),
            root_kind: RootKind::ElementTree,
            source: "MainWindow.xaml".to_string(),
            accessors: vec![AccessorSpec {
                name: "OkButton".to_string(),
                resolved_type: TypeDescriptor::new("System.Windows.Controls.Button"),
                position: SourcePosition::new("MainWindow.xaml", 4, 9),
            }],
            contract: InitializationContract {
                resource_uri: "/MyApp;component/MainWindow.xaml".to_string(),
                name_index: true,
            },
        }
    }

    #[test]
    fn test_generate_yaml() {
        let yaml = generate_yaml(&spec()).unwrap();

        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("generator: xamlnames "));
        assert!(yaml.contains("type_name: MyApp.MainWindow\n"));
        assert!(yaml.contains("base_type: System.Windows.Window\n"));
        assert!(yaml.contains("root_kind: element_tree\n"));
        assert!(yaml.contains("accessors:\n  - name: OkButton\n    type: System.Windows.Controls.Button\n"));
        assert!(yaml.contains("  name_index: true"));
        assert!(!yaml.lines().any(|l| l.ends_with(' ')));
    }

    #[test]
    fn test_yaml_reads_back() {
        let yaml = generate_yaml(&spec()).unwrap();
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(value["accessors"][0]["position"]["line"].as_u64(), Some(4));
        assert_eq!(
            value["contract"]["resource_uri"].as_str(),
            Some("/MyApp;component/MainWindow.xaml")
        );
    }

    #[test]
    fn test_empty_accessors_are_omitted() {
        let mut spec = spec();
        spec.accessors.clear();
        spec.contract.name_index = false;

        let yaml = generate_yaml(&spec).unwrap();
        assert!(!yaml.contains("accessors"));
        assert!(yaml.contains("name_index: false"));
    }

    #[test]
    fn test_generate_json() {
        let json = generate_json(&spec()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type_name"], "MyApp.MainWindow");
        assert_eq!(value["accessors"][0]["type"], "System.Windows.Controls.Button");
        assert_eq!(value["accessors"][0]["position"]["column"], 9);
        assert_eq!(value["contract"]["name_index"], true);
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_indent_yaml_sequences() {
        let input = "a:\n- x: 1\n  y: 2\n- x: 3\nb: 4";
        assert_eq!(
            indent_yaml_sequences(input),
            "a:\n  - x: 1\n    y: 2\n  - x: 3\nb: 4"
        );
    }
}

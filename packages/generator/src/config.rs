//! Configuration constants and validation functions for the generator.

use std::path::{self, Path};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GeneratorError, Result};

/// XML namespace of the toolkit's presentation types.
pub const PRESENTATION_NAMESPACE: &str =
    "http://schemas.microsoft.com/winfx/2006/xaml/presentation";

/// XML namespace of the markup language directives (`x:Name`, `x:Key`, `x:Class`).
pub const XAML_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml";

/// Fallback type for elements that do not resolve.
pub const OBJECT_TYPE: &str = "System.Object";

/// Roots assignable to this type are classified as resource dictionaries.
pub const RESOURCE_DICTIONARY_TYPE: &str = "System.Windows.ResourceDictionary";

/// Roots assignable to this type are classified as applications.
pub const APPLICATION_TYPE: &str = "System.Windows.Application";

/// Name given to a root element without `x:Name`.
pub const ROOT_NAME: &str = "Root";

/// File extension of markup documents.
pub const MARKUP_EXTENSION: &str = "xaml";

/// Default output directory for generated files.
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Default component name used in markup resource identifiers.
pub const DEFAULT_COMPONENT: &str = "App";

/// Crate path that emitted Rust code imports its runtime support from.
pub const RUNTIME_CRATE: &str = "xamlnames_runtime";

/// Dotted full type name: identifiers separated by single dots.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TYPE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").expect("valid regex")
});

/// Validate a dotted full type name.
///
/// # Examples
/// ```
/// use xamlnames_generator::config::validate_type_name;
///
/// assert!(validate_type_name("MyApp.Views.MainWindow").is_ok());
/// assert!(validate_type_name("MainWindow").is_ok());
/// assert!(validate_type_name("MyApp..MainWindow").is_err());
/// ```
pub fn validate_type_name(name: &str) -> Result<()> {
    if TYPE_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidTypeName(name.to_string()))
    }
}

/// Validate that a path points to an existing markup file.
///
/// # Returns
/// * `Ok(())` if the path is a file with the `.xaml` extension
/// * `Err(GeneratorError::InvalidMarkupPath)` otherwise
pub fn validate_markup_path(path: &Path) -> Result<()> {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKUP_EXTENSION));

    if !has_extension {
        return Err(GeneratorError::InvalidMarkupPath(format!(
            "{} does not have the .{MARKUP_EXTENSION} extension",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(GeneratorError::InvalidMarkupPath(format!(
            "{} is not a file",
            path.display()
        )));
    }

    Ok(())
}

/// Build the markup resource identifier passed to the injection service.
///
/// Backslashes and leading separators in `relative_path` are normalized.
///
/// # Examples
/// ```
/// use xamlnames_generator::config::resource_uri;
///
/// assert_eq!(
///     resource_uri("MyApp", "Views\\MainWindow.xaml"),
///     "/MyApp;component/Views/MainWindow.xaml"
/// );
/// ```
pub fn resource_uri(component: &str, relative_path: &str) -> String {
    let path = relative_path.replace('\\', "/");
    let path = path.trim_start_matches("./").trim_start_matches('/');
    format!("/{component};component/{path}")
}

/// Path of a markup file relative to the component root, with `/` separators.
///
/// Both paths are made absolute against the working directory first. A file
/// outside `root` is identified by its file name alone.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use xamlnames_generator::config::resource_path;
///
/// let path = resource_path(Path::new("/src/app/Views/Main.xaml"), Path::new("/src/app")).unwrap();
/// assert_eq!(path, "Views/Main.xaml");
///
/// let path = resource_path(Path::new("/elsewhere/Main.xaml"), Path::new("/src/app")).unwrap();
/// assert_eq!(path, "Main.xaml");
/// ```
pub fn resource_path(file: &Path, root: &Path) -> Result<String> {
    let file = path::absolute(file)?;
    let root = path::absolute(root)?;

    let relative = match file.strip_prefix(&root) {
        Ok(relative) => relative,
        Err(_) => file.file_name().map(Path::new).unwrap_or(&file),
    };
    Ok(relative.to_string_lossy().replace('\\', "/"))
}

/// Derive a type name from a markup file name.
///
/// Characters that cannot appear in an identifier are dropped, and a leading
/// digit gets an underscore prefix.
///
/// # Examples
/// ```
/// use std::path::{self, Path};
/// use xamlnames_generator::config::type_name_from_path;
///
/// assert_eq!(type_name_from_path(Path::new("Views/MainWindow.xaml")), "MainWindow");
/// assert_eq!(type_name_from_path(Path::new("main-window.xaml")), "mainwindow");
/// assert_eq!(type_name_from_path(Path::new("1st.xaml")), "_1st");
/// ```
pub fn type_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if name.is_empty() {
        return ROOT_NAME.to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_type_name_valid() {
        assert!(validate_type_name("MainWindow").is_ok());
        assert!(validate_type_name("MyApp.MainWindow").is_ok());
        assert!(validate_type_name("_Private.Type_1").is_ok());
    }

    #[test]
    fn test_validate_type_name_invalid() {
        assert!(validate_type_name("").is_err());
        assert!(validate_type_name(".MainWindow").is_err());
        assert!(validate_type_name("MainWindow.").is_err());
        assert!(validate_type_name("My App").is_err());
        assert!(validate_type_name("1Window").is_err());
    }

    #[test]
    fn test_validate_markup_path() {
        let dir = tempfile::tempdir().unwrap();
        let markup = dir.path().join("Main.xaml");
        std::fs::write(&markup, "<Window/>").unwrap();
        let other = dir.path().join("Main.xml");
        std::fs::write(&other, "<Window/>").unwrap();

        assert!(validate_markup_path(&markup).is_ok());
        assert!(validate_markup_path(&other).is_err());
        assert!(validate_markup_path(&dir.path().join("Missing.xaml")).is_err());
    }

    #[test]
    fn test_resource_uri() {
        assert_eq!(
            resource_uri("App", "MainWindow.xaml"),
            "/App;component/MainWindow.xaml"
        );
        assert_eq!(
            resource_uri("App", "./Views/Settings.xaml"),
            "/App;component/Views/Settings.xaml"
        );
        assert_eq!(
            resource_uri("App", "/Themes/Generic.xaml"),
            "/App;component/Themes/Generic.xaml"
        );
    }

    #[test]
    fn test_resource_path_relative_inputs() {
        assert_eq!(
            resource_path(Path::new("Views/Main.xaml"), Path::new(".")).unwrap(),
            "Views/Main.xaml"
        );

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Dialogs").join("About.xaml");
        assert_eq!(resource_path(&file, dir.path()).unwrap(), "Dialogs/About.xaml");
        assert_eq!(
            resource_path(&file, &dir.path().join("Views")).unwrap(),
            "About.xaml"
        );
    }

    #[test]
    fn test_type_name_from_path_fallback() {
        assert_eq!(type_name_from_path(Path::new("---.xaml")), "Root");
    }
}

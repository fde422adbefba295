//! Built-in catalog for the toolkit's presentation namespace.

use super::core::{TypeCatalog, TypeDefinition};
use crate::config::{APPLICATION_TYPE, OBJECT_TYPE, PRESENTATION_NAMESPACE, RESOURCE_DICTIONARY_TYPE};

/// `(local name, full name, base, name scope)`
type Entry = (&'static str, &'static str, &'static str, bool);

/// Infrastructure types that never appear as elements but anchor base-type walks.
const INFRASTRUCTURE: &[Entry] = &[
    ("ValueType", "System.ValueType", OBJECT_TYPE, false),
    ("DispatcherObject", "System.Windows.Threading.DispatcherObject", OBJECT_TYPE, false),
    ("DependencyObject", "System.Windows.DependencyObject", "System.Windows.Threading.DispatcherObject", false),
    ("Freezable", "System.Windows.Freezable", "System.Windows.DependencyObject", false),
    ("Visual", "System.Windows.Media.Visual", "System.Windows.DependencyObject", false),
    ("UIElement", "System.Windows.UIElement", "System.Windows.Media.Visual", false),
    ("ButtonBase", "System.Windows.Controls.Primitives.ButtonBase", "System.Windows.Controls.ContentControl", false),
    ("ToggleButton", "System.Windows.Controls.Primitives.ToggleButton", "System.Windows.Controls.Primitives.ButtonBase", false),
    ("TextBoxBase", "System.Windows.Controls.Primitives.TextBoxBase", "System.Windows.Controls.Control", false),
    ("Selector", "System.Windows.Controls.Primitives.Selector", "System.Windows.Controls.ItemsControl", false),
    ("Decorator", "System.Windows.Controls.Decorator", "System.Windows.FrameworkElement", false),
    ("FrameworkTemplate", "System.Windows.FrameworkTemplate", "System.Windows.Threading.DispatcherObject", false),
    ("GradientBrush", "System.Windows.Media.GradientBrush", "System.Windows.Media.Brush", false),
];

/// Types resolvable under the presentation namespace.
const PRESENTATION: &[Entry] = &[
    // Application and resources
    ("Application", APPLICATION_TYPE, "System.Windows.Threading.DispatcherObject", false),
    ("ResourceDictionary", RESOURCE_DICTIONARY_TYPE, OBJECT_TYPE, false),
    ("Style", "System.Windows.Style", "System.Windows.Threading.DispatcherObject", false),
    ("Setter", "System.Windows.Setter", OBJECT_TYPE, false),
    ("DataTemplate", "System.Windows.DataTemplate", "System.Windows.FrameworkTemplate", false),
    ("ControlTemplate", "System.Windows.Controls.ControlTemplate", "System.Windows.FrameworkTemplate", false),
    // Element tree roots
    ("FrameworkElement", "System.Windows.FrameworkElement", "System.Windows.UIElement", true),
    ("Control", "System.Windows.Controls.Control", "System.Windows.FrameworkElement", false),
    ("ContentControl", "System.Windows.Controls.ContentControl", "System.Windows.Controls.Control", false),
    ("Window", "System.Windows.Window", "System.Windows.Controls.ContentControl", false),
    ("UserControl", "System.Windows.Controls.UserControl", "System.Windows.Controls.ContentControl", false),
    ("Page", "System.Windows.Controls.Page", "System.Windows.FrameworkElement", false),
    // Panels
    ("Panel", "System.Windows.Controls.Panel", "System.Windows.FrameworkElement", false),
    ("Grid", "System.Windows.Controls.Grid", "System.Windows.Controls.Panel", false),
    ("StackPanel", "System.Windows.Controls.StackPanel", "System.Windows.Controls.Panel", false),
    ("DockPanel", "System.Windows.Controls.DockPanel", "System.Windows.Controls.Panel", false),
    ("WrapPanel", "System.Windows.Controls.WrapPanel", "System.Windows.Controls.Panel", false),
    ("Canvas", "System.Windows.Controls.Canvas", "System.Windows.Controls.Panel", false),
    ("Border", "System.Windows.Controls.Border", "System.Windows.Controls.Decorator", false),
    ("ScrollViewer", "System.Windows.Controls.ScrollViewer", "System.Windows.Controls.ContentControl", false),
    // Controls
    ("Button", "System.Windows.Controls.Button", "System.Windows.Controls.Primitives.ButtonBase", false),
    ("CheckBox", "System.Windows.Controls.CheckBox", "System.Windows.Controls.Primitives.ToggleButton", false),
    ("RadioButton", "System.Windows.Controls.RadioButton", "System.Windows.Controls.Primitives.ToggleButton", false),
    ("Label", "System.Windows.Controls.Label", "System.Windows.Controls.ContentControl", false),
    ("TextBlock", "System.Windows.Controls.TextBlock", "System.Windows.FrameworkElement", false),
    ("TextBox", "System.Windows.Controls.TextBox", "System.Windows.Controls.Primitives.TextBoxBase", false),
    ("Image", "System.Windows.Controls.Image", "System.Windows.FrameworkElement", false),
    ("ItemsControl", "System.Windows.Controls.ItemsControl", "System.Windows.Controls.Control", false),
    ("ListBox", "System.Windows.Controls.ListBox", "System.Windows.Controls.Primitives.Selector", false),
    ("ComboBox", "System.Windows.Controls.ComboBox", "System.Windows.Controls.Primitives.Selector", false),
];

/// Types the generic namespace lookup gets wrong; resolved by local name alone.
const OVERRIDES: &[Entry] = &[
    ("Color", "System.Windows.Media.Color", "System.ValueType", false),
    ("Brush", "System.Windows.Media.Brush", "System.Windows.Freezable", false),
    ("SolidColorBrush", "System.Windows.Media.SolidColorBrush", "System.Windows.Media.Brush", false),
    ("LinearGradientBrush", "System.Windows.Media.LinearGradientBrush", "System.Windows.Media.GradientBrush", false),
    ("RadialGradientBrush", "System.Windows.Media.RadialGradientBrush", "System.Windows.Media.GradientBrush", false),
    ("GradientStop", "System.Windows.Media.GradientStop", "System.Windows.Freezable", false),
    ("FontFamily", "System.Windows.Media.FontFamily", OBJECT_TYPE, false),
];

fn definition(&(name, full_name, base, name_scope): &Entry) -> TypeDefinition {
    let definition = TypeDefinition::new(name, full_name).with_base(base);
    if name_scope {
        definition.with_name_scope()
    } else {
        definition
    }
}

/// Create a catalog covering the toolkit's presentation namespace.
///
/// Additional namespaces are added with
/// [`load_catalog_files`](super::load_catalog_files).
#[must_use]
pub fn create_default_catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();

    catalog.define(TypeDefinition::new("Object", OBJECT_TYPE));
    for entry in INFRASTRUCTURE {
        catalog.define(definition(entry));
    }
    for entry in PRESENTATION {
        catalog.register(PRESENTATION_NAMESPACE, definition(entry));
    }
    for entry in OVERRIDES {
        catalog.register_override(definition(entry));
    }

    catalog
}

//! In-memory toolkit: element types plus a root window that realizes a
//! fixed object graph.

use std::cell::Cell;
use std::sync::Arc;

use xamlnames_runtime::{NameIndex, NameScope, NameScopeSource, Object, Realize};

#[derive(Debug, PartialEq)]
pub struct Button {
    pub content: String,
}

#[derive(Debug, PartialEq)]
pub struct TextBlock {
    pub text: String,
}

#[derive(Debug, PartialEq)]
pub struct TextBox {
    pub text: String,
}

#[derive(Debug, PartialEq)]
pub struct Gauge {
    pub value: u32,
}

/// Root window. Its graph is empty until realized.
#[derive(Debug, Default)]
pub struct Window {
    pub title: String,
    pub realized: Vec<String>,
    pub scopes_built: Cell<usize>,
    missing: Vec<&'static str>,
    caption_is_button: bool,
}

impl Window {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    /// Leave `name` out of the realized graph.
    #[must_use]
    pub fn without(mut self, name: &'static str) -> Self {
        self.missing.push(name);
        self
    }

    /// Realize `Caption` as a button instead of a text block.
    #[must_use]
    pub fn with_caption_as_button(mut self) -> Self {
        self.caption_is_button = true;
        self
    }

    fn register(&self, index: &mut NameIndex, name: &'static str, object: Object) {
        if !self.missing.contains(&name) {
            index.register(name, object);
        }
    }
}

impl Realize for Window {
    fn realize(&mut self, resource_uri: &str) {
        self.realized.push(resource_uri.to_string());
    }
}

impl NameScopeSource for Window {
    fn name_scope(&self) -> Box<dyn NameScope> {
        self.scopes_built.set(self.scopes_built.get() + 1);

        let mut index = NameIndex::new();
        if self.realized.is_empty() {
            return Box::new(index);
        }

        let caption: Object = if self.caption_is_button {
            Arc::new(Button {
                content: "Hello".to_string(),
            })
        } else {
            Arc::new(TextBlock {
                text: "Hello".to_string(),
            })
        };
        self.register(&mut index, "Caption", caption);
        self.register(
            &mut index,
            "Input",
            Arc::new(TextBox {
                text: String::new(),
            }),
        );
        self.register(&mut index, "Speed", Arc::new(Gauge { value: 42 }));
        self.register(
            &mut index,
            "OkButton",
            Arc::new(Button {
                content: "OK".to_string(),
            }),
        );
        Box::new(index)
    }
}

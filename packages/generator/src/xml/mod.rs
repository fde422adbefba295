//! Markup scanning on top of `roxmltree`.

mod reader;
mod utils;

pub use reader::{ElementStart, MarkupDocument, MarkupReader};
pub use utils::{get_attribute, get_namespace, get_tag_name, non_empty_attribute};

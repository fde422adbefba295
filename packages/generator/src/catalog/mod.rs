//! Type catalog: resolution of markup elements to concrete types.
//!
//! Resolution never fails. An element resolves through the override table
//! (by local name alone), then through the types declared under its
//! namespace URI, and finally degrades to the generic object type.

mod config;
mod core;
mod loader;

pub use config::create_default_catalog;
pub use self::core::{TypeCatalog, TypeDefinition};
pub use loader::{load_catalog_files, CatalogFile, NamespaceDeclaration};

//! xamlnames generator - typed accessors for named elements in XAML markup.
//!
//! Analyses a markup document in a single pass, collects every element that
//! carries a logical name, resolves its type through a [`TypeCatalog`], and
//! turns the result into a [`GenerationSpec`] from which Rust source or a
//! YAML/JSON descriptor is emitted.
//!
//! # Example
//!
//! ```
//! use xamlnames_generator::{analyze_markup, build_generation_spec, create_default_catalog};
//! use xamlnames_generator::GenerationOptions;
//!
//! let markup = r#"<Window xmlns="http://schemas.microsoft.com/winfx/2006/xaml/presentation"
//!         xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml"
//!         x:Class="MyApp.MainWindow">
//!     <Button x:Name="OkButton"/>
//! </Window>"#;
//!
//! let catalog = create_default_catalog();
//! let analysis = analyze_markup(markup, "MainWindow.xaml", &catalog).unwrap();
//! assert_eq!(analysis.nodes.len(), 2);
//!
//! let spec = build_generation_spec(&analysis, &GenerationOptions::default()).unwrap();
//! assert_eq!(spec.type_name, "MyApp.MainWindow");
//! assert_eq!(spec.accessors[0].resolved_type.short_name(), "Button");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, validation and resource identifiers
//! - [`types`]: Analysis and generation data types
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Markup reader over a parsed document
//! - [`catalog`]: Type catalog, built-in types and catalog files
//! - [`naming`]: Root classification and naming policy
//! - [`analyzer`]: Named node collection
//! - [`accessor`]: Accessor specification builder
//! - [`emit`]: Rust and descriptor emitters
//! - [`cli`]: Command-line interface

pub mod accessor;
pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod naming;
pub mod types;
pub mod xml;

// Re-export main functions
pub use accessor::{build_generation_spec, GenerationOptions};
pub use analyzer::{analyze_file, analyze_markup};

// Re-export commonly used items
pub use catalog::{create_default_catalog, load_catalog_files, TypeCatalog, TypeDefinition};
pub use emit::OutputFormat;
pub use error::{GeneratorError, Result};
pub use types::{
    AccessorSpec, GenerationSpec, InitializationContract, MarkupAnalysis, NamedNode, RootKind,
    SourcePosition, TypeDescriptor,
};

//! Error types for the generator.
//!
//! Markup errors are fatal for the document being processed and always carry
//! a [`SourcePosition`]. Type resolution misses are not errors at all: they
//! degrade to the generic object type.

use thiserror::Error;

use crate::types::SourcePosition;

/// Main error type for the generator library.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The document is not well-formed XML.
    #[error("{position}: malformed markup: {message}")]
    MarkupParse {
        position: SourcePosition,
        message: String,
    },

    /// The document contains a node kind the scanner does not accept.
    #[error("{position}: unexpected {kind} node")]
    UnexpectedNode {
        kind: &'static str,
        position: SourcePosition,
    },

    /// Two elements map to the same generated member.
    #[error("{second}: name '{name}' is already used by the element at {first}")]
    NameCollision {
        name: String,
        first: SourcePosition,
        second: SourcePosition,
    },

    /// A logical name cannot be turned into an identifier.
    #[error("{position}: '{name}' cannot be used as an accessor name")]
    InvalidIdentifier {
        name: String,
        position: SourcePosition,
    },

    /// Two distinct types would be emitted under the same Rust path.
    #[error("Types '{first}' and '{second}' would both be emitted as '{short_name}'")]
    AmbiguousTypeName {
        short_name: String,
        first: String,
        second: String,
    },

    /// The root element resolved to the generic object type.
    #[error("{file}: root of '{type_name}' has no concrete type; add it to a type catalog")]
    UnresolvedRootType { file: String, type_name: String },

    /// Two inputs produce the same output file.
    #[error("{second} and {first} both generate {path}")]
    OutputCollision {
        path: String,
        first: String,
        second: String,
    },

    /// A configured module or crate path is not a Rust path.
    #[error("Invalid Rust path '{path}': {message}")]
    InvalidRustPath { path: String, message: String },

    /// Emitted tokens did not form a Rust file.
    #[error("Generated Rust did not parse: {0}")]
    RustSyntax(#[from] syn::Error),

    /// Invalid type name format.
    #[error("Invalid type name: '{0}'. Expected a dotted full name (e.g., MyApp.Views.MainWindow)")]
    InvalidTypeName(String),

    /// Input path rejected before reading.
    #[error("Invalid markup path: {0}")]
    InvalidMarkupPath(String),

    /// A catalog file could not be loaded.
    #[error("Failed to load type catalog {path}: {message}")]
    CatalogLoad { path: String, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeneratorError {
    /// Source position of the offending markup, when the error has one.
    #[must_use]
    pub fn position(&self) -> Option<&SourcePosition> {
        match self {
            Self::MarkupParse { position, .. }
            | Self::UnexpectedNode { position, .. }
            | Self::InvalidIdentifier { position, .. } => Some(position),
            Self::NameCollision { second, .. } => Some(second),
            _ => None,
        }
    }

    /// Whether this is a markup parse error (malformed XML or unexpected node).
    #[must_use]
    pub fn is_markup_error(&self) -> bool {
        matches!(
            self,
            Self::MarkupParse { .. } | Self::UnexpectedNode { .. }
        )
    }
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

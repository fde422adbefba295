//! Errors raised by generated accessors at run time.

use thiserror::Error;

/// Failure to retrieve a named element from a realized object graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The name scope has no element with this name.
    #[error("No element named '{name}' in the realized object graph")]
    NotFound { name: String },

    /// An element with this name exists but has an incompatible runtime type.
    #[error("Element '{name}' is not a {expected}")]
    Coercion { name: String, expected: &'static str },
}

/// Result type alias for accessor lookups.
pub type Result<T> = std::result::Result<T, AccessError>;

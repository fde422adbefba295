//! Runtime support for code produced by `xamlnames-generator`.
//!
//! A generated component wraps an allocated root instance of a toolkit type.
//! The toolkit supplies two capabilities on that root type:
//!
//! - [`Realize`]: populate the instance's object graph from its markup
//!   resource (the injection step).
//! - [`NameScopeSource`]: build a [`NameScope`] over the realized graph so
//!   named descendants can be located by their logical name.
//!
//! The generated code itself only threads an [`InitState`] and a
//! [`LazyNameIndex`] through its methods and calls [`locate_as`] from every
//! accessor.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use xamlnames_runtime::{locate_as, NameIndex, NameScope};
//!
//! let mut index = NameIndex::new();
//! index.register("OkButton", Arc::new(String::from("OK")));
//!
//! let label = locate_as::<String>(&index, "OkButton").unwrap();
//! assert_eq!(label.as_str(), "OK");
//! assert!(index.locate("Missing").is_none());
//! ```

mod error;
mod init;
mod scope;

pub use error::{AccessError, Result};
pub use init::{ComponentConnector, InitState, Realize};
pub use scope::{
    locate_as, locate_object, LazyNameIndex, NameIndex, NameScope, NameScopeSource, Object,
};

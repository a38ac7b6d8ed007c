//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use curie::prelude::*;
//!
//! let id = Curie::new("a", "b");
//! assert_eq!(id.identity().as_str(), "a:b");
//! ```

pub use crate::{
    // Core types
    Curie, Identity, Namespaces,
    // Codec
    decode,
    // Errors
    ParseError, ParseErrorKind, ResolveError,
};

//! Compact URI (CURIE) type with a hierarchical algebra and IRI resolution.
//!
//! A CURIE abbreviates an IRI as `scheme:reference`, following the W3C
//! [CURIE Syntax 1.0](https://www.w3.org/TR/2010/NOTE-curie-20101216/).
//! This crate uses CURIEs as short, hierarchical identifiers in domain
//! models, with lossless conversion to absolute URIs through an
//! application-supplied namespace table.
//!
//! # Overview
//!
//! ```text
//! safe_curie := '[' curie ']'
//! curie      := [ [ scheme ] ':' ] reference
//! reference  := segment *( '/' segment )
//! ```
//!
//! Omit the scheme to declare a relative identifier, omit the reference to
//! declare a namespace only, omit both to get the empty CURIE.
//!
//! # Quick Start
//!
//! ```rust
//! use curie::Curie;
//!
//! let id = Curie::parse("[a:b/c/d]").unwrap();
//!
//! // Decompose
//! assert_eq!(id.scheme(), "a");
//! assert_eq!(id.reference(), "b/c/d");
//! assert_eq!(id.base(), "d");
//! assert_eq!(id.path().as_str(), "a:b/c");
//! assert_eq!(id.head(), "b");
//! assert_eq!(id.tail().as_str(), "a:c/d");
//!
//! // Compose
//! let child = id.join(["e"]);
//! assert_eq!(child.as_str(), "a:b/c/d/e");
//! assert_eq!(child.cut(1), id);
//!
//! // Safe form for embedding in structured text
//! assert_eq!(id.safe(), "[a:b/c/d]");
//! ```
//!
//! # Algebra
//!
//! | Operation | Shape |
//! |-----------|-------|
//! | zero | [`Curie::EMPTY`] |
//! | transform | `&str ⟼ Curie` ([`Curie::new`], [`Curie::parse`]) |
//! | compose | `Curie × [segment] ⟼ Curie` ([`Curie::join`], [`Curie::heir`]) |
//! | decompose | `Curie ⟼ Curie` ([`Curie::cut`], [`Curie::path`], [`Curie::tail`]) |
//! | rank | `Curie ⟼ usize` ([`Curie::rank`]) |
//! | ordering | `Curie ≼ Curie` (rank first, then segment by segment) |
//!
//! # Resolution
//!
//! ```rust
//! use curie::{Curie, Namespaces};
//!
//! let ns = Namespaces::new().with("wiki", "http://en.wikipedia.org/wiki/");
//!
//! assert_eq!(ns.uri(&Curie::new("wiki", "CURIE")), "http://en.wikipedia.org/wiki/CURIE");
//! assert_eq!(
//!     ns.create("http://en.wikipedia.org/wiki/%CE%B1"),
//!     Curie::new("wiki", "α"),
//! );
//! ```
//!
//! # Features
//!
//! - `serde`: serializes [`Curie`] as its safe form and lets a
//!   [`Namespaces`] table be loaded from any serde map format.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod codec;
mod constants;
mod curie;
mod error;
mod identity;
#[cfg(kani)]
mod kani_impls;
mod namespace;
pub mod prelude;
pub mod segment;

pub use codec::decode;
pub use constants::{RESERVED, SAFE_CLOSE, SAFE_OPEN, SCHEME_SEPARATOR, SEGMENT_DELIMITER};
pub use curie::Curie;
pub use error::{ParseError, ParseErrorKind, ResolveError};
pub use identity::Identity;
pub use namespace::Namespaces;

//! URN identifiers built on the CURIE segment algebra.
//!
//! A [`Urn`] has the shape `urn:<nid>[:<nss>]`. Its NSS is a `:`-delimited
//! path with the same decomposition and composition operations as a
//! [`curie::Curie`] reference. [`to_curie`] and [`from_curie`] map between
//! the two by swapping `:` and `/` segment delimiters.
//!
//! # Quick Start
//!
//! ```rust
//! use curie::Curie;
//! use curie_urn::{Urn, from_curie, to_curie};
//!
//! let id = Urn::parse("urn:isbn:1:2:3").unwrap();
//! assert_eq!(id.nid(), "isbn");
//! assert_eq!(id.head(), "1");
//! assert_eq!(id.tail().as_str(), "urn:isbn:2:3");
//!
//! let iri = to_curie(&id);
//! assert_eq!(iri, Curie::new("isbn", "1/2/3"));
//! assert_eq!(from_curie(&iri), id);
//! ```
//!
//! # Features
//!
//! - `serde`: serializes [`Urn`] as its text. Both directions reject text
//!   that is neither empty nor a `urn:` name with a namespace identifier.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

mod error;
mod urn;

pub use error::{UrnError, UrnErrorKind};
pub use urn::{NSS_DELIMITER, URN_PREFIX, Urn, from_curie, to_curie};

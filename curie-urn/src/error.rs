//! Error types for URN parsing.

use std::fmt;

/// Error returned when text is not a URN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrnError {
    /// The input that failed to parse
    pub input: String,
    /// The specific kind of error
    pub kind: UrnErrorKind,
}

/// The kind of URN error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrnErrorKind {
    /// The text does not start with `urn:`
    MissingPrefix,
    /// The namespace identifier after `urn:` is empty
    MissingNamespace,
}

impl fmt::Display for UrnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid URN '{}': ", self.input)?;
        match &self.kind {
            UrnErrorKind::MissingPrefix => write!(f, "expected 'urn:' prefix"),
            UrnErrorKind::MissingNamespace => {
                write!(f, "namespace identifier is empty; expected 'urn:<nid>[:<nss>]'")
            }
        }
    }
}

impl std::error::Error for UrnError {}

//! Error types for CURIE parsing and resolution.

use std::fmt;

/// Errors that can occur when parsing a CURIE from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Only one of the safe-form brackets is present
    UnbalancedBrackets {
        /// Whether the input starts with `[`
        open: bool,
        /// Whether the input ends with `]`
        close: bool,
    },
    /// A non-empty value is not written in the bracketed safe form
    MissingBrackets,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse CURIE '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::UnbalancedBrackets { open: true, .. } => {
                write!(f, "opening '[' has no matching ']'")
            }
            ParseErrorKind::UnbalancedBrackets { .. } => {
                write!(f, "closing ']' has no matching '['")
            }
            ParseErrorKind::MissingBrackets => {
                write!(f, "expected safe form '[scheme:reference]'")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Error returned when a resolved CURIE is not a valid absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    /// The resolved text that failed to parse
    pub uri: String,
    /// The underlying URL parser error
    pub source: url::ParseError,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resolved URI '{}' is not a valid URL: {}", self.uri, self.source)
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

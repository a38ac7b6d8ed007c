//! URN value type and its mapping to CURIEs.

use std::fmt;
use std::str::FromStr;

use curie::{Curie, segment};

use crate::error::{UrnError, UrnErrorKind};

/// Literal prefix of every non-empty URN.
pub const URN_PREFIX: &str = "urn:";

/// Delimiter between NID and NSS, and between NSS segments.
pub const NSS_DELIMITER: char = ':';

const CURIE_DELIMITER: char = '/';

/// A Uniform Resource Name.
///
/// ```text
/// namestring := "urn" ":" NID [ ":" NSS ]
/// NSS        := segment *( ":" segment )
/// ```
///
/// The NSS is treated as a `:`-delimited path and supports the same
/// algebra as [`Curie`]: `base`, `path`, `head`, `tail`, `join` and `cut`.
/// A `/` inside the NSS is ordinary text.
///
/// # Examples
///
/// ```
/// use curie_urn::Urn;
///
/// let id = Urn::new("isbn", "b:c:d");
/// assert_eq!(id.as_str(), "urn:isbn:b:c:d");
/// assert_eq!(id.base(), "d");
/// assert_eq!(id.path().as_str(), "urn:isbn:b:c");
/// assert_eq!(id.join(["e"]).cut(1), id);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Urn(String);

impl Urn {
    /// The empty URN.
    pub const EMPTY: Self = Self(String::new());

    /// Creates a URN from a namespace identifier and a namespace-specific
    /// string. An empty `nss` is omitted along with its delimiter.
    ///
    /// No validation is performed; `Urn::new("", "")` is `urn:`.
    #[must_use]
    pub fn new(nid: &str, nss: &str) -> Self {
        let mut text = String::with_capacity(URN_PREFIX.len() + nid.len() + 1 + nss.len());
        text.push_str(URN_PREFIX);
        text.push_str(nid);
        if !nss.is_empty() {
            text.push(NSS_DELIMITER);
            text.push_str(nss);
        }
        Self(text)
    }

    /// Parses a URN.
    ///
    /// The empty string is the empty URN. Any other input must start with
    /// `urn:` (case-insensitive) followed by a non-empty NID. The prefix is
    /// normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `UrnError` if the prefix or the NID is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie_urn::Urn;
    ///
    /// assert_eq!(Urn::parse("urn:isbn:123").unwrap(), Urn::new("isbn", "123"));
    /// assert_eq!(Urn::parse("URN:isbn").unwrap().as_str(), "urn:isbn");
    /// assert!(Urn::parse("isbn:123").is_err());
    /// assert!(Urn::parse("urn:").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, UrnError> {
        if input.is_empty() {
            return Ok(Self::EMPTY);
        }

        let (nid, nss) = split_valid(input)?;
        Ok(Self::new(nid, nss))
    }

    /// Splits the URN into NID and NSS.
    ///
    /// Text without the `urn:` prefix splits into `("", "")`.
    #[must_use]
    pub fn split(&self) -> (&str, &str) {
        split_text(&self.0)
    }

    /// Returns the namespace identifier.
    #[must_use]
    pub fn nid(&self) -> &str {
        self.split().0
    }

    /// Returns the namespace-specific string.
    #[must_use]
    pub fn nss(&self) -> &str {
        self.split().1
    }

    /// Returns true if this is the empty URN.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the URN is empty or parses back to itself.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty() || split_valid(&self.0).is_ok()
    }

    /// Returns the last segment of the NSS.
    #[must_use]
    pub fn base(&self) -> &str {
        let nss = self.nss();
        match nss.rfind(NSS_DELIMITER) {
            Some(at) => &nss[at + 1..],
            None => nss,
        }
    }

    /// Returns the URN without the last NSS segment.
    ///
    /// `urn:isbn:b:c ⟼ urn:isbn:b`, `urn:isbn:b ⟼ urn:isbn`.
    #[must_use]
    pub fn path(&self) -> Self {
        let (nid, nss) = self.split();
        if nss.is_empty() {
            return self.clone();
        }
        Self::new(nid, segment::cut(nss, NSS_DELIMITER, 1))
    }

    /// Returns the first segment of the NSS.
    #[must_use]
    pub fn head(&self) -> &str {
        let nss = self.nss();
        match nss.find(NSS_DELIMITER) {
            Some(at) => &nss[..at],
            None => nss,
        }
    }

    /// Returns the URN without the first NSS segment.
    ///
    /// `urn:isbn:b:c ⟼ urn:isbn:c`.
    #[must_use]
    pub fn tail(&self) -> Self {
        let (nid, nss) = self.split();
        if nss.is_empty() {
            return self.clone();
        }

        let rest = match nss.find(NSS_DELIMITER) {
            Some(at) => &nss[at + 1..],
            None => "",
        };
        Self::new(nid, rest)
    }

    /// Appends segments to the NSS, skipping empty ones.
    ///
    /// ```text
    /// urn:a:b × [c, d] ⟼ urn:a:b:c:d
    /// ```
    #[must_use]
    pub fn join<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (nid, nss) = self.split();
        Self::new(nid, &segment::join(nss, NSS_DELIMITER, segments))
    }

    /// Removes the last `n` segments of the NSS. The NID is kept.
    #[must_use]
    pub fn cut(&self, n: usize) -> Self {
        let (nid, nss) = self.split();
        Self::new(nid, segment::cut(nss, NSS_DELIMITER, n))
    }

    /// Returns the URN text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn split_text(text: &str) -> (&str, &str) {
    match text.strip_prefix(URN_PREFIX) {
        Some(rest) => rest.split_once(NSS_DELIMITER).unwrap_or((rest, "")),
        None => ("", ""),
    }
}

fn split_valid(input: &str) -> Result<(&str, &str), UrnError> {
    let rest = match input.get(..URN_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(URN_PREFIX) => &input[URN_PREFIX.len()..],
        _ => {
            return Err(UrnError {
                input: input.to_string(),
                kind: UrnErrorKind::MissingPrefix,
            });
        }
    };

    let (nid, nss) = rest.split_once(NSS_DELIMITER).unwrap_or((rest, ""));
    if nid.is_empty() {
        return Err(UrnError {
            input: input.to_string(),
            kind: UrnErrorKind::MissingNamespace,
        });
    }

    Ok((nid, nss))
}

/// Converts a URN to a CURIE.
///
/// The NID becomes the scheme; NSS segments are rejoined with `/`, dropping
/// empty ones.
///
/// ```
/// use curie::Curie;
/// use curie_urn::{Urn, to_curie};
///
/// assert_eq!(to_curie(&Urn::new("isbn", "1:2:3")), Curie::new("isbn", "1/2/3"));
/// assert_eq!(to_curie(&Urn::new("isbn", "")).as_str(), "isbn:");
/// assert!(to_curie(&Urn::new("", "")).is_empty());
/// ```
#[must_use]
pub fn to_curie(urn: &Urn) -> Curie {
    let (nid, nss) = urn.split();
    let reference = segment::join("", CURIE_DELIMITER, nss.split(NSS_DELIMITER));
    Curie::new(nid, &reference)
}

/// Converts a CURIE to a URN.
///
/// The scheme becomes the NID; reference segments are rejoined with `:`.
/// A schemeless CURIE yields a URN with an empty NID, which
/// [`Urn::is_valid`] rejects.
///
/// ```
/// use curie::Curie;
/// use curie_urn::{Urn, from_curie};
///
/// assert_eq!(from_curie(&Curie::new("isbn", "1/2/3")).as_str(), "urn:isbn:1:2:3");
/// assert_eq!(from_curie(&Curie::EMPTY).as_str(), "urn:");
/// ```
#[must_use]
pub fn from_curie(curie: &Curie) -> Urn {
    let (scheme, reference) = curie.split();
    let nss = segment::join("", NSS_DELIMITER, reference.split(CURIE_DELIMITER));
    Urn::new(scheme, &nss)
}

impl From<&Urn> for Curie {
    fn from(urn: &Urn) -> Self {
        to_curie(urn)
    }
}

impl From<&Curie> for Urn {
    fn from(curie: &Curie) -> Self {
        from_curie(curie)
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Urn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Urn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Urn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.0.is_empty() {
            return serializer.serialize_str("");
        }
        split_valid(&self.0).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Urn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

//! Namespace table resolving CURIEs to absolute URIs and back.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use tracing::{debug, trace};
use url::Url;

use crate::codec::decode;
use crate::curie::Curie;
use crate::error::ResolveError;

/// Mapping from scheme to absolute URI stem.
///
/// Resolution is plain textual prefix matching. Tables are small,
/// application-defined constants, so entries are scanned linearly.
///
/// # Prefix matching
///
/// When several stems prefix the same URI, the longest stem wins. Between
/// equal stems registered under different schemes, the smallest scheme wins.
///
/// # Examples
///
/// ```
/// use curie::{Curie, Namespaces};
///
/// let ns = Namespaces::new().with("wiki", "http://en.wikipedia.org/wiki/");
///
/// let id = Curie::new("wiki", "CURIE");
/// assert_eq!(ns.uri(&id), "http://en.wikipedia.org/wiki/CURIE");
/// assert_eq!(ns.create("http://en.wikipedia.org/wiki/CURIE"), id);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Namespaces {
    prefixes: BTreeMap<String, String>,
}

impl Namespaces {
    /// Creates an empty namespace table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a namespace, replacing any stem already bound to `scheme`.
    #[must_use]
    pub fn with(mut self, scheme: impl Into<String>, stem: impl Into<String>) -> Self {
        self.insert(scheme, stem);
        self
    }

    /// Binds `scheme` to `stem`, returning the previous stem if any.
    pub fn insert(&mut self, scheme: impl Into<String>, stem: impl Into<String>) -> Option<String> {
        self.prefixes.insert(scheme.into(), stem.into())
    }

    /// Returns the stem bound to `scheme`.
    #[must_use]
    pub fn lookup(&self, scheme: &str) -> Option<&str> {
        self.prefixes.get(scheme).map(String::as_str)
    }

    /// Returns the number of namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Returns true if the table has no namespaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Returns an iterator over `(scheme, stem)` pairs, ordered by scheme.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Compacts an absolute URI into a CURIE.
    ///
    /// The matching stem is replaced by its scheme and the remainder is
    /// normalized with [`decode`]. A URI no stem matches becomes a relative
    /// CURIE holding the URI text unchanged.
    ///
    /// Since [`decode`] turns `%25` into `%`, expanding the result with
    /// [`Namespaces::uri`] does not give back a URI that contains `%25`.
    ///
    /// ```text
    /// http://en.wikipedia.org/wiki/CURIE ⟼ wiki:CURIE
    /// ```
    #[must_use]
    pub fn create(&self, uri: &str) -> Curie {
        let matched = self
            .prefixes
            .iter()
            .filter(|(_, stem)| uri.starts_with(stem.as_str()))
            .min_by_key(|(_, stem)| Reverse(stem.len()));

        match matched {
            Some((scheme, stem)) => {
                trace!(uri, scheme = scheme.as_str(), "namespace stem matched");
                Curie::new(scheme, &decode(&uri[stem.len()..]))
            }
            None => {
                trace!(uri, "no namespace stem matched");
                Curie::new("", uri)
            }
        }
    }

    /// Compacts an absolute URI into a CURIE. Same as [`Namespaces::create`].
    #[must_use]
    pub fn from_uri(&self, uri: &str) -> Curie {
        self.create(uri)
    }

    /// Expands a CURIE into an absolute URI.
    ///
    /// The empty CURIE expands to `""`. A CURIE whose scheme is not in the
    /// table is returned as its own text.
    ///
    /// ```text
    /// wiki:CURIE ⟼ http://en.wikipedia.org/wiki/CURIE
    /// ```
    #[must_use]
    pub fn uri(&self, curie: &Curie) -> String {
        if curie.is_empty() {
            return String::new();
        }

        let (scheme, reference) = curie.split();
        if let Some(stem) = self.lookup(scheme) {
            return format!("{stem}{reference}");
        }

        debug!(
            scheme,
            curie = curie.as_str(),
            "unknown scheme; returning CURIE unchanged"
        );
        curie.to_string()
    }

    /// Expands a CURIE and parses the result as an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError` if the expanded text is not a valid absolute
    /// URL, including the empty CURIE and unresolved relative CURIEs.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie::{Curie, Namespaces};
    ///
    /// let ns = Namespaces::new().with("wiki", "http://en.wikipedia.org/wiki/");
    /// let url = ns.url(&Curie::new("wiki", "CURIE")).unwrap();
    /// assert_eq!(url.host_str(), Some("en.wikipedia.org"));
    /// ```
    pub fn url(&self, curie: &Curie) -> Result<Url, ResolveError> {
        let uri = self.uri(curie);
        Url::parse(&uri).map_err(|source| ResolveError { uri, source })
    }
}

impl<K, V> FromIterator<(K, V)> for Namespaces
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            prefixes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

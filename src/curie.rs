//! Compact URI value type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::{SAFE_CLOSE, SAFE_OPEN, SCHEME_SEPARATOR, SEGMENT_DELIMITER};
use crate::error::{ParseError, ParseErrorKind};
use crate::segment;

/// A compact URI: `scheme:reference`.
///
/// ```text
/// safe_curie := '[' curie ']'
/// curie      := [ [ scheme ] ':' ] reference
/// reference  := segment *( '/' segment )
/// ```
///
/// The first `:` separates scheme from reference; any later `:` belongs to
/// the reference. Omit the scheme to declare a relative identifier (`b/c`),
/// omit the reference to declare a namespace only (`a:`), omit both to get
/// the empty CURIE.
///
/// Values are immutable. Every transformation returns a new `Curie`, and
/// every value is normalized so that
/// `Curie::new(c.scheme(), c.reference()) == c` holds.
///
/// # Examples
///
/// ```
/// use curie::Curie;
///
/// let id = Curie::new("a", "b/c/d");
/// assert_eq!(id.as_str(), "a:b/c/d");
/// assert_eq!(id.base(), "d");
/// assert_eq!(id.path().as_str(), "a:b/c");
/// assert_eq!(id.head(), "b");
/// assert_eq!(id.tail().as_str(), "a:c/d");
///
/// assert_eq!(id.join(["e", "f"]).as_str(), "a:b/c/d/e/f");
/// assert_eq!(id.cut(2).as_str(), "a:b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Curie(String);

impl Curie {
    /// The empty CURIE, zero element of the algebra.
    pub const EMPTY: Self = Self(String::new());

    /// Creates a CURIE from a scheme and a reference.
    ///
    /// Separators around the scheme are tolerated and dropped. With an empty
    /// scheme the reference is returned as a relative CURIE; a leading `:` is
    /// dropped as well since an absent scheme is written without one.
    ///
    /// No character class validation is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie::Curie;
    ///
    /// assert_eq!(Curie::new("a", "b").as_str(), "a:b");
    /// assert_eq!(Curie::new("a:", "b").as_str(), "a:b");
    /// assert_eq!(Curie::new("a", "").as_str(), "a:");
    /// assert_eq!(Curie::new("", "b/c").as_str(), "b/c");
    /// assert!(Curie::new("", "").is_empty());
    /// ```
    #[must_use]
    pub fn new(scheme: &str, reference: &str) -> Self {
        let scheme = scheme.trim_matches(SCHEME_SEPARATOR);
        if scheme.is_empty() {
            return Self(reference.trim_start_matches(SCHEME_SEPARATOR).to_string());
        }

        let mut text = String::with_capacity(scheme.len() + 1 + reference.len());
        text.push_str(scheme);
        text.push(SCHEME_SEPARATOR);
        text.push_str(reference);
        Self(text)
    }

    /// Parses a CURIE from raw `scheme:reference` text or its safe form
    /// `[scheme:reference]`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if only one of the surrounding brackets is
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie::Curie;
    ///
    /// assert_eq!(Curie::parse("a:b").unwrap(), Curie::new("a", "b"));
    /// assert_eq!(Curie::parse("[a:b]").unwrap(), Curie::new("a", "b"));
    /// assert!(Curie::parse("[a:b").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let open = input.starts_with(SAFE_OPEN);
        let close = input.len() > usize::from(open) && input.ends_with(SAFE_CLOSE);

        let text = match (open, close) {
            (true, true) => &input[1..input.len() - 1],
            (false, false) => input,
            _ => {
                return Err(ParseError {
                    input: input.to_string(),
                    kind: ParseErrorKind::UnbalancedBrackets { open, close },
                });
            }
        };

        let (scheme, reference) = split_text(text);
        Ok(Self::new(scheme, reference))
    }

    /// Parses a CURIE that must be written in safe form.
    ///
    /// The empty string is the empty CURIE; any other value must be wrapped
    /// in `[` and `]`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if a non-empty input is not bracketed.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie::Curie;
    ///
    /// assert_eq!(Curie::parse_safe("[a:b]").unwrap().as_str(), "a:b");
    /// assert!(Curie::parse_safe("").unwrap().is_empty());
    /// assert!(Curie::parse_safe("a:b").is_err());
    /// ```
    pub fn parse_safe(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Ok(Self::EMPTY);
        }

        if !input.starts_with(SAFE_OPEN) && !input.ends_with(SAFE_CLOSE) {
            return Err(ParseError {
                input: input.to_string(),
                kind: ParseErrorKind::MissingBrackets,
            });
        }

        Self::parse(input)
    }

    /// Returns the safe form `[scheme:reference]`.
    ///
    /// The empty CURIE renders as the empty string, not `[]`.
    #[must_use]
    pub fn safe(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        format!("{SAFE_OPEN}{}{SAFE_CLOSE}", self.0)
    }

    /// Splits the CURIE into scheme and reference.
    ///
    /// A relative CURIE has an empty scheme; a namespace-only CURIE has an
    /// empty reference. Text before the first `:` is a scheme only if it
    /// holds no `/`, so `b/c:d` is relative.
    #[must_use]
    pub fn split(&self) -> (&str, &str) {
        split_text(&self.0)
    }

    /// Returns the scheme, or `""` for a relative CURIE.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.split().0
    }

    /// Returns the reference.
    #[must_use]
    pub fn reference(&self) -> &str {
        self.split().1
    }

    /// Returns true if this is the empty CURIE.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of segments, counting the scheme slot.
    ///
    /// ```text
    /// ""      ⟼ 0
    /// a:      ⟼ 1
    /// b       ⟼ 2
    /// a:b/c   ⟼ 3
    /// ```
    #[must_use]
    pub fn rank(&self) -> usize {
        self.seq().count()
    }

    /// Returns the last segment of the reference.
    #[must_use]
    pub fn base(&self) -> &str {
        let reference = self.reference();
        match reference.rfind(SEGMENT_DELIMITER) {
            Some(at) => &reference[at + 1..],
            None => reference,
        }
    }

    /// Returns the CURIE without the last segment of its reference.
    ///
    /// `a:b/c/d ⟼ a:b/c`, `a:b ⟼ a:`.
    #[must_use]
    pub fn path(&self) -> Self {
        let (scheme, reference) = self.split();
        if reference.is_empty() {
            return self.clone();
        }

        let parent = match reference.rfind(SEGMENT_DELIMITER) {
            Some(at) => &reference[..at],
            None => "",
        };
        Self::new(scheme, parent)
    }

    /// Returns the first segment of the reference.
    #[must_use]
    pub fn head(&self) -> &str {
        let reference = self.reference();
        match reference.find(SEGMENT_DELIMITER) {
            Some(at) => &reference[..at],
            None => reference,
        }
    }

    /// Returns the CURIE without the first segment of its reference.
    ///
    /// `a:b/c/d ⟼ a:c/d`, `a:b ⟼ a:`.
    #[must_use]
    pub fn tail(&self) -> Self {
        let (scheme, reference) = self.split();
        if reference.is_empty() {
            return self.clone();
        }

        let rest = match reference.find(SEGMENT_DELIMITER) {
            Some(at) => &reference[at + 1..],
            None => "",
        };
        Self::new(scheme, rest)
    }

    /// Appends segments to the reference, skipping empty ones.
    ///
    /// ```text
    /// a:b × [c, d, e] ⟼ a:b/c/d/e
    /// ```
    ///
    /// Segments are appended as text: a segment containing `/` adds nested
    /// structure, and `:` inside a segment is never read as a separator.
    ///
    /// The exception is the first segment of a relative CURIE, which has no
    /// `/` in front of it. `Curie::EMPTY.join(["a:b"])` is the text `a:b`,
    /// and that text reads back as scheme `a`. The same holds for `tail`
    /// when the remaining head segment contains `:`.
    #[must_use]
    pub fn join<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (scheme, reference) = self.split();
        Self::new(scheme, &segment::join(reference, SEGMENT_DELIMITER, segments))
    }

    /// Removes the last `n` segments of the reference. The scheme is kept.
    ///
    /// ```text
    /// a:b/c/d/e ⟼¹ a:b/c/d
    /// a:b/c/d/e ⟼² a:b/c
    /// a:b/c/d/e ⟼⁵ a:
    /// ```
    #[must_use]
    pub fn cut(&self, n: usize) -> Self {
        let (scheme, reference) = self.split();
        Self::new(scheme, segment::cut(reference, SEGMENT_DELIMITER, n))
    }

    /// Returns the last `n` segments of the reference as text.
    ///
    /// ```text
    /// a:b/c/d/e ⟿¹ e
    /// a:b/c/d/e ⟿² d/e
    /// a:b/c/d/e ⟿⁴ b/c/d/e
    /// a:b/c/d/e ⟿⁵ a:b/c/d/e
    /// ```
    ///
    /// When `n` reaches the rank the whole CURIE text is returned.
    #[must_use]
    pub fn suffix(&self, n: usize) -> &str {
        if n >= self.rank() {
            return &self.0;
        }
        if n == 0 {
            return "";
        }

        let reference = self.reference();
        match reference.rmatch_indices(SEGMENT_DELIMITER).nth(n - 1) {
            Some((at, _)) => &reference[at + 1..],
            None => reference,
        }
    }

    /// Composes two CURIEs into a descendant of `self`.
    ///
    /// The scheme and reference of `other` become trailing segments.
    ///
    /// ```text
    /// a:b × c/d/e ⟼ a:b/c/d/e
    /// a:b × c:d/e ⟼ a:b/c/d/e
    /// ```
    #[must_use]
    pub fn heir(&self, other: &Self) -> Self {
        let (scheme, reference) = other.split();
        self.join([scheme, reference])
    }

    /// Returns a CURIE with the same reference under another scheme.
    #[must_use]
    pub fn with_scheme(&self, scheme: &str) -> Self {
        Self::new(scheme, self.reference())
    }

    /// Returns the CURIE text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the CURIE, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the segments: the scheme slot followed by the reference
    /// split on `/`.
    ///
    /// The empty CURIE has no segments; a relative CURIE has an empty scheme
    /// slot.
    ///
    /// ```
    /// use curie::Curie;
    ///
    /// let id = Curie::new("", "b/c");
    /// let seq: Vec<_> = id.seq().collect();
    /// assert_eq!(seq, ["", "b", "c"]);
    /// assert_eq!(Curie::EMPTY.seq().count(), 0);
    /// ```
    pub fn seq(&self) -> impl Iterator<Item = &str> {
        let (scheme, reference) = self.split();
        let head = (!self.0.is_empty()).then_some(scheme);
        let rest = (!reference.is_empty())
            .then(|| reference.split(SEGMENT_DELIMITER))
            .into_iter()
            .flatten();
        head.into_iter().chain(rest)
    }
}

fn split_text(text: &str) -> (&str, &str) {
    match text.split_once(SCHEME_SEPARATOR) {
        Some((scheme, reference)) if !scheme.contains(SEGMENT_DELIMITER) => (scheme, reference),
        _ => ("", text),
    }
}

impl fmt::Display for Curie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Curie {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Curie {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for Curie {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Curie> for String {
    fn from(curie: Curie) -> Self {
        curie.0
    }
}

impl PartialOrd for Curie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Curie {
    /// Fewer segments sort first; equal ranks compare segment by segment.
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.seq().cmp(other.seq()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Curie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.safe())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Curie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_safe(&s).map_err(serde::de::Error::custom)
    }
}

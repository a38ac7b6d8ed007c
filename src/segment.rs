//! Helpers for delimited, path-like references.
//!
//! A reference is viewed as a sequence of segments separated by a single
//! delimiter character. Both the CURIE (`/`) and URN (`:`) algebras build on
//! these two operations.

/// Appends `segments` to `reference`, separated by `delim`.
///
/// Empty segments are skipped. If every segment is empty the reference is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use curie::segment;
///
/// assert_eq!(segment::join("b", '/', ["c", "d"]), "b/c/d");
/// assert_eq!(segment::join("", '/', ["c", "", "d"]), "c/d");
/// assert_eq!(segment::join("b", '/', [""]), "b");
/// ```
#[must_use]
pub fn join<I, S>(reference: &str, delim: char, segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::from(reference);

    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(delim);
        }
        joined.push_str(segment);
    }

    joined
}

/// Removes the last `n` segments from `reference`.
///
/// The delimiter is searched from the end of the string, so
/// `cut(&join(r, d, [a, b]), d, 1) == join(r, d, [a])`. Cutting more segments
/// than the reference holds yields the empty string.
///
/// # Examples
///
/// ```
/// use curie::segment;
///
/// assert_eq!(segment::cut("b/c/d", '/', 1), "b/c");
/// assert_eq!(segment::cut("b/c/d", '/', 2), "b");
/// assert_eq!(segment::cut("b/c/d", '/', 3), "");
/// assert_eq!(segment::cut("b/c/d", '/', 0), "b/c/d");
/// ```
#[must_use]
pub fn cut(reference: &str, delim: char, n: usize) -> &str {
    if n == 0 {
        return reference;
    }

    match reference.rmatch_indices(delim).nth(n - 1) {
        Some((at, _)) => &reference[..at],
        None => "",
    }
}

//! Percent-decoding normalizer converting URIs to IRIs (RFC 3987, section 3.2).

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::constants::RESERVED;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Converts a percent-escaped URI into its canonical IRI form.
///
/// Escaped octets are decoded unless they are RFC 3987 reserved delimiters,
/// which keep their original `%XX` text. Decoded characters that are not
/// graphic (controls, format characters, separators other than space) are
/// escaped again, as is any decoded byte sequence that is not valid UTF-8.
/// Malformed escapes such as `%%`, `%Ww` or a truncated `%4` pass through
/// unchanged.
///
/// `%25` decodes to a literal `%`, which is not escaped again: `a%2541`
/// decodes to `a%41`, and that text now reads as an escape of `A`.
///
/// # Examples
///
/// ```
/// use curie::decode;
///
/// assert_eq!(decode("wiki"), "wiki");
/// assert_eq!(decode("%CE%B1"), "α");
/// assert_eq!(decode("%3A%2F"), "%3A%2F");
/// assert_eq!(decode("%Ww%wW%%"), "%Ww%wW%%");
/// assert_eq!(decode("%00"), "%00");
/// ```
#[must_use]
pub fn decode(uri: &str) -> String {
    let bytes = uri.as_bytes();
    let mut raw = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        match escaped_octet(bytes, i) {
            Some(octet) if RESERVED.contains(&octet) => {
                raw.extend_from_slice(&bytes[i..i + 3]);
                i += 3;
            }
            Some(octet) => {
                raw.push(octet);
                i += 3;
            }
            None => {
                raw.push(bytes[i]);
                i += 1;
            }
        }
    }

    escape_unprintable(&raw)
}

/// Rebuilds the decoded octets as text, one complete UTF-8 sequence at a time.
fn escape_unprintable(raw: &[u8]) -> String {
    let mut iri = String::with_capacity(raw.len());

    for chunk in raw.utf8_chunks() {
        for c in chunk.valid().chars() {
            if is_graphic(c) {
                iri.push(c);
            } else {
                let mut buf = [0u8; 4];
                for &b in c.encode_utf8(&mut buf).as_bytes() {
                    push_escaped(&mut iri, b);
                }
            }
        }

        for &b in chunk.invalid() {
            push_escaped(&mut iri, b);
        }
    }

    iri
}

/// Returns the octet encoded by a well-formed `%XX` escape starting at `at`.
fn escaped_octet(bytes: &[u8], at: usize) -> Option<u8> {
    match bytes.get(at..at + 3)? {
        [b'%', hi, lo] => Some((unhex(*hi)? << 4) | unhex(*lo)?),
        _ => None,
    }
}

const fn unhex(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn push_escaped(iri: &mut String, b: u8) {
    iri.push('%');
    iri.push(char::from(HEX_UPPER[usize::from(b >> 4)]));
    iri.push(char::from(HEX_UPPER[usize::from(b & 0x0f)]));
}

/// Letters, marks, numbers, punctuation, symbols and the space separator.
fn is_graphic(c: char) -> bool {
    use GeneralCategory as G;

    matches!(
        get_general_category(c),
        G::UppercaseLetter
            | G::LowercaseLetter
            | G::TitlecaseLetter
            | G::ModifierLetter
            | G::OtherLetter
            | G::NonspacingMark
            | G::SpacingMark
            | G::EnclosingMark
            | G::DecimalNumber
            | G::LetterNumber
            | G::OtherNumber
            | G::ConnectorPunctuation
            | G::DashPunctuation
            | G::OpenPunctuation
            | G::ClosePunctuation
            | G::InitialPunctuation
            | G::FinalPunctuation
            | G::OtherPunctuation
            | G::MathSymbol
            | G::CurrencySymbol
            | G::ModifierSymbol
            | G::OtherSymbol
            | G::SpaceSeparator
    )
}

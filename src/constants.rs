//! Constants shared by the CURIE algebra and codec.

/// Separator between scheme and reference.
pub const SCHEME_SEPARATOR: char = ':';

/// Delimiter between reference segments.
pub const SEGMENT_DELIMITER: char = '/';

/// Opening bracket of the safe CURIE form.
pub const SAFE_OPEN: char = '[';

/// Closing bracket of the safe CURIE form.
pub const SAFE_CLOSE: char = ']';

/// RFC 3987 reserved delimiters (`gen-delims` and `sub-delims`).
///
/// Percent escapes of these octets are never decoded.
pub const RESERVED: &[u8] = b":/?#[]@!$&'()*+,;=";

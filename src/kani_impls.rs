//! Kani Arbitrary implementations and proof harnesses for the CURIE algebra.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Curie, decode, segment};

/// Characters for generated segments; no delimiters, no separators.
const SEGMENT_CHARS: &[u8] = b"abcxyz019-._~";

/// Characters for generated references; includes the segment delimiter.
const REFERENCE_CHARS: &[u8] = b"abc01/";

/// Characters for generated URIs, including escapes and reserved octets.
const URI_CHARS: &[u8] = b"%0aAfF:/g";

fn arbitrary_from(chars: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    kani::assume(len <= max_len);

    let mut s = String::with_capacity(len);
    for _ in 0..len {
        let idx: usize = kani::any();
        s.push(chars[idx % chars.len()] as char);
    }
    s
}

fn arbitrary_segment() -> String {
    let s = arbitrary_from(SEGMENT_CHARS, 3);
    kani::assume(!s.is_empty());
    s
}

impl kani::Arbitrary for Curie {
    fn any() -> Self {
        let scheme = arbitrary_from(SEGMENT_CHARS, 2);
        let reference = arbitrary_from(REFERENCE_CHARS, 4);
        Self::new(&scheme, &reference)
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: joining only empty segments returns the CURIE unchanged
#[kani::proof]
#[kani::unwind(8)]
fn proof_join_empty_is_noop() {
    let id: Curie = kani::any();
    assert_eq!(id.join([""]), id);
    assert_eq!(id.join(["", ""]), id);
}

/// Proof: cut(n) undoes a join of n non-empty segments
#[kani::proof]
#[kani::unwind(8)]
fn proof_cut_undoes_join() {
    let id: Curie = kani::any();
    let a = arbitrary_segment();
    let b = arbitrary_segment();

    assert_eq!(id.join([&a, &b]).cut(2), id);
    assert_eq!(id.join([&a, &b]).cut(1), id.join([&a]));
}

/// Proof: split then new reconstructs the CURIE
#[kani::proof]
#[kani::unwind(8)]
fn proof_split_new_roundtrip() {
    let id: Curie = kani::any();
    let (scheme, reference) = id.split();
    assert_eq!(Curie::new(scheme, reference), id);
}

/// Proof: ordering is irreflexive and consistent with equality
#[kani::proof]
#[kani::unwind(8)]
fn proof_ordering_consistent() {
    let a: Curie = kani::any();
    let b: Curie = kani::any();

    assert!(!a.lt(&a));
    assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
}

/// Proof: safe form parses back to the same CURIE
#[kani::proof]
#[kani::unwind(8)]
fn proof_safe_roundtrip() {
    let id: Curie = kani::any();
    let parsed = Curie::parse(&id.safe()).expect("safe form should parse");
    assert_eq!(parsed, id);
}

/// Proof: segment::cut(0) is identity
#[kani::proof]
#[kani::unwind(6)]
fn proof_cut_zero_is_identity() {
    let reference = arbitrary_from(REFERENCE_CHARS, 4);
    assert_eq!(segment::cut(&reference, '/', 0), reference);
}

/// Proof: decode never panics and yields valid UTF-8 text
#[kani::proof]
#[kani::unwind(8)]
fn proof_decode_total() {
    let uri = arbitrary_from(URI_CHARS, 5);
    let iri = decode(&uri);
    assert!(iri.len() <= uri.len() * 3);
}

//! Property-based tests for the CURIE algebra laws.
//!
//! These tests generate random schemes, references and segments and verify
//! that composition, decomposition, ordering and decoding behave as
//! documented for every input, not only the hand-picked cases.

use proptest::prelude::*;

use curie::{Curie, Namespaces, decode, segment};

/// Strategies for generating CURIE components.
mod strategies {
    use super::*;

    /// Scheme tokens: no separator, no delimiter.
    pub fn scheme() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9+.-]{0,7}"
    }

    /// Optional scheme, empty half of the time.
    pub fn maybe_scheme() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), scheme()]
    }

    /// A single non-empty segment without delimiters.
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.~-]{1,8}"
    }

    /// Any unicode segment text, possibly empty, never containing `/`.
    pub fn loose_segment() -> impl Strategy<Value = String> {
        "[^/]{0,8}"
    }

    /// A non-empty segment that holds at least one `:`.
    pub fn colon_segment() -> impl Strategy<Value = String> {
        "[a-z0-9]{0,4}:[a-z0-9:]{0,4}"
    }

    /// A reference of 0 to 5 segments.
    pub fn reference() -> impl Strategy<Value = String> {
        prop::collection::vec(segment(), 0..=5).prop_map(|segments| segments.join("/"))
    }

    /// A CURIE built from generated components.
    pub fn curie() -> impl Strategy<Value = Curie> {
        (maybe_scheme(), reference()).prop_map(|(s, r)| Curie::new(&s, &r))
    }

    /// Arbitrary text, including separators and brackets.
    pub fn text() -> impl Strategy<Value = String> {
        "\\PC{0,24}"
    }
}

mod composition_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn cut_undoes_join(
            s in maybe_scheme(),
            r in reference(),
            segments in prop::collection::vec(segment(), 0..=6),
        ) {
            let id = Curie::new(&s, &r);
            let joined = id.join(&segments);
            prop_assert_eq!(joined.cut(segments.len()), id);
        }

        #[test]
        fn cut_one_undoes_last_join(
            id in curie(),
            segments in prop::collection::vec(segment(), 1..=6),
        ) {
            let (last, init) = segments.split_last().unwrap();
            prop_assert_eq!(id.join(&segments).cut(1), id.join(init));
            let joined = id.join(&segments);
            prop_assert_eq!(joined.base(), last.as_str());
        }

        #[test]
        fn join_empty_is_noop(id in curie(), count in 0usize..4) {
            let empties = vec![""; count];
            prop_assert_eq!(id.join(empties), id);
        }

        #[test]
        fn join_preserves_scheme(id in curie(), segments in prop::collection::vec(loose_segment(), 0..4)) {
            prop_assume!(!id.is_empty());
            let joined = id.join(&segments);
            prop_assert_eq!(joined.scheme(), id.scheme());
        }

        #[test]
        fn relative_join_with_colons_stays_relative(
            r in reference(),
            segments in prop::collection::vec(colon_segment(), 1..=4),
        ) {
            prop_assume!(!r.is_empty());
            let id = Curie::new("", &r);
            let joined = id.join(&segments);
            prop_assert_eq!(joined.scheme(), "");
            prop_assert_eq!(joined.cut(segments.len()), id);
        }

        #[test]
        fn cut_zero_is_identity(id in curie()) {
            prop_assert_eq!(id.cut(0), id);
        }

        #[test]
        fn cut_beyond_rank_keeps_scheme(id in curie(), extra in 0usize..3) {
            let cut = id.cut(id.rank() + extra);
            prop_assert_eq!(cut.reference(), "");
            prop_assert_eq!(cut.scheme(), id.scheme());
        }

        #[test]
        fn path_and_base_rebuild(id in curie()) {
            prop_assume!(!id.reference().is_empty());
            prop_assert_eq!(id.path().join([id.base()]), id);
        }

        #[test]
        fn head_and_tail_rebuild(s in scheme(), segments in prop::collection::vec(segment(), 1..=5)) {
            let id = Curie::new(&s, &segments.join("/"));
            let rebuilt = Curie::new(&s, id.head()).join([id.tail().reference()]);
            prop_assert_eq!(rebuilt, id);
        }
    }
}

mod decomposition_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn split_new_roundtrip(input in text()) {
            if let Ok(id) = Curie::parse(&input) {
                let (scheme, reference) = id.split();
                prop_assert_eq!(Curie::new(scheme, reference), id);
            }
        }

        #[test]
        fn parse_never_panics(input in text()) {
            let _ = Curie::parse(&input);
            let _ = Curie::parse_safe(&input);
        }

        #[test]
        fn safe_roundtrip(id in curie()) {
            let safe = id.safe();
            prop_assert_eq!(Curie::parse(&safe).unwrap(), id.clone());
            prop_assert_eq!(Curie::parse_safe(&safe).unwrap(), id);
        }

        #[test]
        fn empty_iff_rank_zero(id in curie()) {
            prop_assert_eq!(id.is_empty(), id.rank() == 0);
        }

        #[test]
        fn first_separator_splits(s in scheme(), r in "[a-z:]{0,8}") {
            let id = Curie::new(&s, &r);
            prop_assert_eq!(id.scheme(), s.as_str());
            prop_assert_eq!(id.reference(), r.as_str());
        }
    }
}

mod ordering_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn irreflexive(id in curie()) {
            prop_assert!(!id.lt(&id));
        }

        #[test]
        fn consistent_with_eq(a in curie(), b in curie()) {
            prop_assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
        }

        #[test]
        fn antisymmetric(a in curie(), b in curie()) {
            prop_assert_eq!(a < b, b > a);
        }

        #[test]
        fn lower_rank_first(a in curie(), b in curie()) {
            if a.rank() < b.rank() {
                prop_assert!(a < b);
            }
        }

        #[test]
        fn descendants_sort_after(id in curie(), seg in segment()) {
            prop_assert!(id < id.join([seg]));
        }
    }
}

mod codec_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn graphic_ascii_unchanged(s in "[!-~]{0,24}") {
            prop_assume!(!s.contains('%'));
            prop_assert_eq!(decode(&s), s);
        }

        #[test]
        fn decode_is_idempotent_on_unicode_text(s in "[\\p{L}\\p{N} ]{0,16}") {
            prop_assert_eq!(decode(&s), s);
        }

        #[test]
        fn escaped_letters_decode(s in "[\\p{L}]{0,8}") {
            let escaped: String = s.bytes().map(|b| format!("%{b:02X}")).collect();
            prop_assert_eq!(decode(&escaped), s);
        }

        #[test]
        fn decode_never_panics(s in text()) {
            let _ = decode(&s);
        }

        #[test]
        fn namespace_roundtrip(s in scheme(), r in reference()) {
            let ns = Namespaces::new().with(s.clone(), "https://example.com/ns/");
            let id = Curie::new(&s, &r);
            prop_assert_eq!(ns.create(&ns.uri(&id)), id);
        }

        #[test]
        fn segment_join_cut(r in reference(), segments in prop::collection::vec(segment(), 0..=4)) {
            let joined = segment::join(&r, '/', &segments);
            prop_assert_eq!(segment::cut(&joined, '/', segments.len()), r.as_str());
        }
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn decomposition_scenario() {
        let id = Curie::new("a", "b/c/d");
        assert_eq!(id.base(), "d");
        assert_eq!(id.path().as_str(), "a:b/c");
        assert_eq!(id.head(), "b");
        assert_eq!(id.tail().as_str(), "a:c/d");
    }

    #[test]
    fn empty_identity() {
        let id = Curie::new("", "");
        assert!(id.is_empty());
        assert_eq!(id.safe(), "");
    }

    #[test]
    fn wiki_round_trip() {
        let ns = Namespaces::new().with("wiki", "http://en.wikipedia.org/wiki/");
        assert_eq!(
            ns.uri(&Curie::new("wiki", "CURIE")),
            "http://en.wikipedia.org/wiki/CURIE"
        );
        assert_eq!(
            ns.from_uri("http://en.wikipedia.org/wiki/CURIE"),
            Curie::new("wiki", "CURIE")
        );
    }

    #[test]
    fn decode_examples() {
        assert_eq!(decode("wiki"), "wiki");
        assert_eq!(decode("%3A%2F"), "%3A%2F");
        assert_eq!(decode("%CE%B1"), "α");
        assert_eq!(decode("%Ww%wW%%"), "%Ww%wW%%");
    }
}

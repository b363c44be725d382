//! Property-based tests for nebula-wrapped.

use nebula_wrapped::prelude::*;
use proptest::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

// ============================================================================
// IDEMPOTENCY: writing the held value back changes nothing
// ============================================================================

proptest! {
    #[test]
    fn within_range_idempotent(low in -1000i64..1000, span in 0i64..1000, n in any::<i64>()) {
        let mut sut = WithinRange::new(n, low..=low + span);
        let once = *sut;
        sut.set(once);
        prop_assert_eq!(*sut, once);
        prop_assert!(once >= low && once <= low + span);
    }

    #[test]
    fn within_range_float_idempotent(n in any::<f64>()) {
        let mut sut = WithinRange::new(n, -1.0..=1.0);
        let once = *sut;
        sut.set(once);
        prop_assert_eq!(*sut, once);
        prop_assert!((-1.0..=1.0).contains(&once));
    }

    #[test]
    fn within_range_keeps_in_range_values(n in 18i32..=100) {
        let sut = WithinRange::new(n, 18..=100);
        prop_assert_eq!(*sut, n);
    }

    #[test]
    fn truncated_idempotent(s in ".{0,40}", max in 0usize..20) {
        let mut sut = Truncated::new(s.clone(), max);
        let once = sut.get().clone();
        sut.set(once.clone());
        prop_assert_eq!(sut.get(), &once);
        prop_assert!(once.graphemes(true).count() <= max);
        prop_assert!(s.starts_with(once.as_str()));
    }

    #[test]
    fn truncated_vec_is_prefix(v in proptest::collection::vec(any::<u8>(), 0..50), max in 0usize..20) {
        let sut = Truncated::new(v.clone(), max);
        let kept = sut.into_inner();
        prop_assert_eq!(kept.len(), v.len().min(max));
        prop_assert_eq!(&v[..kept.len()], &kept[..]);
    }

    #[test]
    fn nil_if_empty_never_holds_empty(s in proptest::option::of(".{0,3}")) {
        let sut = NilIfEmpty::new(s.clone());
        match sut.get() {
            Some(held) => prop_assert!(!held.is_empty()),
            None => prop_assert!(s.is_none_or(|v| v.is_empty())),
        }
    }

    #[test]
    fn nil_if_zero_idempotent(n in proptest::option::of(-3i32..3)) {
        let mut sut = NilIfZero::new(n);
        let once = *sut;
        sut.set(once);
        prop_assert_eq!(*sut, once);
        prop_assert_ne!(once, Some(0));
    }

    #[test]
    fn regex_holds_only_accepted_writes(writes in proptest::collection::vec("[0-9a-z]{0,4}", 0..10)) {
        let mut sut: RegEx<String> = RegEx::with_pattern("[0-9]+").unwrap();
        let mut expected = String::new();
        for w in writes {
            if !w.is_empty() && w.chars().all(|c| c.is_ascii_digit()) {
                expected.clone_from(&w);
            }
            sut.set(w);
        }
        prop_assert_eq!(sut.get(), &expected);
    }
}

// ============================================================================
// IDENTITY: omitting the initial value == passing the identity explicitly
// ============================================================================

proptest! {
    #[test]
    fn within_range_identity_constructor(low in -50i32..50, span in 0i32..50) {
        let implicit: WithinRange<i32> = WithinRange::with_range(low..=low + span);
        let explicit = WithinRange::new(0, low..=low + span);
        prop_assert_eq!(*implicit, *explicit);
    }

    #[test]
    fn restrict_identity_constructor(cap in 0u32..100, writes in proptest::collection::vec(any::<u32>(), 0..8)) {
        let rule = move |v: &mut u32| *v = (*v).min(cap);
        let mut implicit: Restrict<u32> = Restrict::with_rule(rule);
        let mut explicit = Restrict::new(0_u32, rule);
        prop_assert_eq!(*implicit, *explicit);
        for w in writes {
            implicit.set(w);
            explicit.set(w);
            prop_assert_eq!(*implicit, *explicit);
        }
    }

    #[test]
    fn regex_identity_constructor(writes in proptest::collection::vec("[0-9a-z]{0,4}", 0..8)) {
        let mut implicit: RegEx<String> = RegEx::with_pattern("[a-z]+").unwrap();
        let mut explicit = RegEx::new(String::new(), "[a-z]+").unwrap();
        prop_assert_eq!(implicit.get(), explicit.get());
        for w in writes {
            implicit.set(w.clone());
            explicit.set(w);
            prop_assert_eq!(implicit.get(), explicit.get());
        }
    }

    #[test]
    fn truncated_identity_constructor(max in 0usize..10) {
        let implicit: Truncated<Vec<u8>> = Truncated::with_max_length(max);
        let explicit = Truncated::new(Vec::<u8>::new(), max);
        prop_assert_eq!(implicit.get(), explicit.get());
    }
}

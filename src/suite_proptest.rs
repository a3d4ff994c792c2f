//! Property-based tests for target ordering and suite resolution.
//!
//! These tests use proptest to generate random target lists and verify that
//! the ordering and set-difference invariants hold for all inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::manifest::{Pin, RepositoryDescriptor};
    use crate::phases::suites::resolve;
    use crate::target::{qualify, suite_order};
    use proptest::prelude::*;

    fn descriptor(excludes: Vec<String>) -> RepositoryDescriptor {
        RepositoryDescriptor {
            name: "sample_repo".to_string(),
            importpath: "example.com/sample".to_string(),
            pin: Pin::Commit("abc123".to_string()),
            build_file_proto_mode: None,
            excludes,
            platform_tests: vec![],
        }
    }

    // ============================================================================
    // suite_order property tests
    // ============================================================================

    proptest! {
        /// Property: suite_order is deterministic (same inputs = same ordering)
        #[test]
        fn suite_order_is_deterministic(a in "[a-z/:._-]{0,16}", b in "[a-z/:._-]{0,16}") {
            prop_assert_eq!(suite_order(&a, &b), suite_order(&a, &b));
        }

        /// Property: suite_order is antisymmetric
        #[test]
        fn suite_order_reverses(a in "[a-z/:._-]{0,16}", b in "[a-z/:._-]{0,16}") {
            prop_assert_eq!(suite_order(&a, &b), suite_order(&b, &a).reverse());
        }

        /// Property: every string compares equal to itself
        #[test]
        fn suite_order_is_reflexive(a in "[a-z/:._-]{0,16}") {
            prop_assert_eq!(suite_order(&a, &a), std::cmp::Ordering::Equal);
        }

        /// Property: sorting an already-sorted list changes nothing
        #[test]
        fn suite_sort_is_idempotent(
            mut targets in proptest::collection::vec("[a-z/:]{0,12}", 0..12)
        ) {
            targets.sort_by(|a, b| suite_order(a, b));
            let sorted_once = targets.clone();
            targets.sort_by(|a, b| suite_order(a, b));
            prop_assert_eq!(sorted_once, targets);
        }

        /// Property: a package's own targets sort before anything in its
        /// subpackages
        #[test]
        fn suite_order_separator_sorts_first(
            pkg in "[a-z]{1,8}",
            target in "[a-z]{1,8}",
            sub in "[a-z]{1,8}",
        ) {
            let own = format!("{}:{}", pkg, target);
            let nested = format!("{}/{}", pkg, sub);
            prop_assert_eq!(suite_order(&own, &nested), std::cmp::Ordering::Less);
        }

        /// Property: qualification prefixes the repository identity and
        /// preserves the pattern
        #[test]
        fn qualify_shape(repo in "[a-z_]{1,12}", pattern in "[a-z/:]{0,12}") {
            let qualified = qualify(&repo, &pattern);
            prop_assert!(
                qualified.starts_with(&format!("@{}//", repo)),
                "qualified target must start with the repository scope"
            );
            prop_assert!(qualified.ends_with(&pattern));
        }
    }

    // ============================================================================
    // resolve property tests
    // ============================================================================

    proptest! {
        /// Property: resolution is a set difference - the resolved list is a
        /// subset of the discovered set, disjoint from the effective
        /// excludes, and free of blank entries
        #[test]
        fn resolve_is_set_difference(
            entries in proptest::collection::vec(("[a-z]{1,6}:[a-z]{1,6}_test", any::<bool>()), 0..10)
        ) {
            let discovered: Vec<String> = entries
                .iter()
                .map(|(pattern, _)| qualify("sample_repo", pattern))
                .collect();
            let excludes: Vec<String> = entries
                .iter()
                .filter(|(_, excluded)| *excluded)
                .map(|(pattern, _)| pattern.clone())
                .collect();

            let repo = descriptor(excludes);
            let effective = repo.effective_excludes();
            let resolved = resolve(&repo, &discovered).unwrap();

            for test in &resolved {
                prop_assert!(discovered.contains(test));
                prop_assert!(!effective.contains(test));
                prop_assert!(!test.is_empty());
            }
        }

        /// Property: the resolved list comes out in suite order
        #[test]
        fn resolve_output_is_sorted(
            patterns in proptest::collection::vec("[a-z]{1,6}:[a-z]{1,6}_test", 0..10)
        ) {
            let discovered: Vec<String> = patterns
                .iter()
                .map(|pattern| qualify("sample_repo", pattern))
                .collect();

            let repo = descriptor(vec![]);
            let resolved = resolve(&repo, &discovered).unwrap();

            for pair in resolved.windows(2) {
                prop_assert_ne!(suite_order(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
            }
        }
    }
}

//! Test-target labels and the suite sort order.
//!
//! Discovered test targets are fully-qualified labels of the form
//! `@repository//package:name`. Exclusion patterns in the repository table
//! are written relative to their repository and qualified here before they
//! are compared against discovered targets.

use std::cmp::Ordering;

/// Qualify a repository-relative pattern with its repository identity.
pub fn qualify(repository: &str, pattern: &str) -> String {
    format!("@{}//{}", repository, pattern)
}

/// The query scope covering every target in a repository.
pub fn scope(repository: &str) -> String {
    format!("@{}//...", repository)
}

/// Compare two targets for test-suite ordering.
///
/// The package/target separator `:` sorts before every other byte, so a
/// package's own targets come immediately after the package path and before
/// any of its subpackages.
pub fn suite_order(a: &str, b: &str) -> Ordering {
    fn key(s: &str) -> impl Iterator<Item = u8> + '_ {
        s.bytes().map(|byte| if byte == b':' { 0 } else { byte })
    }
    key(a).cmp(key(b))
}

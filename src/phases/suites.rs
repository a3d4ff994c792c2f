//! Phase 2: Test-Suite Aggregation
//!
//! For each repository, in table order:
//!
//! 1.  Discover its test targets through the query capability.
//! 2.  Qualify the configured exclusions and validate them against the
//!     discovered set. A stale exclusion (a test renamed or removed
//!     upstream) must fail the run here rather than silently stop excluding;
//!     the diagnostic carries every invalid pattern, not just the first.
//! 3.  Resolve the suite: discovered targets in suite order, minus the
//!     exclusions, minus blank entries.
//! 4.  Append a `test_suite` block with the resolved targets.
//!
//! The resolved lists are recorded in a side table for the report phase.
//! The file content is assembled in memory and written once at the end, so
//! a validation failure leaves no partially-written suite file behind.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::defaults;
use crate::error::{Error, Result};
use crate::manifest::{Manifest, RepositoryDescriptor, ResolvedTests};
use crate::query::TestQuery;
use crate::target;

use super::GENERATED_HEADER;

/// Resolve a repository's test list from the targets the query discovered.
///
/// Validates every effective exclusion against the discovered set first,
/// then returns the discovered targets minus the exclusions and blanks, in
/// suite order.
pub fn resolve(repo: &RepositoryDescriptor, discovered: &[String]) -> Result<Vec<String>> {
    let excludes = repo.effective_excludes();
    let discovered_set: HashSet<&str> = discovered.iter().map(String::as_str).collect();

    let invalid: Vec<String> = excludes
        .iter()
        .filter(|pattern| !discovered_set.contains(pattern.as_str()))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(Error::InvalidExcludes {
            repository: repo.name.clone(),
            patterns: invalid,
        });
    }

    let exclude_set: HashSet<&str> = excludes.iter().map(String::as_str).collect();
    let mut tests: Vec<String> = discovered
        .iter()
        .filter(|test| !test.is_empty() && !exclude_set.contains(test.as_str()))
        .cloned()
        .collect();
    tests.sort_by(|a, b| target::suite_order(a, b));
    Ok(tests)
}

fn render_suite(name: &str, tests: &[String]) -> String {
    let mut out = String::new();
    out.push_str("\ntest_suite(\n");
    out.push_str(&format!("    name = \"{}\",\n", name));
    out.push_str("    tests = [\n");
    for test in tests {
        out.push_str(&format!("        \"{}\",\n", test));
    }
    out.push_str("    ],\n)\n");
    out
}

/// Generate the test-suite file and the resolved-test side table.
///
/// Queries the build graph once per repository, synchronously, in table
/// order. Any query failure or invalid exclusion aborts before the file is
/// written.
pub fn emit(
    manifest: &Manifest,
    query: &dyn TestQuery,
    out_dir: &Path,
) -> Result<(PathBuf, ResolvedTests)> {
    let mut resolved = ResolvedTests::new();
    let mut content = String::from(GENERATED_HEADER);

    for repo in manifest.repositories() {
        info!("querying test targets for {}", repo.name);
        let discovered = query.query_tests(&repo.name)?;
        debug!("{}: {} targets discovered", repo.name, discovered.len());

        let tests = resolve(repo, &discovered)?;
        content.push_str(&render_suite(&repo.name, &tests));
        resolved.insert(&repo.name, tests);
    }

    let path = out_dir.join(defaults::SUITES_FILE);
    fs::write(&path, content)?;
    Ok((path, resolved))
}

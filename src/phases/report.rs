//! Phase 3: Report
//!
//! Renders the resolved test lists into a human-readable document: one
//! section per repository with a link to its canonical source location and
//! the tests its aggregated suite runs. Purely derived output with no
//! validation of its own; it must run after the test-suite phase has
//! recorded a resolved list for every repository.

use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{Error, Result};
use crate::manifest::{Manifest, ResolvedTests};

const TITLE_BLOCK: &str = "\
Popular repository tests
========================

These tests are designed to check that gazelle and rules_go together can cope
with a list of popular repositories people depend on.

It helps catch changes that might break a large number of users.

.. contents::

";

/// Render the full report.
pub fn render(manifest: &Manifest, resolved: &ResolvedTests) -> Result<String> {
    let mut out = String::from(TITLE_BLOCK);
    for repo in manifest.repositories() {
        let tests = resolved
            .get(&repo.name)
            .ok_or_else(|| Error::UnresolvedRepository {
                repository: repo.name.clone(),
            })?;

        out.push_str(&format!(
            "{}\n{}\n\n",
            repo.name,
            "_".repeat(repo.name.len())
        ));
        out.push_str(&format!(
            "This runs tests from the repository `{0} <https://{0}>`_\n\n",
            repo.importpath
        ));
        for test in tests {
            out.push_str(&format!("* {}\n", test));
        }
        out.push_str("\n\n");
    }
    Ok(out)
}

/// Write the report into `out_dir`, overwriting any previous copy.
pub fn emit(manifest: &Manifest, resolved: &ResolvedTests, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(defaults::REPORT_FILE);
    fs::write(&path, render(manifest, resolved)?)?;
    Ok(path)
}

//! Pipeline Orchestration
//!
//! Runs the three generation phases in their fixed order: dependency
//! declarations, test suites, report. The order is load-bearing — the
//! report consumes the resolved lists the test-suite phase records.
//!
//! There is no atomic multi-file commit: if a phase fails, files written by
//! earlier phases are left behind and later files keep whatever a previous
//! run produced. Callers treat any failure as fatal for the whole run.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::query::TestQuery;

use super::{deps, report, suites};

/// What a successful run produced.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Path of the dependency-declaration file.
    pub deps_file: PathBuf,
    /// Path of the test-suite file.
    pub suites_file: PathBuf,
    /// Path of the report file.
    pub report_file: PathBuf,
    /// Number of repositories processed.
    pub repositories: usize,
    /// Total resolved test targets across all suites.
    pub tests: usize,
}

/// Run the full generation pipeline into `out_dir`.
pub fn run(
    manifest: &Manifest,
    query: &dyn TestQuery,
    out_dir: &Path,
) -> Result<GenerateSummary> {
    info!("writing dependency declarations");
    let deps_file = deps::emit(manifest, out_dir)?;

    info!("aggregating test suites");
    let (suites_file, resolved) = suites::emit(manifest, query, out_dir)?;

    info!("writing report");
    let report_file = report::emit(manifest, &resolved, out_dir)?;

    Ok(GenerateSummary {
        deps_file,
        suites_file,
        report_file,
        repositories: manifest.repositories().len(),
        tests: resolved.total(),
    })
}

//! Fixed output locations for the generator.
//!
//! All three files are written into the output directory (the current
//! directory unless overridden) and are always fully overwritten.

/// Dependency-declaration file, loaded from the consuming WORKSPACE.
pub const DEPS_FILE: &str = "popular_repos.bzl";

/// Test-suite aggregation file.
pub const SUITES_FILE: &str = "BUILD.bazel";

/// Human-readable report of the aggregated suites.
pub const REPORT_FILE: &str = "README.rst";

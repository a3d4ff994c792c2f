//! # Repogen Library
//!
//! This library provides the core functionality for generating build
//! configuration from a curated table of tracked external repositories. It is
//! designed to be used by the `repogen` command-line tool but can also be
//! driven directly, with a stubbed query backend, from other code.
//!
//! ## Quick Example
//!
//! ```
//! use repogen::manifest::{Manifest, Pin, RepositoryDescriptor};
//! use repogen::target::suite_order;
//!
//! // Build a one-entry manifest
//! let manifest = Manifest::new(vec![RepositoryDescriptor {
//!     name: "org_example_lib".to_string(),
//!     importpath: "example.org/lib".to_string(),
//!     pin: Pin::Commit("abc123".to_string()),
//!     build_file_proto_mode: None,
//!     excludes: vec![],
//!     platform_tests: vec![],
//! }])
//! .unwrap();
//! assert_eq!(manifest.repositories().len(), 1);
//!
//! // Suite ordering puts a package's own targets before its subpackages
//! let mut targets = vec![
//!     "@r//pkg/sub:go_default_test".to_string(),
//!     "@r//pkg:go_default_test".to_string(),
//! ];
//! targets.sort_by(|a, b| suite_order(a, b));
//! assert_eq!(targets[0], "@r//pkg:go_default_test");
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key pieces:
//!
//! - **Manifest (`manifest`, `repos`)**: the static, ordered table of tracked
//!   repositories — names, version pins, and test-exclusion policy. The table
//!   is validated at construction and immutable afterwards.
//! - **Query capability (`query`)**: a narrow trait over the external
//!   build-graph query tool that discovers a repository's test targets, so
//!   tests can substitute a stub without spawning processes.
//! - **Targets (`target`)**: helpers for fully-qualified test-target labels
//!   and the collation used to order aggregated suites.
//! - **Phases (`phases`)**: the three emitters — dependency declarations,
//!   test suites, report — and the orchestrator that runs them in order.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator::run`, which executes:
//!
//! 1.  **Dependency declarations**: render the manifest into the loader file.
//! 2.  **Test suites**: query test targets per repository, validate the
//!     configured exclusions, write the aggregation file, and record each
//!     repository's resolved test list in a side table.
//! 3.  **Report**: render the resolved lists into a human-readable document.
//!
//! The order is fixed because the report depends on state recorded by the
//! test-suite phase. Any failure aborts the run; there is no retry.

pub mod defaults;
pub mod error;
pub mod manifest;
pub mod output;
pub mod phases;
pub mod query;
pub mod repos;
pub mod target;

#[cfg(test)]
mod suite_proptest;

//! # Repository Manifest
//!
//! This module defines the data structures that describe the tracked
//! external repositories: what they are called, where they come from, which
//! exact snapshot they are pinned to, and which of their tests are excluded
//! from the aggregated suite.
//!
//! ## Key Components
//!
//! - **`RepositoryDescriptor`**: one tracked repository. The version pin is
//!   the `Pin` enum, so a descriptor carrying both a commit pin and an
//!   archive pin is unrepresentable.
//!
//! - **`Manifest`**: the ordered table of descriptors. Construction rejects
//!   duplicate names and import paths that do not form a valid URL; after
//!   that the table is immutable. Iteration order is insertion order and
//!   determines the order of every emitted file.
//!
//! - **`ResolvedTests`**: the side table of resolved test lists keyed by
//!   repository name. The test-suite phase fills it; the report phase reads
//!   it. Keeping the derived state out of the descriptors leaves the base
//!   records immutable.

use std::collections::{HashMap, HashSet};

use url::Url;

use crate::error::{Error, Result};
use crate::target;

/// How a repository is pinned to an exact source snapshot.
#[derive(Debug, Clone)]
pub enum Pin {
    /// Pin to a commit hash; the consuming rule derives the download from it.
    Commit(String),
    /// Pin to an explicit source archive.
    Archive {
        /// Download location. Emitted as a single-element `urls` list, the
        /// shape the consuming rule expects.
        url: String,
        /// Leading directory stripped from the unpacked archive.
        strip_prefix: String,
        /// Archive format, e.g. `zip`. Emitted as the `type` attribute.
        archive_type: String,
    },
}

/// Tests that only exist or only pass on one platform.
///
/// These targets are excluded from the platform-neutral aggregated suite
/// alongside the descriptor's base excludes.
#[derive(Debug, Clone)]
pub struct PlatformTests {
    /// Platform the targets are restricted to, e.g. `darwin`.
    pub platform: String,
    /// Repository-relative test targets.
    pub targets: Vec<String>,
}

/// One tracked external repository.
#[derive(Debug, Clone)]
pub struct RepositoryDescriptor {
    /// Unique workspace name, e.g. `org_golang_x_net`.
    pub name: String,
    /// Canonical import path; also the host of the documentation link.
    pub importpath: String,
    /// Version pin. Exactly one strategy per repository.
    pub pin: Pin,
    /// Optional override for the consuming rule's proto generation mode.
    pub build_file_proto_mode: Option<String>,
    /// Repository-relative test targets omitted from the aggregated suite.
    pub excludes: Vec<String>,
    /// Platform-restricted test lists, also omitted from the suite.
    pub platform_tests: Vec<PlatformTests>,
}

impl RepositoryDescriptor {
    /// The query scope covering the whole repository.
    pub fn scope(&self) -> String {
        target::scope(&self.name)
    }

    /// Every exclusion for this repository in fully-qualified form: the base
    /// excludes followed by each platform list, in declaration order.
    pub fn effective_excludes(&self) -> Vec<String> {
        let mut excludes: Vec<String> = self
            .excludes
            .iter()
            .map(|pattern| target::qualify(&self.name, pattern))
            .collect();
        for platform in &self.platform_tests {
            excludes.extend(
                platform
                    .targets
                    .iter()
                    .map(|pattern| target::qualify(&self.name, pattern)),
            );
        }
        excludes
    }
}

/// The ordered, validated table of tracked repositories.
#[derive(Debug, Clone)]
pub struct Manifest {
    repositories: Vec<RepositoryDescriptor>,
}

impl Manifest {
    /// Build a manifest from descriptors.
    ///
    /// Rejects duplicate repository names and import paths that do not form
    /// a valid `https://{importpath}` URL.
    pub fn new(repositories: Vec<RepositoryDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for repo in &repositories {
            if !seen.insert(repo.name.as_str()) {
                return Err(Error::Manifest {
                    message: format!("duplicate repository name: {}", repo.name),
                    hint: Some("every tracked repository needs a unique workspace name".to_string()),
                });
            }
            if let Err(e) = Url::parse(&format!("https://{}", repo.importpath)) {
                return Err(Error::Manifest {
                    message: format!(
                        "invalid import path '{}' for {}: {}",
                        repo.importpath, repo.name, e
                    ),
                    hint: None,
                });
            }
        }
        Ok(Self { repositories })
    }

    /// Tracked repositories in table order.
    pub fn repositories(&self) -> &[RepositoryDescriptor] {
        &self.repositories
    }
}

/// Resolved test lists keyed by repository name.
///
/// Derived state produced by the test-suite phase and read by the report
/// phase. A repository with no entry has not been through the test-suite
/// phase yet.
#[derive(Debug, Default)]
pub struct ResolvedTests {
    by_repository: HashMap<String, Vec<String>>,
}

impl ResolvedTests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the resolved list for a repository.
    pub fn insert(&mut self, repository: &str, tests: Vec<String>) {
        self.by_repository.insert(repository.to_string(), tests);
    }

    /// The resolved list for a repository, if one has been recorded.
    pub fn get(&self, repository: &str) -> Option<&[String]> {
        self.by_repository.get(repository).map(Vec::as_slice)
    }

    /// Total number of resolved test targets across all repositories.
    pub fn total(&self) -> usize {
        self.by_repository.values().map(Vec::len).sum()
    }
}

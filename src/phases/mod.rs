//! # Generation Phases
//!
//! The generator is a strict three-stage pipeline over the manifest:
//!
//! 1.  **Dependency declarations** (`deps`): render the manifest into the
//!     loader file the consuming workspace calls.
//! 2.  **Test suites** (`suites`): discover test targets per repository,
//!     validate the configured exclusions, write the aggregation file, and
//!     record the resolved test lists.
//! 3.  **Report** (`report`): render the resolved lists into a
//!     human-readable document.
//!
//! `orchestrator` runs the phases in that fixed order. The order is
//! load-bearing: the report reads the side table the test-suite phase
//! produces.

pub mod deps;
pub mod orchestrator;
pub mod report;
pub mod suites;

/// Header every generated build file starts with.
pub(crate) const GENERATED_HEADER: &str = "\
##############################
# Generated file, do not edit!
##############################";

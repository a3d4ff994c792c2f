//! # External Build-Graph Queries
//!
//! Discovery of a repository's test targets is delegated to the build tool
//! itself: `bazel query` knows which test rules exist under an external
//! workspace. The `TestQuery` trait keeps that dependency narrow so the rest
//! of the generator never deals with process handling, and so tests can
//! substitute a stub without spawning any external process.
//!
//! The production implementation runs the query synchronously, once per
//! repository, with no timeout and no retry. A query that cannot be spawned,
//! exits non-zero, or produces undecodable output aborts the whole run.

use std::process::Command;

use crate::error::{Error, Result};
use crate::target;

/// Trait for test-target discovery - allows stubbing in tests
pub trait TestQuery {
    /// Discover every test target under `@{repository}//...`, in the order
    /// the build tool reports them.
    fn query_tests(&self, repository: &str) -> Result<Vec<String>>;
}

/// The default implementation of `TestQuery`, backed by the system `bazel`
/// command.
pub struct BazelQuery;

fn expression(repository: &str) -> String {
    format!("kind(go_test, \"{}\")", target::scope(repository))
}

impl TestQuery for BazelQuery {
    fn query_tests(&self, repository: &str) -> Result<Vec<String>> {
        let expression = expression(repository);
        log::debug!("running: bazel query {}", expression);

        let output = Command::new("bazel")
            .arg("query")
            .arg(&expression)
            .output()
            .map_err(|e| Error::QueryCommand {
                command: format!("bazel query {}", expression),
                repository: repository.to_string(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::QueryCommand {
                command: format!("bazel query {}", expression),
                repository: repository.to_string(),
                stderr: stderr.to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| Error::QueryOutput {
            repository: repository.to_string(),
            message: format!("stdout was not valid UTF-8: {}", e),
        })?;

        Ok(stdout.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_quotes_the_repository_scope() {
        assert_eq!(
            expression("org_example_lib"),
            "kind(go_test, \"@org_example_lib//...\")"
        );
    }

    #[test]
    fn test_trait_object_usable_with_stub() {
        struct StubQuery;
        impl TestQuery for StubQuery {
            fn query_tests(&self, repository: &str) -> Result<Vec<String>> {
                Ok(vec![format!("@{}//pkg:go_default_test", repository)])
            }
        }

        let query: &dyn TestQuery = &StubQuery;
        let targets = query.query_tests("org_example_lib").unwrap();
        assert_eq!(targets, vec!["@org_example_lib//pkg:go_default_test"]);
    }

    // Note: integration tests for BazelQuery would require a real bazel
    // workspace, so they're exercised through the feature-gated CLI tests
}

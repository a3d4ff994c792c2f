//! Phase 1: Dependency Declarations
//!
//! Renders the manifest into the loader file the consuming workspace calls:
//! one `go_repository` invocation per tracked repository, each wrapped in a
//! guard that only defines the rule if nothing else has defined that name,
//! so repeated loads stay idempotent.
//!
//! Fields are emitted in a fixed enumeration order regardless of the
//! descriptor's own shape, keeping the output byte-deterministic for a given
//! manifest. The archive download location is emitted as a single-element
//! `urls` list, the shape the repository rule expects.

use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::Result;
use crate::manifest::{Manifest, Pin, RepositoryDescriptor};

use super::GENERATED_HEADER;

const LOADER_PRELUDE: &str = r#"

load("@bazel_gazelle//:def.bzl", "go_repository")

def _maybe(repo_rule, name, **kwargs):
    if name not in native.existing_rules():
        repo_rule(name = name, **kwargs)

def popular_repos():
"#;

/// Render the full dependency-declaration file.
pub fn render(manifest: &Manifest) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str(LOADER_PRELUDE);
    for repo in manifest.repositories() {
        render_declaration(&mut out, repo);
    }
    out
}

// Fixed field order: name, importpath, commit, strip_prefix, type,
// build_file_proto_mode, then urls as a list.
fn render_declaration(out: &mut String, repo: &RepositoryDescriptor) {
    out.push_str("    _maybe(\n        go_repository,\n");
    push_field(out, "name", &repo.name);
    push_field(out, "importpath", &repo.importpath);
    if let Pin::Commit(commit) = &repo.pin {
        push_field(out, "commit", commit);
    }
    if let Pin::Archive {
        strip_prefix,
        archive_type,
        ..
    } = &repo.pin
    {
        push_field(out, "strip_prefix", strip_prefix);
        push_field(out, "type", archive_type);
    }
    if let Some(mode) = &repo.build_file_proto_mode {
        push_field(out, "build_file_proto_mode", mode);
    }
    if let Pin::Archive { url, .. } = &repo.pin {
        out.push_str(&format!("        urls = [\"{}\"],\n", url));
    }
    out.push_str("    )\n");
}

fn push_field(out: &mut String, key: &str, value: &str) {
    out.push_str(&format!("        {} = \"{}\",\n", key, value));
}

/// Write the dependency-declaration file into `out_dir`, overwriting any
/// previous copy.
pub fn emit(manifest: &Manifest, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(defaults::DEPS_FILE);
    fs::write(&path, render(manifest))?;
    Ok(path)
}

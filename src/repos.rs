//! The curated table of tracked external repositories.
//!
//! This table is the single authoritative input of the generator. Entries
//! are kept in a fixed order; that order determines the order of every
//! emitted file. Exclusion patterns must name test targets that still exist
//! upstream — the test-suite phase validates them against the discovered
//! targets on every run, so a stale entry fails generation instead of
//! silently widening the suite.

use crate::error::Result;
use crate::manifest::{Manifest, Pin, PlatformTests, RepositoryDescriptor};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Every repository tracked by the generator, in emission order.
pub fn tracked() -> Result<Manifest> {
    Manifest::new(vec![
        RepositoryDescriptor {
            name: "org_golang_x_crypto".to_string(),
            importpath: "golang.org/x/crypto".to_string(),
            pin: Pin::Archive {
                url: "https://codeload.github.com/golang/crypto/zip/de0752318171da717af4ce24d0a2e8626afaeb11".to_string(),
                strip_prefix: "crypto-de0752318171da717af4ce24d0a2e8626afaeb11".to_string(),
                archive_type: "zip".to_string(),
            },
            build_file_proto_mode: None,
            excludes: strings(&[
                "ssh/agent:go_default_test",
                "ssh:go_default_test",
                "ssh/test:go_default_test",
            ]),
            platform_tests: vec![],
        },
        RepositoryDescriptor {
            name: "org_golang_x_net".to_string(),
            importpath: "golang.org/x/net".to_string(),
            pin: Pin::Commit("57efc9c3d9f91fb3277f8da1cff370539c4d3dc5".to_string()),
            build_file_proto_mode: None,
            excludes: strings(&[
                "bpf:go_default_test",          // needs testdata directory
                "html/charset:go_default_test", // needs testdata directory
                "http2:go_default_test",        // needs testdata directory
                "icmp:go_default_test",         // requires adjusting kernel options
                "nettest:go_default_test",
                "lif:go_default_test",
            ]),
            platform_tests: vec![PlatformTests {
                platform: "darwin".to_string(),
                targets: strings(&[
                    "route:go_default_test", // not supported on linux
                ]),
            }],
        },
        RepositoryDescriptor {
            name: "org_golang_x_sys".to_string(),
            importpath: "golang.org/x/sys".to_string(),
            pin: Pin::Commit("acbc56fc7007d2a01796d5bde54f39e3b3e95945".to_string()),
            build_file_proto_mode: None,
            excludes: strings(&[
                "unix:go_default_test", // external test depends on symbols defined in the internal test
            ]),
            platform_tests: vec![],
        },
        RepositoryDescriptor {
            name: "org_golang_x_text".to_string(),
            importpath: "golang.org/x/text".to_string(),
            pin: Pin::Commit("a9a820217f98f7c8a207ec1e45a874e1fe12c478".to_string()),
            build_file_proto_mode: None,
            excludes: strings(&[
                // all of these need a testdata directory
                "encoding/japanese:go_default_test",
                "encoding/korean:go_default_test",
                "encoding/charmap:go_default_test",
                "encoding/simplifiedchinese:go_default_test",
                "encoding/traditionalchinese:go_default_test",
                "encoding/unicode/utf32:go_default_test",
                "encoding/unicode:go_default_test",
                "internal/cldrtree:go_default_test",
            ]),
            platform_tests: vec![],
        },
        RepositoryDescriptor {
            name: "org_golang_x_tools".to_string(),
            importpath: "golang.org/x/tools".to_string(),
            pin: Pin::Commit("663269851cdddc898f963782f74ea574bcd5c814".to_string()),
            build_file_proto_mode: None,
            excludes: strings(&[
                "cmd/bundle:go_default_test",                          // needs testdata directory
                "cmd/callgraph:go_default_test",                       // needs testdata directory
                "cmd/callgraph/testdata/src/pkg:go_default_test",      // is testdata
                "cmd/cover:go_default_test",                           // needs testdata directory
                "cmd/guru:go_default_test",                            // needs testdata directory
                "cmd/stringer:go_default_test",                        // needs testdata directory
                "go/buildutil:go_default_test",                        // needs testdata directory
                "go/callgraph/cha:go_default_test",                    // needs testdata directory
                "go/callgraph/rta:go_default_test",                    // needs testdata directory
                "go/gccgoexportdata:go_default_test",                  // needs testdata directory
                "go/gcexportdata:go_default_test",                     // needs testdata directory
                "go/internal/gccgoimporter:go_default_test",           // needs testdata directory
                "go/loader:go_default_test",                           // needs testdata directory
                "go/pointer:go_default_test",                          // needs testdata directory
                "go/ssa/interp:go_default_test",                       // needs testdata directory
                "go/ssa/ssautil:go_default_test",                      // needs testdata directory
                "go/ssa:go_default_test",                              // needs testdata directory
                "refactor/eg:go_default_test",                         // needs testdata directory
                "cmd/fiximports:go_default_test",                      // requires a working GOROOT, not present in CI
                "cmd/godoc:go_default_test",                           // requires GOROOT and GOPATH
                "cmd/gorename:go_default_test",                        // requires GOROOT and GOPATH
                "refactor/importgraph:go_default_test",                // requires GOROOT and GOPATH
                "refactor/rename:go_default_test",                     // requires GOROOT and GOPATH
                "cmd/guru/testdata/src/referrers:go_default_test",     // not a real test
                "container/intsets:go_default_test",                   // external test depends on symbols defined in the internal test
                "go/internal/gcimporter:go_default_test",              // needs testdata directory
                "go/packages:go_default_test",                         // requires go list
                "godoc:go_default_test",                               // requires GOROOT and GOPATH
                "godoc/static:go_default_test",                        // requires data files
                "godoc/vfs/zipfs:go_default_test",                     // requires GOROOT
                "imports:go_default_test",                             // requires GOROOT
                "go/types/typeutil:go_default_test",                   // requires GOROOT
                "go/analysis/analysistest:go_default_test",            // requires build cache
                "go/analysis/passes/findcall:go_default_test",         // requires build cache
                "go/analysis/passes/pkgfact:go_default_test",          // requires go list
                "go/analysis/passes/vet/testdata/divergent:go_default_test",  // is testdata
                "go/analysis/passes/vet/testdata/incomplete:go_default_test", // is testdata
                "go/analysis/passes/vet/testdata/testingpkg:go_default_test", // is testdata
            ]),
            platform_tests: vec![],
        },
        RepositoryDescriptor {
            name: "org_golang_google_grpc".to_string(),
            importpath: "google.golang.org/grpc".to_string(),
            pin: Pin::Commit("3f10311ccf076b6b7cba28273df3290d42e60982".to_string()),
            // grpc ships already-generated protobuf definitions, and no
            // protobuf toolchains are registered in the consuming workspace.
            // The build would fail if rules were generated for the protos,
            // so generation is disabled.
            build_file_proto_mode: Some("disable".to_string()),
            excludes: strings(&[
                "test:go_default_test",
                "examples/route_guide/mock_routeguide:go_default_test",
                "examples/helloworld/mock_helloworld:go_default_test",
                "credentials:go_default_test",
                "credentials/alts:go_default_test", // not supported on darwin
                ":go_default_test",
                "internal/transport:go_default_test", // slow
            ]),
            platform_tests: vec![],
        },
        RepositoryDescriptor {
            name: "com_github_mattn_go_sqlite3".to_string(),
            importpath: "github.com/mattn/go-sqlite3".to_string(),
            pin: Pin::Commit("83772a7051f5e30d8e59746a9e43dfa706b72f3b".to_string()),
            build_file_proto_mode: None,
            excludes: vec![],
            platform_tests: vec![],
        },
    ])
}

//! # Repogen CLI
//!
//! This is the binary entry point for the `repogen` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the generation pipeline against the compiled-in repository
//!   table and the system build tool.
//! - Handling top-level application errors and translating them into
//!   user-friendly output.
//!
//! The core generation logic is defined in the `repogen` library crate,
//! ensuring that the binary is a thin wrapper around the reusable library
//! functionality.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}

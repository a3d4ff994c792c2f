//! CLI argument parsing and pipeline dispatch

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use repogen::output::{emoji, OutputConfig};
use repogen::phases::orchestrator;
use repogen::query::BazelQuery;
use repogen::repos;

/// Generate dependency declarations, test suites, and docs for tracked repositories
#[derive(Parser, Debug)]
#[command(name = "repogen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory the generated files are written to (defaults to the current directory)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Execute the generation pipeline
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let out = OutputConfig::from_env_and_flag(&self.color);

        let output_dir = match self.output {
            Some(dir) => dir,
            None => std::env::current_dir().context("failed to determine current directory")?,
        };

        let start_time = Instant::now();

        if !self.quiet {
            println!(
                "{} Generating build configuration",
                emoji(&out, "🔧", "[GEN]")
            );
            println!();
        }

        let manifest = repos::tracked()?;

        match orchestrator::run(&manifest, &BazelQuery, &output_dir) {
            Ok(summary) => {
                if !self.quiet {
                    let duration = start_time.elapsed();
                    println!(
                        "{} Generated in {:.2}s",
                        emoji(&out, "✅", "[OK]"),
                        duration.as_secs_f64()
                    );
                    println!(
                        "   {} repositories, {} test targets",
                        summary.repositories, summary.tests
                    );
                    println!("   Files written to: {}", output_dir.display());
                }

                Ok(())
            }
            Err(e) => {
                if !self.quiet {
                    eprintln!("{} Generation failed", emoji(&out, "❌", "[FAIL]"));
                }
                Err(e.into())
            }
        }
    }
}

fn init_logging(level: &str) {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

//! `generate_markdown` — render concept YAML records into Markdown notes.
//!
//! # Usage
//!
//! ```text
//! generate_markdown <concept_yaml_dir> <output_md_dir>
//! ```
//!
//! There are no flags: anything other than exactly two arguments, including
//! `--help`, is a usage error.
//!
//! Exit codes: `0` on success, `1` on a usage error or any failed record.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use conceptdoc_sync::{pipeline, GenerateConfig, GenerateResult};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "generate_markdown",
    about = "Generate Quartz/Obsidian-ready Markdown from concept YAML files",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
)]
struct Cli {
    /// Directory containing one `<concept>.yaml` file per concept.
    #[arg(allow_hyphen_values = true)]
    source_dir: PathBuf,

    /// Directory to write `<id>.md` notes into (created if missing).
    #[arg(allow_hyphen_values = true)]
    output_dir: PathBuf,
}

impl Cli {
    fn run(self) -> Result<()> {
        let config = GenerateConfig::default();
        let result = pipeline::run(&self.source_dir, &self.output_dir, &config)
            .with_context(|| {
                format!(
                    "failed to generate notes from '{}'",
                    self.source_dir.display()
                )
            })?;
        print_result(&result);
        Ok(())
    }
}

fn print_result(result: &GenerateResult) {
    println!(
        "✓ generated {} notes in {}",
        result.written.len(),
        result.output_dir.display()
    );
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1, not clap's default 2.
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    init_tracing();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("{err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

use crate::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Version of the REUSE Specification quoted in reports unless overridden
pub const DEFAULT_SPEC_VERSION: &str = "3.3";

#[derive(Parser, Debug, Clone)]
#[command(name = "reuse-lint")]
#[command(about = "Report copyright and licensing compliance of an analyzed project")]
#[command(version)]
pub struct CliArgs {
    /// Prevents output; the exit code still reports compliance
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Formats output as JSON
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Formats output as plain text
    #[arg(long, short = 'p')]
    pub plain: bool,

    /// Formats output using the chosen formatter; a bare --format means plain
    #[arg(long, value_enum, value_name = "FORMAT", num_args = 0..=1, default_missing_value = "plain")]
    pub format: Option<OutputFormat>,

    /// Analysis snapshot (JSON) to report on; "-" or absent reads stdin
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// REUSE Specification version quoted in the verdict
    #[arg(long, value_name = "VERSION", env = "REUSE_LINT_SPEC_VERSION", default_value = DEFAULT_SPEC_VERSION)]
    pub spec_version: String,
}

impl CliArgs {
    /// Parse command-line arguments
    ///
    /// The error is returned rather than acted on so `main` can keep usage
    /// errors on the same exit status as every other failure.
    pub fn parse_args() -> Result<Self, clap::Error> {
        CliArgs::try_parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        // --json, --plain and --format are mutually exclusive, even when they agree
        let selected = [self.json, self.plain, self.format.is_some()].iter().filter(|set| **set).count();
        if selected > 1 {
            return Err("Cannot combine --json, --plain and --format; choose one output format".to_string());
        }

        if self.spec_version.trim().is_empty() {
            return Err("--spec-version must not be empty".to_string());
        }

        Ok(())
    }

    /// The selected output format, defaulting to plain
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.plain {
            OutputFormat::Plain
        } else {
            self.format.unwrap_or_default()
        }
    }
}

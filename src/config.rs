/// Configuration resolution module
///
/// This module handles:
/// - Building a LintConfig from CLI arguments
/// - Choosing the output format once per run
/// - Resolving the snapshot source and the report sink
use crate::cli::CliArgs;
use crate::input::InputSource;
use crate::report::OutputFormat;
use log::debug;
use std::path::PathBuf;

/// Where the rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
    /// Quiet mode: the report is rendered and thrown away
    Discard,
}

/// Fully resolved settings for one lint run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    pub format: OutputFormat,
    pub input: InputSource,
    pub output: OutputTarget,
    pub spec_version: String,
}

/// Build a LintConfig from CLI arguments
///
/// Rejects invalid flag combinations before anything is read or written.
pub fn build_lint_config(args: &CliArgs) -> Result<LintConfig, String> {
    debug!("Building lint config from CLI args");

    args.validate()?;

    let format = args.output_format();
    debug!("Output format: {}", format.as_str());

    let output = if args.quiet {
        if let Some(ref path) = args.output {
            debug!("Quiet mode: ignoring --output {}", path.display());
        }
        OutputTarget::Discard
    } else if let Some(ref path) = args.output {
        OutputTarget::File(path.clone())
    } else {
        OutputTarget::Stdout
    };

    debug!("Report output: {:?}", output);

    Ok(LintConfig {
        format,
        input: InputSource::from_arg(args.input.as_ref()),
        output,
        spec_version: args.spec_version.trim().to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

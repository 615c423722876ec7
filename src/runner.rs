use crate::config::{LintConfig, OutputTarget};
use crate::error::LintError;
use crate::input;
use crate::report::{LintReport, ReportFormatter};
use crate::types::ReportData;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Render one report and return the compliance verdict
///
/// This is the core entry point: classify, render with the given formatter,
/// flush. The verdict does not depend on the formatter or the sink.
pub fn lint(
    data: &ReportData,
    formatter: &dyn ReportFormatter,
    spec_version: &str,
    out: &mut dyn Write,
) -> io::Result<bool> {
    let report = LintReport::new(data, spec_version);
    debug!("Classified snapshot: compliant = {}", report.compliant);

    formatter.render(&report, out)?;
    out.flush()?;

    Ok(report.compliant)
}

/// Run a full lint from resolved configuration
///
/// The snapshot is loaded before the sink is opened, so a bad snapshot never
/// creates or truncates an output file.
pub fn run(config: &LintConfig) -> Result<bool, LintError> {
    let data = input::load_report_data(&config.input)?;

    let mut sink = open_sink(&config.output)?;
    let formatter = config.format.formatter();

    let compliant = lint(&data, formatter.as_ref(), &config.spec_version, sink.as_mut())?;
    Ok(compliant)
}

/// Open the configured report sink
fn open_sink(target: &OutputTarget) -> Result<Box<dyn Write>, LintError> {
    debug!("Opening report sink {:?}", target);

    match target {
        OutputTarget::Stdout => Ok(Box::new(BufWriter::new(io::stdout()))),
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|error| LintError::OpenSink { path: path.clone(), error })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        OutputTarget::Discard => Ok(Box::new(io::sink())),
    }
}

/// Map the verdict to the process exit status
pub fn exit_code(compliant: bool) -> i32 {
    if compliant { 0 } else { 1 }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;

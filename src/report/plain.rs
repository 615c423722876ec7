//! Plain text output format.
//!
//! Layout: issue sections, `# SUMMARY`, the verdict sentence, then
//! `# RECOMMENDATIONS` when the project is not compliant.

use super::advice::write_recommendations;
use super::sections::write_sections;
use super::{LintReport, ReportFormatter};
use crate::console_format::ReportWriter;
use log::debug;
use std::io::{self, Write};

/// Plain text formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl ReportFormatter for PlainFormatter {
    fn render(&self, report: &LintReport, out: &mut dyn Write) -> io::Result<()> {
        let mut writer = ReportWriter::new(out);

        let written = write_sections(&report.categories, &mut writer)?;
        debug!("Rendered {} issue section(s)", written.len());

        writer.write_heading("SUMMARY")?;
        for (label, value) in report.summary.lines() {
            writer.write_labeled_bullet(label, &value)?;
        }
        writer.write_blank()?;

        writer.write_line(&verdict_sentence(report.compliant, &report.spec_version))?;

        write_recommendations(&report.categories, &mut writer)?;
        writer.flush()
    }
}

/// Closing sentence of the plain report
pub fn verdict_sentence(compliant: bool, spec_version: &str) -> String {
    if compliant {
        format!("Congratulations! Your project is compliant with version {} of the REUSE Specification :-)", spec_version)
    } else {
        format!(
            "Unfortunately, your project is not compliant with version {} of the REUSE Specification :-(",
            spec_version
        )
    }
}

#[cfg(test)]
#[path = "plain_test.rs"]
mod plain_test;

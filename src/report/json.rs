//! JSON output format.
//!
//! Serializes the classified report as one pretty-printed object. Every
//! field is always present; empty categories are `[]` or `{}`.

use super::categories::MissingInfo;
use super::summary::Summary;
use super::{LintReport, ReportFormatter};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

/// JSON formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

/// Wire shape of the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub bad_licenses: BTreeMap<String, BTreeSet<String>>,
    pub deprecated_licenses: BTreeSet<String>,
    /// License text paths, one per license id
    pub licenses_without_extension: Vec<String>,
    pub missing_licenses: BTreeMap<String, BTreeSet<String>>,
    pub unused_licenses: BTreeSet<String>,
    pub used_licenses: BTreeSet<String>,
    pub read_errors: BTreeSet<String>,
    pub files_without_copyright_or_licensing: MissingInfo,
    pub summary: Summary,
    pub compliant: bool,
    pub reuse_version: String,
}

impl JsonReport {
    pub fn from_report(report: &LintReport) -> Self {
        let categories = &report.categories;

        let mut licenses_without_extension: Vec<String> =
            categories.licenses_without_extension.values().cloned().collect();
        licenses_without_extension.sort();

        JsonReport {
            bad_licenses: categories.bad_licenses.clone(),
            deprecated_licenses: categories.deprecated_licenses.clone(),
            licenses_without_extension,
            missing_licenses: categories.missing_licenses.clone(),
            unused_licenses: categories.unused_licenses.clone(),
            used_licenses: categories.used_licenses.clone(),
            read_errors: categories.read_errors.clone(),
            files_without_copyright_or_licensing: categories.missing_info.clone(),
            summary: report.summary.clone(),
            compliant: report.compliant,
            reuse_version: report.spec_version.clone(),
        }
    }

    /// Re-derive the verdict from the issue fields alone.
    pub fn derived_compliance(&self) -> bool {
        self.bad_licenses.is_empty()
            && self.deprecated_licenses.is_empty()
            && self.licenses_without_extension.is_empty()
            && self.missing_licenses.is_empty()
            && self.unused_licenses.is_empty()
            && self.read_errors.is_empty()
            && self.files_without_copyright_or_licensing.is_empty()
    }
}

impl ReportFormatter for JsonFormatter {
    fn render(&self, report: &LintReport, out: &mut dyn Write) -> io::Result<()> {
        let json = JsonReport::from_report(report);
        debug_assert_eq!(json.derived_compliance(), json.compliant);

        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)?;
        out.flush()
    }
}

#[cfg(test)]
#[path = "json_test.rs"]
mod json_test;

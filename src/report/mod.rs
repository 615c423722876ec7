//! Report generation module - Classification, rendering and verdict.
//!
//! This module handles:
//! - Classifying a `ReportData` snapshot into ordered issue categories
//! - Computing summary statistics and the compliance verdict
//! - Rendering the report as plain text or JSON
//! - Remediation advice for non-compliant projects
//!
//! Text layout primitives live in the console_format module.
//!
//! # Module Organization
//!
//! - `categories` - Category classification and the compliance verdict
//! - `summary` - Summary statistics (license lists, coverage ratios)
//! - `sections` - Per-category sections of the plain report
//! - `advice` - Remediation paragraphs
//! - `plain` - Plain text formatter
//! - `json` - JSON formatter

mod advice;
mod categories;
mod json;
mod plain;
mod sections;
mod summary;

use std::io::{self, Write};

// Re-export types
pub use categories::{Categories, classify};
pub use json::{JsonFormatter, JsonReport};
pub use plain::PlainFormatter;
pub use summary::Summary;

/// Everything a formatter needs to render one report.
#[derive(Debug, Clone, PartialEq)]
pub struct LintReport {
    pub categories: Categories,
    pub summary: Summary,
    pub compliant: bool,
    /// Specification version quoted in the verdict
    pub spec_version: String,
}

impl LintReport {
    /// Classify a snapshot and compute its summary and verdict.
    pub fn new(data: &crate::types::ReportData, spec_version: &str) -> Self {
        let categories = classify(data);
        let summary = Summary::from_categories(&categories);
        let compliant = categories.is_compliant();

        LintReport { categories, summary, compliant, spec_version: spec_version.to_string() }
    }
}

/// A report output format.
pub trait ReportFormatter {
    /// Render the whole report to `out`.
    fn render(&self, report: &LintReport, out: &mut dyn Write) -> io::Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections, summary and recommendations
    #[default]
    Plain,
    /// Machine-readable JSON object
    Json,
}

impl OutputFormat {
    /// Formatter for this format.
    pub fn formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Plain => Box::new(PlainFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}

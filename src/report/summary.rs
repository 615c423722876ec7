//! Summary statistics for lint reports.
//!
//! The summary is rendered for every report, compliant or not. It lists the
//! license ids of each license category plus read error and file coverage
//! counts.

use super::categories::Categories;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `count / total` pair for file coverage lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub count: usize,
    pub total: usize,
}

impl Ratio {
    /// Files in `total` not listed as missing. Saturates at zero.
    fn covered(total: usize, missing: usize) -> Self {
        Ratio { count: total.saturating_sub(missing), total }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.count, self.total)
    }
}

/// The nine summary fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub bad_licenses: Vec<String>,
    pub deprecated_licenses: Vec<String>,
    pub licenses_without_extension: Vec<String>,
    pub missing_licenses: Vec<String>,
    pub unused_licenses: Vec<String>,
    pub used_licenses: Vec<String>,
    pub read_errors: usize,
    pub files_with_copyright_info: Ratio,
    pub files_with_licensing_info: Ratio,
}

impl Summary {
    /// Build the summary from classified categories.
    ///
    /// License lists keep the sorted order of `Categories`.
    pub fn from_categories(categories: &Categories) -> Self {
        let total = categories.file_total;
        let missing = &categories.missing_info;

        Summary {
            bad_licenses: categories.bad_licenses.keys().cloned().collect(),
            deprecated_licenses: categories.deprecated_licenses.iter().cloned().collect(),
            licenses_without_extension: categories.licenses_without_extension.keys().cloned().collect(),
            missing_licenses: categories.missing_licenses.keys().cloned().collect(),
            unused_licenses: categories.unused_licenses.iter().cloned().collect(),
            used_licenses: categories.used_licenses.iter().cloned().collect(),
            read_errors: categories.read_errors.len(),
            files_with_copyright_info: Ratio::covered(total, missing.without_copyright_count()),
            files_with_licensing_info: Ratio::covered(total, missing.without_licensing_count()),
        }
    }

    /// Summary lines as `(label, value)` pairs, in print order.
    ///
    /// An empty value means the label is printed on its own.
    pub fn lines(&self) -> [(&'static str, String); 9] {
        [
            ("Bad licenses:", self.bad_licenses.join(", ")),
            ("Deprecated licenses:", self.deprecated_licenses.join(", ")),
            ("Licenses without file extension:", self.licenses_without_extension.join(", ")),
            ("Missing licenses:", self.missing_licenses.join(", ")),
            ("Unused licenses:", self.unused_licenses.join(", ")),
            ("Used licenses:", self.used_licenses.join(", ")),
            ("Read errors:", self.read_errors.to_string()),
            ("Files with copyright information:", self.files_with_copyright_info.to_string()),
            ("Files with license information:", self.files_with_licensing_info.to_string()),
        ]
    }
}

//! Category classification for lint reports.
//!
//! This module turns an unordered `ReportData` snapshot into the seven ordered
//! issue categories that every formatter consumes. It is also where the
//! compliance verdict is decided.

use crate::types::ReportData;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};

/// One non-compliance category.
///
/// Variants are declared in report order; `Category::ALL` iterates them in
/// that order for sections, recommendations and the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    BadLicenses,
    DeprecatedLicenses,
    LicensesWithoutExtension,
    MissingLicenses,
    UnusedLicenses,
    ReadErrors,
    MissingCopyrightOrLicensing,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 7] = [
        Category::BadLicenses,
        Category::DeprecatedLicenses,
        Category::LicensesWithoutExtension,
        Category::MissingLicenses,
        Category::UnusedLicenses,
        Category::ReadErrors,
        Category::MissingCopyrightOrLicensing,
    ];

    /// Section heading used by the plain report.
    pub fn title(&self) -> &'static str {
        match self {
            Category::BadLicenses => "BAD LICENSES",
            Category::DeprecatedLicenses => "DEPRECATED LICENSES",
            Category::LicensesWithoutExtension => "LICENSES WITHOUT FILE EXTENSION",
            Category::MissingLicenses => "MISSING LICENSES",
            Category::UnusedLicenses => "UNUSED LICENSES",
            Category::ReadErrors => "READ ERRORS",
            Category::MissingCopyrightOrLicensing => "MISSING COPYRIGHT AND LICENSING INFORMATION",
        }
    }
}

/// Files lacking copyright and/or licensing information, split three ways.
///
/// The three sets are pairwise disjoint and together cover every file that
/// lacks at least one of the two.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingInfo {
    /// Files with neither copyright nor licensing information
    pub both: BTreeSet<String>,
    /// Files with licensing but no copyright information
    pub copyright_only: BTreeSet<String>,
    /// Files with copyright but no licensing information
    pub licensing_only: BTreeSet<String>,
}

impl MissingInfo {
    /// Partition the two raw sets into `both`, `copyright_only` and `licensing_only`.
    pub fn partition(without_copyright: &HashSet<PathBuf>, without_licenses: &HashSet<PathBuf>) -> Self {
        let copyright: BTreeSet<String> = sorted_paths(without_copyright);
        let licensing: BTreeSet<String> = sorted_paths(without_licenses);

        let both: BTreeSet<String> = copyright.intersection(&licensing).cloned().collect();
        let copyright_only = copyright.difference(&both).cloned().collect();
        let licensing_only = licensing.difference(&both).cloned().collect();

        MissingInfo { both, copyright_only, licensing_only }
    }

    pub fn is_empty(&self) -> bool {
        self.both.is_empty() && self.copyright_only.is_empty() && self.licensing_only.is_empty()
    }

    /// Number of files missing copyright information (`both` + `copyright_only`).
    pub fn without_copyright_count(&self) -> usize {
        self.both.len() + self.copyright_only.len()
    }

    /// Number of files missing licensing information (`both` + `licensing_only`).
    pub fn without_licensing_count(&self) -> usize {
        self.both.len() + self.licensing_only.len()
    }
}

/// Ordered view of a `ReportData` snapshot.
///
/// Every collection is sorted by the string form of its entries. Empty
/// categories are empty collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    pub bad_licenses: BTreeMap<String, BTreeSet<String>>,
    pub deprecated_licenses: BTreeSet<String>,
    /// License id -> license text path
    pub licenses_without_extension: BTreeMap<String, String>,
    pub missing_licenses: BTreeMap<String, BTreeSet<String>>,
    pub unused_licenses: BTreeSet<String>,
    /// Not a non-compliance category; carried for the summary.
    pub used_licenses: BTreeSet<String>,
    pub read_errors: BTreeSet<String>,
    pub missing_info: MissingInfo,
    pub file_total: usize,
}

impl Categories {
    /// Whether the given category has no members.
    pub fn is_empty_category(&self, category: Category) -> bool {
        match category {
            Category::BadLicenses => self.bad_licenses.is_empty(),
            Category::DeprecatedLicenses => self.deprecated_licenses.is_empty(),
            Category::LicensesWithoutExtension => self.licenses_without_extension.is_empty(),
            Category::MissingLicenses => self.missing_licenses.is_empty(),
            Category::UnusedLicenses => self.unused_licenses.is_empty(),
            Category::ReadErrors => self.read_errors.is_empty(),
            Category::MissingCopyrightOrLicensing => self.missing_info.is_empty(),
        }
    }

    /// Non-empty categories in report order.
    pub fn active(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|category| !self.is_empty_category(*category))
    }

    /// The project is compliant only when every category is empty.
    pub fn is_compliant(&self) -> bool {
        Category::ALL.iter().all(|category| self.is_empty_category(*category))
    }
}

/// Classify a snapshot into ordered categories.
///
/// Pure: the snapshot is only read, and calling this twice on equal snapshots
/// yields equal results regardless of hash iteration order.
pub fn classify(data: &ReportData) -> Categories {
    Categories {
        bad_licenses: sorted_license_files(&data.bad_licenses),
        deprecated_licenses: data.deprecated_licenses.iter().cloned().collect(),
        licenses_without_extension: data
            .licenses_without_extension
            .iter()
            .map(|(license, path)| (license.clone(), path_string(path)))
            .collect(),
        missing_licenses: sorted_license_files(&data.missing_licenses),
        unused_licenses: data.unused_licenses.iter().cloned().collect(),
        used_licenses: data.used_licenses.iter().cloned().collect(),
        read_errors: sorted_paths(&data.read_errors),
        missing_info: MissingInfo::partition(&data.files_without_copyright, &data.files_without_licenses),
        file_total: data.file_total,
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn sorted_paths(paths: &HashSet<PathBuf>) -> BTreeSet<String> {
    paths.iter().map(|path| path_string(path)).collect()
}

fn sorted_license_files(map: &HashMap<String, HashSet<PathBuf>>) -> BTreeMap<String, BTreeSet<String>> {
    map.iter().map(|(license, files)| (license.clone(), sorted_paths(files))).collect()
}

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

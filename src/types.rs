/// Core data structures for the analysis snapshot
///
/// This module defines the `ReportData` snapshot handed to the linter by the
/// project analysis step. The snapshot is a fully merged result: collections are
/// unordered and no code in this crate relies on their iteration order.
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Per-project analysis result consumed by the report engine
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReportData {
    /// License id -> files referencing it, for ids that are neither SPDX ids nor `LicenseRef-` ids
    pub bad_licenses: HashMap<String, HashSet<PathBuf>>,

    /// License ids deprecated by SPDX
    pub deprecated_licenses: HashSet<String>,

    /// License id -> license text file that lacks the `.txt` extension
    pub licenses_without_extension: HashMap<String, PathBuf>,

    /// License id -> files referencing it, for ids without a license text file
    pub missing_licenses: HashMap<String, HashSet<PathBuf>>,

    /// License ids with a license text file but no referencing file
    pub unused_licenses: HashSet<String>,

    /// License ids referenced by at least one file
    pub used_licenses: HashSet<String>,

    /// Files that could not be read
    pub read_errors: HashSet<PathBuf>,

    pub files_without_copyright: HashSet<PathBuf>,

    pub files_without_licenses: HashSet<PathBuf>,

    /// Number of files in scope
    pub file_total: usize,
}

impl ReportData {
    /// Check the size invariants a well-formed snapshot upholds.
    ///
    /// Returns one message per violated invariant. A violation never aborts a
    /// report; counts saturate at zero instead.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        let checks = [
            ("files_without_copyright", self.files_without_copyright.len()),
            ("files_without_licenses", self.files_without_licenses.len()),
            ("read_errors", self.read_errors.len()),
        ];

        for (name, len) in checks {
            if len > self.file_total {
                violations.push(format!("{} has {} entries but file_total is {}", name, len, self.file_total));
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let data: ReportData = serde_json::from_str(r#"{"file_total": 3}"#).unwrap();
        assert_eq!(data.file_total, 3);
        assert!(data.bad_licenses.is_empty());
        assert!(data.files_without_copyright.is_empty());
        assert!(data.read_errors.is_empty());
    }

    #[test]
    fn test_deserialize_full_snapshot() {
        let json = r#"{
            "bad_licenses": {"Foo": ["src/a.py", "src/b.py"]},
            "deprecated_licenses": ["GPL-3.0"],
            "licenses_without_extension": {"MIT": "LICENSES/MIT"},
            "missing_licenses": {"Apache-2.0": ["src/c.py"]},
            "unused_licenses": ["CC0-1.0"],
            "used_licenses": ["GPL-3.0", "MIT"],
            "read_errors": ["secret.key"],
            "files_without_copyright": ["src/a.py"],
            "files_without_licenses": ["src/b.py"],
            "file_total": 10
        }"#;

        let data: ReportData = serde_json::from_str(json).unwrap();
        assert_eq!(data.bad_licenses["Foo"].len(), 2);
        assert!(data.deprecated_licenses.contains("GPL-3.0"));
        assert_eq!(data.licenses_without_extension["MIT"], PathBuf::from("LICENSES/MIT"));
        assert!(data.missing_licenses["Apache-2.0"].contains(&PathBuf::from("src/c.py")));
        assert_eq!(data.used_licenses.len(), 2);
        assert!(data.read_errors.contains(&PathBuf::from("secret.key")));
        assert_eq!(data.file_total, 10);
    }

    #[test]
    fn test_invariant_violations_reported() {
        let mut data = ReportData { file_total: 1, ..Default::default() };
        data.files_without_copyright.insert(PathBuf::from("a.py"));
        assert!(data.invariant_violations().is_empty());

        data.files_without_copyright.insert(PathBuf::from("b.py"));
        let violations = data.invariant_violations();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("files_without_copyright"));
    }
}

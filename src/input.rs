/// Snapshot loading
///
/// Reads the JSON `ReportData` produced by the project analysis step, from a
/// file or from standard input.
use crate::error::LintError;
use crate::types::ReportData;
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

/// Where the snapshot comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` selects stdin, anything else is a file path
    pub fn from_arg(arg: Option<&PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }

    /// Human-readable name for error messages
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Load and deserialize a snapshot.
pub fn load_report_data(source: &InputSource) -> Result<ReportData, LintError> {
    debug!("Loading analysis snapshot from {}", source.display_name());

    let data = match source {
        InputSource::Stdin => read_report_data(io::stdin().lock(), source)?,
        InputSource::File(path) => {
            let file = File::open(path)
                .map_err(|error| LintError::Input { source_name: source.display_name(), error })?;
            read_report_data(BufReader::new(file), source)?
        }
    };

    for violation in data.invariant_violations() {
        warn!("Inconsistent analysis snapshot: {}", violation);
    }

    debug!(
        "Snapshot: {} files, {} without copyright, {} without licenses, {} read errors",
        data.file_total,
        data.files_without_copyright.len(),
        data.files_without_licenses.len(),
        data.read_errors.len()
    );

    Ok(data)
}

/// Deserialize a snapshot from any reader
pub fn read_report_data<R: Read>(reader: R, source: &InputSource) -> Result<ReportData, LintError> {
    serde_json::from_reader(reader).map_err(|error| {
        if error.is_io() {
            LintError::Input { source_name: source.display_name(), error: error.into() }
        } else {
            LintError::Parse { source_name: source.display_name(), error }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(InputSource::from_arg(Some(&PathBuf::from("-"))), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(&PathBuf::from("analysis.json"))),
            InputSource::File(PathBuf::from("analysis.json"))
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"file_total": 2, "files_without_licenses": ["a.py"]}}"#).unwrap();

        let data = load_report_data(&InputSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(data.file_total, 2);
        assert!(data.files_without_licenses.contains(&PathBuf::from("a.py")));
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_report_data(&InputSource::File(dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, LintError::Input { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = read_report_data(&b"{ not json"[..], &InputSource::Stdin).unwrap_err();
        assert!(matches!(err, LintError::Parse { .. }));
        assert!(err.to_string().contains("<stdin>"));
    }

    #[test]
    fn test_wrong_field_type_is_parse_error() {
        let err = read_report_data(&br#"{"file_total": "many"}"#[..], &InputSource::Stdin).unwrap_err();
        assert!(matches!(err, LintError::Parse { .. }));
    }
}

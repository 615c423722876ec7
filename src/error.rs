/// Errors that abort a lint run
///
/// Unreadable project files are not errors here; they are reported in the
/// READ ERRORS section. These variants cover the snapshot and the report sink.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to read analysis snapshot from {source_name}: {error}")]
    Input { source_name: String, error: io::Error },

    #[error("failed to parse analysis snapshot from {source_name}: {error}")]
    Parse { source_name: String, error: serde_json::Error },

    #[error("failed to open report output {}: {error}", path.display())]
    OpenSink { path: PathBuf, error: io::Error },

    #[error("failed to write report: {0}")]
    Sink(#[from] io::Error),
}

use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline failures.
///
/// Skipped artifacts are not errors; they surface as
/// [`WriteOutcome::Skipped`](crate::WriteOutcome::Skipped) in the report.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source root marker directory was not found; the whole run is
    /// aborted before anything is written.
    #[error("source root 'src/main/java' not found under '{path}'")]
    MissingRoot { path: PathBuf },

    /// A lower-level write failed mid-run. Artifacts written before this
    /// point are on disk; the run as a whole is reported as failed.
    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

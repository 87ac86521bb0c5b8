use crate::replay::ReplayError;
use std::fs::{File, OpenOptions};
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Succeeded,
    Failed,
    FailureDetails,
}

impl SinkKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded.log",
            Self::Failed => "failed.log",
            Self::FailureDetails => "reqs-failed.log",
        }
    }
}

/// The three append-only outputs of a run.
#[derive(Debug)]
pub struct OutputSinks<W> {
    pub succeeded: W,
    pub failed: W,
    pub failure_details: W,
}

impl OutputSinks<File> {
    /// Opens (creating if needed) the three logs in append mode inside `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let dir = dir.as_ref();

        Ok(Self {
            succeeded: open_append(&dir.join(SinkKind::Succeeded.file_name()))?,
            failed: open_append(&dir.join(SinkKind::Failed.file_name()))?,
            failure_details: open_append(&dir.join(SinkKind::FailureDetails.file_name()))?,
        })
    }
}

fn open_append(path: &Path) -> Result<File, ReplayError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path).map_err(|source| ReplayError::OpenSink {
        path: path.to_path_buf(),
        source,
    })
}

pub fn open_input(path: impl AsRef<Path>) -> Result<BufReader<File>, ReplayError> {
    let path = path.as_ref();
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ReplayError::OpenInput {
            path: path.to_path_buf(),
            source,
        })
}

//! Files generated per mapping row, each keyed by the row's id.

use std::path::{Path, PathBuf};

/// Name of the docking config file for a mapping id.
pub fn config_file_name(id: u64) -> String {
    format!("config_{}.txt", id)
}

/// Name of the batch job script for a mapping id.
pub fn job_file_name(id: u64) -> String {
    format!("job_{}.sh", id)
}

/// A docking config written for one mapping row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockingConfig {
    pub id: u64,
    /// Path of the written file.
    pub path: PathBuf,
    /// File name as referenced from the job script.
    pub file_name: String,
}

/// A batch job script written for one docking config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobScript {
    pub id: u64,
    pub path: PathBuf,
    pub file_name: String,
    /// Directory receiving the engine's output and log.
    pub output_dir: PathBuf,
}

/// Results root with one subdirectory per job id.
///
/// Paths are kept relative to the working directory because job scripts
/// `cd` into the submission directory before invoking the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsLayout {
    root: PathBuf,
}

impl ResultsLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn job_dir(&self, id: u64) -> PathBuf {
        self.root.join(id.to_string())
    }

    pub fn out_file(&self, id: u64) -> PathBuf {
        self.job_dir(id).join("out.pdbqt")
    }

    pub fn log_file(&self, id: u64) -> PathBuf {
        self.job_dir(id).join("log")
    }
}

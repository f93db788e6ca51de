use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Where an external tool's standard output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Share the parent's stdout.
    Inherit,
    /// Append to a log file, creating it when missing.
    AppendTo(PathBuf),
}

/// A single external command, built as an argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub current_dir: PathBuf,
    pub stdout: OutputTarget,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>, current_dir: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: current_dir.to_path_buf(),
            stdout: OutputTarget::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn stdout_to(mut self, log: impl Into<PathBuf>) -> Self {
        self.stdout = OutputTarget::AppendTo(log.into());
        self
    }

    /// Human-readable command line for messages.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().map(|arg| arg.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

/// Exit status of a finished external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external command-line tools and waits for them to exit.
pub trait ToolRunner {
    /// Run the invocation to completion.
    ///
    /// A non-zero exit is reported through [`ToolStatus`]; `Err` means the
    /// tool could not be started at all.
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolStatus, AppError>;
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolStatus, AppError> {
        (**self).run(invocation)
    }
}

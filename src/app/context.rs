use std::path::{Path, PathBuf};

use crate::domain::{AppError, Settings};
use crate::ports::ToolRunner;
use crate::services::TemplateEngine;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ToolRunner> {
    work_dir: PathBuf,
    settings: Settings,
    runner: R,
    templates: TemplateEngine,
}

impl<R: ToolRunner> AppContext<R> {
    /// Create a new application context.
    pub fn new(work_dir: impl Into<PathBuf>, settings: Settings, runner: R) -> Result<Self, AppError> {
        Ok(Self { work_dir: work_dir.into(), settings, runner, templates: TemplateEngine::new()? })
    }

    /// Directory receiving generated files and logs.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn templates(&self) -> &TemplateEngine {
        &self.templates
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.work_dir.join(path) }
    }
}

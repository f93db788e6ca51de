//! Settings loading from the working directory.

use std::path::Path;

use crate::domain::{AppError, SETTINGS_FILE, Settings, parse_settings};

/// Load settings.
///
/// An explicit path must exist. Without one, `vinaprep.toml` in `work_dir` is
/// used when present and built-in defaults otherwise.
pub fn load_settings(work_dir: &Path, explicit: Option<&Path>) -> Result<Settings, AppError> {
    let path = match explicit {
        Some(path) => {
            let path = if path.is_absolute() { path.to_path_buf() } else { work_dir.join(path) };
            if !path.is_file() {
                return Err(AppError::ConfigFileMissing(path));
            }
            path
        }
        None => {
            let path = work_dir.join(SETTINGS_FILE);
            if !path.is_file() {
                return Ok(Settings::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)?;
    parse_settings(&content)
}

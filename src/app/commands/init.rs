use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, SETTINGS_FILE};
use crate::services::default_settings_toml;

/// Execute the init command.
///
/// Writes a commented `vinaprep.toml` with the built-in defaults into
/// `work_dir`. An existing file is only replaced when `force` is set.
pub fn execute(work_dir: &Path, force: bool) -> Result<PathBuf, AppError> {
    let path = work_dir.join(SETTINGS_FILE);
    if path.exists() && !force {
        return Err(AppError::ConfigExists(path));
    }
    fs::write(&path, default_settings_toml())?;
    Ok(path)
}

//! Prepare and verify command implementations.

use std::path::Path;

use crate::domain::AppError;

pub fn run_prepare(receptors: &Path, ligands: &Path, config: Option<&Path>) -> Result<(), AppError> {
    crate::app::api::prepare(receptors, ligands, config)?;
    Ok(())
}

/// Returns exit code 1 in strict mode when any prepared output is missing.
pub fn run_verify(
    receptors: &Path,
    ligands: &Path,
    strict: bool,
    config: Option<&Path>,
) -> Result<i32, AppError> {
    let report = crate::app::api::verify(receptors, ligands, config)?;
    Ok(if strict && !report.is_complete() { 1 } else { 0 })
}

//! Init command implementation.

use crate::domain::AppError;

pub fn run_init(force: bool) -> Result<(), AppError> {
    let path = crate::app::api::init_config(force)?;
    println!("✅ Wrote default settings to {}", path.display());
    Ok(())
}

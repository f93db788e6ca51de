//! Config generation: one docking config per mapping row.

use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::{
    AppError, DockingConfig, MappingParse, MappingRow, config_file_name, parse_mapping,
    prepared_reference,
};
use crate::ports::ToolRunner;
use crate::services::ConfigContext;

/// What to do with mapping rows that fail validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidRowPolicy {
    /// Report every invalid row and write nothing.
    #[default]
    Abort,
    /// Report invalid rows as warnings and write configs for the rest.
    Skip,
}

/// Read and parse a mapping file.
pub fn read_mapping(path: &Path) -> Result<MappingParse, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|source| AppError::MappingRead { path: path.to_path_buf(), source })?;
    parse_mapping(&content)
}

/// Parse the mapping file and write `config_<id>.txt` for each valid row into
/// the working directory, overwriting existing files.
///
/// A bad header fails before anything is written. Row errors are handled
/// according to `policy`.
pub fn execute<R: ToolRunner>(
    ctx: &AppContext<R>,
    mapping: &Path,
    policy: InvalidRowPolicy,
) -> Result<Vec<DockingConfig>, AppError> {
    let parsed = read_mapping(&ctx.resolve(mapping))?;

    if !parsed.is_clean() {
        match policy {
            InvalidRowPolicy::Abort => {
                return Err(AppError::MalformedMapping { errors: parsed.errors });
            }
            InvalidRowPolicy::Skip => {
                for error in &parsed.errors {
                    eprintln!("⚠️  Skipping mapping {}", error);
                }
            }
        }
    }

    let mut configs = Vec::with_capacity(parsed.rows.len());
    for row in &parsed.rows {
        configs.push(write_config(ctx, row)?);
    }

    println!("✅ Wrote {} config txt files", configs.len());
    Ok(configs)
}

fn write_config<R: ToolRunner>(
    ctx: &AppContext<R>,
    row: &MappingRow,
) -> Result<DockingConfig, AppError> {
    let receptor = prepared_reference(&row.receptor);
    let ligand = prepared_reference(&row.ligand);
    let content = ctx.templates().render_config(&ConfigContext {
        receptor: &receptor,
        ligand: &ligand,
        center_x: &row.center[0],
        center_y: &row.center[1],
        center_z: &row.center[2],
        size_x: &row.size[0],
        size_y: &row.size[1],
        size_z: &row.size[2],
        exhaustiveness: ctx.settings().docking.exhaustiveness,
    })?;

    let file_name = config_file_name(row.id);
    let path = ctx.work_dir().join(&file_name);
    fs::write(&path, content)?;

    Ok(DockingConfig { id: row.id, path, file_name })
}

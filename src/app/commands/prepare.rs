//! Structure preparation through the external receptor/ligand tools.
//!
//! Every input is attempted even when earlier ones fail; the verifier is what
//! turns missing outputs into a report.

use std::fs::File;

use crate::app::AppContext;
use crate::domain::{AppError, StructureFile, StructureRole};
use crate::ports::{ToolInvocation, ToolRunner, ToolStatus};

/// How one preparation attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparationStatus {
    /// The tool ran and exited with this status.
    Exited(ToolStatus),
    /// The tool could not be started.
    NotStarted(String),
}

/// Result of running the preparation tool on one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparationOutcome {
    pub file: StructureFile,
    pub status: PreparationStatus,
}

impl PreparationOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(&self.status, PreparationStatus::Exited(status) if status.success())
    }
}

/// Build the preparation command for one structure file.
pub fn invocation<R: ToolRunner>(ctx: &AppContext<R>, file: &StructureFile) -> ToolInvocation {
    let tools = &ctx.settings().tools;
    let (program, extra) = match file.role {
        StructureRole::Receptor => (&tools.receptor_prep, &tools.receptor_prep_args),
        StructureRole::Ligand => (&tools.ligand_prep, &tools.ligand_prep_args),
    };

    ToolInvocation::new(program.as_str(), ctx.work_dir())
        .arg(file.role.input_flag())
        .arg(&file.source)
        .arg("-o")
        .arg(&file.prepared)
        .args(extra.iter())
        .stdout_to(ctx.work_dir().join(file.role.warnings_log()))
}

/// Prepare every file of one role.
///
/// The role's warnings log is truncated first and then collects the tool's
/// stdout for the whole batch.
pub fn execute<R: ToolRunner>(
    ctx: &AppContext<R>,
    role: StructureRole,
    files: &[StructureFile],
) -> Result<Vec<PreparationOutcome>, AppError> {
    File::create(ctx.work_dir().join(role.warnings_log()))?;

    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let invocation = invocation(ctx, file);
        let status = match ctx.runner().run(&invocation) {
            Ok(status) => {
                if !status.success() {
                    eprintln!(
                        "⚠️  {} preparation failed for {} (exit status {})",
                        role,
                        file.source.display(),
                        status.code.map_or_else(|| "signal".to_string(), |c| c.to_string())
                    );
                }
                PreparationStatus::Exited(status)
            }
            Err(err) => {
                eprintln!("⚠️  {}", err);
                PreparationStatus::NotStarted(err.to_string())
            }
        };
        outcomes.push(PreparationOutcome { file: file.clone(), status });
    }

    let succeeded = outcomes.iter().filter(|o| o.succeeded()).count();
    println!(
        "Ran {} preparation on {} file(s): {} exited cleanly. See {}",
        role,
        outcomes.len(),
        succeeded,
        role.warnings_log()
    );
    Ok(outcomes)
}

//! Full batch: discover, prepare, verify, generate configs and jobs.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::configs::{self, InvalidRowPolicy};
use crate::app::commands::jobs::{self, JobBatch, JobOptions};
use crate::app::commands::{discover, prepare, verify};
use crate::domain::{AppError, DockingConfig, StructureRole, VerificationReport};
use crate::ports::ToolRunner;

/// Inputs for a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub mapping: PathBuf,
    pub receptors: PathBuf,
    pub ligands: PathBuf,
    pub results: String,
    pub submit: bool,
    /// Skip discovery, preparation and verification.
    pub skip_prepare: bool,
    pub invalid_rows: InvalidRowPolicy,
}

/// What a full run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// `None` when preparation was skipped.
    pub verification: Option<VerificationReport>,
    pub configs: Vec<DockingConfig>,
    pub jobs: JobBatch,
}

pub fn execute<R: ToolRunner>(
    ctx: &AppContext<R>,
    options: &RunOptions,
) -> Result<RunResult, AppError> {
    let verification = if options.skip_prepare {
        None
    } else {
        let inputs =
            discover::execute(&ctx.resolve(&options.receptors), &ctx.resolve(&options.ligands))?;
        for role in StructureRole::ALL {
            prepare::execute(ctx, role, inputs.of_role(role))?;
        }
        Some(verify::execute(ctx.work_dir(), &inputs)?)
    };

    let configs = configs::execute(ctx, &options.mapping, options.invalid_rows)?;
    let jobs = jobs::execute(
        ctx,
        &configs,
        &JobOptions { results: options.results.clone(), submit: options.submit },
    )?;

    Ok(RunResult { verification, configs, jobs })
}

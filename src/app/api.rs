//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together settings
//! loading, context creation and command execution.

use std::path::{Path, PathBuf};

use crate::app::commands::discover::{self, DiscoveredInputs};
use crate::app::commands::{configs, init, pipeline, prepare, verify};
use crate::app::{AppContext, config::load_settings};
use crate::domain::{AppError, DockingConfig, StructureRole, VerificationReport};
use crate::services::ProcessToolRunner;

pub use crate::app::commands::configs::InvalidRowPolicy;
pub use crate::app::commands::jobs::{JobBatch, SubmissionFailure};
pub use crate::app::commands::pipeline::{RunOptions, RunResult};
pub use crate::app::commands::prepare::{PreparationOutcome, PreparationStatus};

/// Result of the `prepare` command.
#[derive(Debug, Clone)]
pub struct PrepareResult {
    pub inputs: DiscoveredInputs,
    pub outcomes: Vec<PreparationOutcome>,
    pub verification: VerificationReport,
}

/// Create an `AppContext` for a working directory.
fn create_context(
    work_dir: &Path,
    config: Option<&Path>,
) -> Result<AppContext<ProcessToolRunner>, AppError> {
    let settings = load_settings(work_dir, config)?;
    AppContext::new(work_dir, settings, ProcessToolRunner::new())
}

fn current_dir() -> Result<PathBuf, AppError> {
    Ok(std::env::current_dir()?)
}

// =============================================================================
// Run Command API
// =============================================================================

/// Run the whole batch in the current directory.
pub fn run(options: &RunOptions, config: Option<&Path>) -> Result<RunResult, AppError> {
    run_at(&current_dir()?, options, config)
}

/// Run the whole batch with generated files placed in `work_dir`.
pub fn run_at(
    work_dir: &Path,
    options: &RunOptions,
    config: Option<&Path>,
) -> Result<RunResult, AppError> {
    let ctx = create_context(work_dir, config)?;
    pipeline::execute(&ctx, options)
}

// =============================================================================
// Prepare / Verify Command API
// =============================================================================

/// Discover, prepare and verify structures in the current directory.
pub fn prepare(
    receptors: &Path,
    ligands: &Path,
    config: Option<&Path>,
) -> Result<PrepareResult, AppError> {
    prepare_at(&current_dir()?, receptors, ligands, config)
}

/// Discover, prepare and verify structures, writing logs into `work_dir`.
pub fn prepare_at(
    work_dir: &Path,
    receptors: &Path,
    ligands: &Path,
    config: Option<&Path>,
) -> Result<PrepareResult, AppError> {
    let ctx = create_context(work_dir, config)?;
    let inputs = discover::execute(&ctx.resolve(receptors), &ctx.resolve(ligands))?;

    let mut outcomes = Vec::new();
    for role in StructureRole::ALL {
        outcomes.extend(prepare::execute(&ctx, role, inputs.of_role(role))?);
    }
    let verification = verify::execute(ctx.work_dir(), &inputs)?;

    Ok(PrepareResult { inputs, outcomes, verification })
}

/// Check prepared outputs without running any tool.
pub fn verify(
    receptors: &Path,
    ligands: &Path,
    config: Option<&Path>,
) -> Result<VerificationReport, AppError> {
    verify_at(&current_dir()?, receptors, ligands, config)
}

/// Check prepared outputs, writing failure logs into `work_dir`.
///
/// Settings are loaded and validated like every other command even though
/// verification itself needs none of them.
pub fn verify_at(
    work_dir: &Path,
    receptors: &Path,
    ligands: &Path,
    config: Option<&Path>,
) -> Result<VerificationReport, AppError> {
    let ctx = create_context(work_dir, config)?;
    let inputs = discover::execute(&ctx.resolve(receptors), &ctx.resolve(ligands))?;
    verify::execute(ctx.work_dir(), &inputs)
}

// =============================================================================
// Configs Command API
// =============================================================================

/// Generate docking configs from a mapping file in the current directory.
pub fn configs(
    mapping: &Path,
    policy: InvalidRowPolicy,
    config: Option<&Path>,
) -> Result<Vec<DockingConfig>, AppError> {
    configs_at(&current_dir()?, mapping, policy, config)
}

/// Generate docking configs into `work_dir`.
pub fn configs_at(
    work_dir: &Path,
    mapping: &Path,
    policy: InvalidRowPolicy,
    config: Option<&Path>,
) -> Result<Vec<DockingConfig>, AppError> {
    let ctx = create_context(work_dir, config)?;
    configs::execute(&ctx, mapping, policy)
}

// =============================================================================
// Init Command API
// =============================================================================

/// Write a default `vinaprep.toml` into the current directory.
pub fn init_config(force: bool) -> Result<PathBuf, AppError> {
    init_config_at(&current_dir()?, force)
}

pub fn init_config_at(work_dir: &Path, force: bool) -> Result<PathBuf, AppError> {
    init::execute(work_dir, force)
}

//! vinaprep: prepare receptor/ligand structures and emit AutoDock Vina batch jobs.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InvalidRowPolicy, JobBatch, PrepareResult, PreparationOutcome, PreparationStatus, RunOptions,
    RunResult, SubmissionFailure, configs, configs_at, init_config, init_config_at, prepare,
    prepare_at, run, run_at, verify, verify_at,
};
pub use app::commands::discover::DiscoveredInputs;
pub use domain::{
    AppError, DockingConfig, JobScript, MappingParse, MappingRow, RoleVerification, RowError,
    RowErrorKind, Settings, StructureFile, StructureRole, VerificationReport, parse_mapping,
};
